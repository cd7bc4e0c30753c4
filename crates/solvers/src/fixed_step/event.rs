/// A trajectory point: a time and the state value at that time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub t: f64,
    pub y: f64,
}

/// Events emitted by the fixed-step driver.
///
/// `S` is the method's stage type (for example [`heun::Stages`]), carrying the
/// slopes and trial values computed within one step.
///
/// [`heun::Stages`]: super::heun::Stages
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event<S> {
    /// The initial condition, emitted once before any step.
    Initial(Point),

    /// One completed step from `from` to `to`.
    Advanced {
        /// The step number, starting at 1.
        step: usize,

        /// The point the step started from.
        from: Point,

        /// The point the step produced.
        to: Point,

        /// The grid step size.
        h: f64,

        /// Intermediate values computed by the method during this step.
        stages: S,
    },
}

impl<S> Event<S> {
    /// Returns the step number: 0 for the initial condition.
    #[must_use]
    pub fn step(&self) -> usize {
        match self {
            Self::Initial(_) => 0,
            Self::Advanced { step, .. } => *step,
        }
    }

    /// Returns the most recent trajectory point.
    #[must_use]
    pub fn point(&self) -> Point {
        match self {
            Self::Initial(point) | Self::Advanced { to: point, .. } => *point,
        }
    }

    /// Returns the stage values, or `None` for the initial condition.
    #[must_use]
    pub fn stages(&self) -> Option<&S> {
        match self {
            Self::Initial(_) => None,
            Self::Advanced { stages, .. } => Some(stages),
        }
    }

    /// Returns `true` if the most recent value is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.point().y.is_finite()
    }
}
