/// The right-hand side `f(t, y)` of a scalar ODE `dy/dt = f(t, y)`.
///
/// Implementations must be pure: the integrators call [`slope`] several times
/// per step with trial arguments and assume the same arguments always give the
/// same result.
///
/// Any `Fn(f64, f64) -> f64` closure is a right-hand side, so ad hoc equations
/// need no wrapper type:
///
/// ```
/// use fixstep_core::RightHandSide;
///
/// let decay = |_t: f64, y: f64| -0.5 * y;
/// assert_eq!(decay.slope(0.0, 2.0), -1.0);
/// ```
///
/// Problem types with physical constants implement the trait directly,
/// capturing only the constants they need.
///
/// [`slope`]: RightHandSide::slope
pub trait RightHandSide {
    /// Returns `dy/dt` at time `t` and state `y`.
    fn slope(&self, t: f64, y: f64) -> f64;
}

impl<F> RightHandSide for F
where
    F: Fn(f64, f64) -> f64,
{
    fn slope(&self, t: f64, y: f64) -> f64 {
        self(t, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Linear {
        rate: f64,
    }

    impl RightHandSide for Linear {
        fn slope(&self, _t: f64, y: f64) -> f64 {
            self.rate * y
        }
    }

    fn slope_at<F: RightHandSide>(f: &F, t: f64, y: f64) -> f64 {
        f.slope(t, y)
    }

    #[test]
    fn closures_are_right_hand_sides() {
        let f = |t: f64, y: f64| t + y;
        assert_eq!(slope_at(&f, 1.0, 2.0), 3.0);
    }

    #[test]
    fn structs_capture_their_constants() {
        let f = Linear { rate: -3.0 };
        assert_eq!(slope_at(&f, 0.0, 2.0), -6.0);
    }
}
