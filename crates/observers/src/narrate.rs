//! Step-by-step narration of an integration.
//!
//! A [`Narrator`] writes every intermediate value of the first few steps to
//! any [`fmt::Write`] sink, so a hand calculation can be checked line by line
//! against the integrator. For the first Heun step of the logistic population
//! model it writes:
//!
//! ```text
//! t0 = 0, y0 = 100
//! step 1: t = 0 -> 0.2, h = 0.2
//!   s0 = f(0, 100) = 46.55
//!   y_pred = 100 + 0.2 * s0 = 109.31
//!   s1 = f(0.2, 109.31) = 50.787126
//!   y1 = 100 + 0.2/2 * (s0 + s1) = 109.733713
//! ```
//!
//! Method stage types opt in by implementing [`DescribeStages`].

use std::fmt;

use fixstep_core::Observer;
use fixstep_solvers::fixed_step::{Event, Point, euler, heun, rk4};

/// Formats the stage values of one step as narration lines.
pub trait DescribeStages {
    /// Writes the lines describing a step from `from` to `to`.
    ///
    /// `fmt_num` formats numbers consistently with the rest of the narration.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    fn describe(
        &self,
        step: Step,
        fmt_num: &dyn Fn(f64) -> String,
        out: &mut dyn fmt::Write,
    ) -> fmt::Result;
}

/// The step context passed to [`DescribeStages::describe`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step {
    pub index: usize,
    pub from: Point,
    pub to: Point,
    pub h: f64,
}

impl DescribeStages for euler::Stages {
    fn describe(
        &self,
        step: Step,
        n: &dyn Fn(f64) -> String,
        out: &mut dyn fmt::Write,
    ) -> fmt::Result {
        let Step { index, from, to, h } = step;
        writeln!(out, "  s = f({}, {}) = {}", n(from.t), n(from.y), n(self.slope))?;
        writeln!(out, "  y{index} = {} + {} * s = {}", n(from.y), n(h), n(to.y))
    }
}

impl DescribeStages for heun::Stages {
    fn describe(
        &self,
        step: Step,
        n: &dyn Fn(f64) -> String,
        out: &mut dyn fmt::Write,
    ) -> fmt::Result {
        let Step { index, from, to, h } = step;
        writeln!(
            out,
            "  s0 = f({}, {}) = {}",
            n(from.t),
            n(from.y),
            n(self.slope_start)
        )?;
        writeln!(
            out,
            "  y_pred = {} + {} * s0 = {}",
            n(from.y),
            n(h),
            n(self.predictor)
        )?;
        writeln!(
            out,
            "  s1 = f({}, {}) = {}",
            n(to.t),
            n(self.predictor),
            n(self.slope_end)
        )?;
        writeln!(
            out,
            "  y{index} = {} + {}/2 * (s0 + s1) = {}",
            n(from.y),
            n(h),
            n(to.y)
        )
    }
}

impl DescribeStages for rk4::Stages {
    fn describe(
        &self,
        step: Step,
        n: &dyn Fn(f64) -> String,
        out: &mut dyn fmt::Write,
    ) -> fmt::Result {
        let Step { index, from, to, h } = step;
        let (t, y) = (from.t, from.y);
        let mid = t + 0.5 * h;

        writeln!(out, "  k1 = f({}, {}) = {}", n(t), n(y), n(self.k1))?;
        writeln!(
            out,
            "  k2 = f({}, {}) = {}",
            n(mid),
            n(y + 0.5 * h * self.k1),
            n(self.k2)
        )?;
        writeln!(
            out,
            "  k3 = f({}, {}) = {}",
            n(mid),
            n(y + 0.5 * h * self.k2),
            n(self.k3)
        )?;
        writeln!(
            out,
            "  k4 = f({}, {}) = {}",
            n(t + h),
            n(y + h * self.k3),
            n(self.k4)
        )?;
        writeln!(
            out,
            "  y{index} = {} + {}/6 * (k1 + 2*k2 + 2*k3 + k4) = {}",
            n(y),
            n(h),
            n(to.y)
        )
    }
}

/// Narrates the initial condition and the first steps of an integration.
///
/// Narration never changes the integration: the observer returns no action.
/// Write errors are remembered and reported by [`Narrator::finish`].
///
/// # Example
///
/// ```
/// use fixstep_core::Grid;
/// use fixstep_observers::Narrator;
/// use fixstep_solvers::fixed_step::heun;
///
/// let grid = Grid::linspace(0.0, 1.0, 11).unwrap();
/// let mut narrator = Narrator::new(String::new());
///
/// heun::solve(&|_t: f64, y: f64| -y, 1.0, &grid, &mut narrator);
///
/// let text = narrator.finish().unwrap();
/// assert!(text.starts_with("t0 = 0, y0 = 1\nstep 1: t = 0 -> 0.1, h = 0.1\n"));
/// assert!(!text.contains("step 2"));
/// ```
#[derive(Debug)]
pub struct Narrator<W> {
    out: W,
    steps: usize,
    precision: usize,
    failed: bool,
}

impl<W: fmt::Write> Narrator<W> {
    /// Creates a narrator for the first step with six decimal places.
    pub fn new(out: W) -> Self {
        Self {
            out,
            steps: 1,
            precision: 6,
            failed: false,
        }
    }

    /// Sets how many steps to narrate.
    #[must_use]
    pub fn steps(mut self, steps: usize) -> Self {
        self.steps = steps;
        self
    }

    /// Sets the maximum number of decimal places shown.
    #[must_use]
    pub fn precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    /// Returns the sink, or an error if any write failed.
    ///
    /// # Errors
    ///
    /// Returns [`fmt::Error`] if the sink rejected a write.
    pub fn finish(self) -> Result<W, fmt::Error> {
        if self.failed {
            Err(fmt::Error)
        } else {
            Ok(self.out)
        }
    }

    fn narrate<S: DescribeStages>(&mut self, event: &Event<S>) -> fmt::Result {
        let precision = self.precision;
        let n = move |value: f64| format_number(value, precision);

        match event {
            Event::Initial(point) => {
                writeln!(self.out, "t0 = {}, y0 = {}", n(point.t), n(point.y))
            }
            Event::Advanced {
                step,
                from,
                to,
                h,
                stages,
            } => {
                writeln!(
                    self.out,
                    "step {step}: t = {} -> {}, h = {}",
                    n(from.t),
                    n(to.t),
                    n(*h)
                )?;
                let step = Step {
                    index: *step,
                    from: *from,
                    to: *to,
                    h: *h,
                };
                stages.describe(step, &n, &mut self.out)
            }
        }
    }
}

impl<W, S, A> Observer<Event<S>, A> for Narrator<W>
where
    W: fmt::Write,
    S: DescribeStages,
{
    fn observe(&mut self, event: &Event<S>) -> Option<A> {
        if !self.failed && event.step() <= self.steps {
            self.failed = self.narrate(event).is_err();
        }
        None
    }
}

/// Allows `&mut Narrator` to be passed to integrators that take an observer by
/// value, so [`Narrator::finish`] can be called after the run.
impl<W, S, A> Observer<Event<S>, A> for &mut Narrator<W>
where
    W: fmt::Write,
    S: DescribeStages,
{
    fn observe(&mut self, event: &Event<S>) -> Option<A> {
        (**self).observe(event)
    }
}

/// Formats with at most `precision` decimals, dropping trailing zeros.
fn format_number(value: f64, precision: usize) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    let text = format!("{value:.precision$}");
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.')
    } else {
        &text
    };
    if text == "-0" { "0".into() } else { text.into() }
}

#[cfg(test)]
mod tests {
    use super::*;

    use fixstep_core::Grid;
    use fixstep_models::Logistic;

    fn population_grid() -> Grid {
        Grid::linspace(0.0, 20.0, 101).unwrap()
    }

    #[test]
    fn narrates_first_heun_step_of_population_model() {
        let mut narrator = Narrator::new(String::new());

        heun::solve(&Logistic::POPULATION, 100.0, &population_grid(), &mut narrator);

        let expected = "\
t0 = 0, y0 = 100
step 1: t = 0 -> 0.2, h = 0.2
  s0 = f(0, 100) = 46.55
  y_pred = 100 + 0.2 * s0 = 109.31
  s1 = f(0.2, 109.31) = 50.787126
  y1 = 100 + 0.2/2 * (s0 + s1) = 109.733713
";
        assert_eq!(narrator.finish().unwrap(), expected);
    }

    #[test]
    fn narrates_first_rk4_step_of_population_model() {
        let mut narrator = Narrator::new(String::new()).precision(4);

        rk4::solve(&Logistic::POPULATION, 100.0, &population_grid(), &mut narrator);

        let expected = "\
t0 = 0, y0 = 100
step 1: t = 0 -> 0.2, h = 0.2
  k1 = f(0, 100) = 46.55
  k2 = f(0.1, 104.655) = 48.6706
  k3 = f(0.1, 104.8671) = 48.7671
  k4 = f(0.2, 109.7534) = 50.9885
  y1 = 100 + 0.2/6 * (k1 + 2*k2 + 2*k3 + k4) = 109.7471
";
        assert_eq!(narrator.finish().unwrap(), expected);
    }

    #[test]
    fn narrates_requested_number_of_steps() {
        let grid = Grid::linspace(0.0, 1.0, 5).unwrap();
        let mut narrator = Narrator::new(String::new()).steps(3);

        euler::solve(&|_t: f64, _y: f64| 1.0, 0.0, &grid, &mut narrator);

        let text = narrator.finish().unwrap();
        assert!(text.contains("step 3: t = 0.5 -> 0.75, h = 0.25"));
        assert!(text.contains("  y3 = 0.5 + 0.25 * s = 0.75"));
        assert!(!text.contains("step 4"));
    }

    #[test]
    fn zero_steps_narrates_only_the_initial_condition() {
        let grid = Grid::linspace(0.0, 1.0, 5).unwrap();
        let mut narrator = Narrator::new(String::new()).steps(0);

        heun::solve(&|_t: f64, y: f64| y, 2.5, &grid, &mut narrator);

        assert_eq!(narrator.finish().unwrap(), "t0 = 0, y0 = 2.5\n");
    }

    #[test]
    fn write_failures_are_reported() {
        struct Full;

        impl fmt::Write for Full {
            fn write_str(&mut self, _s: &str) -> fmt::Result {
                Err(fmt::Error)
            }
        }

        let mut narrator = Narrator::new(Full);
        heun::solve(&|_t: f64, y: f64| y, 1.0, &population_grid(), &mut narrator);

        assert!(narrator.finish().is_err());
    }

    #[test]
    fn numbers_drop_trailing_zeros() {
        assert_eq!(format_number(0.2, 6), "0.2");
        assert_eq!(format_number(100.0, 6), "100");
        assert_eq!(format_number(50.787_125_770_5, 6), "50.787126");
        assert_eq!(format_number(-0.000_000_1, 6), "0");
        assert_eq!(format_number(f64::NAN, 6), "NaN");
        assert_eq!(format_number(f64::NEG_INFINITY, 6), "-inf");
    }
}
