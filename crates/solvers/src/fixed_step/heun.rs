//! Heun's predictor-corrector method.
//!
//! Each step takes an explicit Euler trial step to the end of the interval,
//! then averages the slopes at both ends:
//!
//! ```text
//! s0     = f(t[i], y[i])
//! y_pred = y[i] + h * s0
//! s1     = f(t[i + 1], y_pred)
//! y[i+1] = y[i] + h/2 * (s0 + s1)
//! ```
//!
//! Local truncation error is O(h³) and global error O(h²), at two
//! right-hand-side evaluations per step.

use fixstep_core::{Grid, Observer, RightHandSide};

use super::{Action, Interval, Method, Solution, integrate};

/// Heun's method (explicit trapezoid, a second-order Runge-Kutta method).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Heun;

/// Intermediate values from one Heun step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stages {
    /// Slope at the start of the interval, `s0 = f(t[i], y[i])`.
    pub slope_start: f64,

    /// Euler trial value at the end of the interval.
    pub predictor: f64,

    /// Slope at the predicted end point, `s1 = f(t[i + 1], y_pred)`.
    pub slope_end: f64,
}

/// Event emitted while integrating with Heun's method.
pub type Event = super::Event<Stages>;

impl Method for Heun {
    type Stages = Stages;

    const NAME: &'static str = "Heun";
    const ORDER: u32 = 2;
    const EVALUATIONS: usize = 2;

    fn step<F: RightHandSide>(&self, f: &F, interval: Interval, y: f64) -> (f64, Stages) {
        let Interval { t, t_next, h } = interval;

        let slope_start = f.slope(t, y);
        let predictor = y + h * slope_start;
        let slope_end = f.slope(t_next, predictor);
        let y_next = y + 0.5 * h * (slope_start + slope_end);

        (
            y_next,
            Stages {
                slope_start,
                predictor,
                slope_end,
            },
        )
    }
}

/// Integrates `f` across `grid` with Heun's method.
///
/// The observer receives an [`Event`] for the initial condition and after
/// each step, and may return [`Action::StopEarly`] to end the run.
pub fn solve<F, Obs>(f: &F, y0: f64, grid: &Grid, observer: Obs) -> Solution
where
    F: RightHandSide,
    Obs: Observer<Event, Action>,
{
    integrate(&Heun, f, y0, grid, observer)
}

/// Integrates `f` across `grid` with Heun's method without observation.
pub fn solve_unobserved<F: RightHandSide>(f: &F, y0: f64, grid: &Grid) -> Solution {
    solve(f, y0, grid, ())
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    use crate::fixed_step::Status;

    /// Logistic growth with k = 0.000095 and a carrying capacity of 5000.
    fn logistic(_t: f64, n: f64) -> f64 {
        0.000_095 * n * (5000.0 - n)
    }

    #[test]
    fn first_logistic_step_matches_hand_calculation() {
        let grid = Grid::linspace(0.0, 20.0, 101).unwrap();

        let mut first = None;
        let solution = solve(&logistic, 100.0, &grid, |event: &Event| {
            if event.step() == 1 {
                first = event.stages().copied();
            }
            None
        });

        // s0 = 0.000095 * 100 * 4900 = 46.55
        // y_pred = 100 + 0.2 * 46.55 = 109.31
        // s1 = 0.000095 * 109.31 * 4890.69 = 50.787_125_770_5
        // y1 = 100 + 0.1 * (46.55 + 50.787_125_770_5)
        let stages = first.expect("first step should be observed");
        assert_relative_eq!(stages.slope_start, 46.55, max_relative = 1e-12);
        assert_relative_eq!(stages.predictor, 109.31, max_relative = 1e-12);
        assert_relative_eq!(stages.slope_end, 50.787_125_770_5, max_relative = 1e-9);
        assert_relative_eq!(solution.values[1], 109.733_712_577_05, max_relative = 1e-9);
    }

    #[test]
    fn linear_slopes_are_integrated_exactly() {
        // Heun is the trapezoid rule when f depends only on t, which is exact
        // for linear f.
        let grid = Grid::linspace(0.0, 3.0, 7).unwrap();
        let f = |t: f64, _y: f64| 2.0 * t + 1.0;

        let solution = solve_unobserved(&f, 0.0, &grid);

        for (t, y) in grid.points().iter().zip(&solution.values) {
            assert_relative_eq!(*y, t * t + t, epsilon = 1e-12);
        }
    }

    #[test]
    fn takes_two_evaluations_per_step() {
        let grid = Grid::linspace(0.0, 1.0, 11).unwrap();

        let solution = solve_unobserved(&|_t: f64, y: f64| y, 1.0, &grid);

        assert_eq!(solution.status, Status::Complete);
        assert_eq!(solution.steps, 10);
        assert_eq!(solution.evaluations, 20);
    }
}
