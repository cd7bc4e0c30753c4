//! Classical fourth-order Runge-Kutta.
//!
//! Each step samples the slope four times and takes a 1:2:2:1 weighted
//! average:
//!
//! ```text
//! k1 = f(t[i],       y[i])
//! k2 = f(t[i] + h/2, y[i] + h/2 * k1)
//! k3 = f(t[i] + h/2, y[i] + h/2 * k2)
//! k4 = f(t[i] + h,   y[i] + h * k3)
//!
//! y[i+1] = y[i] + h/6 * (k1 + 2*k2 + 2*k3 + k4)
//! ```
//!
//! Local truncation error is O(h⁵) and global error O(h⁴), at four
//! right-hand-side evaluations per step.

use fixstep_core::{Grid, Observer, RightHandSide};

use super::{Action, Interval, Method, Solution, integrate};

/// The classical fourth-order Runge-Kutta method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Rk4;

/// The four slope estimates from one RK4 step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stages {
    pub k1: f64,
    pub k2: f64,
    pub k3: f64,
    pub k4: f64,
}

impl Stages {
    /// Returns the weighted slope `(k1 + 2*k2 + 2*k3 + k4) / 6`.
    #[must_use]
    pub fn weighted_slope(&self) -> f64 {
        (self.k1 + 2.0 * self.k2 + 2.0 * self.k3 + self.k4) / 6.0
    }
}

/// Event emitted while integrating with RK4.
pub type Event = super::Event<Stages>;

impl Method for Rk4 {
    type Stages = Stages;

    const NAME: &'static str = "RK4";
    const ORDER: u32 = 4;
    const EVALUATIONS: usize = 4;

    fn step<F: RightHandSide>(&self, f: &F, interval: Interval, y: f64) -> (f64, Stages) {
        let Interval { t, h, .. } = interval;
        let half = 0.5 * h;

        let k1 = f.slope(t, y);
        let k2 = f.slope(t + half, y + half * k1);
        let k3 = f.slope(t + half, y + half * k2);
        let k4 = f.slope(t + h, y + h * k3);

        let stages = Stages { k1, k2, k3, k4 };
        (y + h / 6.0 * (k1 + 2.0 * k2 + 2.0 * k3 + k4), stages)
    }
}

/// Integrates `f` across `grid` with classical RK4.
///
/// The observer receives an [`Event`] for the initial condition and after
/// each step, and may return [`Action::StopEarly`] to end the run.
pub fn solve<F, Obs>(f: &F, y0: f64, grid: &Grid, observer: Obs) -> Solution
where
    F: RightHandSide,
    Obs: Observer<Event, Action>,
{
    integrate(&Rk4, f, y0, grid, observer)
}

/// Integrates `f` across `grid` with classical RK4 without observation.
pub fn solve_unobserved<F: RightHandSide>(f: &F, y0: f64, grid: &Grid) -> Solution {
    solve(f, y0, grid, ())
}
