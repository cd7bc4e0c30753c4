//! Explicit (forward) Euler.
//!
//! ```text
//! y[i+1] = y[i] + h * f(t[i], y[i])
//! ```
//!
//! First order and one evaluation per step. This is the predictor half of
//! [Heun's method](super::heun) on its own, and mostly useful as a baseline.

use fixstep_core::{Grid, Observer, RightHandSide};

use super::{Action, Interval, Method, Solution, integrate};

/// The explicit Euler method.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Euler;

/// The single slope from one Euler step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Stages {
    pub slope: f64,
}

/// Event emitted while integrating with explicit Euler.
pub type Event = super::Event<Stages>;

impl Method for Euler {
    type Stages = Stages;

    const NAME: &'static str = "Euler";
    const ORDER: u32 = 1;
    const EVALUATIONS: usize = 1;

    fn step<F: RightHandSide>(&self, f: &F, interval: Interval, y: f64) -> (f64, Stages) {
        let slope = f.slope(interval.t, y);
        (y + interval.h * slope, Stages { slope })
    }
}

/// Integrates `f` across `grid` with explicit Euler.
pub fn solve<F, Obs>(f: &F, y0: f64, grid: &Grid, observer: Obs) -> Solution
where
    F: RightHandSide,
    Obs: Observer<Event, Action>,
{
    integrate(&Euler, f, y0, grid, observer)
}

/// Integrates `f` across `grid` with explicit Euler without observation.
pub fn solve_unobserved<F: RightHandSide>(f: &F, y0: f64, grid: &Grid) -> Solution {
    solve(f, y0, grid, ())
}
