//! Shared helpers for the cross-crate tests in `tests/`.

use fixstep_core::Grid;
use fixstep_models::Scenario;
use fixstep_solvers::fixed_step::{Method, Solution, integrate_unobserved};

/// A scenario integrated with one method, alongside its closed-form values.
#[derive(Debug)]
pub struct Run {
    pub grid: Grid,
    pub solution: Solution,
    pub exact: Vec<f64>,
}

impl Run {
    /// Integrates `scenario` with `method`.
    ///
    /// # Panics
    ///
    /// Panics if the scenario is invalid.
    pub fn new<M: Method>(method: &M, scenario: &Scenario) -> Self {
        let grid = scenario.grid().expect("scenario should be valid");
        let solution = integrate_unobserved(method, &scenario.problem, scenario.initial, &grid);
        let exact = scenario.exact(&grid);
        Self {
            grid,
            solution,
            exact,
        }
    }

    /// Largest absolute difference from the closed-form solution.
    #[must_use]
    pub fn max_error(&self) -> f64 {
        self.errors().fold(0.0, f64::max)
    }

    /// Largest difference from the closed-form solution relative to its value.
    #[must_use]
    pub fn max_relative_error(&self) -> f64 {
        self.errors()
            .zip(&self.exact)
            .filter(|&(_, exact)| *exact != 0.0)
            .map(|(error, exact)| error / exact.abs())
            .fold(0.0, f64::max)
    }

    fn errors(&self) -> impl Iterator<Item = f64> + '_ {
        self.solution
            .values
            .iter()
            .zip(&self.exact)
            .map(|(y, exact)| (y - exact).abs())
    }
}
