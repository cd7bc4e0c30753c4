use thiserror::Error;

use fixstep_core::{Grid, GridError, RightHandSide};

use crate::{ClosedForm, Gompertz, Logistic, ModelError, QuadraticDrag};

/// One of the built-in models.
///
/// With the `serde` feature the variant is selected by a `model` key, so a
/// scenario's `[problem]` table reads like:
///
/// ```toml
/// [problem]
/// model = "logistic"
/// rate = 0.000095
/// capacity = 5000.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(tag = "model", rename_all = "snake_case")
)]
pub enum Problem {
    Logistic(Logistic),
    Gompertz(Gompertz),
    QuadraticDrag(QuadraticDrag),
}

impl Problem {
    /// Checks the model constants.
    ///
    /// Constructors already validate, but values loaded from configuration
    /// bypass them.
    ///
    /// # Errors
    ///
    /// Returns the first invalid constant.
    pub fn validate(&self) -> Result<(), ModelError> {
        match self {
            Self::Logistic(model) => model.validate(),
            Self::Gompertz(model) => model.validate(),
            Self::QuadraticDrag(model) => model.validate(),
        }
    }
}

impl RightHandSide for Problem {
    fn slope(&self, t: f64, y: f64) -> f64 {
        match self {
            Self::Logistic(model) => model.slope(t, y),
            Self::Gompertz(model) => model.slope(t, y),
            Self::QuadraticDrag(model) => model.slope(t, y),
        }
    }
}

impl ClosedForm for Problem {
    fn exact(&self, t0: f64, y0: f64, t: f64) -> f64 {
        match self {
            Self::Logistic(model) => model.exact(t0, y0, t),
            Self::Gompertz(model) => model.exact(t0, y0, t),
            Self::QuadraticDrag(model) => model.exact(t0, y0, t),
        }
    }
}

/// Errors that can occur when preparing a scenario.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScenarioError {
    #[error("invalid grid: {0}")]
    Grid(#[from] GridError),

    #[error("invalid model: {0}")]
    Model(#[from] ModelError),

    #[error("initial value must be finite")]
    NonFiniteInitial,
}

/// A complete initial value problem: model, time horizon, and initial value.
///
/// The time horizon is `points` evenly spaced times from `t_start` to
/// `t_end`, both included.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scenario {
    pub name: String,
    pub t_start: f64,
    pub t_end: f64,
    pub points: usize,
    pub initial: f64,
    pub problem: Problem,
}

impl Scenario {
    /// Logistic population growth from 100 over 20 time units at `h = 0.2`.
    #[must_use]
    pub fn population() -> Self {
        Self {
            name: "Logistic population".into(),
            t_start: 0.0,
            t_end: 20.0,
            points: 101,
            initial: 100.0,
            problem: Problem::Logistic(Logistic::POPULATION),
        }
    }

    /// Gompertz tumor growth from 10 mm³ over 30 days at `h = 0.2`.
    #[must_use]
    pub fn tumor() -> Self {
        Self {
            name: "Gompertz tumor".into(),
            t_start: 0.0,
            t_end: 30.0,
            points: 151,
            initial: 10.0,
            problem: Problem::Gompertz(Gompertz::TUMOR),
        }
    }

    /// Free fall with quadratic drag from rest over 12 seconds at `h = 0.2`.
    #[must_use]
    pub fn free_fall() -> Self {
        Self {
            name: "Free fall with drag".into(),
            t_start: 0.0,
            t_end: 12.0,
            points: 61,
            initial: 0.0,
            problem: Problem::QuadraticDrag(QuadraticDrag::JUMPER),
        }
    }

    /// Returns the three built-in scenarios.
    #[must_use]
    pub fn presets() -> [Self; 3] {
        [Self::population(), Self::tumor(), Self::free_fall()]
    }

    /// Validates the scenario and builds its time grid.
    ///
    /// # Errors
    ///
    /// Returns an error if the time horizon cannot form a grid, a model
    /// constant is invalid, or the initial value is not finite.
    pub fn grid(&self) -> Result<Grid, ScenarioError> {
        self.problem.validate()?;
        if !self.initial.is_finite() {
            return Err(ScenarioError::NonFiniteInitial);
        }
        Ok(Grid::linspace(self.t_start, self.t_end, self.points)?)
    }

    /// Returns the closed-form solution at every point of `grid`.
    #[must_use]
    pub fn exact(&self, grid: &Grid) -> Vec<f64> {
        grid.points()
            .iter()
            .map(|&t| self.problem.exact(self.t_start, self.initial, t))
            .collect()
    }
}
