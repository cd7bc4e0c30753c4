//! Scalar growth and decay models for the fixstep integrators.
//!
//! Each model is a [`RightHandSide`] holding only its physical constants, with
//! a closed-form solution for checking numerical results:
//!
//! - [`Logistic`]: population growth toward a carrying capacity
//! - [`Gompertz`]: tumor growth with a decaying relative growth rate
//! - [`QuadraticDrag`]: free fall against air resistance
//!
//! A [`Scenario`] bundles a model with its time horizon and initial value, and
//! can be loaded from configuration with the `serde` feature.
//!
//! [`RightHandSide`]: fixstep_core::RightHandSide

mod closed_form;
mod drag;
mod error;
mod gompertz;
mod logistic;
mod scenario;

pub use closed_form::ClosedForm;
pub use drag::QuadraticDrag;
pub use error::ModelError;
pub use gompertz::Gompertz;
pub use logistic::Logistic;
pub use scenario::{Problem, Scenario, ScenarioError};
