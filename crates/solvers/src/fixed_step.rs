//! Fixed-step explicit integration of scalar ODEs.
//!
//! # Algorithm
//!
//! Every method here advances `dy/dt = f(t, y)` from one grid point to the
//! next using only the current value `y[i]`, the interval `[t[i], t[i + 1]]`,
//! and the grid's uniform step `h`:
//!
//! ```text
//! y[0]     = y0
//! y[i + 1] = step(f, t[i], t[i + 1], h, y[i])
//! ```
//!
//! The stepping loop lives in [`integrate`] and is shared by all methods; each
//! method supplies only its single-step formula through the [`Method`] trait.
//!
//! # Methods
//!
//! | Method           | Order | Evaluations per step |
//! |------------------|-------|----------------------|
//! | [`euler::Euler`] | 1     | 1                    |
//! | [`heun::Heun`]   | 2     | 2                    |
//! | [`rk4::Rk4`]     | 4     | 4                    |
//!
//! # Non-finite values
//!
//! A right-hand side that returns NaN or infinity does not stop the
//! integration. The non-finite value propagates through later steps, the first
//! index holding one is recorded in [`Solution::first_non_finite`], and every
//! [`Event`] reports [`Event::is_finite`] so observers can react.
//!
//! # Observer Events
//!
//! The driver emits [`Event::Initial`] for `y[0]`, then one
//! [`Event::Advanced`] per step carrying the method's intermediate stage
//! values. Observers may return [`Action::StopEarly`] to end the run with a
//! truncated trajectory.

mod action;
mod driver;
mod error;
mod event;
mod method;
mod solution;

pub mod euler;
pub mod heun;
pub mod rk4;

#[cfg(test)]
mod tests;

pub use action::Action;
pub use driver::{integrate, integrate_unobserved};
pub use error::Error;
pub use event::{Event, Point};
pub use method::{Interval, Method};
pub use solution::{Solution, Status};
