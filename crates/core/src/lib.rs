//! Core types for fixed-step integration of scalar ODEs.
//!
//! This crate defines the shared abstractions that the integrators, problem
//! definitions, and observers build on:
//!
//! - [`Grid`]: a validated, uniformly spaced sequence of time points
//! - [`RightHandSide`]: the function `f(t, y)` giving `dy/dt`
//! - [`Observer`]: receives solver events and optionally returns control actions

mod grid;
mod observer;
mod rhs;

pub use grid::{Grid, GridError};
pub use observer::Observer;
pub use rhs::RightHandSide;
