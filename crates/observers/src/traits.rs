//! Capability traits for method-agnostic observers.
//!
//! Each integrator has its own event and action types; these traits let an
//! observer be written once and used with any of them.
//!
//! # Event traits
//!
//! - [`HasState`]: events that carry the current time and state value
//!
//! # Action traits
//!
//! - [`CanStopEarly`]: actions that can signal early termination
//!
//! # Example
//!
//! ```rust
//! use fixstep_core::Observer;
//! use fixstep_observers::traits::{CanStopEarly, HasState};
//!
//! /// Stops once the state crosses a threshold.
//! struct Threshold(f64);
//!
//! impl<E: HasState, A: CanStopEarly> Observer<E, A> for Threshold {
//!     fn observe(&mut self, event: &E) -> Option<A> {
//!         (event.state() >= self.0).then(A::stop_early)
//!     }
//! }
//! ```

use fixstep_solvers::fixed_step::{Action, Event};

/// An event that carries the current time and state value.
pub trait HasState {
    /// Returns the time of the most recent trajectory point.
    fn time(&self) -> f64;

    /// Returns the state value at [`time`](HasState::time).
    fn state(&self) -> f64;
}

/// An action type that can signal early termination.
pub trait CanStopEarly {
    /// Returns the action that stops the integrator early.
    fn stop_early() -> Self;
}

// --- HasState for fixed_step::Event ---

impl<S> HasState for Event<S> {
    fn time(&self) -> f64 {
        self.point().t
    }

    fn state(&self) -> f64 {
        self.point().y
    }
}

// --- CanStopEarly impls ---

impl CanStopEarly for Action {
    fn stop_early() -> Self {
        Self::StopEarly
    }
}
