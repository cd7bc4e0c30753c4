use fixstep_core::Observer;

use crate::traits::{CanStopEarly, HasState};

/// Stops an integration at the first non-finite state value.
///
/// The integrators keep computing through NaN and infinity, which is rarely
/// useful past the first occurrence. This observer ends the run there and
/// remembers when it happened.
///
/// # Example
///
/// ```
/// use fixstep_core::Grid;
/// use fixstep_observers::StopOnNonFinite;
/// use fixstep_solvers::fixed_step::{Status, heun};
///
/// let grid = Grid::linspace(0.0, 1.0, 11).unwrap();
/// let f = |_t: f64, y: f64| 1.0 / y;
///
/// // The slope at y = 0 is infinite, so the first step leaves the reals.
/// let mut guard = StopOnNonFinite::new();
/// let solution = heun::solve(&f, 0.0, &grid, &mut guard);
///
/// assert_eq!(solution.status, Status::StoppedByObserver);
/// assert_eq!(solution.steps, 1);
/// assert!(guard.stopped_at().is_some());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct StopOnNonFinite {
    stopped_at: Option<f64>,
}

impl StopOnNonFinite {
    /// Creates a guard that has not yet stopped a run.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the time of the first non-finite value, if one was seen.
    #[must_use]
    pub fn stopped_at(&self) -> Option<f64> {
        self.stopped_at
    }
}

impl<E: HasState, A: CanStopEarly> Observer<E, A> for StopOnNonFinite {
    fn observe(&mut self, event: &E) -> Option<A> {
        if event.state().is_finite() {
            return None;
        }
        self.stopped_at.get_or_insert(event.time());
        Some(A::stop_early())
    }
}

/// Allows `&mut StopOnNonFinite` to be passed to integrators that take an
/// observer by value, so [`StopOnNonFinite::stopped_at`] can be read afterwards.
impl<E: HasState, A: CanStopEarly> Observer<E, A> for &mut StopOnNonFinite {
    fn observe(&mut self, event: &E) -> Option<A> {
        (**self).observe(event)
    }
}
