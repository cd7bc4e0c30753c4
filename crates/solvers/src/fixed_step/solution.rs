/// Indicates how the integrator terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Advanced across every interval of the grid.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// The result of a fixed-step integration.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// How the integrator terminated.
    pub status: Status,

    /// Trajectory values, one per grid point reached, starting with `y0`.
    ///
    /// Has the same length as the grid when `status` is [`Status::Complete`].
    pub values: Vec<f64>,

    /// Number of steps taken.
    pub steps: usize,

    /// Number of right-hand-side evaluations performed.
    pub evaluations: usize,

    /// Index of the first non-finite value in `values`, if any.
    pub first_non_finite: Option<usize>,
}

impl Solution {
    /// Returns the last computed value.
    #[must_use]
    pub fn last(&self) -> f64 {
        // The driver always records `y0`, so `values` is never empty.
        self.values[self.values.len() - 1]
    }

    /// Returns `true` if every value in the trajectory is finite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.first_non_finite.is_none()
    }
}
