use fixstep_core::GridError;

/// Errors that can occur before a fixed-step integration starts.
///
/// Once a valid [`Grid`](fixstep_core::Grid) is in hand, integration itself
/// cannot fail; non-finite results are reported through the
/// [`Solution`](super::Solution) instead.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid grid: {0}")]
    InvalidGrid(#[from] GridError),
}
