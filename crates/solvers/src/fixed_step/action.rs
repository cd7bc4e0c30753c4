/// Control actions supported by the fixed-step integrators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Stop the integration and return the trajectory computed so far.
    StopEarly,
}
