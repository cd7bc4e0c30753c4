/// A model whose initial value problem has a known analytic solution.
pub trait ClosedForm {
    /// Returns the exact state at time `t` for the initial condition `y(t0) = y0`.
    fn exact(&self, t0: f64, y0: f64, t: f64) -> f64;
}
