use std::fmt::Debug;

use fixstep_core::RightHandSide;

/// The interval covered by a single step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    /// Time at the start of the step, `t[i]`.
    pub t: f64,

    /// Time at the end of the step, `t[i + 1]`.
    pub t_next: f64,

    /// The grid's uniform step size.
    pub h: f64,
}

/// A single-step formula for a fixed-step explicit integrator.
///
/// Implementations advance one value across one [`Interval`] and report the
/// intermediate values they computed as [`Method::Stages`], which the driver
/// forwards to observers unchanged.
pub trait Method {
    /// Intermediate values computed within one step.
    type Stages: Debug + Clone + Copy;

    /// Human-readable method name.
    const NAME: &'static str;

    /// Order of the global truncation error.
    const ORDER: u32;

    /// Right-hand-side evaluations per step.
    const EVALUATIONS: usize;

    /// Advances `y` across `interval`, returning the new value and the stages.
    fn step<F: RightHandSide>(&self, f: &F, interval: Interval, y: f64) -> (f64, Self::Stages);
}
