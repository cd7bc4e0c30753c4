use fixstep_core::RightHandSide;

use crate::{
    ClosedForm,
    error::{ModelError, positive},
};

/// Gompertz growth: `dV/dt = α V ln(K / V)`.
///
/// Commonly used for tumor volume. The relative growth rate `α ln(K / V)`
/// falls as `V` approaches the plateau volume `K`. The logarithm is undefined
/// for non-positive volumes, where the slope is NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Gompertz {
    growth: f64,
    capacity: f64,
}

impl Gompertz {
    /// Tumor growth with `α = 0.1` per day and a plateau of 1000 mm³.
    pub const TUMOR: Self = Self {
        growth: 0.1,
        capacity: 1000.0,
    };

    /// Creates a Gompertz model from its growth rate `α` and plateau `K`.
    ///
    /// # Errors
    ///
    /// Returns an error if either constant is non-finite or not positive.
    pub fn new(growth: f64, capacity: f64) -> Result<Self, ModelError> {
        Ok(Self {
            growth: positive("growth", growth)?,
            capacity: positive("capacity", capacity)?,
        })
    }

    /// Returns the growth rate `α`.
    #[must_use]
    pub fn growth(&self) -> f64 {
        self.growth
    }

    /// Returns the plateau volume `K`.
    #[must_use]
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub(crate) fn validate(&self) -> Result<(), ModelError> {
        Self::new(self.growth, self.capacity).map(|_| ())
    }
}

impl RightHandSide for Gompertz {
    fn slope(&self, _t: f64, v: f64) -> f64 {
        if v > 0.0 {
            self.growth * v * (self.capacity / v).ln()
        } else {
            f64::NAN
        }
    }
}

impl ClosedForm for Gompertz {
    /// `V(t) = K exp(ln(V0 / K) e^{-α (t - t0)})`, defined for `V0 > 0`.
    fn exact(&self, t0: f64, v0: f64, t: f64) -> f64 {
        if v0 <= 0.0 {
            return f64::NAN;
        }
        let decay = (-self.growth * (t - t0)).exp();
        self.capacity * ((v0 / self.capacity).ln() * decay).exp()
    }
}
