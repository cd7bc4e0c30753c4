use fixstep_core::RightHandSide;

use crate::{
    ClosedForm,
    error::{ModelError, positive},
};

/// Logistic growth: `dN/dt = k N (N_M - N)`.
///
/// The population `N` grows almost exponentially while small and levels off
/// at the carrying capacity `N_M`, which is a stable equilibrium.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Logistic {
    rate: f64,
    capacity: f64,
}

impl Logistic {
    /// Population growth with `k = 0.000095` and `N_M = 5000`.
    pub const POPULATION: Self = Self {
        rate: 0.000_095,
        capacity: 5000.0,
    };

    /// Creates a logistic model from its rate constant `k` and capacity `N_M`.
    ///
    /// # Errors
    ///
    /// Returns an error if either constant is non-finite or not positive.
    pub fn new(rate: f64, capacity: f64) -> Result<Self, ModelError> {
        Ok(Self {
            rate: positive("rate", rate)?,
            capacity: positive("capacity", capacity)?,
        })
    }

    /// Returns the rate constant `k`.
    #[must_use]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Returns the carrying capacity `N_M`.
    #[must_use]
    pub fn capacity(&self) -> f64 {
        self.capacity
    }

    pub(crate) fn validate(&self) -> Result<(), ModelError> {
        Self::new(self.rate, self.capacity).map(|_| ())
    }
}

impl RightHandSide for Logistic {
    fn slope(&self, _t: f64, n: f64) -> f64 {
        self.rate * n * (self.capacity - n)
    }
}

impl ClosedForm for Logistic {
    /// `N(t) = N_M N0 / (N0 + (N_M - N0) e^{-k N_M (t - t0)})`
    fn exact(&self, t0: f64, n0: f64, t: f64) -> f64 {
        let decay = (-self.rate * self.capacity * (t - t0)).exp();
        self.capacity * n0 / (n0 + (self.capacity - n0) * decay)
    }
}
