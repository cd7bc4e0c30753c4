use fixstep_core::RightHandSide;

use crate::{
    ClosedForm,
    error::{ModelError, positive},
};

/// Free fall with quadratic drag: `dv/dt = g - (c_d / m) v²`.
///
/// The downward velocity `v` approaches the terminal velocity
/// `sqrt(g m / c_d)`, where gravity and drag balance.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadraticDrag {
    gravity: f64,
    drag_coefficient: f64,
    mass: f64,
}

impl QuadraticDrag {
    /// A 68.1 kg jumper with a lumped drag coefficient of 0.25 kg/m.
    pub const JUMPER: Self = Self {
        gravity: 9.81,
        drag_coefficient: 0.25,
        mass: 68.1,
    };

    /// Creates a drag model from gravity (m/s²), drag coefficient (kg/m), and
    /// mass (kg).
    ///
    /// # Errors
    ///
    /// Returns an error if any constant is non-finite or not positive.
    pub fn new(gravity: f64, drag_coefficient: f64, mass: f64) -> Result<Self, ModelError> {
        Ok(Self {
            gravity: positive("gravity", gravity)?,
            drag_coefficient: positive("drag_coefficient", drag_coefficient)?,
            mass: positive("mass", mass)?,
        })
    }

    /// Returns the gravitational acceleration.
    #[must_use]
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Returns the lumped drag coefficient.
    #[must_use]
    pub fn drag_coefficient(&self) -> f64 {
        self.drag_coefficient
    }

    /// Returns the mass.
    #[must_use]
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Returns the terminal velocity `sqrt(g m / c_d)`.
    #[must_use]
    pub fn terminal_velocity(&self) -> f64 {
        (self.gravity * self.mass / self.drag_coefficient).sqrt()
    }

    pub(crate) fn validate(&self) -> Result<(), ModelError> {
        Self::new(self.gravity, self.drag_coefficient, self.mass).map(|_| ())
    }
}

impl RightHandSide for QuadraticDrag {
    fn slope(&self, _t: f64, v: f64) -> f64 {
        self.gravity - self.drag_coefficient / self.mass * v * v
    }
}

impl ClosedForm for QuadraticDrag {
    /// `v(t) = v_t tanh(atanh(v0 / v_t) + g (t - t0) / v_t)` below terminal
    /// velocity, with `coth` in place of `tanh` above it.
    fn exact(&self, t0: f64, v0: f64, t: f64) -> f64 {
        let terminal = self.terminal_velocity();
        let ratio = v0 / terminal;
        let elapsed = self.gravity * (t - t0) / terminal;

        if ratio.abs() < 1.0 {
            terminal * (ratio.atanh() + elapsed).tanh()
        } else if ratio.abs() > 1.0 {
            terminal / (ratio.recip().atanh() + elapsed).tanh()
        } else {
            v0
        }
    }
}
