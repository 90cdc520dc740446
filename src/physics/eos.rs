//! Linearized weakly-compressible equation of state.
//!
//! ρ = ρ₀ + (p - p₀) / c²
//!
//! Where:
//! - ρ₀ = reference density
//! - p₀ = background pressure
//! - c = artificial speed of sound

use crate::config::CaseParameters;

/// Pressure-density relation shared by every particle population
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EquationOfState {
    pub reference_density: f64,
    pub background_pressure: f64,
    pub sound_speed: f64,
}

impl EquationOfState {
    pub fn from_parameters(params: &CaseParameters) -> Self {
        Self {
            reference_density: params.flow.reference_density,
            background_pressure: params.background_pressure(),
            sound_speed: params.sound_speed(),
        }
    }

    /// Density that yields pressure `press`
    pub fn density(&self, press: f64) -> f64 {
        self.reference_density
            + (press - self.background_pressure) / (self.sound_speed * self.sound_speed)
    }

    /// Background pressure plus the weight of a `depth` tall column
    pub fn hydrostatic_pressure(&self, gravity: f64, depth: f64) -> f64 {
        self.background_pressure + self.reference_density * gravity * depth
    }
}
