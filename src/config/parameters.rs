//! Case parameter structures.
//!
//! Only independent quantities are stored. Everything derived from them
//! (speed of sound, background pressure, channel height, boundary-layer
//! thickness) is computed on demand so it can never drift from its inputs.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::Result;

/// Default location of the case file when none is given on the command line
pub const DEFAULT_CASE_FILE: &str = "data/case.json";

/// Top-level parameters container for the boundary-layer channel case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaseParameters {
    /// Channel dimensions and particle resolution
    pub channel: ChannelParameters,
    /// Physical properties of the flow
    pub flow: FlowParameters,
    /// SPH and time-stepping parameters forwarded to the solver
    pub numerics: NumericalParameters,
}

impl CaseParameters {
    /// Load parameters from the default case file, or use defaults if it doesn't exist
    pub fn load_or_default() -> Result<Self> {
        Self::load_or_default_from(DEFAULT_CASE_FILE)
    }

    /// Load from a JSON file, or return defaults if there is no such file.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_default_from<P: AsRef<Path>>(path: P) -> Result<Self> {
        match std::fs::read_to_string(path.as_ref()) {
            Ok(contents) => {
                let params = serde_json::from_str(&contents)?;
                log::info!("Loaded case parameters from {:?}", path.as_ref());
                Ok(params)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("Case parameters file not found, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Load from a JSON file that must exist and parse
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path.as_ref())?;
        let params = serde_json::from_str(&contents)?;
        log::info!("Loaded case parameters from {:?}", path.as_ref());
        Ok(params)
    }

    /// Speed of sound, `cs = 10·U`
    pub fn sound_speed(&self) -> f64 {
        10.0 * self.flow.inflow_speed
    }

    /// Background pressure, `p0 = 3·refd·U²`
    pub fn background_pressure(&self) -> f64 {
        3.0 * self.flow.reference_density * self.flow.inflow_speed.powi(2)
    }

    /// Channel height, `H = 1.5·L`
    pub fn channel_height(&self) -> f64 {
        1.5 * self.channel.length
    }

    /// Inflow boundary-layer thickness, `Y = 0.1·L`
    pub fn boundary_layer_thickness(&self) -> f64 {
        0.1 * self.channel.length
    }
}

impl Default for CaseParameters {
    fn default() -> Self {
        let channel = ChannelParameters::default();
        Self {
            flow: FlowParameters {
                // Reynolds number is based on the channel length
                characteristic_length: Some(channel.length),
                ..FlowParameters::default()
            },
            channel,
            numerics: NumericalParameters::default(),
        }
    }
}

/// Channel geometry and resolution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChannelParameters {
    /// Channel length `L`
    pub length: f64,

    /// Number of fluid particles across the channel height
    pub ny: u32,

    /// Separation multiplier applied to the smoothing length when padding
    /// the domain and placing the inflow/outflow columns
    pub sep: f64,
}

impl Default for ChannelParameters {
    fn default() -> Self {
        Self {
            length: 1.0,
            ny: 150,
            sep: 2.0,
        }
    }
}

/// Physical flow properties
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FlowParameters {
    /// Gravity magnitude, acting along -y
    pub gravity: f64,

    /// Reference density `refd`
    pub reference_density: f64,

    /// Free-stream inflow speed `U`
    pub inflow_speed: f64,

    /// Reynolds number `Re`
    pub reynolds: f64,

    /// Length `D` the Reynolds number is built on.
    ///
    /// Left out of a case file it stays undefined, and resolving the
    /// viscosity fails rather than guessing.
    pub characteristic_length: Option<f64>,
}

impl Default for FlowParameters {
    fn default() -> Self {
        Self {
            gravity: 0.0,
            reference_density: 1.0,
            inflow_speed: 1.0,
            reynolds: 100.0,
            characteristic_length: None,
        }
    }
}

/// SPH and time integration settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericalParameters {
    /// Smoothing length factor, `h = hfac·dr`
    pub hfac: f64,

    /// Courant number
    pub courant: f64,

    /// Iterations over which the Courant number is ramped up
    pub courant_ramp_iters: u32,

    /// Initial Courant factor of the ramp
    pub courant_ramp_factor: f64,

    /// Artificial viscosity coefficient
    pub alpha: f64,

    /// Delta-SPH diffusion coefficient
    pub delta: f64,

    /// Mesh refinement level of the fluid particles, 0 means unrefined
    #[serde(default)]
    pub refinement_level: u32,
}

impl Default for NumericalParameters {
    fn default() -> Self {
        Self {
            hfac: 1.25,
            courant: 0.1,
            courant_ramp_iters: 1000,
            courant_ramp_factor: 0.001,
            alpha: 0.0,
            delta: 1.0,
            refinement_level: 0,
        }
    }
}
