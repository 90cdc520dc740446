//! Physical models needed to initialise the particle field.
//!
//! This module implements:
//! - The tanh Blasius surrogate for the inflow velocity
//! - The linearized weakly-compressible equation of state
//! - The dynamic viscosity written into the solver configuration

pub mod eos;
pub mod profile;
pub mod viscosity;

pub use eos::EquationOfState;
pub use profile::{BlasiusProfile, BLASIUS_SHAPE};
pub use viscosity::dynamic_viscosity;
