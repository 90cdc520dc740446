//! SPH Field Init - initial particle field generator for a 2D boundary-layer channel
//!
//! This library resolves a small set of case parameters into the particle
//! spacing, padded domain and buffer sizing of an SPH channel, emits the fluid,
//! wall and buffer particles with a tanh Blasius inflow profile, and renders
//! the solver's XML case files from templates.

pub mod config;
pub mod emitter;
pub mod error;
pub mod export;
pub mod generator;
pub mod geometry;
pub mod physics;
pub mod state;

pub use config::CaseParameters;
pub use emitter::{MotionType, Particle, ParticleEmitter, Population, PopulationCounts};
pub use error::{GenerationError, Result};
pub use generator::{FieldGenerator, GenerationSummary, GeneratorOptions};
pub use geometry::{BufferPool, ChannelLattice, Discretization, Domain};
pub use physics::{BlasiusProfile, EquationOfState};
pub use state::CaseState;
