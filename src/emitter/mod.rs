//! Particle emission for the channel case.
//!
//! Produces the fluid interior, the two walls and the buffer slots from a
//! resolved [`CaseState`](crate::state::CaseState). Particles depend only on
//! the resolved case, never on each other.

mod particle;
mod populations;
mod progress;

pub use particle::{MotionType, Particle};
pub use populations::{ParticleEmitter, Population, PopulationCounts};
pub use progress::ProgressMeter;
