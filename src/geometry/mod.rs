//! Geometry module for the channel discretization.
//!
//! Contains particle spacing, the padded solver domain, buffer sizing and the
//! index-based scan lattice the emitter walks.

mod discretization;
mod lattice;

pub use discretization::{BufferPool, ChannelLattice, Discretization, Domain};
pub(crate) use discretization::{count_overflow, ensure_positive};
pub use lattice::{AxisRange, LATTICE_TOLERANCE};
