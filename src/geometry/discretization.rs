//! Particle spacing, padded domain and buffer sizing for the channel.
//!
//! The physical channel is `[0, L] × [0, H]`. Everything here is pure
//! arithmetic on [`CaseParameters`], resolved once per run.

use glam::DVec2;
use serde::Serialize;

use super::lattice::{sample_count, AxisRange};
use crate::config::CaseParameters;
use crate::error::{GenerationError, Result};

/// Domain padding below the channel, in units of `sep·h`
const DOMAIN_PAD_MIN: f64 = 3.0;
/// Domain padding beyond the channel, in units of `sep·h`
const DOMAIN_PAD_MAX: f64 = 6.0;
/// Buffer columns per unit of `sep·hfac`
const BUFFER_COLUMNS_FACTOR: f64 = 16.0;

/// Particle spacing and kernel support
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Discretization {
    /// Particle spacing `dr = H / ny`
    pub dr: f64,
    /// Smoothing length `h = hfac·dr`
    pub h: f64,
    /// Separation multiplier
    pub sep: f64,
}

impl Discretization {
    /// Derive spacing from the case, rejecting degenerate resolutions
    pub fn from_parameters(params: &CaseParameters) -> Result<Self> {
        if params.channel.ny == 0 {
            return Err(GenerationError::invalid("ny", "must be positive"));
        }
        ensure_positive("length", params.channel.length)?;
        ensure_positive("hfac", params.numerics.hfac)?;
        ensure_positive("sep", params.channel.sep)?;

        let dr = params.channel_height() / f64::from(params.channel.ny);
        let h = params.numerics.hfac * dr;
        ensure_positive("dr", dr)?;
        ensure_positive("h", h)?;

        Ok(Self {
            dr,
            h,
            sep: params.channel.sep,
        })
    }

    /// Kernel separation distance `sep·h`
    pub fn separation(&self) -> f64 {
        self.sep * self.h
    }
}

/// Axis-aligned bounding box handed to the solver
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Domain {
    pub min: DVec2,
    pub max: DVec2,
}

impl Domain {
    /// Channel box padded by `3·sep·h` below and `6·sep·h` beyond
    pub fn padded(params: &CaseParameters, disc: &Discretization) -> Self {
        let pad = disc.separation();
        Self {
            min: DVec2::splat(-DOMAIN_PAD_MIN * pad),
            max: DVec2::new(
                params.channel.length + DOMAIN_PAD_MAX * pad,
                params.channel_height() + DOMAIN_PAD_MAX * pad,
            ),
        }
    }

    /// Where inactive particles are parked, one separation past the max corner
    pub fn parking_point(&self, disc: &Discretization) -> DVec2 {
        self.max + DVec2::splat(disc.separation())
    }

    pub fn contains(&self, p: DVec2) -> bool {
        p.cmpge(self.min).all() && p.cmple(self.max).all()
    }
}

/// Pre-allocated inactive particle slots for the solver's inflow/outflow
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BufferPool {
    pub columns: usize,
    pub rows: usize,
}

impl BufferPool {
    pub fn from_parameters(params: &CaseParameters) -> Result<Self> {
        // Truncation, not rounding: 16·sep·hfac is an integer for the usual factors
        let columns = (BUFFER_COLUMNS_FACTOR * params.channel.sep * params.numerics.hfac)
            .trunc()
            .max(0.0);
        let pool = Self {
            columns: sample_count(columns).ok_or_else(count_overflow)?,
            rows: params.channel.ny as usize,
        };
        pool.columns.checked_mul(pool.rows).ok_or_else(count_overflow)?;
        Ok(pool)
    }

    /// Total number of buffer particles
    pub fn len(&self) -> usize {
        self.columns * self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Scan lattice shared by the fluid and boundary populations
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChannelLattice {
    /// Streamwise columns, `[-dr/2 - sep·h, L + sep·h + dr/2]` inclusive
    pub columns: AxisRange,
    /// Fluid rows, `[dr/2, H)`
    pub rows: AxisRange,
}

impl ChannelLattice {
    pub fn new(params: &CaseParameters, disc: &Discretization) -> Result<Self> {
        let half = 0.5 * disc.dr;
        let pad = disc.separation();
        let end = params.channel.length + pad + half;
        let lattice = Self {
            columns: AxisRange::inclusive(-half - pad, end, disc.dr).ok_or_else(count_overflow)?,
            rows: AxisRange::half_open(half, params.channel_height(), disc.dr)
                .ok_or_else(count_overflow)?,
        };
        // fluid_count() + boundary_count() must not wrap
        lattice
            .columns
            .len()
            .checked_mul(lattice.rows.len())
            .and_then(|fluid| fluid.checked_add(lattice.columns.len().checked_mul(2)?))
            .ok_or_else(count_overflow)?;
        Ok(lattice)
    }

    /// Fluid particles in the full lattice
    pub fn fluid_count(&self) -> usize {
        self.columns.len() * self.rows.len()
    }

    /// Boundary elements, two walls per column
    pub fn boundary_count(&self) -> usize {
        2 * self.columns.len()
    }
}

/// Error for lattices and buffers too large to count
pub(crate) fn count_overflow() -> GenerationError {
    GenerationError::invalid("sep", "yields a particle count that overflows")
}

pub(crate) fn ensure_positive(field: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(GenerationError::invalid(
            field,
            format!("must be positive and finite, got {value}"),
        ))
    }
}
