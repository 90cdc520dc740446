//! Particle record as consumed by the solver.

use glam::DVec2;
use serde::Serialize;

/// Motion classification read by the solver (`imove`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum MotionType {
    /// Free fluid particle
    Fluid,
    /// Fixed wall boundary element
    Boundary,
    /// Inactive slot parked outside the domain
    Buffer,
}

impl MotionType {
    /// Integer code written to the particle file
    pub fn code(self) -> i32 {
        match self {
            MotionType::Fluid => 1,
            MotionType::Boundary => -3,
            MotionType::Buffer => -255,
        }
    }

    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            1 => Some(MotionType::Fluid),
            -3 => Some(MotionType::Boundary),
            -255 => Some(MotionType::Buffer),
            _ => None,
        }
    }
}

/// Initial state of one particle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Particle {
    pub position: DVec2,
    /// Outward unit normal for walls, zero otherwise
    pub normal: DVec2,
    pub velocity: DVec2,
    /// Secondary vector column of the file format, always zero here
    pub secondary: DVec2,
    /// Pressure the density was derived from (not written)
    pub pressure: f64,
    pub density: f64,
    /// Reserved scalar column, always zero here
    pub reserved: f64,
    pub mass: f64,
    pub motion: MotionType,
}
