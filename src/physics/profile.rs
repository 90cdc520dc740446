//! Inflow velocity profile.
//!
//! A tanh surrogate of the Blasius boundary-layer solution:
//!
//! u(y) = U * tanh(3.3245 * y / Y)
//!
//! Where:
//! - U = free-stream inflow speed
//! - Y = boundary-layer thickness
//!
//! At y = Y the profile reaches tanh(3.3245) ≈ 99.75% of U.

use crate::config::CaseParameters;

/// Shape coefficient of the tanh fit
pub const BLASIUS_SHAPE: f64 = 3.3245;

/// Horizontal inflow velocity as a function of the wall distance
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlasiusProfile {
    /// Free-stream speed
    pub inflow_speed: f64,
    /// Boundary-layer thickness
    pub thickness: f64,
}

impl BlasiusProfile {
    pub fn from_parameters(params: &CaseParameters) -> Self {
        Self {
            inflow_speed: params.flow.inflow_speed,
            thickness: params.boundary_layer_thickness(),
        }
    }

    /// Streamwise velocity at height `y`. Defined for every real `y`.
    pub fn velocity(&self, y: f64) -> f64 {
        self.inflow_speed * (BLASIUS_SHAPE * y / self.thickness).tanh()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> BlasiusProfile {
        BlasiusProfile::from_parameters(&CaseParameters::default())
    }

    #[test]
    fn test_zero_at_wall() {
        assert_eq!(profile().velocity(0.0), 0.0);
    }

    #[test]
    fn test_edge_of_layer() {
        let p = profile();
        let u = p.velocity(p.thickness);
        assert!((u - 0.9975).abs() < 1e-3, "u(Y) = {}", u);
    }

    #[test]
    fn test_odd_symmetry() {
        let p = profile();
        for &y in &[0.001, 0.05, 0.3, 2.0] {
            assert_eq!(p.velocity(-y), -p.velocity(y));
        }
    }

    #[test]
    fn test_asymptotes() {
        let p = profile();
        assert!((p.velocity(100.0) - p.inflow_speed).abs() < 1e-12);
        assert!((p.velocity(-100.0) + p.inflow_speed).abs() < 1e-12);
    }

    #[test]
    fn test_monotonic() {
        let p = profile();
        let mut last = p.velocity(-1.0);
        for i in 1..200 {
            let u = p.velocity(-1.0 + i as f64 * 0.01);
            assert!(u >= last);
            last = u;
        }
    }
}
