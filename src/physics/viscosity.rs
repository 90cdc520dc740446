//! Dynamic viscosity handed to the solver.
//!
//! μ = max(α/8 · ρ₀ · hfac · dr · c, ρ₀ · U · D / Re)
//!
//! The first term is the artificial viscosity of the α-scheme, the second
//! the physical viscosity implied by the Reynolds number.

use crate::config::CaseParameters;
use crate::error::{GenerationError, Result};
use crate::geometry::{ensure_positive, Discretization};

/// Resolve the dynamic viscosity.
///
/// Fails with [`GenerationError::UndefinedSymbol`] when the case leaves the
/// characteristic length `D` unset.
pub fn dynamic_viscosity(params: &CaseParameters, disc: &Discretization) -> Result<f64> {
    let d = params
        .flow
        .characteristic_length
        .ok_or(GenerationError::UndefinedSymbol("D"))?;
    ensure_positive("characteristic_length", d)?;
    ensure_positive("reynolds", params.flow.reynolds)?;

    let refd = params.flow.reference_density;
    let physical = refd * params.flow.inflow_speed * d / params.flow.reynolds;
    let artificial = params.numerics.alpha / 8.0
        * refd
        * params.numerics.hfac
        * disc.dr
        * params.sound_speed();

    Ok(artificial.max(physical))
}
