//! Resolved case state.
//!
//! Every scalar the emitter and the templates need, derived once from the
//! case parameters and read-only afterwards.

use crate::{
    config::CaseParameters,
    error::Result,
    geometry::{count_overflow, ensure_positive, BufferPool, ChannelLattice, Discretization, Domain},
    physics::{dynamic_viscosity, BlasiusProfile, EquationOfState},
};

/// Complete resolved state of a boundary-layer case
#[derive(Debug, Clone)]
pub struct CaseState {
    /// Input parameters the state was resolved from
    pub params: CaseParameters,
    /// Particle spacing and smoothing length
    pub discretization: Discretization,
    /// Padded solver domain
    pub domain: Domain,
    /// Inactive inflow/outflow slots
    pub buffer: BufferPool,
    /// Fluid and wall scan lattice
    pub lattice: ChannelLattice,
    /// Dynamic viscosity for the solver
    pub viscosity: f64,
    /// Pressure-density relation
    pub eos: EquationOfState,
    /// Inflow velocity profile
    pub profile: BlasiusProfile,
}

impl CaseState {
    /// Resolve a case, failing before anything is written if the inputs are degenerate
    pub fn resolve(params: &CaseParameters) -> Result<Self> {
        let discretization = Discretization::from_parameters(params)?;
        ensure_positive("reference_density", params.flow.reference_density)?;
        ensure_positive("inflow_speed", params.flow.inflow_speed)?;
        let viscosity = dynamic_viscosity(params, &discretization)?;

        let domain = Domain::padded(params, &discretization);
        let buffer = BufferPool::from_parameters(params)?;
        let lattice = ChannelLattice::new(params, &discretization)?;
        (lattice.fluid_count() + lattice.boundary_count())
            .checked_add(buffer.len())
            .ok_or_else(count_overflow)?;

        log::info!(
            "Resolved case: dr={}, h={}, {} columns x {} rows, {} buffer slots",
            discretization.dr,
            discretization.h,
            lattice.columns.len(),
            lattice.rows.len(),
            buffer.len()
        );

        Ok(Self {
            params: params.clone(),
            discretization,
            domain,
            buffer,
            lattice,
            viscosity,
            eos: EquationOfState::from_parameters(params),
            profile: BlasiusProfile::from_parameters(params),
        })
    }

    /// Particles the emitter will produce, `fluid + 2·columns + buffer`.
    ///
    /// Cannot overflow: `resolve` rejects cases whose total does not fit.
    pub fn expected_particle_count(&self) -> usize {
        self.lattice.fluid_count() + self.lattice.boundary_count() + self.buffer.len()
    }
}
