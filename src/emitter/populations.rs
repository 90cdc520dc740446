//! The three particle populations of the channel.
//!
//! Each population is a lazy, restartable iterator over [`Particle`]s in
//! fixed scan order. Fluid particles are emitted column-major (outer loop
//! over x, inner over y), walls bottom then top per column.

use glam::DVec2;
use serde::Serialize;

use super::particle::{MotionType, Particle};
use crate::state::CaseState;

/// Particle population, in emission order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Population {
    Fluid,
    Boundary,
    Buffer,
}

impl Population {
    /// All populations in the order they are written
    pub const ALL: [Population; 3] = [Population::Fluid, Population::Boundary, Population::Buffer];

    pub fn label(self) -> &'static str {
        match self {
            Population::Fluid => "fluid particles",
            Population::Boundary => "boundary elements",
            Population::Buffer => "buffer particles",
        }
    }
}

/// Particles emitted per population
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PopulationCounts {
    pub fluid: usize,
    pub boundary: usize,
    pub buffer: usize,
}

impl PopulationCounts {
    pub fn total(&self) -> usize {
        self.fluid + self.boundary + self.buffer
    }

    pub fn get(&self, population: Population) -> usize {
        match population {
            Population::Fluid => self.fluid,
            Population::Boundary => self.boundary,
            Population::Buffer => self.buffer,
        }
    }

    pub(crate) fn add(&mut self, population: Population, n: usize) {
        match population {
            Population::Fluid => self.fluid += n,
            Population::Boundary => self.boundary += n,
            Population::Buffer => self.buffer += n,
        }
    }
}

/// Builds particles from a resolved case
#[derive(Debug, Clone, Copy)]
pub struct ParticleEmitter<'a> {
    case: &'a CaseState,
}

impl<'a> ParticleEmitter<'a> {
    pub fn new(case: &'a CaseState) -> Self {
        Self { case }
    }

    /// Number of particles a population will yield
    pub fn len(&self, population: Population) -> usize {
        match population {
            Population::Fluid => self.case.lattice.fluid_count(),
            Population::Boundary => self.case.lattice.boundary_count(),
            Population::Buffer => self.case.buffer.len(),
        }
    }

    /// Total particles over all populations
    pub fn total(&self) -> usize {
        Population::ALL.iter().map(|&p| self.len(p)).sum()
    }

    pub fn population(&self, population: Population) -> Box<dyn Iterator<Item = Particle> + 'a> {
        match population {
            Population::Fluid => Box::new(self.fluid()),
            Population::Boundary => Box::new(self.boundary()),
            Population::Buffer => Box::new(self.buffer()),
        }
    }

    /// All particles, fluid then boundary then buffer
    pub fn all(&self) -> impl Iterator<Item = Particle> + 'a {
        self.fluid().chain(self.boundary()).chain(self.buffer())
    }

    /// Fluid interior, column-major over the channel lattice
    pub fn fluid(&self) -> impl Iterator<Item = Particle> + 'a {
        let case = self.case;
        let rows = case.lattice.rows;
        case.lattice
            .columns
            .iter()
            .flat_map(move |(_, x)| rows.iter().map(move |(_, y)| fluid_particle(case, x, y)))
    }

    /// Bottom and top wall elements for every column
    pub fn boundary(&self) -> impl Iterator<Item = Particle> + 'a {
        let case = self.case;
        let walls = [
            (0.0, DVec2::NEG_Y),
            (case.params.channel_height(), DVec2::Y),
        ];
        case.lattice.columns.iter().flat_map(move |(_, x)| {
            walls
                .into_iter()
                .map(move |(y, normal)| boundary_particle(case, x, y, normal))
        })
    }

    /// Inactive slots, all parked at the same point outside the domain
    pub fn buffer(&self) -> impl Iterator<Item = Particle> + 'a {
        let case = self.case;
        let parked = buffer_particle(case);
        std::iter::repeat(parked).take(case.buffer.len())
    }
}

fn fluid_particle(case: &CaseState, x: f64, y: f64) -> Particle {
    let params = &case.params;
    let depth = params.channel_height() - y;
    let pressure = case.eos.hydrostatic_pressure(params.flow.gravity, depth);
    let spacing = case.discretization.dr / 2f64.powi(params.numerics.refinement_level as i32);

    Particle {
        position: DVec2::new(x, y),
        normal: DVec2::ZERO,
        velocity: DVec2::new(case.profile.velocity(y), 0.0),
        secondary: DVec2::ZERO,
        pressure,
        density: case.eos.density(pressure),
        reserved: 0.0,
        mass: params.flow.reference_density * spacing * spacing,
        motion: MotionType::Fluid,
    }
}

fn boundary_particle(case: &CaseState, x: f64, y: f64, normal: DVec2) -> Particle {
    let params = &case.params;
    let depth = params.channel_height() - y;
    let pressure = case.eos.hydrostatic_pressure(params.flow.gravity, depth);

    Particle {
        position: DVec2::new(x, y),
        normal,
        // Walls slip at the inflow profile velocity
        velocity: DVec2::new(case.profile.velocity(y), 0.0),
        secondary: DVec2::ZERO,
        pressure,
        density: case.eos.density(pressure),
        reserved: 0.0,
        // Line density: boundary elements are 1D
        mass: case.discretization.dr,
        motion: MotionType::Boundary,
    }
}

fn buffer_particle(case: &CaseState) -> Particle {
    let dr = case.discretization.dr;
    let refd = case.params.flow.reference_density;

    Particle {
        position: case.domain.parking_point(&case.discretization),
        normal: DVec2::ZERO,
        velocity: DVec2::ZERO,
        secondary: DVec2::ZERO,
        pressure: 0.0,
        density: refd,
        reserved: 0.0,
        mass: refd * dr * dr,
        motion: MotionType::Buffer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::CaseParameters;

    fn reference_case() -> CaseState {
        CaseState::resolve(&CaseParameters::default()).unwrap()
    }

    #[test]
    fn test_counts_match_lattice() {
        let case = reference_case();
        let emitter = ParticleEmitter::new(&case);
        for population in Population::ALL {
            assert_eq!(
                emitter.population(population).count(),
                emitter.len(population),
                "{}",
                population.label()
            );
        }
        assert_eq!(emitter.all().count(), 22264);
    }

    #[test]
    fn test_first_fluid_particle() {
        let case = reference_case();
        let first = ParticleEmitter::new(&case).fluid().next().unwrap();
        assert!((first.position.x + 0.03).abs() < 1e-12);
        assert!((first.position.y - 0.005).abs() < 1e-12);
        assert!((first.velocity.x - 0.1647).abs() < 1e-4);
        assert_eq!(first.velocity.y, 0.0);
        assert_eq!(first.motion, MotionType::Fluid);
    }

    #[test]
    fn test_fluid_is_column_major() {
        let case = reference_case();
        let rows = case.lattice.rows.len();
        let fluid: Vec<_> = ParticleEmitter::new(&case).fluid().take(rows + 1).collect();
        assert!(fluid[..rows]
            .iter()
            .all(|p| p.position.x == fluid[0].position.x));
        assert!(fluid[rows].position.x > fluid[0].position.x);
        assert!(fluid[rows - 1].position.y < case.params.channel_height());
    }

    #[test]
    fn test_wall_normals_alternate() {
        let case = reference_case();
        let walls: Vec<_> = ParticleEmitter::new(&case).boundary().take(4).collect();
        assert_eq!(walls[0].position.y, 0.0);
        assert_eq!(walls[0].normal, DVec2::new(0.0, -1.0));
        assert_eq!(walls[1].position.y, 1.5);
        assert_eq!(walls[1].normal, DVec2::new(0.0, 1.0));
        assert_eq!(walls[2].normal, DVec2::new(0.0, -1.0));
        assert_eq!(walls[0].velocity.x, 0.0);
        assert!(walls[1].velocity.x > 0.99);
    }

    #[test]
    fn test_masses() {
        let case = reference_case();
        let emitter = ParticleEmitter::new(&case);
        let dr = case.discretization.dr;
        assert!(emitter.fluid().all(|p| p.mass == dr * dr));
        assert!(emitter.boundary().all(|p| p.mass == dr));
        assert!(emitter.buffer().all(|p| p.mass == dr * dr));
    }

    #[test]
    fn test_refined_fluid_mass() {
        let mut params = CaseParameters::default();
        params.numerics.refinement_level = 1;
        let case = CaseState::resolve(&params).unwrap();
        let dr = case.discretization.dr;
        let p = ParticleEmitter::new(&case).fluid().next().unwrap();
        assert!((p.mass - 0.25 * dr * dr).abs() < 1e-15);
    }

    #[test]
    fn test_equation_of_state_holds() {
        let mut params = CaseParameters::default();
        params.flow.gravity = 9.81;
        let case = CaseState::resolve(&params).unwrap();
        for p in ParticleEmitter::new(&case).fluid().chain(ParticleEmitter::new(&case).boundary()) {
            assert_eq!(p.density, case.eos.density(p.pressure));
        }
    }

    #[test]
    fn test_buffer_parked_outside() {
        let case = reference_case();
        let parked = case.domain.parking_point(&case.discretization);
        assert!(ParticleEmitter::new(&case).buffer().all(|p| {
            p.position == parked && p.motion == MotionType::Buffer && p.velocity == DVec2::ZERO
        }));
        assert!(!case.domain.contains(parked));
    }
}
