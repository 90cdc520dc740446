//! Integration tests for the emitted particle field
//!
//! Tests verify that:
//! - The particle count matches the analytic lattice count
//! - The reference boundary-layer case reproduces its known values
//! - Every particle satisfies the equation of state
//! - Masses follow the fluid / wall / buffer dimensionality
//! - Two runs with the same parameters write identical bytes

use sph_field_init::{
    export::parse_particle_line, CaseParameters, CaseState, FieldGenerator, GeneratorOptions,
    MotionType, ParticleEmitter,
};

fn reference_generator() -> FieldGenerator {
    FieldGenerator::new(&CaseParameters::default(), GeneratorOptions::default()).unwrap()
}

fn written_text(generator: &FieldGenerator) -> String {
    let (_, bytes) = generator.write_particles(Vec::new()).unwrap();
    String::from_utf8(bytes).unwrap()
}

/// Test the reference case: U=1, hfac=1.25, ny=150, L=1
#[test]
fn test_reference_scenario() {
    let case = CaseState::resolve(&CaseParameters::default()).unwrap();

    assert!((case.params.channel_height() - 1.5).abs() < 1e-12);
    assert!((case.discretization.dr - 0.01).abs() < 1e-12);
    assert!((case.params.boundary_layer_thickness() - 0.1).abs() < 1e-12);

    let first = ParticleEmitter::new(&case).all().next().unwrap();
    let expected_x = -0.5 * case.discretization.dr - case.discretization.separation();
    assert!(
        (first.position.x - expected_x).abs() < 1e-12,
        "First fluid particle x should be {}, got {}",
        expected_x,
        first.position.x
    );
    assert!((first.position.y - 0.005).abs() < 1e-12);
    assert!(
        (first.velocity.x - 0.1647).abs() < 1e-4,
        "vx at y=0.005 should be ~0.1647, got {}",
        first.velocity.x
    );
}

/// Test n = fluid + 2·columns + buffer, both from the lattice and from the file
#[test]
fn test_count_invariant() {
    let generator = reference_generator();
    let case = &generator.case;
    let columns = case.lattice.columns.len();
    let rows = case.lattice.rows.len();

    let (counts, _) = generator.write_particles(std::io::sink()).unwrap();
    assert_eq!(counts.fluid, columns * rows);
    assert_eq!(counts.boundary, 2 * columns);
    assert_eq!(counts.buffer, case.buffer.len());
    assert_eq!(counts.total(), 22264);
    assert_eq!(counts.total(), case.expected_particle_count());

    let text = written_text(&generator);
    assert_eq!(text.lines().filter_map(parse_particle_line).count(), counts.total());
}

/// Test the count invariant away from the reference resolution
#[test]
fn test_count_invariant_other_resolutions() {
    for (ny, length, hfac) in [(10, 1.0, 1.25), (37, 2.5, 1.5), (64, 0.3, 2.0)] {
        let mut params = CaseParameters::default();
        params.channel.ny = ny;
        params.channel.length = length;
        params.numerics.hfac = hfac;
        params.flow.characteristic_length = Some(length);

        let case = CaseState::resolve(&params).unwrap();
        let emitter = ParticleEmitter::new(&case);
        let n = emitter.all().count();
        assert_eq!(
            n,
            case.lattice.fluid_count() + 2 * case.lattice.columns.len() + case.buffer.len(),
            "ny={} L={} hfac={}",
            ny,
            length,
            hfac
        );
        assert_eq!(case.lattice.rows.len(), ny as usize);
    }
}

/// Test the written order: fluid, then walls, then buffer
#[test]
fn test_population_order_in_file() {
    let generator = reference_generator();
    let codes: Vec<i32> = written_text(&generator)
        .lines()
        .filter_map(parse_particle_line)
        .map(|line| line.imove)
        .collect();

    let first_wall = codes.iter().position(|&c| c == -3).unwrap();
    let first_buffer = codes.iter().position(|&c| c == -255).unwrap();
    assert!(codes[..first_wall].iter().all(|&c| c == 1));
    assert!(codes[first_wall..first_buffer].iter().all(|&c| c == -3));
    assert!(codes[first_buffer..].iter().all(|&c| c == -255));
}

/// Test ρ = ρ₀ + (p - p₀)/c² for every particle, with and without gravity
#[test]
fn test_equation_of_state_consistency() {
    for gravity in [0.0, 9.81] {
        let mut params = CaseParameters::default();
        params.flow.gravity = gravity;
        let case = CaseState::resolve(&params).unwrap();
        let p0 = params.background_pressure();
        let cs = params.sound_speed();

        for p in ParticleEmitter::new(&case).all() {
            if p.motion == MotionType::Buffer {
                assert_eq!(p.density, params.flow.reference_density);
                continue;
            }
            let expected = params.flow.reference_density + (p.pressure - p0) / (cs * cs);
            assert_eq!(
                p.density, expected,
                "EOS violated at ({}, {})",
                p.position.x, p.position.y
            );
        }
    }
}

/// Test mass dimensionality: area mass for fluid/buffer, line mass for walls
#[test]
fn test_mass_dimensionality() {
    let generator = reference_generator();
    let dr = generator.case.discretization.dr;

    for line in written_text(&generator).lines().filter_map(parse_particle_line) {
        let mass = line.values[10];
        match MotionType::from_code(line.imove) {
            Some(MotionType::Fluid) | Some(MotionType::Buffer) => {
                assert!((mass - dr * dr).abs() < 1e-18, "area mass {}", mass)
            }
            Some(MotionType::Boundary) => assert!((mass - dr).abs() < 1e-15, "line mass {}", mass),
            None => panic!("unexpected imove {}", line.imove),
        }
    }
}

/// Test that written floats read back exactly
#[test]
fn test_file_values_round_trip() {
    let generator = reference_generator();
    let particles: Vec<_> = ParticleEmitter::new(&generator.case).all().collect();
    let lines: Vec<_> = written_text(&generator)
        .lines()
        .filter_map(parse_particle_line)
        .collect();

    assert_eq!(particles.len(), lines.len());
    for (p, line) in particles.iter().zip(&lines).step_by(97) {
        assert_eq!(line.values[0], p.position.x);
        assert_eq!(line.values[1], p.position.y);
        assert_eq!(line.values[4], p.velocity.x);
        assert_eq!(line.values[8], p.density);
        assert_eq!(line.imove, p.motion.code());
    }
}

/// Test determinism: identical parameters give identical bytes
#[test]
fn test_deterministic_output() {
    let first = written_text(&reference_generator());
    let second = written_text(&reference_generator());
    assert_eq!(first, second);
}
