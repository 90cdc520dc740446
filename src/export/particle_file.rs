//! Plain-text particle file read by the solver.
//!
//! One particle per line:
//!
//! ```text
//! x y, nx ny, vx vy, sx sy, dens, reserved, mass, imove
//! ```
//!
//! Floats are written in their shortest round-trip decimal form, so the file
//! reproduces every `f64` exactly. Lines starting with `#` are comments.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::emitter::Particle;
use crate::error::Result;

/// Default particle file name expected by the solver templates
pub const DEFAULT_PARTICLE_FILE: &str = "Fluid.dat";

/// Decimal form shared by the particle file and the templates (`0.0`, `0.01`, `1e-7`)
pub fn format_float(value: f64) -> String {
    format!("{:?}", value)
}

/// Format one particle as a line of the particle file, without the newline
pub fn format_particle(p: &Particle) -> String {
    format!(
        "{:?} {:?}, {:?} {:?}, {:?} {:?}, {:?} {:?}, {:?}, {:?}, {:?}, {}",
        p.position.x,
        p.position.y,
        p.normal.x,
        p.normal.y,
        p.velocity.x,
        p.velocity.y,
        p.secondary.x,
        p.secondary.y,
        p.density,
        p.reserved,
        p.mass,
        p.motion.code()
    )
}

/// Streaming writer that keeps the running particle count
pub struct ParticleWriter<W: Write> {
    writer: W,
    count: usize,
}

impl ParticleWriter<BufWriter<File>> {
    /// Create (or truncate) a particle file
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::create(path.as_ref())?;
        log::info!("Opening particle output file {}", path.as_ref().display());
        Ok(Self::from_writer(BufWriter::new(file)))
    }
}

impl<W: Write> ParticleWriter<W> {
    pub fn from_writer(writer: W) -> Self {
        Self { writer, count: 0 }
    }

    /// Write a `#` comment block describing the file
    pub fn write_header(&mut self, title: &str) -> Result<()> {
        writeln!(self.writer, "# {}", title)?;
        writeln!(
            self.writer,
            "# x y, nx ny, vx vy, sx sy, dens, reserved, mass, imove"
        )?;
        Ok(())
    }

    /// Append one particle
    pub fn write(&mut self, particle: &Particle) -> Result<()> {
        writeln!(self.writer, "{}", format_particle(particle))?;
        self.count += 1;
        Ok(())
    }

    /// Particles written so far
    pub fn count(&self) -> usize {
        self.count
    }

    /// Flush and hand back the sink with the final count
    pub fn finish(mut self) -> Result<(usize, W)> {
        self.writer.flush()?;
        log::info!("{} particles written", self.count);
        Ok((self.count, self.writer))
    }
}

/// A particle line read back from a file
#[derive(Debug, Clone, PartialEq)]
pub struct ParticleLine {
    pub values: [f64; 11],
    pub imove: i32,
}

/// Parse one data line. Returns `None` for comments, blank or malformed lines.
pub fn parse_particle_line(line: &str) -> Option<ParticleLine> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return None;
    }
    let mut tokens = line
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|t| !t.is_empty());

    let mut values = [0.0; 11];
    for v in values.iter_mut() {
        *v = tokens.next()?.parse().ok()?;
    }
    let imove = tokens.next()?.parse().ok()?;
    if tokens.next().is_some() {
        return None;
    }
    Some(ParticleLine { values, imove })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emitter::MotionType;
    use glam::DVec2;

    fn wall() -> Particle {
        Particle {
            position: DVec2::new(-0.03, 0.0),
            normal: DVec2::new(0.0, -1.0),
            velocity: DVec2::new(0.0, 0.0),
            secondary: DVec2::ZERO,
            pressure: 3.0,
            density: 1.0,
            reserved: 0.0,
            mass: 0.01,
            motion: MotionType::Boundary,
        }
    }

    #[test]
    fn test_line_layout() {
        assert_eq!(
            format_particle(&wall()),
            "-0.03 0.0, 0.0 -1.0, 0.0 0.0, 0.0 0.0, 1.0, 0.0, 0.01, -3"
        );
    }

    #[test]
    fn test_float_form() {
        assert_eq!(format_float(0.0), "0.0");
        assert_eq!(format_float(1.5), "1.5");
        assert_eq!(format_float(0.1 + 0.2), "0.30000000000000004");
    }

    #[test]
    fn test_parse_written_line() {
        let p = wall();
        let parsed = parse_particle_line(&format_particle(&p)).unwrap();
        assert_eq!(parsed.values[0], p.position.x);
        assert_eq!(parsed.values[3], -1.0);
        assert_eq!(parsed.values[10], p.mass);
        assert_eq!(parsed.imove, -3);
    }

    #[test]
    fn test_parse_skips_comments() {
        assert!(parse_particle_line("# x y").is_none());
        assert!(parse_particle_line("   ").is_none());
        assert!(parse_particle_line("1 2, 3").is_none());
    }

    #[test]
    fn test_writer_counts() {
        let mut writer = ParticleWriter::from_writer(Vec::new());
        writer.write_header("test").unwrap();
        writer.write(&wall()).unwrap();
        writer.write(&wall()).unwrap();
        let (count, bytes) = writer.finish().unwrap();
        assert_eq!(count, 2);
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(text.lines().count(), 4);
        assert_eq!(text.lines().filter_map(parse_particle_line).count(), 2);
    }
}
