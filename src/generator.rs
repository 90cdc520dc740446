//! End-to-end case generation.
//!
//! Order of a run:
//! 1. resolve the case (fails on degenerate parameters)
//! 2. load every template (fails on a missing one)
//! 3. emit and write the particle file, then close it
//! 4. render the templates with the final particle count and write them
//!
//! Nothing is written before steps 1 and 2 succeed, and no template is
//! written before all of them have rendered.

use std::io::Write;
use std::path::PathBuf;

use crate::config::CaseParameters;
use crate::emitter::{ParticleEmitter, Population, PopulationCounts, ProgressMeter};
use crate::error::Result;
use crate::export::{
    write_rendered, ParticleWriter, TemplateSet, TemplateValues, DEFAULT_PARTICLE_FILE,
};
use crate::state::CaseState;

const PARTICLE_FILE_TITLE: &str = "2D boundary layer channel, initial particle field";

/// Where templates are read from and outputs are written to
#[derive(Debug, Clone)]
pub struct GeneratorOptions {
    pub template_dir: PathBuf,
    pub output_dir: PathBuf,
    pub particle_file: String,
}

impl Default for GeneratorOptions {
    fn default() -> Self {
        Self {
            template_dir: PathBuf::from("templates"),
            output_dir: PathBuf::from("."),
            particle_file: DEFAULT_PARTICLE_FILE.to_owned(),
        }
    }
}

/// What a run produced
#[derive(Debug, Clone)]
pub struct GenerationSummary {
    pub counts: PopulationCounts,
    pub particle_path: PathBuf,
    pub template_paths: Vec<PathBuf>,
    /// Placeholder values the templates were rendered with
    pub values: TemplateValues,
}

/// Generator for one resolved case
pub struct FieldGenerator {
    pub case: CaseState,
    pub options: GeneratorOptions,
}

impl FieldGenerator {
    /// Resolve `params`; fails before touching the filesystem
    pub fn new(params: &CaseParameters, options: GeneratorOptions) -> Result<Self> {
        Ok(Self {
            case: CaseState::resolve(params)?,
            options,
        })
    }

    /// Emit every population into `sink`, in order, and return the sink
    pub fn write_particles<W: Write>(&self, sink: W) -> Result<(PopulationCounts, W)> {
        let mut writer = ParticleWriter::from_writer(sink);
        let counts = self.emit_into(&mut writer)?;
        let (_, sink) = writer.finish()?;
        Ok((counts, sink))
    }

    fn emit_into<W: Write>(&self, writer: &mut ParticleWriter<W>) -> Result<PopulationCounts> {
        let emitter = ParticleEmitter::new(&self.case);
        writer.write_header(PARTICLE_FILE_TITLE)?;

        let mut counts = PopulationCounts::default();
        for population in Population::ALL {
            log::info!("Writing {}...", population.label());
            let mut progress = ProgressMeter::new(emitter.len(population));
            progress.update(0);

            let mut written = 0;
            for particle in emitter.population(population) {
                writer.write(&particle)?;
                written += 1;
                progress.update(written);
            }
            counts.add(population, written);
        }

        debug_assert_eq!(writer.count(), counts.total());
        Ok(counts)
    }

    /// Run the whole generation into the configured directories
    pub fn run(&self) -> Result<GenerationSummary> {
        let templates = TemplateSet::load(&self.options.template_dir)?;

        std::fs::create_dir_all(&self.options.output_dir)?;
        let particle_path = self.options.output_dir.join(&self.options.particle_file);
        let mut writer = ParticleWriter::create(&particle_path)?;
        let counts = self.emit_into(&mut writer)?;
        // The file is closed before its count is used
        let (_, file) = writer.finish()?;
        drop(file);

        let values = TemplateValues::from_case(&self.case, counts.total());
        let rendered = templates.render(&values);
        let template_paths = write_rendered(&self.options.output_dir, &rendered)?;

        Ok(GenerationSummary {
            counts,
            particle_path,
            template_paths,
            values,
        })
    }
}
