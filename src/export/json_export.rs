//! JSON run manifest.
//!
//! Records what a run produced next to its output files. The timestamp
//! makes it differ between runs; the particle and XML files do not.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::Local;
use glam::DVec2;
use serde::Serialize;

use crate::config::CaseParameters;
use crate::emitter::PopulationCounts;
use crate::export::templates::TemplateValues;
use crate::state::CaseState;

/// Default manifest file name
pub const MANIFEST_FILE: &str = "generation.json";

/// Quantities derived from the case parameters
#[derive(Debug, Clone, Serialize)]
pub struct DerivedQuantities {
    pub dr: f64,
    pub h: f64,
    pub sound_speed: f64,
    pub background_pressure: f64,
    pub channel_height: f64,
    pub boundary_layer_thickness: f64,
    pub dynamic_viscosity: f64,
    pub domain_min: DVec2,
    pub domain_max: DVec2,
    pub buffer_columns: usize,
    pub buffer_rows: usize,
}

impl From<&CaseState> for DerivedQuantities {
    fn from(case: &CaseState) -> Self {
        Self {
            dr: case.discretization.dr,
            h: case.discretization.h,
            sound_speed: case.params.sound_speed(),
            background_pressure: case.params.background_pressure(),
            channel_height: case.params.channel_height(),
            boundary_layer_thickness: case.params.boundary_layer_thickness(),
            dynamic_viscosity: case.viscosity,
            domain_min: case.domain.min,
            domain_max: case.domain.max,
            buffer_columns: case.buffer.columns,
            buffer_rows: case.buffer.rows,
        }
    }
}

/// Full manifest structure
#[derive(Debug, Clone, Serialize)]
pub struct RunManifest {
    /// Export timestamp
    pub exported_at: String,
    /// Export version for compatibility
    pub version: &'static str,
    /// Input parameters
    pub parameters: CaseParameters,
    pub derived: DerivedQuantities,
    /// Particles per population
    pub counts: PopulationCounts,
    /// Total particles written
    pub total_particles: usize,
    pub particle_file: PathBuf,
    pub templates: Vec<PathBuf>,
    /// Placeholder text substituted into the templates
    pub template_values: TemplateValues,
}

impl RunManifest {
    pub fn new(
        case: &CaseState,
        counts: PopulationCounts,
        particle_file: PathBuf,
        templates: Vec<PathBuf>,
        template_values: TemplateValues,
    ) -> Self {
        Self {
            exported_at: Local::now().to_rfc3339(),
            version: env!("CARGO_PKG_VERSION"),
            parameters: case.params.clone(),
            derived: DerivedQuantities::from(case),
            counts,
            total_particles: counts.total(),
            particle_file,
            templates,
            template_values,
        }
    }
}

/// Export the manifest to a specific file
pub fn export_manifest_json(manifest: &RunManifest, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    serde_json::to_writer_pretty(file, manifest)?;

    log::info!("Run manifest exported: {}", path.display());
    Ok(())
}
