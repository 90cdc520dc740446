//! Export functionality for generated cases.
//!
//! Provides the particle text file, XML template rendering and the JSON run
//! manifest.

mod json_export;
mod particle_file;
mod templates;

pub use json_export::{export_manifest_json, DerivedQuantities, RunManifest, MANIFEST_FILE};
pub use particle_file::{
    format_float, format_particle, parse_particle_line, ParticleLine, ParticleWriter,
    DEFAULT_PARTICLE_FILE,
};
pub use templates::{write_rendered, Template, TemplateSet, TemplateValues, TEMPLATE_FILES};
