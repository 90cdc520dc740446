//! XML case templates for the solver.
//!
//! Templates carry `{{KEY}}` placeholders. Every occurrence of a known key is
//! replaced by the decimal form of the resolved value; unknown placeholders
//! are left as they are.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{GenerationError, Result};
use crate::export::particle_file::format_float;
use crate::state::CaseState;

/// Template files the solver case is made of
pub const TEMPLATE_FILES: [&str; 5] = [
    "Fluids.xml",
    "Main.xml",
    "Settings.xml",
    "SPH.xml",
    "Time.xml",
];

/// Placeholder values keyed by name (`DR`, `N`, ...)
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct TemplateValues {
    values: BTreeMap<&'static str, String>,
}

impl TemplateValues {
    /// Values for a resolved case that produced `n` particles
    pub fn from_case(case: &CaseState, n: usize) -> Self {
        let params = &case.params;
        let numerics = &params.numerics;
        let mut values = Self::default();

        values.insert("DR", format_float(case.discretization.dr));
        values.insert("HFAC", format_float(numerics.hfac));
        values.insert("CS", format_float(params.sound_speed()));
        values.insert("COURANT", format_float(numerics.courant));
        values.insert(
            "DOMAIN_MIN",
            format!("{}, {}", format_float(case.domain.min.x), format_float(case.domain.min.y)),
        );
        values.insert(
            "DOMAIN_MAX",
            format!("{}, {}", format_float(case.domain.max.x), format_float(case.domain.max.y)),
        );
        values.insert("REFD", format_float(params.flow.reference_density));
        values.insert("VISC_DYN", format_float(case.viscosity));
        values.insert("DELTA", format_float(numerics.delta));
        values.insert("G", format_float(params.flow.gravity));
        values.insert("N", n.to_string());
        values.insert("NY", params.channel.ny.to_string());
        values.insert("L", format_float(params.channel.length));
        values.insert("H", format_float(params.channel_height()));
        values.insert("Y", format_float(params.boundary_layer_thickness()));
        values.insert("U", format_float(params.flow.inflow_speed));
        values.insert("P0", format_float(params.background_pressure()));
        values.insert("COURANT_RAMP_ITERS", numerics.courant_ramp_iters.to_string());
        values.insert("COURANT_RAMP_FACTOR", format_float(numerics.courant_ramp_factor));

        values
    }

    pub fn insert(&mut self, key: &'static str, value: String) {
        self.values.insert(key, value);
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Replace every `{{KEY}}` of a known key in `text`
    pub fn substitute(&self, text: &str) -> String {
        let mut out = text.to_owned();
        for (key, value) in &self.values {
            let token = format!("{{{{{}}}}}", key);
            if out.contains(&token) {
                out = out.replace(&token, value);
            }
        }
        out
    }
}

/// A template loaded into memory
#[derive(Debug, Clone, PartialEq)]
pub struct Template {
    pub name: String,
    pub contents: String,
}

/// The full set of case templates
#[derive(Debug, Clone)]
pub struct TemplateSet {
    templates: Vec<Template>,
}

impl TemplateSet {
    /// Load the standard case templates from `dir`
    pub fn load<P: AsRef<Path>>(dir: P) -> Result<Self> {
        Self::load_named(dir, &TEMPLATE_FILES)
    }

    /// Load the given templates from `dir`; all of them must exist
    pub fn load_named<P: AsRef<Path>>(dir: P, names: &[&str]) -> Result<Self> {
        let dir = dir.as_ref();
        let mut templates = Vec::with_capacity(names.len());
        for name in names {
            let path = dir.join(name);
            if !path.is_file() {
                return Err(GenerationError::MissingTemplate(path));
            }
            let contents = std::fs::read_to_string(&path)?;
            templates.push(Template {
                name: (*name).to_owned(),
                contents,
            });
        }
        log::info!("Loaded {} templates from {}", templates.len(), dir.display());
        Ok(Self { templates })
    }

    pub fn templates(&self) -> &[Template] {
        &self.templates
    }

    /// Substitute values into every template, in memory
    pub fn render(&self, values: &TemplateValues) -> Vec<Template> {
        self.templates
            .iter()
            .map(|t| Template {
                name: t.name.clone(),
                contents: values.substitute(&t.contents),
            })
            .collect()
    }
}

/// Write rendered templates into `dir` under their own names
pub fn write_rendered<P: AsRef<Path>>(dir: P, rendered: &[Template]) -> Result<Vec<PathBuf>> {
    let dir = dir.as_ref();
    let mut paths = Vec::with_capacity(rendered.len());
    for template in rendered {
        let path = dir.join(&template.name);
        std::fs::write(&path, &template.contents)?;
        log::info!("Wrote {}", path.display());
        paths.push(path);
    }
    Ok(paths)
}
