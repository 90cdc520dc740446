//! SPH Field Init - Entry point
//!
//! Generates the initial particle field and XML case files of the 2D
//! boundary-layer channel.
//!
//! CLI Usage:
//!   cargo run                                  # Default case, ./templates -> .
//!   cargo run -- -c case.json -t tpl -o out   # Custom case and directories
//!   cargo run -- --print-defaults > case.json  # Dump the default parameters

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use sph_field_init::{
    config::{CaseParameters, DEFAULT_CASE_FILE},
    export::{export_manifest_json, RunManifest, DEFAULT_PARTICLE_FILE, MANIFEST_FILE},
    FieldGenerator, GeneratorOptions, Population,
};

/// Parsed command line
struct CliArgs {
    config: Option<PathBuf>,
    options: GeneratorOptions,
    manifest: bool,
    print_defaults: bool,
}

/// Parse CLI arguments
fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut cli = CliArgs {
        config: None,
        options: GeneratorOptions::default(),
        manifest: false,
        print_defaults: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-c" | "--config" => {
                i += 1;
                if i < args.len() {
                    cli.config = Some(PathBuf::from(&args[i]));
                }
            }
            "-t" | "--templates" => {
                i += 1;
                if i < args.len() {
                    cli.options.template_dir = PathBuf::from(&args[i]);
                }
            }
            "-o" | "--output-dir" => {
                i += 1;
                if i < args.len() {
                    cli.options.output_dir = PathBuf::from(&args[i]);
                }
            }
            "-p" | "--particles" => {
                i += 1;
                if i < args.len() {
                    cli.options.particle_file = args[i].clone();
                }
            }
            "-m" | "--manifest" => cli.manifest = true,
            "--print-defaults" => cli.print_defaults = true,
            "--help" | "-h" => {
                println!("SPH Field Init");
                println!();
                println!("Usage: sph-field-init [OPTIONS]");
                println!();
                println!("Options:");
                println!(
                    "  -c, --config FILE      Case parameters (default: {} if present)",
                    DEFAULT_CASE_FILE
                );
                println!("  -t, --templates DIR    XML template directory (default: templates)");
                println!("  -o, --output-dir DIR   Output directory (default: .)");
                println!(
                    "  -p, --particles NAME   Particle file name (default: {})",
                    DEFAULT_PARTICLE_FILE
                );
                println!("  -m, --manifest         Also write {}", MANIFEST_FILE);
                println!("  --print-defaults       Print the default case parameters as JSON");
                println!("  --help, -h             Show this help");
                std::process::exit(0);
            }
            other => log::warn!("Ignoring unknown argument {:?}", other),
        }
        i += 1;
    }

    cli
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = parse_args();

    if cli.print_defaults {
        println!("{}", serde_json::to_string_pretty(&CaseParameters::default())?);
        return Ok(());
    }

    let params = match &cli.config {
        Some(path) => CaseParameters::load(path)
            .with_context(|| format!("loading case parameters from {}", path.display()))?,
        None => CaseParameters::load_or_default()
            .with_context(|| format!("loading case parameters from {}", DEFAULT_CASE_FILE))?,
    };

    let start_time = Instant::now();
    let generator = FieldGenerator::new(&params, cli.options.clone())
        .context("resolving case parameters")?;
    let summary = generator.run().context("generating case files")?;
    let elapsed = start_time.elapsed();

    println!("\n=== Results ===");
    for population in Population::ALL {
        println!("{:>18}: {}", population.label(), summary.counts.get(population));
    }
    println!("{:>18}: {}", "total", summary.counts.total());
    println!("Particle file: {}", summary.particle_path.display());
    for path in &summary.template_paths {
        println!("Case file: {}", path.display());
    }
    println!("Elapsed time: {:.2?}", elapsed);

    if cli.manifest {
        let manifest = RunManifest::new(
            &generator.case,
            summary.counts,
            summary.particle_path.clone(),
            summary.template_paths.clone(),
            summary.values.clone(),
        );
        let path = cli.options.output_dir.join(MANIFEST_FILE);
        export_manifest_json(&manifest, &path)?;
    }

    Ok(())
}
