//! Command-line entry point: import a model file and pack it into the flat
//! binary layout.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::process::ExitCode;

use meshpack::export::write_flat_model;
use meshpack::flatten::flatten;
use meshpack::resources::{ImportOptions, import_scene};

const USAGE: &str = "\
Usage: meshpack --source <model> --out <file>

Allowed options:
  --help             show this help message
  --source <path>    file to be imported
  --out <path>       exported file name";

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args: Vec<String> = std::env::args().collect();

    if args.iter().any(|arg| arg == "--help") {
        println!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    let source = flag_value(&args, "--source");
    let out = flag_value(&args, "--out");

    let mut incomplete_arguments = false;
    if source.is_none() {
        incomplete_arguments = true;
        println!("Source was not set.");
    }
    if out.is_none() {
        incomplete_arguments = true;
        println!("Output was not set.");
    }
    if incomplete_arguments {
        return ExitCode::from(2);
    }
    let (source, out) = (source.unwrap(), out.unwrap());

    // The output is created (and truncated) before the import runs, so a
    // failed import leaves an empty file behind rather than stale data.
    let output_file = match File::create(&out) {
        Ok(file) => file,
        Err(e) => {
            println!("Could not open output file {out}: {e}");
            return ExitCode::FAILURE;
        }
    };

    let scene = match import_scene(Path::new(&source), &ImportOptions::default()) {
        Ok(scene) => scene,
        Err(e) => {
            println!("Failed to load model. Import error: {e:#}");
            return ExitCode::FAILURE;
        }
    };

    let (flat, stats) = flatten(&scene);

    log::info!("Vertex count: {}", flat.vertices.len());
    log::info!("Index count: {}", flat.indices.len());
    log::info!("Meshes: {}", flat.meshes.len());
    if stats.skipped_faces > 0 {
        log::warn!("Skipped {} non-triangle faces.", stats.skipped_faces);
    }
    if stats.defaulted_materials > 0 {
        log::warn!(
            "{} meshes had no resolvable diffuse colour and default to black.",
            stats.defaulted_materials
        );
    }

    let mut writer = BufWriter::new(output_file);
    if let Err(e) = write_flat_model(&mut writer, &flat).and_then(|_| writer.flush()) {
        println!("Failed to write {out}: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}

fn flag_value(args: &[String], flag: &str) -> Option<String> {
    args.iter()
        .position(|arg| arg == flag)
        .and_then(|position| args.get(position + 1))
        .cloned()
}
