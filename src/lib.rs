//! The main library for the `random-poly` application.
//!
//! This crate generates SVG images made of randomly placed, colored and sized
//! shapes and writes them to an output directory. The primary entry point is the
//! `run` function, which takes the parsed CLI arguments and executes the whole
//! generation process.
//!
//! The library is structured into several modules:
//! - `cli`: Defines the command-line interface.
//! - `config`: The resolved configuration, built once from the CLI.
//! - `random`: Injectable random source and the color/opacity primitives.
//! - `shapes`: The circle, rectangle, polygon and path generators.
//! - `document`: Assembles shapes into a complete SVG document.
//! - `error`: Defines the application's custom error type.

use anyhow::{Context, Result};
use console::style;
use std::fs;
use std::path::{Path, PathBuf};

pub mod cli;
pub mod config;
pub mod document;
pub mod error;
pub mod random;
pub mod shapes;

use crate::cli::Cli;
use crate::config::Config;
use crate::document::Document;
use crate::error::AppError;
use crate::random::{RandomSource, RngSource};

/// The main entry point for the application logic.
///
/// This function orchestrates the entire process:
/// 1.  It resolves the configuration and picks a seeded or entropy-backed random source.
/// 2.  It makes sure the output directory exists.
/// 3.  It writes `files` documents, reporting each one on the console.
///
/// # Errors
///
/// Returns an error on the first filesystem failure. Files already written are kept.
pub fn run(cli: &Cli) -> Result<()> {
    let config = Config::from(cli);
    tracing::debug!(
        config = %serde_json::to_string(&config).context("Failed to serialize configuration")?,
        "resolved configuration"
    );

    let mut rng = match config.seed {
        Some(seed) => RngSource::seeded(seed),
        None => RngSource::from_entropy(),
    };

    if ensure_output_dir(&config.output)? {
        println!(
            "{}",
            style(format!("Created output directory: {}", config.output.display())).green()
        );
    }

    let written = generate_files(&config, &mut rng)
        .with_context(|| format!("Failed to generate files in {}", config.output.display()))?;

    println!(
        "\n{}",
        style(format!("Successfully generated {} SVG files!", written.len()))
            .green()
            .bold()
    );
    Ok(())
}

/// Creates `dir` (and any missing parents) if it does not exist yet.
///
/// Returns `true` when the directory was created by this call.
pub fn ensure_output_dir(dir: &Path) -> Result<bool, AppError> {
    if dir.is_dir() {
        return Ok(false);
    }
    fs::create_dir_all(dir).map_err(|source| AppError::CreateOutputDir {
        path: dir.to_path_buf(),
        source,
    })?;
    tracing::info!(dir = %dir.display(), "created output directory");
    Ok(true)
}

/// Composes and writes `config.file_count` documents into `config.output`.
///
/// Files are numbered from 1. The output directory must already exist.
pub fn generate_files(config: &Config, rng: &mut impl RandomSource) -> Result<Vec<PathBuf>, AppError> {
    let mut written = Vec::with_capacity(config.file_count as usize);
    for index in 1..=config.file_count {
        let document = Document::compose(config.canvas(), config.shape_count, rng);
        let path = output_file_path(&config.output, index);
        fs::write(&path, document.to_string()).map_err(|source| AppError::WriteFile {
            path: path.clone(),
            source,
        })?;

        tracing::debug!(path = %path.display(), shapes = document.shapes.len(), "wrote document");
        println!("{}", style(format!("Generated {}", path.display())).blue());
        written.push(path);
    }
    Ok(written)
}

/// Path of the `index`-th generated file, e.g. `output/random-poly-1.svg`.
pub fn output_file_path(dir: &Path, index: u32) -> PathBuf {
    dir.join(format!("random-poly-{index}.svg"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    #[test]
    fn files_are_numbered_from_one() {
        assert_eq!(
            output_file_path(Path::new("out"), 1),
            PathBuf::from("out").join("random-poly-1.svg")
        );
        assert_eq!(
            output_file_path(Path::new("a/b"), 12),
            PathBuf::from("a/b").join("random-poly-12.svg")
        );
    }

    #[test]
    fn output_dir_is_created_once() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("nested").join("out");
        assert!(ensure_output_dir(&dir).unwrap());
        assert!(dir.is_dir());
        assert!(!ensure_output_dir(&dir).unwrap());
    }

    #[test]
    fn output_dir_under_a_file_fails() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("blocker");
        fs::write(&blocker, "not a directory").unwrap();
        let err = ensure_output_dir(&blocker.join("out")).unwrap_err();
        assert!(matches!(err, AppError::CreateOutputDir { .. }));
    }

    #[test]
    fn generates_requested_number_of_files() {
        let tmp = TempDir::new().unwrap();
        let config = Config {
            width: 200,
            height: 200,
            shape_count: 3,
            file_count: 2,
            output: tmp.path().to_path_buf(),
            seed: None,
        };
        let written = generate_files(&config, &mut RngSource::seeded(1)).unwrap();
        assert_eq!(
            written,
            vec![
                tmp.path().join("random-poly-1.svg"),
                tmp.path().join("random-poly-2.svg"),
            ]
        );
        for path in written {
            let svg = fs::read_to_string(path).unwrap();
            assert!(svg.starts_with(r#"<svg width="200" height="200" viewBox="0 0 200 200""#));
        }
    }

    #[test]
    fn write_failure_is_reported_with_path() {
        let tmp = TempDir::new().unwrap();
        let config = Config {
            output: tmp.path().join("missing"),
            ..Config::default()
        };
        let err = generate_files(&config, &mut RngSource::seeded(1)).unwrap_err();
        match err {
            AppError::WriteFile { path, .. } => {
                assert_eq!(path, tmp.path().join("missing").join("random-poly-1.svg"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
