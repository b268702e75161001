//! The resolved run configuration.

use crate::cli::Cli;
use crate::shapes::Canvas;
use serde::Serialize;
use std::path::PathBuf;

pub const DEFAULT_WIDTH: u32 = 500;
pub const DEFAULT_HEIGHT: u32 = 500;
pub const DEFAULT_SHAPES: u32 = 7;
pub const DEFAULT_FILES: u32 = 1;
pub const DEFAULT_OUTPUT: &str = "./output";

/// Built once from the command line and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Config {
    pub width: u32,
    pub height: u32,
    pub shape_count: u32,
    pub file_count: u32,
    pub output: PathBuf,
    pub seed: Option<u64>,
}

impl Config {
    pub fn canvas(&self) -> Canvas {
        Canvas::new(self.width, self.height)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            shape_count: DEFAULT_SHAPES,
            file_count: DEFAULT_FILES,
            output: PathBuf::from(DEFAULT_OUTPUT),
            seed: None,
        }
    }
}

impl From<&Cli> for Config {
    fn from(cli: &Cli) -> Self {
        Self {
            width: cli.width,
            height: cli.height,
            shape_count: cli.shapes,
            file_count: cli.files,
            output: cli.output.clone(),
            seed: cli.seed,
        }
    }
}
