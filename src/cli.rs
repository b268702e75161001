use clap::Parser;
use std::path::PathBuf;

use crate::config::{DEFAULT_FILES, DEFAULT_HEIGHT, DEFAULT_OUTPUT, DEFAULT_SHAPES, DEFAULT_WIDTH};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "A tool to generate random SVG images made of circles, rectangles, polygons and paths.",
    // `-h` is taken by --height.
    disable_help_flag = true
)]
pub struct Cli {
    /// SVG width.
    #[arg(short, long, value_name = "NUMBER", default_value_t = DEFAULT_WIDTH,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub width: u32,

    /// SVG height.
    #[arg(short = 'h', long, value_name = "NUMBER", default_value_t = DEFAULT_HEIGHT,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub height: u32,

    /// Number of shapes per SVG.
    #[arg(short, long, value_name = "NUMBER", default_value_t = DEFAULT_SHAPES)]
    pub shapes: u32,

    /// Number of files to generate.
    #[arg(short, long, value_name = "NUMBER", default_value_t = DEFAULT_FILES,
          value_parser = clap::value_parser!(u32).range(1..))]
    pub files: u32,

    /// Output directory.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Seed for the random generator, for reproducible output.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print debug info about the resolved configuration and chosen shapes
    #[arg(long, default_value_t = false)]
    pub debug: bool,

    /// Print help
    #[arg(long, action = clap::ArgAction::Help)]
    pub help: Option<bool>,
}
