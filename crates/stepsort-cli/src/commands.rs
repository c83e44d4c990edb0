//! CLI command definitions using clap

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use stepsort::Algorithm;

/// Stepsort: step classical sorting algorithms one operation at a time
#[derive(Parser, Debug)]
#[command(name = "stepsort")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Color output (auto, always, never)
    #[arg(long, default_value = "auto", global = true)]
    pub color: ColorArg,

    /// Engine configuration file (JSON or YAML)
    #[arg(short, long, global = true, env = "STEPSORT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the registered algorithms
    List(ListArgs),

    /// Sort one shuffled sequence to completion
    Run(RunArgs),

    /// Run every algorithm on the same input
    Compare(CompareArgs),
}

/// Arguments for the list command
#[derive(Parser, Debug)]
pub struct ListArgs {
    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: FormatArg,
}

/// Arguments for the run command
#[derive(Parser, Debug)]
pub struct RunArgs {
    /// Algorithm key or name (see `stepsort list`)
    #[arg(short, long, value_parser = parse_algorithm)]
    pub algorithm: Option<Algorithm>,

    /// Number of items to sort
    #[arg(short = 'n', long)]
    pub items: Option<usize>,

    /// Shuffle seed for reproducible runs
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Frames between operations (0 = sort in a single frame)
    #[arg(long)]
    pub frames_per_op: Option<u32>,

    /// Print the sequence after every operation
    #[arg(long)]
    pub steps: bool,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: FormatArg,
}

/// Arguments for the compare command
#[derive(Parser, Debug)]
pub struct CompareArgs {
    /// Number of items to sort
    #[arg(short = 'n', long)]
    pub items: Option<usize>,

    /// Shuffle seed shared by every algorithm
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub format: FormatArg,
}

/// Output format argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum FormatArg {
    /// Human-readable text
    #[default]
    Text,
    /// JSON output
    Json,
}

impl From<FormatArg> for crate::output::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Color argument
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ColorArg {
    /// Automatic color detection
    #[default]
    Auto,
    /// Always use colors
    Always,
    /// Never use colors
    Never,
}

impl From<ColorArg> for crate::config::ColorChoice {
    fn from(arg: ColorArg) -> Self {
        match arg {
            ColorArg::Auto => Self::Auto,
            ColorArg::Always => Self::Always,
            ColorArg::Never => Self::Never,
        }
    }
}

fn parse_algorithm(value: &str) -> Result<Algorithm, String> {
    value.parse().map_err(|e: stepsort::SortError| e.to_string())
}
