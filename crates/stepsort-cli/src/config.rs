//! CLI configuration

use serde::{Deserialize, Serialize};
use std::path::Path;
use stepsort::EngineConfig;

use crate::error::{CliError, CliResult};

/// CLI verbosity level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Verbosity {
    /// Quiet - minimal output
    Quiet,
    /// Normal - default output
    #[default]
    Normal,
    /// Verbose - extra output
    Verbose,
    /// Debug - maximum output
    Debug,
}

impl Verbosity {
    /// Map `-q` and the `-v` count to a level; quiet wins
    #[must_use]
    pub const fn from_flags(quiet: bool, verbose: u8) -> Self {
        if quiet {
            return Self::Quiet;
        }
        match verbose {
            0 => Self::Normal,
            1 => Self::Verbose,
            _ => Self::Debug,
        }
    }

    /// Check if quiet mode
    #[must_use]
    pub const fn is_quiet(self) -> bool {
        matches!(self, Self::Quiet)
    }

    /// Check if verbose or higher
    #[must_use]
    pub const fn is_verbose(self) -> bool {
        matches!(self, Self::Verbose | Self::Debug)
    }

    /// Default log filter when `RUST_LOG` is unset
    #[must_use]
    pub const fn filter_directive(self) -> &'static str {
        match self {
            Self::Quiet => "error",
            Self::Normal => "warn",
            Self::Verbose => "info",
            Self::Debug => "debug",
        }
    }
}

/// Color output choice
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ColorChoice {
    /// Always use colors
    Always,
    /// Use colors when output is a terminal
    #[default]
    Auto,
    /// Never use colors
    Never,
}

impl ColorChoice {
    /// Should use colors based on output detection
    #[must_use]
    pub fn should_color(self) -> bool {
        match self {
            Self::Always => true,
            Self::Never => false,
            Self::Auto => std::io::IsTerminal::is_terminal(&std::io::stdout()),
        }
    }
}

/// CLI configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CliConfig {
    /// Verbosity level
    pub verbosity: Verbosity,
    /// Color output choice
    pub color: ColorChoice,
    /// Engine bounds and defaults
    pub engine: EngineConfig,
}

impl CliConfig {
    /// Create new default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set verbosity
    #[must_use]
    pub const fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }

    /// Set color choice
    #[must_use]
    pub const fn with_color(mut self, color: ColorChoice) -> Self {
        self.color = color;
        self
    }

    /// Load the engine configuration from a JSON or YAML file
    pub fn load_engine(mut self, path: &Path) -> CliResult<Self> {
        self.engine = EngineConfig::from_path(path)
            .map_err(|e| CliError::config(format!("{}: {e}", path.display())))?;
        Ok(self)
    }

    /// Engine configuration with command-line overrides applied.
    ///
    /// Item counts and cadence are clamped to the configured bounds rather
    /// than rejected.
    #[must_use]
    pub fn engine_with(
        &self,
        items: Option<usize>,
        frames_per_op: Option<u32>,
        seed: Option<u64>,
    ) -> EngineConfig {
        let mut engine = self.engine.clone();
        if let Some(items) = items {
            engine.default_items = engine.clamp_items(items);
        }
        if let Some(frames) = frames_per_op {
            engine.default_frames_per_op = engine.clamp_frames_per_op(frames);
        }
        if let Some(seed) = seed {
            engine.seed = Some(seed);
        }
        engine
    }

    /// Whether to use colors
    #[must_use]
    pub fn use_color(&self) -> bool {
        self.color.should_color()
    }
}
