//! Engine configuration.
//!
//! Clamp bounds and start-up defaults for the [`Driver`](crate::Driver).
//! Loadable from JSON or YAML; every field has a default so partial documents
//! are accepted.

use crate::algorithms::Algorithm;
use crate::result::{SortError, SortResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Smallest accepted item count
pub const MIN_ITEMS: usize = 3;
/// Largest accepted item count
pub const MAX_ITEMS: usize = 500;
/// Item count used when nothing else is configured
pub const DEFAULT_ITEMS: usize = 20;
/// Fastest cadence; 0 drains the machine in a single tick
pub const MIN_FRAMES_PER_OP: u32 = 0;
/// Slowest cadence
pub const MAX_FRAMES_PER_OP: u32 = 100;
/// Cadence used when nothing else is configured
pub const DEFAULT_FRAMES_PER_OP: u32 = 10;

/// Bounds and defaults for a sorting session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Lower clamp for item counts
    pub min_items: usize,
    /// Upper clamp for item counts
    pub max_items: usize,
    /// Item count used on construction
    pub default_items: usize,
    /// Lower clamp for frames per operation
    pub min_frames_per_op: u32,
    /// Upper clamp for frames per operation
    pub max_frames_per_op: u32,
    /// Frames per operation used on construction
    pub default_frames_per_op: u32,
    /// Algorithm selected on construction
    pub algorithm: Algorithm,
    /// Shuffle seed; OS entropy when absent
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            min_items: MIN_ITEMS,
            max_items: MAX_ITEMS,
            default_items: DEFAULT_ITEMS,
            min_frames_per_op: MIN_FRAMES_PER_OP,
            max_frames_per_op: MAX_FRAMES_PER_OP,
            default_frames_per_op: DEFAULT_FRAMES_PER_OP,
            algorithm: Algorithm::Bubble,
            seed: None,
        }
    }
}

impl EngineConfig {
    /// Create the default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the initial item count
    #[must_use]
    pub const fn with_items(mut self, items: usize) -> Self {
        self.default_items = items;
        self
    }

    /// Set the item count clamp range
    #[must_use]
    pub const fn with_item_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_items = min;
        self.max_items = max;
        self
    }

    /// Set the initial frames per operation
    #[must_use]
    pub const fn with_frames_per_op(mut self, frames: u32) -> Self {
        self.default_frames_per_op = frames;
        self
    }

    /// Set the initial algorithm
    #[must_use]
    pub const fn with_algorithm(mut self, algorithm: Algorithm) -> Self {
        self.algorithm = algorithm;
        self
    }

    /// Fix the shuffle seed
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Clamp an item count into `[min_items, max_items]`
    #[must_use]
    pub fn clamp_items(&self, items: usize) -> usize {
        items.clamp(self.min_items, self.max_items)
    }

    /// Clamp a cadence into `[min_frames_per_op, max_frames_per_op]`
    #[must_use]
    pub fn clamp_frames_per_op(&self, frames: u32) -> u32 {
        frames.clamp(self.min_frames_per_op, self.max_frames_per_op)
    }

    /// Check that the bounds are ordered and the defaults lie within them
    ///
    /// # Errors
    /// Returns [`SortError::InvalidConfig`] naming the first offending field
    pub fn validate(&self) -> SortResult<()> {
        if self.min_items > self.max_items {
            return Err(SortError::invalid_config(format!(
                "min_items ({}) exceeds max_items ({})",
                self.min_items, self.max_items
            )));
        }
        if !(self.min_items..=self.max_items).contains(&self.default_items) {
            return Err(SortError::invalid_config(format!(
                "default_items ({}) must be between {} and {}",
                self.default_items, self.min_items, self.max_items
            )));
        }
        if self.min_frames_per_op > self.max_frames_per_op {
            return Err(SortError::invalid_config(format!(
                "min_frames_per_op ({}) exceeds max_frames_per_op ({})",
                self.min_frames_per_op, self.max_frames_per_op
            )));
        }
        if !(self.min_frames_per_op..=self.max_frames_per_op).contains(&self.default_frames_per_op)
        {
            return Err(SortError::invalid_config(format!(
                "default_frames_per_op ({}) must be between {} and {}",
                self.default_frames_per_op, self.min_frames_per_op, self.max_frames_per_op
            )));
        }
        Ok(())
    }

    /// Load configuration from a JSON string
    ///
    /// # Errors
    /// Returns error if JSON parsing fails
    pub fn from_json(json: &str) -> SortResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load configuration from a YAML string
    ///
    /// # Errors
    /// Returns error if YAML parsing fails
    pub fn from_yaml(yaml: &str) -> SortResult<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Load and validate a configuration file.
    ///
    /// `.json` files are parsed as JSON; anything else as YAML.
    ///
    /// # Errors
    /// Returns error if the file cannot be read, parsed or validated
    pub fn from_path(path: impl AsRef<Path>) -> SortResult<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let config = if is_json {
            Self::from_json(&text)?
        } else {
            Self::from_yaml(&text)?
        };
        config.validate()?;
        tracing::debug!(path = %path.display(), "loaded engine config");
        Ok(config)
    }

    /// Serialize to pretty JSON
    ///
    /// # Errors
    /// Returns error if serialization fails
    pub fn to_json(&self) -> SortResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use std::io::Write;

    // ===== Default tests =====

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.min_items, 3);
        assert_eq!(config.max_items, 500);
        assert_eq!(config.default_items, 20);
        assert_eq!(config.default_frames_per_op, 10);
        assert_eq!(config.max_frames_per_op, 100);
        assert_eq!(config.algorithm, Algorithm::Bubble);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let config = EngineConfig::new()
            .with_items(64)
            .with_frames_per_op(0)
            .with_algorithm(Algorithm::Heap)
            .with_seed(7);
        assert_eq!(config.default_items, 64);
        assert_eq!(config.default_frames_per_op, 0);
        assert_eq!(config.algorithm, Algorithm::Heap);
        assert_eq!(config.seed, Some(7));
    }

    // ===== Clamp tests =====

    #[test]
    fn test_clamp_items() {
        let config = EngineConfig::default();
        assert_eq!(config.clamp_items(0), 3);
        assert_eq!(config.clamp_items(42), 42);
        assert_eq!(config.clamp_items(10_000), 500);
    }

    #[test]
    fn test_clamp_frames() {
        let config = EngineConfig::default();
        assert_eq!(config.clamp_frames_per_op(0), 0);
        assert_eq!(config.clamp_frames_per_op(250), 100);
    }

    // ===== Validation tests =====

    #[test]
    fn test_inverted_item_bounds_rejected() {
        let config = EngineConfig::default().with_item_bounds(10, 5);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("min_items"));
    }

    #[test]
    fn test_default_items_out_of_range_rejected() {
        let config = EngineConfig::default().with_items(1000);
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("default_items"));
    }

    #[test]
    fn test_default_frames_out_of_range_rejected() {
        let config = EngineConfig::default().with_frames_per_op(101);
        assert!(matches!(
            config.validate(),
            Err(SortError::InvalidConfig { .. })
        ));
    }

    // ===== Parsing tests =====

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = EngineConfig::from_json(r#"{"default_items": 50, "algorithm": "radix"}"#)
            .unwrap();
        assert_eq!(config.default_items, 50);
        assert_eq!(config.algorithm, Algorithm::Radix);
        assert_eq!(config.max_items, 500);
    }

    #[test]
    fn test_yaml() {
        let config = EngineConfig::from_yaml("seed: 99\nalgorithm: simple_quick\n").unwrap();
        assert_eq!(config.seed, Some(99));
        assert_eq!(config.algorithm, Algorithm::SimpleQuick);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = EngineConfig::from_json("{not json").unwrap_err();
        assert!(matches!(err, SortError::ConfigParse { .. }));
    }

    #[test]
    fn test_json_roundtrip() {
        let config = EngineConfig::default().with_seed(3);
        let parsed = EngineConfig::from_json(&config.to_json().unwrap()).unwrap();
        assert_eq!(parsed, config);
    }

    // ===== File tests =====

    #[test]
    fn test_from_path_json() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"{{"default_items": 8}}"#).unwrap();
        let config = EngineConfig::from_path(file.path()).unwrap();
        assert_eq!(config.default_items, 8);
    }

    #[test]
    fn test_from_path_yaml() {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        writeln!(file, "default_frames_per_op: 0").unwrap();
        let config = EngineConfig::from_path(file.path()).unwrap();
        assert_eq!(config.default_frames_per_op, 0);
    }

    #[test]
    fn test_from_path_validates() {
        let mut file = tempfile::Builder::new().suffix(".yml").tempfile().unwrap();
        writeln!(file, "default_items: 1").unwrap();
        assert!(matches!(
            EngineConfig::from_path(file.path()),
            Err(SortError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_from_path_missing_file() {
        let err = EngineConfig::from_path("/nonexistent/stepsort.yaml").unwrap_err();
        assert!(matches!(err, SortError::Io(_)));
    }
}
