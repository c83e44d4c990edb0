//! Result and error types for the sorting engine.

use thiserror::Error;

/// Result type for engine operations
pub type SortResult<T> = Result<T, SortError>;

/// Errors that can occur in the engine
#[derive(Debug, Error)]
pub enum SortError {
    /// `advance()` called on a machine that already reached sorted order
    #[error("{algorithm} has already completed; no further operations are valid")]
    MachineCompleted {
        /// Display name of the frozen algorithm
        algorithm: &'static str,
    },

    /// Algorithm name not present in the registry
    #[error("Unknown sorting algorithm: {name}")]
    UnknownAlgorithm {
        /// Name that failed to resolve
        name: String,
    },

    /// Configuration values are inconsistent
    #[error("Invalid configuration: {message}")]
    InvalidConfig {
        /// Error message
        message: String,
    },

    /// Configuration document could not be decoded
    #[error("Failed to parse configuration: {message}")]
    ConfigParse {
        /// Error message
        message: String,
    },

    /// IO error while reading a configuration file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SortError {
    /// Create an invalid configuration error
    #[must_use]
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a configuration parse error
    #[must_use]
    pub fn config_parse(message: impl Into<String>) -> Self {
        Self::ConfigParse {
            message: message.into(),
        }
    }

    /// Create an unknown algorithm error
    #[must_use]
    pub fn unknown_algorithm(name: impl Into<String>) -> Self {
        Self::UnknownAlgorithm { name: name.into() }
    }
}

impl From<serde_json::Error> for SortError {
    fn from(err: serde_json::Error) -> Self {
        Self::config_parse(err.to_string())
    }
}

impl From<serde_yaml_ng::Error> for SortError {
    fn from(err: serde_yaml_ng::Error) -> Self {
        Self::config_parse(err.to_string())
    }
}
