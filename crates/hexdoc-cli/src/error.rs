//! Error handling for the hexdoc CLI.
//!
//! `CliError` is the type every command returns. Library failures from
//! `hexdoc` and configuration problems convert into it automatically; `main`
//! turns the final error into a `miette` report (see [`cli_error_to_miette`]).

mod miette;

use std::path::PathBuf;
use thiserror::Error;

pub use self::miette::{cli_error_to_miette, hexdoc_error_to_miette};

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration-related errors (file not found, invalid values, etc.)
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Failures while scanning sources or generating documentation
    #[error(transparent)]
    Hexdoc(#[from] hexdoc::Error),

    /// Invalid command-line arguments or options
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O errors from file system operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file doesn't exist at the given location
    #[error("Config file not found: {}\n\nHint: Create a hexdoc.config.json file or pass an existing path to --config", .0.display())]
    NotFound(PathBuf),

    /// Layered configuration could not be extracted
    #[error("Invalid configuration: {0}\n\nHint: Check hexdoc.config.json syntax and HEXDOC_* variables")]
    Extract(String),

    /// Missing required configuration field
    #[error("Missing required field: {field}\n\nHint: {hint}")]
    MissingField {
        /// Name of the missing field
        field: String,
        /// Helpful hint for providing the field
        hint: String,
    },

    /// Invalid value for a configuration option
    #[error("Invalid value for '{field}': {value}\n\nHint: {hint}")]
    InvalidValue {
        /// Name of the field with invalid value
        field: String,
        /// The invalid value
        value: String,
        /// Helpful hint for correct values
        hint: String,
    },
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Extract(err.to_string())
    }
}

/// Result type alias using `CliError` as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_not_found() {
        let err = ConfigError::NotFound(PathBuf::from("hexdoc.config.json"));
        let msg = err.to_string();
        assert!(msg.contains("Config file not found"));
        assert!(msg.contains("hexdoc.config.json"));
        assert!(msg.contains("Hint:"));
    }

    #[test]
    fn test_config_error_invalid_value() {
        let err = ConfigError::InvalidValue {
            field: "vendorPrefix".to_string(),
            value: "".to_string(),
            hint: "Use a non-empty package prefix".to_string(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Invalid value for 'vendorPrefix'"));
        assert!(msg.contains("non-empty package prefix"));
    }

    #[test]
    fn test_cli_error_from_config_error() {
        let cli_err: CliError = ConfigError::NotFound(PathBuf::from("test.json")).into();
        assert!(matches!(cli_err, CliError::Config(_)));
    }

    #[test]
    fn test_hexdoc_error_is_transparent() {
        let cli_err: CliError = hexdoc::Error::TaskFailed("boom".to_string()).into();
        assert_eq!(cli_err.to_string(), "background task failed: boom");
    }
}
