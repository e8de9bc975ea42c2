//! Domain error types for choicemate
//!
//! Provides structured error types for different domains:
//! - `ConfigError` for configuration loading
//! - `Error` as the top-level error type
//!
//! The selection flow itself has no failure modes: empty input and missing
//! entries are silently tolerated, never surfaced as errors.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for choicemate
#[derive(Debug, Error)]
pub enum Error {
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Terminal error: {0}")]
    Terminal(String),

    #[error("{0}")]
    Other(String),
}

/// Errors related to configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {0}: {1}")]
    ReadFailed(PathBuf, std::io::Error),

    #[error("Failed to parse config file {0}: {1}")]
    ParseFailed(PathBuf, toml::de::Error),
}

/// Result type alias for Error
pub type Result<T> = std::result::Result<T, Error>;

/// Result type alias for ConfigError
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Other(err.to_string())
    }
}

impl From<String> for Error {
    fn from(msg: String) -> Self {
        Error::Other(msg)
    }
}

impl From<&str> for Error {
    fn from(msg: &str) -> Self {
        Error::Other(msg.to_string())
    }
}
