//! Configuration errors.
//!
//! Every variant is fatal: they are raised while loading settings at startup
//! and the process must not continue past them.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while resolving settings.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// A required variable is absent or empty
    #[error(
        "Missing required environment variable: {0}. \
         Please set it in your .env file or environment."
    )]
    MissingConfiguration(String),

    /// An optional variable is present but fails validation
    #[error("Invalid value {value:?} for {key}: expected {expected}")]
    InvalidConfiguration {
        key: String,
        value: String,
        expected: String,
    },

    /// The env file exists but could not be read or parsed
    #[error("Failed to load env file {}: {source}", .path.display())]
    EnvFile {
        path: PathBuf,
        #[source]
        source: dotenvy::Error,
    },
}

impl ConfigError {
    /// Get stable error code
    pub fn code(&self) -> &'static str {
        match self {
            ConfigError::MissingConfiguration(_) => "MISSING_CONFIGURATION",
            ConfigError::InvalidConfiguration { .. } => "INVALID_CONFIGURATION",
            ConfigError::EnvFile { .. } => "ENV_FILE_ERROR",
        }
    }

    /// Name of the offending key, if the error concerns a single key
    pub fn key(&self) -> Option<&str> {
        match self {
            ConfigError::MissingConfiguration(key) => Some(key.as_str()),
            ConfigError::InvalidConfiguration { key, .. } => Some(key.as_str()),
            ConfigError::EnvFile { .. } => None,
        }
    }
}

/// Convenience constructors
impl ConfigError {
    pub fn missing(key: impl Into<String>) -> Self {
        ConfigError::MissingConfiguration(key.into())
    }

    pub fn invalid(
        key: impl Into<String>,
        value: impl Into<String>,
        expected: impl Into<String>,
    ) -> Self {
        ConfigError::InvalidConfiguration {
            key: key.into(),
            value: value.into(),
            expected: expected.into(),
        }
    }

    pub fn env_file(path: impl Into<PathBuf>, source: dotenvy::Error) -> Self {
        ConfigError::EnvFile {
            path: path.into(),
            source,
        }
    }
}

/// Result type alias for configuration loading
pub type ConfigResult<T> = Result<T, ConfigError>;
