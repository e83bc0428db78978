//! Error types for kourou

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using KourouError
pub type Result<T> = std::result::Result<T, KourouError>;

/// Main error type for kourou operations
#[derive(Debug, Error)]
pub enum KourouError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Version-related errors
    #[error(transparent)]
    Version(#[from] VersionError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic errors
    #[error("{0}")]
    Other(String),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found at {0}")]
    NotFound(PathBuf),

    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// The convention rule table has no entry for a commit type
    #[error("No rule table entry for commit type '{0}'")]
    MissingRule(String),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Version-related errors
#[derive(Debug, Error)]
pub enum VersionError {
    /// Failed to parse a version string
    #[error("Failed to parse version '{input}': {reason}")]
    ParseFailed { input: String, reason: String },

    /// Failed to parse a pre-release suffix
    #[error("Failed to parse pre-release suffix '{0}'")]
    InvalidPreRelease(String),
}

impl VersionError {
    /// Create a parse failure with input and reason
    pub fn parse_failed(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::ParseFailed {
            input: input.into(),
            reason: reason.into(),
        }
    }
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// Failed to generate changelog
    #[error("Failed to generate changelog: {0}")]
    GenerationFailed(String),

    /// No remote URL available to build compare links
    #[error("No repository remote configured for compare links")]
    MissingRemote,
}

impl KourouError {
    /// Create a new "other" error with a message
    pub fn other<S: Into<String>>(msg: S) -> Self {
        Self::Other(msg.into())
    }
}
