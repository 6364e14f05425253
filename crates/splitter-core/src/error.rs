//! Error types for the text splitter.

use thiserror::Error;

/// Result type alias using SplitError.
pub type Result<T> = std::result::Result<T, SplitError>;

/// Errors that can occur while configuring or running a splitter.
#[derive(Error, Debug)]
pub enum SplitError {
    /// A separator marked as regex failed to compile.
    #[error("Invalid separator pattern {pattern:?}: {reason}")]
    Pattern { pattern: String, reason: String },

    /// Splitter configuration is unusable.
    #[error("Invalid config: {message}")]
    InvalidConfig { message: String },

    /// Configuration file error.
    #[error("Configuration error: {message}")]
    Config { message: String },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SplitError {
    /// Create a pattern error.
    pub fn pattern(pattern: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Pattern {
            pattern: pattern.into(),
            reason: reason.into(),
        }
    }

    /// Create an invalid config error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a configuration file error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Get a stable error code for reporting.
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::Pattern { .. } => "PATTERN_ERROR",
            Self::InvalidConfig { .. } => "INVALID_CONFIG",
            Self::Config { .. } => "CONFIG_ERROR",
            Self::Io(_) => "IO_ERROR",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
        }
    }
}
