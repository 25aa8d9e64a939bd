//! Error types for sources, configuration, and command execution.

use thiserror::Error;

/// Errors raised while loading variable groups from a source.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Failed to fetch variable groups: {status} {reason}")]
    Status { status: u16, reason: String },

    #[error("Failed to decode variable groups: {0}")]
    Decode(String),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Missing credentials: {0}")]
    MissingCredentials(String),
}

/// Top-level error returned by command execution.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error(transparent)]
    SourceError(#[from] SourceError),

    #[error("Variable group not found: {0}")]
    GroupNotFound(String),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("Output error: {0}")]
    OutputError(String),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::OutputError(err.to_string())
    }
}
