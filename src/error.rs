//! Error types for the adapters, catalog and CLI.
//!
//! The selection core never fails; these errors only come from the code that
//! feeds it (config loading, folder listing, override persistence).

use thiserror::Error;

/// Error surfaced by coverpick adapters and commands.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Storage error: {0}")]
    StorageError(String),

    #[error("Project not found: {0}")]
    ProjectNotFound(String),

    #[error("Photo '{photo_id}' not found in project '{project}'")]
    PhotoNotFound { project: String, photo_id: String },

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}
