//! Top-level error type for application startup.

use thiserror::Error;

use crate::config::ConfigError;
use crate::marker::MarkerError;

/// Errors that abort the application.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration could not be loaded
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Marker icon could not be loaded
    #[error(transparent)]
    Marker(#[from] MarkerError),

    /// I/O error reading input
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON parsing or serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
