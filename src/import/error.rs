//! Error types for geometry import.

use thiserror::Error;

/// Errors that can occur while validating user supplied geometry text.
#[derive(Error, Debug)]
pub enum ImportError {
    /// Nothing but whitespace was supplied
    #[error("Input is empty")]
    Empty,

    /// The text could not be parsed at all
    #[error("{format} syntax error: {message}")]
    Syntax {
        /// Name of the format being parsed
        format: &'static str,
        /// Parser message
        message: String,
    },

    /// The text parsed but describes an unusable geometry
    #[error("Invalid geometry: {message}")]
    InvalidGeometry {
        /// Description of the problem
        message: String,
    },

    /// No parser is registered for the requested format
    #[error("Unsupported import format: {0}")]
    UnsupportedFormat(&'static str),
}

impl ImportError {
    /// Create a syntax error for the given format.
    pub fn syntax(format: &'static str, message: impl Into<String>) -> Self {
        Self::Syntax {
            format,
            message: message.into(),
        }
    }

    /// Create an invalid geometry error.
    pub fn invalid_geometry(message: impl Into<String>) -> Self {
        Self::InvalidGeometry {
            message: message.into(),
        }
    }
}
