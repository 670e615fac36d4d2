//! Error types for estatedist

use thiserror::Error;

/// estatedist error type
#[derive(Error, Debug)]
pub enum Error {
    /// A user-supplied parameter is outside its domain (or has the wrong type).
    #[error("invalid parameter `{field}`: {reason}")]
    InvalidParameter {
        /// Name of the offending input field.
        field: String,
        /// Human-readable explanation, suitable for showing to the end user.
        reason: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

impl Error {
    /// Shorthand for [`Error::InvalidParameter`].
    pub fn invalid(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Error::InvalidParameter { field: field.into(), reason: reason.into() }
    }

    /// Offending field name, if this is a parameter error.
    pub fn field(&self) -> Option<&str> {
        match self {
            Error::InvalidParameter { field, .. } => Some(field),
            _ => None,
        }
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;
