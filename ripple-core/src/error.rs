//! Error types for the Ripple system.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for the Ripple system.
#[derive(Error, Debug, Clone, Serialize, Deserialize)]
pub enum RippleError {
    /// A required request field was missing or of the wrong type
    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    /// Serialization or deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for Ripple operations
pub type Result<T> = std::result::Result<T, RippleError>;

impl From<serde_json::Error> for RippleError {
    fn from(err: serde_json::Error) -> Self {
        RippleError::Serialization(err.to_string())
    }
}
