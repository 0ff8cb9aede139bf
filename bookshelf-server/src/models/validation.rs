//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Path segment is not a 64-bit integer id
    InvalidId { value: String },

    /// Route has no single id segment to read
    MissingId,

    /// Request body is missing, not JSON, or has missing/mistyped fields
    MalformedBody { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidId { value } => write!(f, "invalid book id: '{}'", value),
            Self::MissingId => write!(f, "book id missing from path"),
            Self::MalformedBody { reason } => write!(f, "malformed request body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
