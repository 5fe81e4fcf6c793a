//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required value is absent or empty
    Missing { field: &'static str },

    /// Value could not be coerced to an integer
    NotAnInteger { field: &'static str, value: String },

    /// Request body is not a usable urlencoded form
    InvalidForm { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "{} is required", field),
            Self::NotAnInteger { field, value } => {
                write!(f, "{} must be an integer, got '{}'", field, value)
            }
            Self::InvalidForm { reason } => write!(f, "invalid form body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
