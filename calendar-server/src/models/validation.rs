//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required parameter absent or empty
    Missing { field: &'static str },

    /// Parameter present but not a usable value
    Invalid { field: &'static str },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Missing { field } => write!(f, "Missing {}", field),
            Self::Invalid { field } => write!(f, "Invalid {}", field),
        }
    }
}

impl std::error::Error for ValidationError {}
