//! Validation error types

use std::fmt;

/// Validation error for user payloads
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Required field is missing or empty
    Empty { field: &'static str },

    /// Update payload carries no recognized fields
    NoFields,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::NoFields => write!(f, "no fields to update"),
        }
    }
}

impl std::error::Error for ValidationError {}
