//! Validation error types

use std::fmt;

/// Why a request body was refused
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Body is not valid JSON
    Syntax { reason: String },

    /// Body is JSON but not an object of the expected shape
    Shape { reason: String },

    /// Body could not be read
    Body { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Syntax { reason } => write!(f, "malformed JSON: {}", reason),
            Self::Shape { reason } => write!(f, "unexpected JSON shape: {}", reason),
            Self::Body { reason } => write!(f, "unreadable body: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
