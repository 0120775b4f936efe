//! Validation error types

use std::fmt;

/// Validation error for album creation input
#[derive(Debug, Clone)]
pub enum ValidationError {
    /// Field is empty when it shouldn't be
    Empty { field: &'static str },

    /// Field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// String doesn't match required format (e.g., date)
    InvalidFormat { field: &'static str, reason: &'static str },

    /// Number is below the allowed minimum
    Negative { field: &'static str },

    /// A track in the list failed validation
    Track {
        index: usize,
        source: Box<ValidationError>,
    },
}

impl ValidationError {
    /// Attach the position of the offending track.
    pub fn in_track(self, index: usize) -> Self {
        Self::Track {
            index,
            source: Box::new(self),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty { field } => write!(f, "{} cannot be empty", field),
            Self::TooLong { field, max } => {
                write!(f, "{} exceeds maximum length of {} characters", field, max)
            }
            Self::InvalidFormat { field, reason } => {
                write!(f, "{}: {}", field, reason)
            }
            Self::Negative { field } => write!(f, "{} cannot be negative", field),
            Self::Track { index, source } => write!(f, "tracks[{}]: {}", index, source),
        }
    }
}

impl std::error::Error for ValidationError {}
