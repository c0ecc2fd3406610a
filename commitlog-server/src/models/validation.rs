//! Validation error types

use std::fmt;

/// Validation error for request input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Page or limit below 1
    NonPositivePagination,

    /// Limit above the allowed page size
    LimitTooLarge { max: u32 },

    /// Date filter the store could not read as a timestamp
    InvalidDateFilter { reason: String },

    /// Query string could not be decoded at all
    MalformedQuery { reason: String },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositivePagination => {
                write!(f, "Page and limit must be positive integers")
            }
            Self::LimitTooLarge { max } => write!(f, "Limit cannot exceed {}", max),
            Self::InvalidDateFilter { reason } => {
                write!(f, "Invalid start_date or end_date: {}", reason)
            }
            Self::MalformedQuery { reason } => write!(f, "Malformed query string: {}", reason),
        }
    }
}

impl std::error::Error for ValidationError {}
