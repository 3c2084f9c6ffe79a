//! Errors raised by the fallible parts of the harvest generator

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum HarvestError {
    #[error("Invalid ISO date: {0}")]
    InvalidDate(String),

    #[error("Invalid parameter {field}: {message}")]
    InvalidParameter {
        field: &'static str,
        message: &'static str,
    },
}

impl HarvestError {
    pub fn invalid(field: &'static str, message: &'static str) -> Self {
        HarvestError::InvalidParameter { field, message }
    }

    /// Name of the offending input, if any
    pub fn field(&self) -> Option<&'static str> {
        match self {
            HarvestError::InvalidDate(_) => None,
            HarvestError::InvalidParameter { field, .. } => Some(field),
        }
    }
}

pub type HarvestResult<T> = Result<T, HarvestError>;
