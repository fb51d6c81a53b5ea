//! Registry domain errors

use core_kernel::PortError;
use thiserror::Error;

/// Errors produced by registry operations
#[derive(Debug, Error)]
pub enum RegistryError {
    /// A referenced car or owner does not exist
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed input: bad year, inverted date range, malformed date string
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Duplicate VIN or overlapping policy range
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Underlying store failure, propagated unhandled
    #[error(transparent)]
    Store(#[from] PortError),
}

impl RegistryError {
    pub fn not_found(message: impl Into<String>) -> Self {
        RegistryError::NotFound(message.into())
    }

    pub fn invalid_argument(message: impl Into<String>) -> Self {
        RegistryError::InvalidArgument(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        RegistryError::Conflict(message.into())
    }
}
