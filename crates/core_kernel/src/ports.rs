//! Port abstractions shared by all store adapters
//!
//! Each domain defines a port trait describing the store operations it needs.
//! Adapters implement these traits to provide either the PostgreSQL-backed
//! implementation (infra_db) or an in-memory one for tests (test_utils).
//!
//! ```rust,ignore
//! // In domain_registry/src/ports.rs
//! #[async_trait]
//! pub trait RegistryStore: DomainPort {
//!     async fn car_exists(&self, id: CarId) -> Result<bool, PortError>;
//! }
//! ```

use async_trait::async_trait;
use std::fmt;
use thiserror::Error;

/// Error type for port operations
///
/// Provides a unified error type that all port implementations must use,
/// ensuring consistent error handling across adapters.
#[derive(Debug, Error)]
pub enum PortError {
    /// The requested entity was not found
    #[error("Not found: {entity_type} with id {id}")]
    NotFound { entity_type: String, id: String },

    /// A validation error occurred
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// The operation conflicts with existing data (duplicate key, overlapping range)
    #[error("Conflict: {message}")]
    Conflict { message: String },

    /// Connection to the underlying store failed
    #[error("Connection error: {message}")]
    Connection {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An internal store error occurred
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },
}

impl PortError {
    /// Creates a NotFound error
    pub fn not_found(entity_type: impl Into<String>, id: impl fmt::Display) -> Self {
        PortError::NotFound {
            entity_type: entity_type.into(),
            id: id.to_string(),
        }
    }

    /// Creates a Validation error
    pub fn validation(message: impl Into<String>) -> Self {
        PortError::Validation {
            message: message.into(),
        }
    }

    /// Creates a Conflict error
    pub fn conflict(message: impl Into<String>) -> Self {
        PortError::Conflict {
            message: message.into(),
        }
    }

    /// Creates a Connection error
    pub fn connection(message: impl Into<String>) -> Self {
        PortError::Connection {
            message: message.into(),
            source: None,
        }
    }

    /// Creates an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        PortError::Internal {
            message: message.into(),
            source: None,
        }
    }

    /// Returns true if this error indicates the entity was not found
    pub fn is_not_found(&self) -> bool {
        matches!(self, PortError::NotFound { .. })
    }

    /// Returns true if this error is a write conflict (e.g. a unique index violation)
    pub fn is_conflict(&self) -> bool {
        matches!(self, PortError::Conflict { .. })
    }
}

/// Base trait for all domain ports
///
/// All port traits extend this trait to ensure they are thread-safe and
/// usable in async contexts. Adapters backed by a remote store override
/// [`DomainPort::ping`] so readiness checks reach the actual connection.
#[async_trait]
pub trait DomainPort: Send + Sync + 'static {
    /// Verifies the backing store is reachable
    async fn ping(&self) -> Result<(), PortError> {
        Ok(())
    }
}
