//! Expiration Store Port
//!
//! The processor reads policies and writes expiration records through this
//! trait. The store must enforce a uniqueness constraint on the expiration
//! record's policy reference; that constraint is the sole concurrency guard.

use async_trait::async_trait;
use chrono::NaiveDate;

use core_kernel::{DomainPort, PortError};

use crate::record::{ExpiredCandidate, PolicyExpiration};

/// Store operations for the expiration processor
#[async_trait]
pub trait ExpirationStore: DomainPort {
    /// Policies whose end date is strictly before `today` and that have no
    /// expiration record yet (anti-join on policy reference). Order is
    /// irrelevant; each candidate is processed independently.
    async fn find_expired_unrecorded(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<ExpiredCandidate>, PortError>;

    /// Persists all records in a single atomic batch and returns the number
    /// written.
    ///
    /// Must return `PortError::Conflict` and write nothing when any record's
    /// policy reference already exists (all-or-nothing on conflict).
    async fn insert_expirations(
        &self,
        records: &[PolicyExpiration],
    ) -> Result<usize, PortError>;
}
