//! Store port implementations
//!
//! A single [`PostgresStore`] adapter implements both domain ports:
//! `RegistryStore` (cars, owners, policies, claims) and `ExpirationStore`
//! (candidate selection and batch expiration inserts).

pub mod registry;
pub mod expiration;

use async_trait::async_trait;
use core_kernel::{DomainPort, PortError};
use sqlx::PgPool;

use crate::error::DatabaseError;

/// PostgreSQL-backed store adapter
#[derive(Debug, Clone)]
pub struct PostgresStore {
    pool: PgPool,
}

impl PostgresStore {
    /// Creates a new store over the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub(crate) fn pool(&self) -> &PgPool {
        &self.pool
    }
}

#[async_trait]
impl DomainPort for PostgresStore {
    async fn ping(&self) -> Result<(), PortError> {
        sqlx::query("SELECT 1")
            .execute(&self.pool)
            .await
            .map_err(db_err)?;
        Ok(())
    }
}

/// Maps a raw SQLx failure through the database error taxonomy onto the port
pub(crate) fn db_err(error: sqlx::Error) -> PortError {
    DatabaseError::from(error).into()
}
