//! Infrastructure Database Layer
//!
//! This crate provides the PostgreSQL persistence for the car insurance
//! system using SQLx. It implements the store ports defined by the domain
//! crates (`RegistryStore`, `ExpirationStore`) behind a single
//! [`PostgresStore`] adapter.
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_db::{create_pool, DatabaseConfig, PostgresStore};
//!
//! let pool = create_pool(DatabaseConfig::new("postgres://localhost/car_insurance")).await?;
//! run_migrations(&pool).await?;
//! let store = PostgresStore::new(pool);
//! ```

pub mod pool;
pub mod error;
pub mod repositories;

pub use pool::{create_pool, create_pool_from_url, DatabaseConfig, DatabasePool};
pub use error::DatabaseError;
pub use repositories::PostgresStore;

/// Applies the embedded SQL migrations
pub async fn run_migrations(pool: &DatabasePool) -> Result<(), DatabaseError> {
    tracing::info!("Running database migrations");
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .map_err(|e| DatabaseError::MigrationFailed(e.to_string()))?;
    tracing::info!("Database migrations applied");
    Ok(())
}
