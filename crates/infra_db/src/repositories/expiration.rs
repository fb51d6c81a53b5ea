//! Expiration store implementation
//!
//! Selects policies whose coverage has lapsed without a recorded expiration
//! and writes expiration records as a single all-or-nothing batch. The unique
//! index on policy_expirations.policy_id is the only concurrency guard: a
//! concurrent writer surfaces as a duplicate-key error and the whole batch
//! rolls back.

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use sqlx::FromRow;
use uuid::Uuid;

use core_kernel::{CarId, PolicyId, PortError};
use domain_expiration::{ExpirationStore, ExpiredCandidate, PolicyExpiration};

use super::{db_err, PostgresStore};

#[derive(Debug, FromRow)]
struct CandidateRow {
    policy_id: Uuid,
    car_id: Uuid,
    provider: Option<String>,
    end_date: NaiveDate,
}

impl From<CandidateRow> for ExpiredCandidate {
    fn from(row: CandidateRow) -> Self {
        ExpiredCandidate {
            policy_id: PolicyId::from_uuid(row.policy_id),
            car_id: CarId::from_uuid(row.car_id),
            provider: row.provider,
            end_date: row.end_date,
        }
    }
}

#[async_trait]
impl ExpirationStore for PostgresStore {
    async fn find_expired_unrecorded(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<ExpiredCandidate>, PortError> {
        let rows = sqlx::query_as::<_, CandidateRow>(
            r#"
            SELECT
                p.id AS policy_id,
                p.car_id,
                p.provider,
                p.end_date
            FROM policies p
            WHERE p.end_date < $1
              AND NOT EXISTS (
                  SELECT 1 FROM policy_expirations pe
                  WHERE pe.policy_id = p.id
              )
            ORDER BY p.end_date, p.id
            "#,
        )
        .bind(today)
        .fetch_all(self.pool())
        .await
        .map_err(db_err)?;

        Ok(rows.into_iter().map(ExpiredCandidate::from).collect())
    }

    async fn insert_expirations(
        &self,
        records: &[PolicyExpiration],
    ) -> Result<usize, PortError> {
        let mut tx = self.pool().begin().await.map_err(db_err)?;

        for record in records {
            sqlx::query(
                r#"
                INSERT INTO policy_expirations (id, policy_id, expired_at)
                VALUES ($1, $2, $3)
                "#,
            )
            .bind(record.id.as_uuid())
            .bind(record.policy_id.as_uuid())
            .bind::<DateTime<Utc>>(record.expired_at)
            .execute(&mut *tx)
            .await
            .map_err(db_err)?;
        }

        tx.commit().await.map_err(db_err)?;
        Ok(records.len())
    }
}
