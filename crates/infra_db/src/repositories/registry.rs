//! Registry store implementation
//!
//! Database access for cars, owners, policies, and claims.

use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use sqlx::FromRow;
use uuid::Uuid;

use core_kernel::{CarId, ClaimId, OwnerId, PolicyId, PortError};
use domain_registry::{Car, CarWithOwner, Claim, Policy, RegistryStore};

use super::{db_err, PostgresStore};

#[derive(Debug, FromRow)]
struct CarWithOwnerRow {
    id: Uuid,
    vin: String,
    make: Option<String>,
    model: Option<String>,
    year_of_manufacture: i32,
    owner_id: Uuid,
    owner_name: String,
    owner_email: Option<String>,
}

impl From<CarWithOwnerRow> for CarWithOwner {
    fn from(row: CarWithOwnerRow) -> Self {
        CarWithOwner {
            id: CarId::from_uuid(row.id),
            vin: row.vin,
            make: row.make,
            model: row.model,
            year_of_manufacture: row.year_of_manufacture,
            owner_id: OwnerId::from_uuid(row.owner_id),
            owner_name: row.owner_name,
            owner_email: row.owner_email,
        }
    }
}

#[derive(Debug, FromRow)]
struct PolicyRow {
    id: Uuid,
    car_id: Uuid,
    provider: Option<String>,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl From<PolicyRow> for Policy {
    fn from(row: PolicyRow) -> Self {
        Policy {
            id: PolicyId::from_uuid(row.id),
            car_id: CarId::from_uuid(row.car_id),
            provider: row.provider,
            start_date: row.start_date,
            end_date: row.end_date,
        }
    }
}

#[derive(Debug, FromRow)]
struct ClaimRow {
    id: Uuid,
    car_id: Uuid,
    claim_date: NaiveDate,
    description: String,
    amount: Decimal,
}

impl From<ClaimRow> for Claim {
    fn from(row: ClaimRow) -> Self {
        Claim {
            id: ClaimId::from_uuid(row.id),
            car_id: CarId::from_uuid(row.car_id),
            claim_date: row.claim_date,
            description: row.description,
            amount: row.amount,
        }
    }
}

#[async_trait]
impl RegistryStore for PostgresStore {
    async fn list_cars(&self) -> Result<Vec<CarWithOwner>, PortError> {
        let rows = sqlx::query_as::<_, CarWithOwnerRow>(
            r#"
            SELECT
                c.id,
                c.vin,
                c.make,
                c.model,
                c.year_of_manufacture,
                c.owner_id,
                o.name AS owner_name,
                o.email AS owner_email
            FROM cars c
            JOIN owners o ON o.id = c.owner_id
            ORDER BY c.vin
            "#,
        )
        .fetch_all(self.pool())
        .await
        .map_err(db_err)?;

        Ok(rows.into_iter().map(CarWithOwner::from).collect())
    }

    async fn car_exists(&self, id: CarId) -> Result<bool, PortError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM cars WHERE id = $1)")
            .bind(id.as_uuid())
            .fetch_one(self.pool())
            .await
            .map_err(db_err)
    }

    async fn owner_exists(&self, id: OwnerId) -> Result<bool, PortError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM owners WHERE id = $1)")
            .bind(id.as_uuid())
            .fetch_one(self.pool())
            .await
            .map_err(db_err)
    }

    async fn vin_exists(&self, vin: &str) -> Result<bool, PortError> {
        sqlx::query_scalar::<_, bool>("SELECT EXISTS (SELECT 1 FROM cars WHERE vin = $1)")
            .bind(vin)
            .fetch_one(self.pool())
            .await
            .map_err(db_err)
    }

    async fn insert_car(&self, car: &Car) -> Result<(), PortError> {
        sqlx::query(
            r#"
            INSERT INTO cars (id, vin, make, model, year_of_manufacture, owner_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(car.id.as_uuid())
        .bind(&car.vin)
        .bind(&car.make)
        .bind(&car.model)
        .bind(car.year_of_manufacture)
        .bind(car.owner_id.as_uuid())
        .execute(self.pool())
        .await
        .map_err(db_err)?;

        Ok(())
    }

    async fn policies_for_car(&self, car_id: CarId) -> Result<Vec<Policy>, PortError> {
        let rows = sqlx::query_as::<_, PolicyRow>(
            r#"
            SELECT id, car_id, provider, start_date, end_date
            FROM policies
            WHERE car_id = $1
            ORDER BY start_date
            "#,
        )
        .bind(car_id.as_uuid())
        .fetch_all(self.pool())
        .await
        .map_err(db_err)?;

        Ok(rows.into_iter().map(Policy::from).collect())
    }

    async fn has_policy_covering(&self, car_id: CarId, date: NaiveDate) -> Result<bool, PortError> {
        sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS (
                SELECT 1 FROM policies
                WHERE car_id = $1
                  AND start_date <= $2
                  AND end_date >= $2
            )
            "#,
        )
        .bind(car_id.as_uuid())
        .bind(date)
        .fetch_one(self.pool())
        .await
        .map_err(db_err)
    }

    async fn insert_policy(&self, policy: &Policy) -> Result<(), PortError> {
        sqlx::query(
            r#"
            INSERT INTO policies (id, car_id, provider, start_date, end_date)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(policy.id.as_uuid())
        .bind(policy.car_id.as_uuid())
        .bind(&policy.provider)
        .bind(policy.start_date)
        .bind(policy.end_date)
        .execute(self.pool())
        .await
        .map_err(db_err)?;

        Ok(())
    }

    async fn claims_for_car(&self, car_id: CarId) -> Result<Vec<Claim>, PortError> {
        let rows = sqlx::query_as::<_, ClaimRow>(
            r#"
            SELECT id, car_id, claim_date, description, amount
            FROM claims
            WHERE car_id = $1
            ORDER BY claim_date
            "#,
        )
        .bind(car_id.as_uuid())
        .fetch_all(self.pool())
        .await
        .map_err(db_err)?;

        Ok(rows.into_iter().map(Claim::from).collect())
    }

    async fn insert_claim(&self, claim: &Claim) -> Result<(), PortError> {
        sqlx::query(
            r#"
            INSERT INTO claims (id, car_id, claim_date, description, amount)
            VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(claim.id.as_uuid())
        .bind(claim.car_id.as_uuid())
        .bind(claim.claim_date)
        .bind(&claim.description)
        .bind(claim.amount)
        .execute(self.pool())
        .await
        .map_err(db_err)?;

        Ok(())
    }
}
