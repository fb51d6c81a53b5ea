//! Registry service
//!
//! Orchestrates the CRUD operations and enforces the validation rules:
//! VIN and year checks on car creation, overlap rejection on policy creation,
//! payload screening on claim creation, and the merged history view.

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use core_kernel::temporal::{parse_iso_date, utc_year};
use core_kernel::{CarId, ClaimId, DateRange, PolicyId};
use rust_decimal::Decimal;
use tracing::{debug, info};

use crate::car::{Car, CarWithOwner, NewCarData};
use crate::claim::{Claim, NewClaimData};
use crate::error::RegistryError;
use crate::history::{merge_history, HistoryEntry};
use crate::policy::{NewPolicyData, Policy};
use crate::ports::RegistryStore;

/// Application service for the car registry
#[derive(Clone)]
pub struct RegistryService {
    store: Arc<dyn RegistryStore>,
}

impl RegistryService {
    pub fn new(store: Arc<dyn RegistryStore>) -> Self {
        Self { store }
    }

    /// Lists all cars with their owner's contact details
    pub async fn list_cars(&self) -> Result<Vec<CarWithOwner>, RegistryError> {
        Ok(self.store.list_cars().await?)
    }

    /// Returns true if some policy of the car covers the given date
    ///
    /// # Errors
    ///
    /// `RegistryError::NotFound` if the car does not exist
    pub async fn insurance_valid(
        &self,
        car_id: CarId,
        date: NaiveDate,
    ) -> Result<bool, RegistryError> {
        self.require_car(car_id).await?;
        Ok(self.store.has_policy_covering(car_id, date).await?)
    }

    /// Registers a new car
    ///
    /// The VIN is required, trimmed, and must be unique. The year of
    /// manufacture must lie in `(0, current_year + 1]`. The owner must exist.
    pub async fn create_car(&self, data: NewCarData) -> Result<CarId, RegistryError> {
        let vin = data.vin.trim();
        if vin.is_empty() {
            return Err(RegistryError::invalid_argument("VIN is required"));
        }
        if self.store.vin_exists(vin).await? {
            return Err(RegistryError::conflict(format!("VIN '{vin}' already exists")));
        }

        let current_year = utc_year(Utc::now());
        if data.year_of_manufacture <= 0 || data.year_of_manufacture > current_year + 1 {
            return Err(RegistryError::invalid_argument(format!(
                "{} is not a valid year of manufacture",
                data.year_of_manufacture
            )));
        }

        if !self.store.owner_exists(data.owner_id).await? {
            return Err(RegistryError::not_found(format!(
                "Owner {} not found",
                data.owner_id
            )));
        }

        let car = Car {
            id: CarId::new(),
            vin: vin.to_string(),
            make: data.make,
            model: data.model,
            year_of_manufacture: data.year_of_manufacture,
            owner_id: data.owner_id,
        };
        self.store.insert_car(&car).await?;

        info!(car_id = %car.id, vin = %car.vin, "Registered car");
        Ok(car.id)
    }

    /// Creates a new policy for a car
    ///
    /// Rejects an inverted date range as invalid and a range that overlaps
    /// any existing policy for the same car as a conflict. Adjacent ranges
    /// sharing no date are accepted.
    pub async fn create_policy(
        &self,
        car_id: CarId,
        data: NewPolicyData,
    ) -> Result<PolicyId, RegistryError> {
        self.require_car(car_id).await?;

        let range = DateRange::new(data.start_date, data.end_date)
            .map_err(|_| RegistryError::invalid_argument("End date must be on or after start date"))?;

        let existing = self.store.policies_for_car(car_id).await?;
        if existing.iter().any(|p| p.period().overlaps(&range)) {
            return Err(RegistryError::conflict(
                "Policy date range overlaps an existing policy for this car",
            ));
        }

        let policy = Policy::new(car_id, range, data.provider);
        self.store.insert_policy(&policy).await?;

        info!(
            policy_id = %policy.id,
            car_id = %car_id,
            start_date = %policy.start_date,
            end_date = %policy.end_date,
            "Created policy"
        );
        Ok(policy.id)
    }

    /// Files a claim against a car
    ///
    /// Returns `Ok(None)` when the payload is rejected (unparsable date,
    /// blank description, or non-positive amount). Callers distinguish that
    /// from `RegistryError::NotFound`, which means the car is missing.
    pub async fn create_claim(
        &self,
        car_id: CarId,
        data: NewClaimData,
    ) -> Result<Option<ClaimId>, RegistryError> {
        self.require_car(car_id).await?;

        let claim_date = match parse_iso_date(&data.claim_date) {
            Ok(date) => date,
            Err(_) => {
                debug!(car_id = %car_id, claim_date = %data.claim_date, "Rejected claim: unparsable date");
                return Ok(None);
            }
        };

        if data.description.trim().is_empty() || data.amount <= Decimal::ZERO {
            debug!(car_id = %car_id, "Rejected claim: blank description or non-positive amount");
            return Ok(None);
        }

        let claim = Claim {
            id: ClaimId::new(),
            car_id,
            claim_date,
            description: data.description,
            amount: data.amount,
        };
        self.store.insert_claim(&claim).await?;

        info!(claim_id = %claim.id, car_id = %car_id, "Filed claim");
        Ok(Some(claim.id))
    }

    /// Returns the car's merged policy/claim history, ascending by date
    pub async fn history(&self, car_id: CarId) -> Result<Vec<HistoryEntry>, RegistryError> {
        self.require_car(car_id).await?;

        let policies = self.store.policies_for_car(car_id).await?;
        let claims = self.store.claims_for_car(car_id).await?;
        Ok(merge_history(policies, claims))
    }

    async fn require_car(&self, car_id: CarId) -> Result<(), RegistryError> {
        if !self.store.car_exists(car_id).await? {
            return Err(RegistryError::not_found(format!("Car {car_id} not found")));
        }
        Ok(())
    }
}
