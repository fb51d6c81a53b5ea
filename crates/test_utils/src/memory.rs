//! In-memory store
//!
//! Implements both `RegistryStore` and `ExpirationStore` over plain vectors
//! behind a mutex, emulating the database's uniqueness constraint on the
//! expiration record's policy reference. The batch insert is all-or-nothing
//! on conflict, matching the PostgreSQL adapter's transactional behavior.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::NaiveDate;

use core_kernel::{CarId, DomainPort, OwnerId, PortError};
use domain_expiration::{ExpirationStore, ExpiredCandidate, PolicyExpiration};
use domain_registry::{Car, CarWithOwner, Claim, Owner, Policy, RegistryStore};

#[derive(Debug, Default)]
struct State {
    owners: Vec<Owner>,
    cars: Vec<Car>,
    policies: Vec<Policy>,
    claims: Vec<Claim>,
    expirations: Vec<PolicyExpiration>,
}

/// In-memory implementation of the registry and expiration store ports
#[derive(Debug, Default)]
pub struct InMemoryStore {
    state: Mutex<State>,
    fail_expiration_inserts: AtomicBool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_owner(&self, owner: Owner) -> OwnerId {
        let mut state = self.state.lock().expect("store mutex poisoned");
        let id = owner.id;
        state.owners.push(owner);
        id
    }

    pub fn add_car(&self, car: Car) -> CarId {
        let mut state = self.state.lock().expect("store mutex poisoned");
        let id = car.id;
        state.cars.push(car);
        id
    }

    pub fn add_policy(&self, policy: Policy) -> Policy {
        let mut state = self.state.lock().expect("store mutex poisoned");
        state.policies.push(policy.clone());
        policy
    }

    pub fn add_claim(&self, claim: Claim) -> Claim {
        let mut state = self.state.lock().expect("store mutex poisoned");
        state.claims.push(claim.clone());
        claim
    }

    /// Pre-seeds an expiration record, bypassing the processor
    pub fn add_expiration(&self, record: PolicyExpiration) {
        let mut state = self.state.lock().expect("store mutex poisoned");
        state.expirations.push(record);
    }

    pub fn expirations(&self) -> Vec<PolicyExpiration> {
        self.state.lock().expect("store mutex poisoned").expirations.clone()
    }

    pub fn policies(&self) -> Vec<Policy> {
        self.state.lock().expect("store mutex poisoned").policies.clone()
    }

    pub fn claims(&self) -> Vec<Claim> {
        self.state.lock().expect("store mutex poisoned").claims.clone()
    }

    pub fn cars(&self) -> Vec<Car> {
        self.state.lock().expect("store mutex poisoned").cars.clone()
    }

    /// Makes subsequent expiration batch inserts fail with an internal store
    /// error, for testing failure propagation
    pub fn fail_expiration_inserts(&self, fail: bool) {
        self.fail_expiration_inserts.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl DomainPort for InMemoryStore {}

#[async_trait]
impl RegistryStore for InMemoryStore {
    async fn list_cars(&self) -> Result<Vec<CarWithOwner>, PortError> {
        let state = self.state.lock().expect("store mutex poisoned");
        state
            .cars
            .iter()
            .map(|car| {
                let owner = state
                    .owners
                    .iter()
                    .find(|o| o.id == car.owner_id)
                    .ok_or_else(|| PortError::not_found("Owner", car.owner_id))?;
                Ok(CarWithOwner {
                    id: car.id,
                    vin: car.vin.clone(),
                    make: car.make.clone(),
                    model: car.model.clone(),
                    year_of_manufacture: car.year_of_manufacture,
                    owner_id: car.owner_id,
                    owner_name: owner.name.clone(),
                    owner_email: owner.email.clone(),
                })
            })
            .collect()
    }

    async fn car_exists(&self, id: CarId) -> Result<bool, PortError> {
        let state = self.state.lock().expect("store mutex poisoned");
        Ok(state.cars.iter().any(|c| c.id == id))
    }

    async fn owner_exists(&self, id: OwnerId) -> Result<bool, PortError> {
        let state = self.state.lock().expect("store mutex poisoned");
        Ok(state.owners.iter().any(|o| o.id == id))
    }

    async fn vin_exists(&self, vin: &str) -> Result<bool, PortError> {
        let state = self.state.lock().expect("store mutex poisoned");
        Ok(state.cars.iter().any(|c| c.vin == vin))
    }

    async fn insert_car(&self, car: &Car) -> Result<(), PortError> {
        let mut state = self.state.lock().expect("store mutex poisoned");
        if state.cars.iter().any(|c| c.vin == car.vin) {
            return Err(PortError::conflict(format!("duplicate VIN '{}'", car.vin)));
        }
        state.cars.push(car.clone());
        Ok(())
    }

    async fn policies_for_car(&self, car_id: CarId) -> Result<Vec<Policy>, PortError> {
        let state = self.state.lock().expect("store mutex poisoned");
        Ok(state
            .policies
            .iter()
            .filter(|p| p.car_id == car_id)
            .cloned()
            .collect())
    }

    async fn has_policy_covering(&self, car_id: CarId, date: NaiveDate) -> Result<bool, PortError> {
        let state = self.state.lock().expect("store mutex poisoned");
        Ok(state
            .policies
            .iter()
            .any(|p| p.car_id == car_id && p.covers(date)))
    }

    async fn insert_policy(&self, policy: &Policy) -> Result<(), PortError> {
        let mut state = self.state.lock().expect("store mutex poisoned");
        state.policies.push(policy.clone());
        Ok(())
    }

    async fn claims_for_car(&self, car_id: CarId) -> Result<Vec<Claim>, PortError> {
        let state = self.state.lock().expect("store mutex poisoned");
        Ok(state
            .claims
            .iter()
            .filter(|c| c.car_id == car_id)
            .cloned()
            .collect())
    }

    async fn insert_claim(&self, claim: &Claim) -> Result<(), PortError> {
        let mut state = self.state.lock().expect("store mutex poisoned");
        state.claims.push(claim.clone());
        Ok(())
    }
}

#[async_trait]
impl ExpirationStore for InMemoryStore {
    async fn find_expired_unrecorded(
        &self,
        today: NaiveDate,
    ) -> Result<Vec<ExpiredCandidate>, PortError> {
        let state = self.state.lock().expect("store mutex poisoned");
        Ok(state
            .policies
            .iter()
            .filter(|p| p.end_date < today)
            .filter(|p| !state.expirations.iter().any(|e| e.policy_id == p.id))
            .map(|p| ExpiredCandidate {
                policy_id: p.id,
                car_id: p.car_id,
                provider: p.provider.clone(),
                end_date: p.end_date,
            })
            .collect())
    }

    async fn insert_expirations(
        &self,
        records: &[PolicyExpiration],
    ) -> Result<usize, PortError> {
        if self.fail_expiration_inserts.load(Ordering::SeqCst) {
            return Err(PortError::internal("injected store failure"));
        }

        let mut state = self.state.lock().expect("store mutex poisoned");
        // All-or-nothing: reject the whole batch on any duplicate policy id
        if let Some(dup) = records
            .iter()
            .find(|r| state.expirations.iter().any(|e| e.policy_id == r.policy_id))
        {
            return Err(PortError::conflict(format!(
                "unique index violation on policy_expirations.policy_id ({})",
                dup.policy_id
            )));
        }

        state.expirations.extend_from_slice(records);
        Ok(records.len())
    }
}
