//! Registry Store Port
//!
//! Defines the store operations the registry service needs. Two adapters
//! implement this trait: the PostgreSQL adapter in `infra_db` and the
//! in-memory store in `test_utils`.

use async_trait::async_trait;
use chrono::NaiveDate;

use core_kernel::{CarId, DomainPort, OwnerId, PortError};

use crate::car::{Car, CarWithOwner};
use crate::claim::Claim;
use crate::policy::Policy;

/// Store operations for cars, owners, policies, and claims
#[async_trait]
pub trait RegistryStore: DomainPort {
    /// Lists all cars joined with their owner's name and email
    async fn list_cars(&self) -> Result<Vec<CarWithOwner>, PortError>;

    /// Returns true if a car with the given id exists
    async fn car_exists(&self, id: CarId) -> Result<bool, PortError>;

    /// Returns true if an owner with the given id exists
    async fn owner_exists(&self, id: OwnerId) -> Result<bool, PortError>;

    /// Returns true if any car is registered with the given VIN
    async fn vin_exists(&self, vin: &str) -> Result<bool, PortError>;

    /// Persists a new car
    async fn insert_car(&self, car: &Car) -> Result<(), PortError>;

    /// All policies belonging to the given car
    async fn policies_for_car(&self, car_id: CarId) -> Result<Vec<Policy>, PortError>;

    /// Returns true if some policy of the car covers the given date
    async fn has_policy_covering(&self, car_id: CarId, date: NaiveDate) -> Result<bool, PortError>;

    /// Persists a new policy
    async fn insert_policy(&self, policy: &Policy) -> Result<(), PortError>;

    /// All claims filed against the given car
    async fn claims_for_car(&self, car_id: CarId) -> Result<Vec<Claim>, PortError>;

    /// Persists a new claim
    async fn insert_claim(&self, claim: &Claim) -> Result<(), PortError>;
}
