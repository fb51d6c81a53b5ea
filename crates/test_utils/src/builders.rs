//! Test Data Builders
//!
//! Builder patterns for constructing test entities with sensible defaults.
//! Tests specify only the relevant fields and take generated values for the
//! rest.

use chrono::NaiveDate;
use core_kernel::{CarId, ClaimId, OwnerId, PolicyId};
use domain_registry::{Car, Claim, Owner, Policy};
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::Name;
use fake::Fake;
use rust_decimal::Decimal;

use crate::fixtures::date;

/// Builder for test owners
pub struct TestOwnerBuilder {
    name: String,
    email: Option<String>,
}

impl Default for TestOwnerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestOwnerBuilder {
    pub fn new() -> Self {
        Self {
            name: Name().fake(),
            email: Some(SafeEmail().fake()),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn without_email(mut self) -> Self {
        self.email = None;
        self
    }

    pub fn build(self) -> Owner {
        Owner {
            id: OwnerId::new(),
            name: self.name,
            email: self.email,
        }
    }
}

/// Builder for test cars
pub struct TestCarBuilder {
    vin: String,
    make: Option<String>,
    model: Option<String>,
    year_of_manufacture: i32,
    owner_id: OwnerId,
}

impl Default for TestCarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestCarBuilder {
    pub fn new() -> Self {
        Self {
            vin: format!("VIN{}", (10000000..99999999).fake::<u32>()),
            make: Some("Dacia".to_string()),
            model: Some("Logan".to_string()),
            year_of_manufacture: 2018,
            owner_id: OwnerId::new(),
        }
    }

    pub fn with_vin(mut self, vin: impl Into<String>) -> Self {
        self.vin = vin.into();
        self
    }

    pub fn with_year(mut self, year: i32) -> Self {
        self.year_of_manufacture = year;
        self
    }

    pub fn with_owner(mut self, owner_id: OwnerId) -> Self {
        self.owner_id = owner_id;
        self
    }

    pub fn build(self) -> Car {
        Car {
            id: CarId::new(),
            vin: self.vin,
            make: self.make,
            model: self.model,
            year_of_manufacture: self.year_of_manufacture,
            owner_id: self.owner_id,
        }
    }
}

/// Builder for test policies
pub struct TestPolicyBuilder {
    car_id: CarId,
    provider: Option<String>,
    start_date: NaiveDate,
    end_date: NaiveDate,
}

impl Default for TestPolicyBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestPolicyBuilder {
    pub fn new() -> Self {
        Self {
            car_id: CarId::new(),
            provider: Some("Groupama".to_string()),
            start_date: date(2024, 1, 1),
            end_date: date(2024, 12, 31),
        }
    }

    pub fn for_car(mut self, car_id: CarId) -> Self {
        self.car_id = car_id;
        self
    }

    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        self.provider = Some(provider.into());
        self
    }

    pub fn without_provider(mut self) -> Self {
        self.provider = None;
        self
    }

    pub fn spanning(mut self, start: NaiveDate, end: NaiveDate) -> Self {
        self.start_date = start;
        self.end_date = end;
        self
    }

    pub fn build(self) -> Policy {
        Policy {
            id: PolicyId::new(),
            car_id: self.car_id,
            provider: self.provider,
            start_date: self.start_date,
            end_date: self.end_date,
        }
    }
}

/// Builder for test claims
pub struct TestClaimBuilder {
    car_id: CarId,
    claim_date: NaiveDate,
    description: String,
    amount: Decimal,
}

impl Default for TestClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TestClaimBuilder {
    pub fn new() -> Self {
        Self {
            car_id: CarId::new(),
            claim_date: date(2024, 3, 10),
            description: "Aripa spate".to_string(),
            amount: Decimal::new(80000, 2),
        }
    }

    pub fn for_car(mut self, car_id: CarId) -> Self {
        self.car_id = car_id;
        self
    }

    pub fn on(mut self, claim_date: NaiveDate) -> Self {
        self.claim_date = claim_date;
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.amount = amount;
        self
    }

    pub fn build(self) -> Claim {
        Claim {
            id: ClaimId::new(),
            car_id: self.car_id,
            claim_date: self.claim_date,
            description: self.description,
            amount: self.amount,
        }
    }
}
