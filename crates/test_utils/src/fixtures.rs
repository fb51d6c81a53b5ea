//! Pre-built test data
//!
//! Seeds the in-memory store with the standard scenario used across the test
//! suite: two owners, two cars, three policies, and one claim.

use std::sync::Arc;

use chrono::NaiveDate;
use core_kernel::{CarId, OwnerId, PolicyId, Timezone};
use domain_registry::{Car, Claim, Owner, Policy};
use once_cell::sync::Lazy;
use rust_decimal_macros::dec;

use crate::memory::InMemoryStore;

/// The business time zone used throughout the tests (UTC+2, UTC+3 in summer)
pub static TEST_BUSINESS_TZ: Lazy<Timezone> =
    Lazy::new(|| Timezone::new(chrono_tz::Europe::Bucharest));

pub const OWNER1_NAME: &str = "Popescu";
pub const OWNER1_EMAIL: &str = "popescu@test.com";
pub const OWNER2_NAME: &str = "Ciobanu";
pub const OWNER2_EMAIL: &str = "ciobanu@test.com";

pub const VIN1: &str = "VIN11111";
pub const VIN2: &str = "VIN22222";

pub const PROVIDER1: &str = "Groupama";
pub const PROVIDER2: &str = "Allianz";

/// A seeded in-memory store plus the identifiers of everything in it
pub struct SeededRegistry {
    pub store: Arc<InMemoryStore>,
    pub owner1: OwnerId,
    pub owner2: OwnerId,
    pub car1: CarId,
    pub car2: CarId,
    /// Car 1's Groupama policy, 2023-01-01 to 2024-12-31
    pub car1_policy: PolicyId,
}

/// Seeds the standard scenario:
///
/// - owner1 (Popescu) with car1 (VIN11111, Chevrolet Malibu 2015)
/// - owner2 (Ciobanu) with car2 (VIN22222, Hyundai Tucson 2020)
/// - car1: one policy 2023-01-01..2024-12-31 (Groupama)
/// - car2: policies for 2024 and 2025 (Allianz)
/// - car1: one claim on 2023-02-10
pub fn seeded_registry() -> SeededRegistry {
    let store = Arc::new(InMemoryStore::new());

    let owner1 = store.add_owner(Owner::new(OWNER1_NAME, Some(OWNER1_EMAIL.to_string())));
    let owner2 = store.add_owner(Owner::new(OWNER2_NAME, Some(OWNER2_EMAIL.to_string())));

    let car1 = store.add_car(Car {
        id: CarId::new(),
        vin: VIN1.to_string(),
        make: Some("Chevrolet".to_string()),
        model: Some("Malibu".to_string()),
        year_of_manufacture: 2015,
        owner_id: owner1,
    });
    let car2 = store.add_car(Car {
        id: CarId::new(),
        vin: VIN2.to_string(),
        make: Some("Hyundai".to_string()),
        model: Some("Tucson".to_string()),
        year_of_manufacture: 2020,
        owner_id: owner2,
    });

    let car1_policy = store
        .add_policy(Policy {
            id: PolicyId::new(),
            car_id: car1,
            provider: Some(PROVIDER1.to_string()),
            start_date: date(2023, 1, 1),
            end_date: date(2024, 12, 31),
        })
        .id;

    store.add_policy(Policy {
        id: PolicyId::new(),
        car_id: car2,
        provider: Some(PROVIDER2.to_string()),
        start_date: date(2024, 1, 1),
        end_date: date(2024, 12, 31),
    });
    store.add_policy(Policy {
        id: PolicyId::new(),
        car_id: car2,
        provider: Some(PROVIDER2.to_string()),
        start_date: date(2025, 1, 1),
        end_date: date(2025, 12, 31),
    });

    store.add_claim(Claim {
        id: core_kernel::ClaimId::new(),
        car_id: car1,
        claim_date: date(2023, 2, 10),
        description: "Bara fata".to_string(),
        amount: dec!(1200),
    });

    SeededRegistry {
        store,
        owner1,
        owner2,
        car1,
        car2,
        car1_policy,
    }
}

/// Shorthand for building test dates
pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
}
