//! Car and owner entities

use core_kernel::{CarId, OwnerId};
use serde::{Deserialize, Serialize};

/// A registered car owner
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Owner {
    pub id: OwnerId,
    pub name: String,
    pub email: Option<String>,
}

impl Owner {
    pub fn new(name: impl Into<String>, email: Option<String>) -> Self {
        Self {
            id: OwnerId::new(),
            name: name.into(),
            email,
        }
    }
}

/// A registered car
///
/// The VIN is stored trimmed and must be unique across all cars.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Car {
    pub id: CarId,
    pub vin: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year_of_manufacture: i32,
    pub owner_id: OwnerId,
}

/// A car joined with its owner's contact details, as returned by the listing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CarWithOwner {
    pub id: CarId,
    pub vin: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year_of_manufacture: i32,
    pub owner_id: OwnerId,
    pub owner_name: String,
    pub owner_email: Option<String>,
}

/// Input for registering a new car
#[derive(Debug, Clone)]
pub struct NewCarData {
    pub vin: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year_of_manufacture: i32,
    pub owner_id: OwnerId,
}
