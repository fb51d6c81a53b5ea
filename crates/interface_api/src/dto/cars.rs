//! Car registry DTOs
//!
//! Dates cross the HTTP boundary as `YYYY-MM-DD` strings. Policy dates are
//! deserialized into `NaiveDate`, so a malformed date is rejected at the
//! request layer. The claim date stays a raw string: the service treats an
//! unparsable claim date as a rejected payload, not a malformed request.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use domain_registry::{CarWithOwner, HistoryEntry};

#[derive(Debug, Serialize)]
pub struct CarResponse {
    pub id: Uuid,
    pub vin: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year_of_manufacture: i32,
    pub owner_id: Uuid,
    pub owner_name: String,
    pub owner_email: Option<String>,
}

impl From<CarWithOwner> for CarResponse {
    fn from(car: CarWithOwner) -> Self {
        Self {
            id: *car.id.as_uuid(),
            vin: car.vin,
            make: car.make,
            model: car.model,
            year_of_manufacture: car.year_of_manufacture,
            owner_id: *car.owner_id.as_uuid(),
            owner_name: car.owner_name,
            owner_email: car.owner_email,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct CreateCarRequest {
    pub vin: String,
    pub make: Option<String>,
    pub model: Option<String>,
    pub year_of_manufacture: i32,
    pub owner_id: Uuid,
}

#[derive(Debug, Deserialize)]
pub struct CreatePolicyRequest {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub provider: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CreateClaimRequest {
    pub claim_date: String,
    pub description: String,
    pub amount: Decimal,
}

#[derive(Debug, Deserialize)]
pub struct ValidityParams {
    pub date: NaiveDate,
}

#[derive(Debug, Serialize)]
pub struct ValidityResponse {
    pub car_id: Uuid,
    pub date: NaiveDate,
    pub valid: bool,
}

#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub id: Uuid,
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HistoryEntryResponse {
    Policy {
        start_date: NaiveDate,
        end_date: NaiveDate,
        provider: Option<String>,
    },
    Claim {
        claim_date: NaiveDate,
        description: String,
        amount: Decimal,
    },
}

impl From<HistoryEntry> for HistoryEntryResponse {
    fn from(entry: HistoryEntry) -> Self {
        match entry {
            HistoryEntry::Policy {
                start_date,
                end_date,
                provider,
            } => HistoryEntryResponse::Policy {
                start_date,
                end_date,
                provider,
            },
            HistoryEntry::Claim {
                claim_date,
                description,
                amount,
            } => HistoryEntryResponse::Claim {
                claim_date,
                description,
                amount,
            },
        }
    }
}
