//! Insurance claim entity

use chrono::NaiveDate;
use core_kernel::{CarId, ClaimId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A claim filed against a car
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Claim {
    pub id: ClaimId,
    pub car_id: CarId,
    pub claim_date: NaiveDate,
    pub description: String,
    pub amount: Decimal,
}

/// Input for filing a new claim
///
/// The claim date arrives as the raw boundary string; the service parses it
/// and treats an unparsable date as a rejected payload, not a hard failure.
#[derive(Debug, Clone)]
pub struct NewClaimData {
    pub claim_date: String,
    pub description: String,
    pub amount: Decimal,
}
