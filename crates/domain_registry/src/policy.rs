//! Insurance policy entity

use chrono::NaiveDate;
use core_kernel::{CarId, DateRange, PolicyId};
use serde::{Deserialize, Serialize};

/// An insurance policy covering a car for an inclusive date range
///
/// Start and end are calendar dates interpreted in the business time zone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Policy {
    pub id: PolicyId,
    pub car_id: CarId,
    pub provider: Option<String>,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

impl Policy {
    pub fn new(car_id: CarId, range: DateRange, provider: Option<String>) -> Self {
        Self {
            id: PolicyId::new(),
            car_id,
            provider,
            start_date: range.start,
            end_date: range.end,
        }
    }

    /// The policy's coverage period as a range
    pub fn period(&self) -> DateRange {
        // Invariant: start_date <= end_date is enforced at creation
        DateRange {
            start: self.start_date,
            end: self.end_date,
        }
    }

    /// Returns true if the policy covers the given date
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.period().contains(date)
    }
}

/// Input for creating a new policy
#[derive(Debug, Clone)]
pub struct NewPolicyData {
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub provider: Option<String>,
}
