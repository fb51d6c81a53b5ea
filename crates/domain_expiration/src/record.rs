//! Expiration record and candidate projection

use chrono::{DateTime, NaiveDate, Utc};
use core_kernel::{CarId, ExpirationId, PolicyId};
use serde::{Deserialize, Serialize};

/// A durable record that a policy expired
///
/// Created only by the processor, never mutated or deleted. The policy
/// reference is unique across all records, which is what makes concurrent
/// processing safe.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyExpiration {
    pub id: ExpirationId,
    pub policy_id: PolicyId,
    /// End of the policy's last covered day, business-local, as a UTC instant
    pub expired_at: DateTime<Utc>,
}

impl PolicyExpiration {
    pub fn new(policy_id: PolicyId, expired_at: DateTime<Utc>) -> Self {
        Self {
            id: ExpirationId::new(),
            policy_id,
            expired_at,
        }
    }
}

/// A policy eligible for expiration recording this cycle
///
/// Projection of the fields the processor needs: the policy reference for the
/// record, the end date for the timestamp computation, and the car/provider
/// for the audit log line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpiredCandidate {
    pub policy_id: PolicyId,
    pub car_id: CarId,
    pub provider: Option<String>,
    pub end_date: NaiveDate,
}
