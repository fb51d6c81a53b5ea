//! The idempotent expiration processor

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use core_kernel::{PortError, Timezone};

use crate::ports::ExpirationStore;
use crate::record::PolicyExpiration;

/// Runs one expiration cycle and returns the number of newly recorded
/// expirations.
///
/// Converts `now` to the business-local calendar date, selects policies whose
/// end date has passed and that lack a record, computes each one's precise
/// local end-of-day expiration instant using the zone's offset rules for that
/// date, and persists one record per policy in a single batch.
///
/// A uniqueness conflict on the batch write means another concurrent run
/// already recorded some of the same policies; the entire batch is abandoned
/// with a warning and the call returns 0. Step one of the next invocation
/// re-selects anything genuinely unprocessed, so nothing is lost and nothing
/// is recorded twice.
///
/// # Errors
///
/// Any store error other than the uniqueness conflict propagates unhandled;
/// the scheduler isolates failures between runs.
pub async fn process_once(
    store: &dyn ExpirationStore,
    now: DateTime<Utc>,
    business_tz: Timezone,
) -> Result<usize, PortError> {
    let today = business_tz.local_date(now);

    let candidates = store.find_expired_unrecorded(today).await?;
    if candidates.is_empty() {
        return Ok(0);
    }

    let records: Vec<PolicyExpiration> = candidates
        .iter()
        .map(|c| PolicyExpiration::new(c.policy_id, business_tz.end_of_day(c.end_date)))
        .collect();

    let saved = match store.insert_expirations(&records).await {
        Ok(saved) => saved,
        Err(err) if err.is_conflict() => {
            // Another run won the race for at least one of these policies.
            // Defer the whole batch to the next cycle.
            warn!(error = %err, "Skipped duplicate expiration(s) due to unique index");
            return Ok(0);
        }
        Err(err) => return Err(err),
    };

    // Log only after the batch committed
    for (candidate, record) in candidates.iter().zip(&records) {
        info!(
            policy_id = %candidate.policy_id,
            car_id = %candidate.car_id,
            provider = candidate.provider.as_deref().unwrap_or("<none>"),
            expired_at = %record.expired_at,
            "Policy expired"
        );
    }

    Ok(saved)
}
