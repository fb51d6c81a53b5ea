//! Chronological car history
//!
//! Merges a car's policies (keyed by start date) and claims (keyed by claim
//! date) into a single sequence ascending by date.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::claim::Claim;
use crate::policy::Policy;

/// One entry in a car's history, either a policy period or a claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum HistoryEntry {
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

impl HistoryEntry {
    /// The date this entry is ordered by
    pub fn date(&self) -> NaiveDate {
        match self {
            HistoryEntry::Policy { start_date, .. } => *start_date,
            HistoryEntry::Claim { claim_date, .. } => *claim_date,
        }
    }
}

/// Merges policies and claims into one ascending-by-date sequence.
///
/// The sort is stable, so same-date policies come before same-date claims.
pub fn merge_history(policies: Vec<Policy>, claims: Vec<Claim>) -> Vec<HistoryEntry> {
    let mut entries: Vec<HistoryEntry> = policies
        .into_iter()
        .map(|p| HistoryEntry::Policy {
            start_date: p.start_date,
            end_date: p.end_date,
            provider: p.provider,
        })
        .chain(claims.into_iter().map(|c| HistoryEntry::Claim {
            claim_date: c.claim_date,
            description: c.description,
            amount: c.amount,
        }))
        .collect();

    entries.sort_by_key(HistoryEntry::date);
    entries
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::{CarId, ClaimId, PolicyId};
    use rust_decimal::Decimal;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn policy(start: NaiveDate, end: NaiveDate) -> Policy {
        Policy {
            id: PolicyId::new(),
            car_id: CarId::new(),
            provider: Some("Allstate".to_string()),
            start_date: start,
            end_date: end,
        }
    }

    fn claim(on: NaiveDate) -> Claim {
        Claim {
            id: ClaimId::new(),
            car_id: CarId::new(),
            claim_date: on,
            description: "Rear bumper".to_string(),
            amount: Decimal::new(150000, 2),
        }
    }

    #[test]
    fn merges_ascending_by_date() {
        let merged = merge_history(
            vec![
                policy(date(2024, 1, 1), date(2024, 6, 30)),
                policy(date(2023, 1, 1), date(2023, 12, 31)),
            ],
            vec![claim(date(2024, 3, 15)), claim(date(2023, 7, 4))],
        );

        let dates: Vec<NaiveDate> = merged.iter().map(HistoryEntry::date).collect();
        assert_eq!(
            dates,
            vec![
                date(2023, 1, 1),
                date(2023, 7, 4),
                date(2024, 1, 1),
                date(2024, 3, 15)
            ]
        );
    }

    #[test]
    fn empty_inputs_produce_empty_history() {
        assert!(merge_history(vec![], vec![]).is_empty());
    }

    #[test]
    fn same_date_policy_sorts_before_claim() {
        let d = date(2024, 5, 1);
        let merged = merge_history(vec![policy(d, date(2024, 12, 31))], vec![claim(d)]);
        assert!(matches!(merged[0], HistoryEntry::Policy { .. }));
        assert!(matches!(merged[1], HistoryEntry::Claim { .. }));
    }
}
