//! Property-Based Test Generators
//!
//! Proptest strategies for generating random test data that maintains
//! domain invariants.

use chrono::{Duration, NaiveDate};
use core_kernel::DateRange;
use proptest::prelude::*;
use rust_decimal::Decimal;

const EPOCH_Y: i32 = 2015;

fn epoch() -> NaiveDate {
    NaiveDate::from_ymd_opt(EPOCH_Y, 1, 1).expect("valid epoch")
}

/// Strategy for generating calendar dates within a ten-year window
pub fn date_strategy() -> impl Strategy<Value = NaiveDate> {
    (0i64..3650).prop_map(|d| epoch() + Duration::days(d))
}

/// Strategy for generating valid (start <= end) date ranges up to a year long
pub fn date_range_strategy() -> impl Strategy<Value = DateRange> {
    (0i64..3650, 0i64..365).prop_map(|(start, len)| {
        let start = epoch() + Duration::days(start);
        DateRange::new(start, start + Duration::days(len)).expect("start <= end by construction")
    })
}

/// Strategy for generating positive claim amounts with two decimal places
pub fn claim_amount_strategy() -> impl Strategy<Value = Decimal> {
    (1i64..10_000_000).prop_map(|minor| Decimal::new(minor, 2))
}

/// Strategy for generating provider labels, including absent ones
pub fn provider_strategy() -> impl Strategy<Value = Option<String>> {
    prop_oneof![
        Just(None),
        Just(Some("Groupama".to_string())),
        Just(Some("Allianz".to_string())),
        Just(Some("CityInsurance".to_string())),
    ]
}
