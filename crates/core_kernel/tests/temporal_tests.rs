//! Unit tests for the Temporal module
//!
//! Covers Timezone conversions (including daylight-saving transitions),
//! DateRange overlap semantics, and boundary date parsing.

use chrono::{Duration, NaiveDate, TimeZone, Utc};
use core_kernel::temporal::{parse_iso_date, utc_year, DateRange, TemporalError};
use core_kernel::Timezone;
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

mod timezone_conversion {
    use super::*;

    #[test]
    fn end_of_day_uses_standard_offset_before_dst_start() {
        // Bucharest is EET (UTC+2) on 2024-03-30, the day before clocks move
        let tz = Timezone::new(chrono_tz::Europe::Bucharest);
        let expected = Utc.with_ymd_and_hms(2024, 3, 30, 21, 59, 59).unwrap()
            + Duration::nanoseconds(999_999_999);
        assert_eq!(tz.end_of_day(date(2024, 3, 30)), expected);
    }

    #[test]
    fn end_of_day_uses_summer_offset_after_dst_start() {
        // Clocks moved to EEST (UTC+3) on 2024-03-31, so the same wall time
        // maps one hour earlier in UTC than the day before
        let tz = Timezone::new(chrono_tz::Europe::Bucharest);
        let expected = Utc.with_ymd_and_hms(2024, 3, 31, 20, 59, 59).unwrap()
            + Duration::nanoseconds(999_999_999);
        assert_eq!(tz.end_of_day(date(2024, 3, 31)), expected);
    }

    #[test]
    fn end_of_day_in_utc_is_identity_offset() {
        let tz = Timezone::default();
        let expected = Utc.with_ymd_and_hms(2024, 5, 31, 23, 59, 59).unwrap()
            + Duration::nanoseconds(999_999_999);
        assert_eq!(tz.end_of_day(date(2024, 5, 31)), expected);
    }

    #[test]
    fn start_of_day_precedes_end_of_day() {
        let tz = Timezone::new(chrono_tz::Europe::Bucharest);
        let d = date(2024, 6, 15);
        assert!(tz.start_of_day(d) < tz.end_of_day(d));
    }

    #[test]
    fn local_date_respects_zone_boundary() {
        // 22:30Z on June 1st is already June 2nd in Bucharest (UTC+3)
        let tz = Timezone::new(chrono_tz::Europe::Bucharest);
        let instant = Utc.with_ymd_and_hms(2024, 6, 1, 22, 30, 0).unwrap();
        assert_eq!(tz.local_date(instant), date(2024, 6, 2));
    }

    #[test]
    fn parse_known_zone_name() {
        let tz = Timezone::parse("Europe/Bucharest").unwrap();
        assert_eq!(tz, Timezone::new(chrono_tz::Europe::Bucharest));
    }

    #[test]
    fn parse_unknown_zone_name_fails() {
        assert!(matches!(
            Timezone::parse("Mars/Olympus_Mons"),
            Err(TemporalError::UnknownZone(_))
        ));
    }
}

mod date_range {
    use super::*;

    #[test]
    fn creation_rejects_inverted_range() {
        assert!(matches!(
            DateRange::new(date(2024, 6, 1), date(2024, 5, 1)),
            Err(TemporalError::InvalidPeriod { .. })
        ));
    }

    #[test]
    fn single_day_range_is_valid() {
        let r = DateRange::new(date(2024, 6, 1), date(2024, 6, 1)).unwrap();
        assert!(r.contains(date(2024, 6, 1)));
        assert_eq!(r.days(), 0);
    }

    #[test]
    fn overlap_is_inclusive_at_boundaries() {
        let existing = DateRange::new(date(2024, 1, 1), date(2024, 6, 30)).unwrap();
        let touching = DateRange::new(date(2024, 6, 30), date(2024, 12, 31)).unwrap();
        assert!(existing.overlaps(&touching));
    }

    #[test]
    fn adjacent_ranges_do_not_overlap() {
        let existing = DateRange::new(date(2024, 1, 1), date(2024, 6, 30)).unwrap();
        let adjacent = DateRange::new(existing.next_day(), date(2024, 12, 31)).unwrap();
        assert!(!existing.overlaps(&adjacent));
    }

    #[test]
    fn contained_range_overlaps() {
        let outer = DateRange::new(date(2024, 1, 1), date(2024, 12, 31)).unwrap();
        let inner = DateRange::new(date(2024, 5, 1), date(2024, 5, 31)).unwrap();
        assert!(outer.overlaps(&inner));
        assert!(inner.overlaps(&outer));
    }
}

mod boundary_dates {
    use super::*;

    #[test]
    fn parses_iso_dates_only() {
        assert_eq!(parse_iso_date("2024-05-31").unwrap(), date(2024, 5, 31));
        assert!(parse_iso_date("2024-13-01").is_err());
        assert!(parse_iso_date("31-05-2024").is_err());
        assert!(parse_iso_date("").is_err());
    }

    #[test]
    fn utc_year_is_taken_from_the_utc_calendar() {
        let instant = Utc.with_ymd_and_hms(2024, 12, 31, 23, 0, 0).unwrap();
        assert_eq!(utc_year(instant), 2024);
    }
}

proptest! {
    /// Overlap is symmetric for all valid range pairs
    #[test]
    fn overlap_is_symmetric(
        a_start in 0i64..3650,
        a_len in 0i64..365,
        b_start in 0i64..3650,
        b_len in 0i64..365,
    ) {
        let epoch = date(2020, 1, 1);
        let a = DateRange::new(epoch + Duration::days(a_start), epoch + Duration::days(a_start + a_len)).unwrap();
        let b = DateRange::new(epoch + Duration::days(b_start), epoch + Duration::days(b_start + b_len)).unwrap();
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    /// A range always overlaps itself
    #[test]
    fn range_overlaps_itself(start in 0i64..3650, len in 0i64..365) {
        let epoch = date(2020, 1, 1);
        let r = DateRange::new(epoch + Duration::days(start), epoch + Duration::days(start + len)).unwrap();
        prop_assert!(r.overlaps(&r));
    }

    /// end_of_day lands strictly inside the next local day's predecessor:
    /// converting back to local time recovers the original calendar date
    #[test]
    fn end_of_day_roundtrips_local_date(days in 0i64..7300) {
        let tz = Timezone::new(chrono_tz::Europe::Bucharest);
        let d = date(2015, 1, 1) + Duration::days(days);
        let instant = tz.end_of_day(d);
        prop_assert_eq!(tz.local_date(instant), d);
    }
}
