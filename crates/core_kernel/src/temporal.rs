//! Temporal types for business-timezone date handling
//!
//! Policy and claim dates are plain calendar dates interpreted in the business
//! time zone. This module owns the conversion from a local calendar date to an
//! absolute (UTC) instant, applying the zone's offset rules for that specific
//! date rather than a single cached offset.

use chrono::offset::LocalResult;
use chrono::{DateTime, Datelike, Days, Duration, NaiveDate, NaiveDateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;
use thiserror::Error;

/// Business timezone wrapper
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Tz::from_str(&s)
            .map(Timezone)
            .map_err(|_| serde::de::Error::custom(format!("Invalid timezone: {}", s)))
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Parses an IANA zone name (e.g. "Europe/Bucharest")
    pub fn parse(name: &str) -> Result<Self, TemporalError> {
        Tz::from_str(name)
            .map(Timezone)
            .map_err(|_| TemporalError::UnknownZone(name.to_string()))
    }

    /// Converts a UTC datetime to the local timezone
    pub fn to_local(&self, utc: DateTime<Utc>) -> DateTime<Tz> {
        utc.with_timezone(&self.0)
    }

    /// Returns the local calendar date for the given UTC instant
    pub fn local_date(&self, utc: DateTime<Utc>) -> NaiveDate {
        utc.with_timezone(&self.0).date_naive()
    }

    /// Gets the start of day (00:00:00) in this timezone as UTC
    pub fn start_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        let wall = date
            .and_hms_opt(0, 0, 0)
            .expect("midnight is a valid wall-clock time");
        self.resolve_wall_time(wall, AmbiguousPreference::Earliest)
    }

    /// Gets the end of day (23:59:59.999999999) in this timezone as UTC
    ///
    /// The conversion uses the zone's offset in effect on `date`, so results
    /// differ across a daylight-saving transition.
    pub fn end_of_day(&self, date: NaiveDate) -> DateTime<Utc> {
        let wall = date
            .and_hms_nano_opt(23, 59, 59, 999_999_999)
            .expect("last nanosecond of the day is a valid wall-clock time");
        self.resolve_wall_time(wall, AmbiguousPreference::Latest)
    }

    /// Maps a local wall-clock time to a UTC instant.
    ///
    /// An ambiguous wall time (clocks rolled back) resolves per `preference`;
    /// a wall time skipped by a forward jump resolves to the first instant
    /// after the gap. No real tzdb zone transitions at the day boundary, but
    /// the conversion must not panic on exotic zone data.
    fn resolve_wall_time(&self, wall: NaiveDateTime, preference: AmbiguousPreference) -> DateTime<Utc> {
        let mut probe = wall;
        loop {
            match probe.and_local_timezone(self.0) {
                LocalResult::Single(dt) => return dt.with_timezone(&Utc),
                LocalResult::Ambiguous(earliest, latest) => {
                    let dt = match preference {
                        AmbiguousPreference::Earliest => earliest,
                        AmbiguousPreference::Latest => latest,
                    };
                    return dt.with_timezone(&Utc);
                }
                LocalResult::None => probe += Duration::hours(1),
            }
        }
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::UTC)
    }
}

#[derive(Debug, Clone, Copy)]
enum AmbiguousPreference {
    Earliest,
    Latest,
}

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid period: start {start} must not be after end {end}")]
    InvalidPeriod { start: String, end: String },

    #[error("Unknown time zone: {0}")]
    UnknownZone(String),

    #[error("Invalid date string: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),
}

/// Parses a boundary date string in `YYYY-MM-DD` form
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, TemporalError> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| TemporalError::InvalidDate(s.to_string()))
}

/// Returns the calendar year of the given UTC instant
pub fn utc_year(now: DateTime<Utc>) -> i32 {
    now.year()
}

/// Represents an inclusive date range for policy periods
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, TemporalError> {
        if start > end {
            return Err(TemporalError::InvalidPeriod {
                start: start.to_string(),
                end: end.to_string(),
            });
        }
        Ok(Self { start, end })
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Inclusive overlap test: two ranges overlap when each starts no later
    /// than the other ends. Adjacent ranges sharing a boundary date overlap.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && self.end >= other.start
    }

    pub fn days(&self) -> i64 {
        (self.end - self.start).num_days()
    }

    /// The day after the range ends, useful for constructing adjacent ranges
    pub fn next_day(&self) -> NaiveDate {
        self.end + Days::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_end_of_day_fixed_offset() {
        // Bucharest is EEST (UTC+3) at the end of May
        let tz = Timezone::new(chrono_tz::Europe::Bucharest);
        let date = NaiveDate::from_ymd_opt(2024, 5, 31).unwrap();
        let expected = Utc.with_ymd_and_hms(2024, 5, 31, 20, 59, 59).unwrap()
            + Duration::nanoseconds(999_999_999);
        assert_eq!(tz.end_of_day(date), expected);
    }

    #[test]
    fn test_date_range_rejects_inverted() {
        let start = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let end = NaiveDate::from_ymd_opt(2024, 5, 1).unwrap();
        assert!(DateRange::new(start, end).is_err());
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(
            parse_iso_date("2024-06-01").unwrap(),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
        assert!(parse_iso_date("01/06/2024").is_err());
        assert!(parse_iso_date("not-a-date").is_err());
    }
}
