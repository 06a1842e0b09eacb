//! Core dataset types
//!
//! - `TweetRecord`: one normalized row of the input file
//! - `normalize_handle`: canonical lowercase account handles
//! - `parse_posted_at`: day-first parsing of mixed timestamp formats

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// A single normalized tweet metrics row
///
/// Invariants: `handle` is always lowercase, and `posted_at` was parsed
/// successfully (rows that fail to parse abort the load instead).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TweetRecord {
    /// Account handle, lowercased
    pub handle: String,
    /// When the tweet was posted
    pub posted_at: NaiveDateTime,
    /// Like count for the tweet
    pub likes: i64,
    /// Share (retweet) count for the tweet
    pub shares: i64,
}

impl TweetRecord {
    /// Create a record, normalizing the handle
    pub fn new(handle: &str, posted_at: NaiveDateTime, likes: i64, shares: i64) -> Self {
        Self {
            handle: normalize_handle(handle),
            posted_at,
            likes,
            shares,
        }
    }

    /// Calendar date of the tweet, discarding time of day
    pub fn date(&self) -> NaiveDate {
        self.posted_at.date()
    }
}

/// Map an account handle to its canonical lowercase form
///
/// Idempotent: normalizing an already-normalized handle is a no-op.
pub fn normalize_handle(handle: &str) -> String {
    handle.trim().to_lowercase()
}

/// Timestamp formats accepted in the dataset, tried in order.
///
/// Slash- and dash-separated forms are interpreted day-first, so
/// "01/02/2023" is 1 February 2023, not 2 January.
const DATETIME_FORMATS: [&str; 6] = [
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 4] = ["%d/%m/%Y", "%d-%m-%Y", "%Y-%m-%d", "%Y/%m/%d"];

/// Parse a timestamp string in any of the accepted formats
///
/// Returns `None` when no format matches; the loader turns that into a
/// startup-fatal error carrying the line number.
pub fn parse_posted_at(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();

    for fmt in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Some(dt);
        }
    }

    // Date-only rows land at midnight
    for fmt in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(value, fmt) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    // RFC 3339 with an offset; drop the offset and keep wall-clock time
    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_local());
    }

    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_normalize_handle_lowercases() {
        assert_eq!(normalize_handle("TaylorSwift13"), "taylorswift13");
        assert_eq!(normalize_handle("  Cristiano "), "cristiano");
    }

    #[test]
    fn test_normalize_handle_idempotent() {
        let once = normalize_handle("KimKardashian");
        assert_eq!(normalize_handle(&once), once);
    }

    #[test]
    fn test_parse_day_first_slash() {
        // Ambiguous day/month resolves day-first
        let dt = parse_posted_at("01/02/2023").unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2023, 2, 1).unwrap());
    }

    #[test]
    fn test_parse_day_first_with_time() {
        let dt = parse_posted_at("03/08/2017 21:30:11").unwrap();
        assert_eq!(dt.day(), 3);
        assert_eq!(dt.month(), 8);
        assert_eq!(dt.hour(), 21);
        assert_eq!(dt.second(), 11);
    }

    #[test]
    fn test_parse_iso_8601() {
        let dt = parse_posted_at("2023-02-01 12:00:00").unwrap();
        assert_eq!(dt.date(), NaiveDate::from_ymd_opt(2023, 2, 1).unwrap());

        let dt = parse_posted_at("2023-02-01T12:00:00").unwrap();
        assert_eq!(dt.hour(), 12);
    }

    #[test]
    fn test_parse_date_only_is_midnight() {
        let dt = parse_posted_at("2023-02-01").unwrap();
        assert_eq!(dt.hour(), 0);
        assert_eq!(dt.minute(), 0);
    }

    #[test]
    fn test_parse_rfc3339() {
        let dt = parse_posted_at("2023-02-01T09:15:00+02:00").unwrap();
        assert_eq!(dt.hour(), 9);
    }

    #[test]
    fn test_parse_garbage_is_none() {
        assert!(parse_posted_at("not a date").is_none());
        assert!(parse_posted_at("").is_none());
        assert!(parse_posted_at("32/13/2023").is_none());
    }

    #[test]
    fn test_record_date_discards_time() {
        let record = TweetRecord::new(
            "cristiano",
            parse_posted_at("01/02/2023 23:59:59").unwrap(),
            100,
            10,
        );
        assert_eq!(record.date(), NaiveDate::from_ymd_opt(2023, 2, 1).unwrap());
    }
}
