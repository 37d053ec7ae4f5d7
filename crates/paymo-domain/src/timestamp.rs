//! Transaction timestamps
//!
//! Timestamps use the `YYYY-MM-DD HH:MM:SS` layout of the payment feed. A value
//! that fails to parse is not fatal: callers collapse the error to
//! [`Timestamp::sentinel`] at the boundary where a timestamp is required.

use chrono::{NaiveDate, NaiveDateTime};
use std::fmt;
use thiserror::Error;

/// Layout of timestamps in batch and stream files
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Error returned when a timestamp field cannot be parsed
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid timestamp '{raw}': {reason}")]
pub struct TimestampError {
    /// The raw field as read from input
    pub raw: String,
    /// Parser diagnostic
    pub reason: String,
}

/// A naive (zone-less) date-time attached to a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    /// Parse a timestamp field
    ///
    /// # Examples
    ///
    /// ```
    /// use paymo_domain::Timestamp;
    ///
    /// let ts = Timestamp::parse("2016-11-02 09:49:29").unwrap();
    /// assert_eq!(ts.to_string(), "2016-11-02 09:49:29");
    /// assert!(Timestamp::parse("yesterday").is_err());
    /// ```
    pub fn parse(raw: &str) -> Result<Self, TimestampError> {
        NaiveDateTime::parse_from_str(raw.trim(), TIMESTAMP_FORMAT)
            .map(Self)
            .map_err(|e| TimestampError {
                raw: raw.to_string(),
                reason: e.to_string(),
            })
    }

    /// The minimum date used in place of unparseable timestamps
    ///
    /// This is `0001-01-01 00:00:00`, the earliest proleptic Gregorian date
    /// representable with a positive year.
    pub fn sentinel() -> Self {
        let min = NaiveDate::from_ymd_opt(1, 1, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .unwrap_or(NaiveDateTime::MIN);
        Self(min)
    }

    /// Whether this is the sentinel value
    pub fn is_sentinel(&self) -> bool {
        *self == Self::sentinel()
    }

    /// Absolute distance to `other` in whole days (truncated)
    pub fn days_between(&self, other: &Timestamp) -> i64 {
        (self.0 - other.0).num_days().abs()
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_timestamp() {
        let ts = Timestamp::parse("2016-11-02 09:38:53").unwrap();
        assert_eq!(ts.to_string(), "2016-11-02 09:38:53");
    }

    #[test]
    fn test_parse_tolerates_surrounding_whitespace() {
        assert!(Timestamp::parse(" 2016-11-02 09:38:53 ").is_ok());
    }

    #[test]
    fn test_parse_invalid_timestamp() {
        let err = Timestamp::parse("2016/11/02").unwrap_err();
        assert_eq!(err.raw, "2016/11/02");
        assert!(Timestamp::parse("").is_err());
        assert!(Timestamp::parse("2016-13-40 99:00:00").is_err());
    }

    #[test]
    fn test_sentinel_display() {
        let ts = Timestamp::sentinel();
        assert!(ts.is_sentinel());
        assert_eq!(ts.to_string(), "0001-01-01 00:00:00");
    }

    #[test]
    fn test_sentinel_is_earlier_than_real_dates() {
        let real = Timestamp::parse("1970-01-01 00:00:00").unwrap();
        assert!(Timestamp::sentinel() < real);
    }

    #[test]
    fn test_days_between_is_symmetric_and_truncated() {
        let a = Timestamp::parse("2016-01-01 00:00:00").unwrap();
        let b = Timestamp::parse("2016-01-03 23:59:59").unwrap();
        assert_eq!(a.days_between(&b), 2);
        assert_eq!(b.days_between(&a), 2);
        assert_eq!(a.days_between(&a), 0);
    }

    #[test]
    fn test_days_between_across_a_year() {
        let a = Timestamp::parse("2015-01-01 12:00:00").unwrap();
        let b = Timestamp::parse("2016-01-01 12:00:00").unwrap();
        assert_eq!(a.days_between(&b), 365);
    }
}
