//! Date handling for measurement queries.
//!
//! Measurement dates are stored as `YYYY-MM-DD` text, so lexicographic order
//! is chronological order. Windows keep their bounds as strings and are bound
//! straight into SQL comparisons.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

/// Storage format of `measurement.date`.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Length of the trailing window used by the "last 12 months" queries.
pub const ROLLING_WINDOW_DAYS: i64 = 365;

/// An inclusive date window over measurement dates.
///
/// `end == None` leaves the window open towards the latest measurement.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateWindow {
    pub start: String,
    pub end: Option<String>,
}

impl DateWindow {
    /// Window starting at `start` with no upper bound.
    pub fn starting(start: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: None,
        }
    }

    /// Window covering `start..=end`.
    pub fn between(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: Some(end.into()),
        }
    }

    /// The trailing 365-day window ending at `latest`.
    ///
    /// `latest` must be a `YYYY-MM-DD` date; the cutoff day itself is
    /// included.
    pub fn trailing_year(latest: &str) -> Result<Self, TimeParseError> {
        let cutoff = cutoff_date(latest)?;
        Ok(Self::starting(cutoff.format(DATE_FORMAT).to_string()))
    }

    /// Whether a stored date string falls in this window.
    pub fn contains(&self, date: &str) -> bool {
        date >= self.start.as_str() && self.end.as_deref().is_none_or(|end| date <= end)
    }
}

/// Parse a stored measurement date.
pub fn parse_date(s: &str) -> Result<NaiveDate, TimeParseError> {
    NaiveDate::parse_from_str(s, DATE_FORMAT)
        .map_err(|_| TimeParseError::InvalidFormat(s.to_string()))
}

/// The date exactly [`ROLLING_WINDOW_DAYS`] before `latest`.
pub fn cutoff_date(latest: &str) -> Result<NaiveDate, TimeParseError> {
    let latest = parse_date(latest)?;
    latest
        .checked_sub_signed(Duration::days(ROLLING_WINDOW_DAYS))
        .ok_or_else(|| TimeParseError::OutOfRange(latest.to_string()))
}

#[derive(Debug, thiserror::Error)]
pub enum TimeParseError {
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    #[error("Date out of range: {0}")]
    OutOfRange(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_year_cutoff() {
        let window = DateWindow::trailing_year("2017-08-23").unwrap();
        assert_eq!(window.start, "2016-08-23");
        assert_eq!(window.end, None);
    }

    #[test]
    fn test_trailing_year_across_leap_day() {
        // 2016 is a leap year, so 365 days back from 2016-03-01 is 2015-03-02.
        let window = DateWindow::trailing_year("2016-03-01").unwrap();
        assert_eq!(window.start, "2015-03-02");
    }

    #[test]
    fn test_trailing_year_rejects_garbage() {
        assert!(matches!(
            DateWindow::trailing_year("23/08/2017"),
            Err(TimeParseError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_contains_is_inclusive() {
        let window = DateWindow::between("2017-01-01", "2017-01-31");
        assert!(window.contains("2017-01-01"));
        assert!(window.contains("2017-01-15"));
        assert!(window.contains("2017-01-31"));
        assert!(!window.contains("2016-12-31"));
        assert!(!window.contains("2017-02-01"));
    }

    #[test]
    fn test_open_window() {
        let window = DateWindow::starting("2016-08-23");
        assert!(window.contains("2017-08-23"));
        assert!(!window.contains("2016-08-22"));
    }
}
