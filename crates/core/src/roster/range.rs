use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::DateRangeError;

/// A date range with inclusive start and end dates.
///
/// Range keys for the shift caches are derived from calendar-date boundaries,
/// never from full timestamps, so repeated loads of the same visible window
/// normalize to the same key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    /// Creates a new date range, validating that start <= end.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, DateRangeError> {
        if start > end {
            return Err(DateRangeError::InvalidRange);
        }
        Ok(Self { start, end })
    }

    /// Creates a date range for an entire month.
    ///
    /// # Panics
    /// Panics if the year/month combination is invalid.
    pub fn month(year: i32, month: u32) -> Self {
        let start = NaiveDate::from_ymd_opt(year, month, 1)
            .expect("Invalid year/month for DateRange::month");

        let end = if month == 12 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month + 1, 1)
        }
        .expect("Invalid year/month for DateRange::month end calculation")
        .pred_opt()
        .expect("Failed to get last day of month");

        Self { start, end }
    }

    /// Creates a date range for the ISO week containing the given date.
    ///
    /// ISO weeks start on Monday and end on Sunday.
    pub fn week(date: NaiveDate) -> Self {
        let days_from_monday = date.weekday().num_days_from_monday();
        let start = date - chrono::Duration::days(days_from_monday as i64);
        let end = start + chrono::Duration::days(6);

        Self { start, end }
    }

    /// Returns this range widened by `days` on each side.
    ///
    /// Range loads pad the visible window so small scrolls stay within an
    /// already-fetched slot; exact single-day and week views skip the pad.
    pub fn padded(&self, days: i64) -> Self {
        Self {
            start: self.start - chrono::Duration::days(days),
            end: self.end + chrono::Duration::days(days),
        }
    }

    /// Returns true if the given date falls within this range (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns true if this range and `other` share at least one date.
    pub fn overlaps(&self, other: &DateRange) -> bool {
        self.start <= other.end && other.start <= self.end
    }
}
