//! Half-open capture date ranges.

use chrono::{NaiveDate, NaiveDateTime};

use crate::DateRangeError;

/// Lowest accepted year (inclusive).
const MIN_YEAR: i32 = 1900;

/// Highest accepted year (exclusive).
const MAX_YEAR: i32 = 3000;

/// A half-open range of capture timestamps, `[start, end)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DateRange {
    /// Start timestamp (inclusive).
    pub start: NaiveDateTime,
    /// End timestamp (exclusive).
    pub end: NaiveDateTime,
}

impl DateRange {
    /// Creates a new date range, validating that start < end.
    ///
    /// # Errors
    ///
    /// Returns an error if start >= end.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Result<Self, DateRangeError> {
        if start >= end {
            return Err(DateRangeError::Empty { start, end });
        }
        Ok(Self { start, end })
    }

    /// Creates the range covering one calendar year, from January 1st
    /// midnight up to (but excluding) January 1st midnight of the next year.
    ///
    /// # Errors
    ///
    /// Returns an error if the year is outside `1900..3000`.
    pub fn year(year: i32) -> Result<Self, DateRangeError> {
        if !(MIN_YEAR..MAX_YEAR).contains(&year) {
            return Err(DateRangeError::YearOutOfBounds(year));
        }
        let start = new_year(year).ok_or(DateRangeError::YearOutOfBounds(year))?;
        let end = new_year(year + 1).ok_or(DateRangeError::YearOutOfBounds(year))?;
        Self::new(start, end)
    }

    /// Returns true if the range contains the given timestamp.
    #[must_use]
    pub fn contains(&self, timestamp: NaiveDateTime) -> bool {
        self.start <= timestamp && timestamp < self.end
    }

    /// Returns true if the timestamp lies before the start of the range.
    #[must_use]
    pub fn precedes(&self, timestamp: NaiveDateTime) -> bool {
        timestamp < self.start
    }
}

impl std::fmt::Display for DateRange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.start, self.end)
    }
}

fn new_year(year: i32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, 1, 1)?.and_hms_opt(0, 0, 0)
}
