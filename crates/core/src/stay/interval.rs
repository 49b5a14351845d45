//! Half-open stay intervals.
//!
//! A stay occupies `[check_in, check_out)`: the guest sleeps the night of
//! `check_in` and leaves on the morning of `check_out`, so a room checked out
//! on a date can be checked into again the same day.

use chrono::{Datelike, Duration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when building a stay.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StayError {
    /// Check-in is not strictly before checkout.
    #[error("Invalid date range: check-in {check_in} must be before checkout {check_out}")]
    InvalidDateRange {
        /// Check-in date.
        check_in: NaiveDate,
        /// Checkout date.
        check_out: NaiveDate,
    },

    /// Shifting the stay left the supported calendar range.
    #[error("Date out of range")]
    OutOfRange,
}

/// A non-empty half-open date interval.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stay {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl Stay {
    /// Creates a stay.
    ///
    /// # Errors
    ///
    /// Returns `StayError::InvalidDateRange` unless `check_in < check_out`.
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, StayError> {
        if check_in >= check_out {
            return Err(StayError::InvalidDateRange {
                check_in,
                check_out,
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// First night of the stay.
    #[must_use]
    pub const fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    /// Departure date (not a night of the stay).
    #[must_use]
    pub const fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of nights, always at least one.
    #[must_use]
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Returns true if the two stays share at least one night.
    #[must_use]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }

    /// Returns true if `date` is one of the nights of this stay.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.check_in <= date && date < self.check_out
    }

    /// Counts the nights of this stay falling inside `[start, end)`.
    ///
    /// Returns 0 when the intervals do not intersect.
    #[must_use]
    pub fn nights_within(&self, start: NaiveDate, end: NaiveDate) -> i64 {
        let from = self.check_in.max(start);
        let to = self.check_out.min(end);
        (to - from).num_days().max(0)
    }

    /// Returns the stay extended by `days` on both sides.
    ///
    /// # Errors
    ///
    /// Returns `StayError::OutOfRange` if the result leaves the calendar.
    pub fn widened(&self, days: i64) -> Result<Self, StayError> {
        let delta = Duration::try_days(days).ok_or(StayError::OutOfRange)?;
        let check_in = self
            .check_in
            .checked_sub_signed(delta)
            .ok_or(StayError::OutOfRange)?;
        let check_out = self
            .check_out
            .checked_add_signed(delta)
            .ok_or(StayError::OutOfRange)?;
        Self::new(check_in, check_out)
    }

    /// Returns the same-length stay moved by `days` (negative moves earlier).
    ///
    /// # Errors
    ///
    /// Returns `StayError::OutOfRange` if the result leaves the calendar.
    pub fn shifted(&self, days: i64) -> Result<Self, StayError> {
        let delta = Duration::try_days(days).ok_or(StayError::OutOfRange)?;
        let check_in = self
            .check_in
            .checked_add_signed(delta)
            .ok_or(StayError::OutOfRange)?;
        let check_out = self
            .check_out
            .checked_add_signed(delta)
            .ok_or(StayError::OutOfRange)?;
        Self::new(check_in, check_out)
    }

    /// Iterates over every night of the stay.
    pub fn each_night(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.check_in
            .iter_days()
            .take_while(move |day| *day < self.check_out)
    }

    /// Counts (weekday, weekend) nights. Saturday and Sunday nights are weekend nights.
    #[must_use]
    pub fn weekday_weekend_split(&self) -> (i64, i64) {
        self.each_night()
            .fold((0, 0), |(weekdays, weekends), night| {
                match night.weekday() {
                    Weekday::Sat | Weekday::Sun => (weekdays, weekends + 1),
                    _ => (weekdays + 1, weekends),
                }
            })
    }
}

impl std::fmt::Display for Stay {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} to {}", self.check_in, self.check_out)
    }
}
