//! Reservation search query.
//!
//! Blank inputs mean "any". Names match case-insensitively as substrings, and
//! a date range matches every reservation sharing at least one night with it.

use chrono::{Days, NaiveDate};
use hotelres_shared::types::{CodeError, ReservationCode, RoomCode};
use thiserror::Error;

use crate::stay::{Stay, StayError};

/// Errors raised when building a search query.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchError {
    /// A room or reservation code is malformed.
    #[error(transparent)]
    InvalidCode(#[from] CodeError),

    /// The date range is reversed.
    #[error(transparent)]
    InvalidDateRange(#[from] StayError),
}

/// Reservation search criteria; `None` fields are not filtered on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReservationQuery {
    /// Substring of the guest first name.
    pub first_name: Option<String>,
    /// Substring of the guest last name.
    pub last_name: Option<String>,
    /// Exact room.
    pub room: Option<RoomCode>,
    /// Exact reservation number.
    pub code: Option<ReservationCode>,
    /// Nights that must overlap the reservation.
    pub dates: Option<Stay>,
}

impl ReservationQuery {
    /// Builds a query from raw prompt input.
    ///
    /// `from` and `to` are inclusive calendar days; a single date searches
    /// that one night.
    ///
    /// # Errors
    ///
    /// Returns an error for malformed codes or a reversed date range.
    pub fn parse(
        first_name: &str,
        last_name: &str,
        room: &str,
        code: &str,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Self, SearchError> {
        let room = non_blank(room).map(RoomCode::parse).transpose()?;
        let code = non_blank(code)
            .map(str::parse::<ReservationCode>)
            .transpose()?;
        let dates = match (from, to) {
            (None, None) => None,
            (Some(day), None) | (None, Some(day)) => Some(single_night(day)?),
            (Some(from), Some(to)) => {
                let end = to.checked_add_days(Days::new(1)).ok_or(StayError::OutOfRange)?;
                Some(Stay::new(from, end)?)
            }
        };

        Ok(Self {
            first_name: non_blank(first_name).map(str::to_string),
            last_name: non_blank(last_name).map(str::to_string),
            room,
            code,
            dates,
        })
    }

    /// Returns true if no criterion is set.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.room.is_none()
            && self.code.is_none()
            && self.dates.is_none()
    }
}

fn non_blank(raw: &str) -> Option<&str> {
    let trimmed = raw.trim();
    (!trimmed.is_empty() && !trimmed.eq_ignore_ascii_case("any")).then_some(trimmed)
}

fn single_night(day: NaiveDate) -> Result<Stay, StayError> {
    let next = day.checked_add_days(Days::new(1)).ok_or(StayError::OutOfRange)?;
    Stay::new(day, next)
}

/// Builds a `LIKE` pattern matching `needle` anywhere, escaping wildcards.
#[must_use]
pub fn like_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_blank_inputs_are_unrestricted() {
        let query = ReservationQuery::parse("", "  ", "Any", "", None, None).unwrap();
        assert!(query.is_unrestricted());
    }

    #[test]
    fn test_parse_all_fields() {
        let query = ReservationQuery::parse(
            "ada",
            "Love",
            "hbb",
            "10105",
            Some(date(2024, 3, 1)),
            Some(date(2024, 3, 31)),
        )
        .unwrap();
        assert_eq!(query.first_name.as_deref(), Some("ada"));
        assert_eq!(query.last_name.as_deref(), Some("Love"));
        assert_eq!(query.room.as_ref().map(RoomCode::as_str), Some("HBB"));
        assert_eq!(query.code, Some(ReservationCode(10105)));
        assert_eq!(
            query.dates,
            Some(Stay::new(date(2024, 3, 1), date(2024, 4, 1)).unwrap())
        );
        assert!(!query.is_unrestricted());
    }

    #[test]
    fn test_single_date_searches_one_night() {
        let query =
            ReservationQuery::parse("", "", "", "", Some(date(2024, 3, 5)), None).unwrap();
        assert_eq!(
            query.dates,
            Some(Stay::new(date(2024, 3, 5), date(2024, 3, 6)).unwrap())
        );
    }

    #[test]
    fn test_reversed_range_is_rejected() {
        let result = ReservationQuery::parse(
            "",
            "",
            "",
            "",
            Some(date(2024, 3, 5)),
            Some(date(2024, 3, 1)),
        );
        assert!(matches!(result, Err(SearchError::InvalidDateRange(_))));
    }

    #[test]
    fn test_bad_code_is_rejected() {
        let result = ReservationQuery::parse("", "", "", "12x", None, None);
        assert!(matches!(result, Err(SearchError::InvalidCode(_))));
    }

    #[test]
    fn test_like_pattern_escapes_wildcards() {
        assert_eq!(like_pattern("ada"), "%ada%");
        assert_eq!(like_pattern("50%_off\\"), "%50\\%\\_off\\\\%");
    }
}
