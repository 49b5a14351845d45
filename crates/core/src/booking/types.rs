//! Booking data types.

use hotelres_shared::types::{CodeError, Money, RoomCode};
use serde::{Deserialize, Serialize};

use super::error::BookingError;
use crate::rooms::Room;
use crate::stay::Stay;

/// Longest guest name the reservations table accepts.
pub const GUEST_NAME_MAX_LEN: usize = 15;

/// Which room the guest asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoomPreference {
    /// No preference.
    Any,
    /// A specific room.
    Code(RoomCode),
}

impl RoomPreference {
    /// Parses user input; blank or `Any` means no preference.
    ///
    /// # Errors
    ///
    /// Returns an error if a specific code is malformed.
    pub fn parse(raw: &str) -> Result<Self, CodeError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("any") {
            return Ok(Self::Any);
        }
        RoomCode::parse(trimmed).map(Self::Code)
    }

    /// Returns true if `room` satisfies the preference.
    #[must_use]
    pub fn accepts(&self, room: &Room) -> bool {
        match self {
            Self::Any => true,
            Self::Code(code) => room.code == *code,
        }
    }
}

/// Which bed type the guest asked for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BedPreference {
    /// No preference.
    Any,
    /// A specific bed type, compared case-insensitively.
    Type(String),
}

impl BedPreference {
    /// Parses user input; blank or `Any` means no preference.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.is_empty() || trimmed.eq_ignore_ascii_case("any") {
            Self::Any
        } else {
            Self::Type(trimmed.to_string())
        }
    }

    /// Returns true if `room` satisfies the preference.
    #[must_use]
    pub fn accepts(&self, room: &Room) -> bool {
        match self {
            Self::Any => true,
            Self::Type(bed_type) => room.bed_type.eq_ignore_ascii_case(bed_type),
        }
    }
}

/// A validated booking request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingRequest {
    /// Guest first name.
    pub first_name: String,
    /// Guest last name.
    pub last_name: String,
    /// Room preference.
    pub room: RoomPreference,
    /// Bed type preference.
    pub bed_type: BedPreference,
    /// Requested nights.
    pub stay: Stay,
    /// Number of adults (at least one).
    pub adults: i32,
    /// Number of children.
    pub kids: i32,
}

impl BookingRequest {
    /// Validates and builds a booking request.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::Validation` for blank or over-long names and
    /// invalid guest counts.
    pub fn new(
        first_name: &str,
        last_name: &str,
        room: RoomPreference,
        bed_type: BedPreference,
        stay: Stay,
        adults: i32,
        kids: i32,
    ) -> Result<Self, BookingError> {
        let first_name = validate_name("first name", first_name)?;
        let last_name = validate_name("last name", last_name)?;
        if adults < 1 {
            return Err(BookingError::Validation(
                "at least one adult is required".to_string(),
            ));
        }
        if kids < 0 {
            return Err(BookingError::Validation(
                "number of children cannot be negative".to_string(),
            ));
        }
        Ok(Self {
            first_name,
            last_name,
            room,
            bed_type,
            stay,
            adults,
            kids,
        })
    }

    /// Adults plus children.
    #[must_use]
    pub const fn guest_count(&self) -> i32 {
        self.adults + self.kids
    }

    /// Returns true if `room` matches both the room and bed type preferences.
    #[must_use]
    pub fn prefers(&self, room: &Room) -> bool {
        self.room.accepts(room) && self.bed_type.accepts(room)
    }
}

fn validate_name(field: &str, raw: &str) -> Result<String, BookingError> {
    let name = raw.trim();
    if name.is_empty() {
        return Err(BookingError::Validation(format!("{field} is required")));
    }
    if name.chars().count() > GUEST_NAME_MAX_LEN {
        return Err(BookingError::Validation(format!(
            "{field} must be at most {GUEST_NAME_MAX_LEN} characters"
        )));
    }
    Ok(name.to_string())
}

/// A priced offer for a room and stay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    /// Offered room.
    pub room: Room,
    /// Offered nights (may differ from the request for alternatives).
    pub stay: Stay,
    /// Nights billed at the base price.
    pub weekday_nights: i64,
    /// Nights billed with the weekend surcharge.
    pub weekend_nights: i64,
    /// Total cost of the stay.
    pub total: Money,
    /// Average nightly rate, stored on the reservation.
    pub nightly_rate: Money,
}

/// Result of looking for rooms matching a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOptions {
    /// Rooms free for exactly the requested dates.
    Exact(Vec<Quote>),
    /// Nothing matched; nearby rooms or dates that are free.
    Alternatives(Vec<Quote>),
    /// Nothing is free within the search window.
    Unavailable,
}
