//! Booking error types.

use thiserror::Error;

use crate::stay::StayError;

/// Errors that can occur while planning a booking.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BookingError {
    /// A request field is missing or malformed.
    #[error("Validation error: {0}")]
    Validation(String),

    /// The requested dates do not form a valid stay.
    #[error(transparent)]
    InvalidStay(#[from] StayError),

    /// No room in the hotel can host the party.
    #[error("No room can host {guests} guests (largest room sleeps {max_occupancy})")]
    PartyTooLarge {
        /// Adults plus children requested.
        guests: i32,
        /// Largest maximum occupancy in the hotel.
        max_occupancy: i32,
    },

    /// The hotel has no rooms at all.
    #[error("No rooms are configured")]
    NoRooms,
}
