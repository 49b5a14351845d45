//! Reservation value types.

use hotelres_shared::types::{ReservationCode, RoomCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::Stay;

/// A room occupied for a stay at a nightly rate.
///
/// This is the minimal projection of a reservation needed for availability,
/// occupancy statistics, and revenue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStay {
    /// Room the stay occupies.
    pub room_code: RoomCode,
    /// Nights occupied.
    pub stay: Stay,
    /// Nightly rate charged.
    pub rate: Decimal,
}

/// A persisted reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reservation {
    /// Reservation number.
    pub code: ReservationCode,
    /// Room reserved.
    pub room_code: RoomCode,
    /// Nights reserved.
    pub stay: Stay,
    /// Nightly rate captured at booking time.
    pub rate: Decimal,
    /// Guest last name.
    pub last_name: String,
    /// Guest first name.
    pub first_name: String,
    /// Number of adults.
    pub adults: i32,
    /// Number of children.
    pub kids: i32,
}

impl Reservation {
    /// Total charged for the whole stay.
    #[must_use]
    pub fn total_charge(&self) -> Decimal {
        self.rate * Decimal::from(self.stay.nights())
    }

    /// Projects the reservation onto its room and stay.
    #[must_use]
    pub fn room_stay(&self) -> RoomStay {
        RoomStay {
            room_code: self.room_code.clone(),
            stay: self.stay,
            rate: self.rate,
        }
    }
}

/// A reservation together with the name of its room, as shown in search results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReservationDetails {
    /// The reservation.
    pub reservation: Reservation,
    /// Display name of the reserved room.
    pub room_name: String,
}

/// A validated reservation ready to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewReservation {
    /// Room to reserve.
    pub room_code: RoomCode,
    /// Nights to reserve.
    pub stay: Stay,
    /// Nightly rate charged.
    pub rate: Decimal,
    /// Guest last name.
    pub last_name: String,
    /// Guest first name.
    pub first_name: String,
    /// Number of adults.
    pub adults: i32,
    /// Number of children.
    pub kids: i32,
}
