//! Room types.

use hotelres_shared::types::RoomCode;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A bookable room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Room {
    /// Unique room code.
    pub code: RoomCode,
    /// Unique display name.
    pub name: String,
    /// Number of beds.
    pub beds: i32,
    /// Bed type (King, Queen, Double).
    pub bed_type: String,
    /// Maximum number of guests.
    pub max_occupancy: i32,
    /// Nightly base price.
    pub base_price: Decimal,
    /// Decor tag.
    pub decor: String,
}

impl Room {
    /// Returns true if the room can host `guests` people.
    #[must_use]
    pub fn fits(&self, guests: i32) -> bool {
        guests <= self.max_occupancy
    }
}

/// Room code and display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomRef {
    /// Room code.
    pub code: RoomCode,
    /// Room display name.
    pub name: String,
}
