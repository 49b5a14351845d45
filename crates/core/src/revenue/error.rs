//! Revenue error types.

use hotelres_shared::types::RoomCode;
use thiserror::Error;

/// Errors that can occur during revenue aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RevenueError {
    /// A reservation references a room missing from the room list.
    #[error("Reservation references unknown room: {0}")]
    UnknownRoom(RoomCode),

    /// The report year is outside the supported calendar.
    #[error("Year out of range: {0}")]
    YearOutOfRange(i32),
}
