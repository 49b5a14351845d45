//! Stay intervals and reservation value types.

pub mod interval;
pub mod reservation;

pub use interval::{Stay, StayError};
pub use reservation::{NewReservation, Reservation, ReservationDetails, RoomStay};
