//! Common types used across the application.

pub mod calendar;
pub mod code;
pub mod money;

pub use calendar::MonthBoundary;
pub use code::{CodeError, ReservationCode, RoomCode};
pub use money::{Currency, Money, round_cents, round_whole};
