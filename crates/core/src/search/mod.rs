//! Reservation search criteria.

pub mod query;

pub use query::{ReservationQuery, SearchError, like_pattern};
