//! Entity re-exports.

pub use super::reservations::Entity as Reservations;
pub use super::rooms::Entity as Rooms;
