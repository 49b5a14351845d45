//! Room reference data and occupancy statistics.

pub mod stats;
pub mod types;

pub use stats::{RoomStatistics, RoomStatisticsService};
pub use types::{Room, RoomRef};
