//! Monthly revenue per room.
//!
//! Each reservation's stay is intersected with every calendar month of the
//! report year. The nights falling in a month are billed at the reservation's
//! nightly rate and rounded to whole currency units, then summed per room.

pub mod calendar;
pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use calendar::YearCalendar;
pub use error::RevenueError;
pub use hotelres_shared::types::MonthBoundary;
pub use service::RevenueService;
pub use types::{MONTH_LABELS, MonthlyRevenueRow, RevenueReport, RowLabel};
