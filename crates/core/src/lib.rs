//! Core business logic for hotelres.
//!
//! This crate contains pure business logic with ZERO database dependencies.
//! All domain types, validation rules, and calculations live here.
//!
//! # Modules
//!
//! - `stay` - Half-open date intervals and the reservation value types
//! - `rooms` - Room reference data and occupancy statistics
//! - `booking` - Booking validation, availability, pricing, and alternatives
//! - `search` - Reservation search criteria
//! - `revenue` - Monthly revenue aggregation per room

pub mod booking;
pub mod revenue;
pub mod rooms;
pub mod search;
pub mod stay;
