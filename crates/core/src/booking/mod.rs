//! Booking: request validation, availability, pricing, and alternatives.

pub mod error;
pub mod pricing;
pub mod service;
pub mod types;


pub use error::BookingError;
pub use pricing::PricingPolicy;
pub use service::BookingService;
pub use types::{BedPreference, BookingOptions, BookingRequest, Quote, RoomPreference};
