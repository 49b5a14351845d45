//! Booking planner.

use chrono::NaiveDate;
use hotelres_shared::config::BookingConfig;
use hotelres_shared::types::RoomCode;

use super::error::BookingError;
use super::pricing::PricingPolicy;
use super::types::{BookingOptions, BookingRequest, Quote};
use crate::rooms::Room;
use crate::stay::{NewReservation, RoomStay, Stay};

/// Plans bookings against the current room inventory and reservations.
#[derive(Debug, Clone)]
pub struct BookingService {
    pricing: PricingPolicy,
    alternative_window_days: i64,
    alternative_limit: usize,
}

impl BookingService {
    /// Creates a booking service.
    #[must_use]
    pub const fn new(
        pricing: PricingPolicy,
        alternative_window_days: i64,
        alternative_limit: usize,
    ) -> Self {
        Self {
            pricing,
            alternative_window_days,
            alternative_limit,
        }
    }

    /// Builds the service from booking configuration.
    #[must_use]
    pub fn from_config(config: &BookingConfig) -> Self {
        Self::new(
            PricingPolicy::from_config(config),
            config.alternative_window_days,
            usize::try_from(config.alternative_limit).unwrap_or(usize::MAX),
        )
    }

    /// Returns the pricing policy.
    #[must_use]
    pub const fn pricing(&self) -> &PricingPolicy {
        &self.pricing
    }

    /// Date range whose reservations must be loaded to plan `request`.
    ///
    /// # Errors
    ///
    /// Returns an error if the widened range leaves the calendar.
    pub fn lookup_window(&self, request: &BookingRequest) -> Result<Stay, BookingError> {
        Ok(request.stay.widened(self.alternative_window_days)?)
    }

    /// Finds rooms for `request`.
    ///
    /// `booked` must contain every reservation overlapping
    /// [`lookup_window`](Self::lookup_window). When no preferred room is free
    /// for the requested dates, alternatives are drawn from all rooms that fit
    /// the party, for stays of the same length shifted by up to the configured
    /// window, nearest dates first, one suggestion per room.
    ///
    /// # Errors
    ///
    /// Returns `BookingError::NoRooms` for an empty inventory and
    /// `BookingError::PartyTooLarge` if no room can host the party.
    pub fn plan(
        &self,
        today: NaiveDate,
        rooms: &[Room],
        booked: &[RoomStay],
        request: &BookingRequest,
    ) -> Result<BookingOptions, BookingError> {
        let guests = request.guest_count();
        let max_occupancy = rooms
            .iter()
            .map(|r| r.max_occupancy)
            .max()
            .ok_or(BookingError::NoRooms)?;
        if guests > max_occupancy {
            return Err(BookingError::PartyTooLarge {
                guests,
                max_occupancy,
            });
        }

        let mut candidates: Vec<&Room> = rooms.iter().filter(|r| r.fits(guests)).collect();
        candidates.sort_by(|a, b| {
            request
                .prefers(b)
                .cmp(&request.prefers(a))
                .then_with(|| a.code.cmp(&b.code))
        });

        let exact: Vec<Quote> = candidates
            .iter()
            .filter(|room| request.prefers(room))
            .filter(|room| is_free(booked, &room.code, &request.stay))
            .map(|room| self.pricing.quote(room, request.stay))
            .collect();
        if !exact.is_empty() {
            return Ok(BookingOptions::Exact(exact));
        }

        let alternatives = self.alternatives(today, &candidates, booked, request.stay);
        if alternatives.is_empty() {
            Ok(BookingOptions::Unavailable)
        } else {
            Ok(BookingOptions::Alternatives(alternatives))
        }
    }

    fn alternatives(
        &self,
        today: NaiveDate,
        candidates: &[&Room],
        booked: &[RoomStay],
        requested: Stay,
    ) -> Vec<Quote> {
        let offsets =
            std::iter::once(0).chain((1..=self.alternative_window_days).flat_map(|d| [d, -d]));

        let mut suggested: Vec<&RoomCode> = Vec::new();
        let mut quotes = Vec::new();
        for offset in offsets {
            let Ok(stay) = requested.shifted(offset) else {
                continue;
            };
            if stay.check_in() < today {
                continue;
            }
            for room in candidates {
                if quotes.len() >= self.alternative_limit {
                    return quotes;
                }
                if suggested.contains(&&room.code) || !is_free(booked, &room.code, &stay) {
                    continue;
                }
                suggested.push(&room.code);
                quotes.push(self.pricing.quote(room, stay));
            }
        }
        quotes
    }

    /// Builds the reservation to insert for an accepted quote.
    #[must_use]
    pub fn confirm(request: &BookingRequest, quote: &Quote) -> NewReservation {
        NewReservation {
            room_code: quote.room.code.clone(),
            stay: quote.stay,
            rate: quote.nightly_rate.amount,
            last_name: request.last_name.clone(),
            first_name: request.first_name.clone(),
            adults: request.adults,
            kids: request.kids,
        }
    }
}

/// Returns true if no reservation of `room` overlaps `stay`.
#[must_use]
pub fn is_free(booked: &[RoomStay], room: &RoomCode, stay: &Stay) -> bool {
    !booked
        .iter()
        .any(|b| b.room_code == *room && b.stay.overlaps(stay))
}
