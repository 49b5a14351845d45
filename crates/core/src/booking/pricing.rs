//! Stay pricing.

use hotelres_shared::config::BookingConfig;
use hotelres_shared::types::{Currency, Money, round_cents};
use rust_decimal::Decimal;

use super::types::Quote;
use crate::rooms::Room;
use crate::stay::Stay;

/// Prices stays from a room's base price.
///
/// Weekday nights cost the base price; Saturday and Sunday nights cost the
/// base price times the weekend surcharge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PricingPolicy {
    /// Weekend multiplier (1.10 = 10% more).
    pub weekend_surcharge: Decimal,
    /// Quote currency.
    pub currency: Currency,
}

impl PricingPolicy {
    /// Creates a pricing policy.
    #[must_use]
    pub const fn new(weekend_surcharge: Decimal, currency: Currency) -> Self {
        Self {
            weekend_surcharge,
            currency,
        }
    }

    /// Builds the policy from booking configuration.
    #[must_use]
    pub fn from_config(config: &BookingConfig) -> Self {
        Self::new(config.weekend_surcharge, config.currency)
    }

    /// Prices `stay` in `room`.
    ///
    /// The total is rounded to cents; the nightly rate is the total divided by
    /// the number of nights, rounded to cents.
    #[must_use]
    pub fn quote(&self, room: &Room, stay: Stay) -> Quote {
        let (weekday_nights, weekend_nights) = stay.weekday_weekend_split();
        let weekday_cost = Decimal::from(weekday_nights) * room.base_price;
        let weekend_cost = Decimal::from(weekend_nights) * room.base_price * self.weekend_surcharge;
        let total = round_cents(weekday_cost + weekend_cost);
        let nightly_rate = round_cents(total / Decimal::from(stay.nights()));

        Quote {
            room: room.clone(),
            stay,
            weekday_nights,
            weekend_nights,
            total: Money::new(total, self.currency),
            nightly_rate: Money::new(nightly_rate, self.currency),
        }
    }
}
