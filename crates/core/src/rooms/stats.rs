//! Room occupancy statistics.
//!
//! Shown on the rooms-and-rates screen: how popular each room has been
//! recently, when it next becomes free, and how long its last stay lasted.

use chrono::{Duration, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use hotelres_shared::types::round_cents;

use super::types::Room;
use crate::stay::RoomStay;

/// Occupancy statistics for one room.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoomStatistics {
    /// The room.
    pub room: Room,
    /// Stays touching the look-back window divided by its length in days.
    pub popularity: Decimal,
    /// First date on or after today when the room is free, `None` if free today.
    pub next_available: Option<NaiveDate>,
    /// Nights of the most recently completed stay (0 if none).
    pub recent_stay_nights: i64,
    /// Checkout date of the most recently completed stay.
    pub last_checkout: Option<NaiveDate>,
}

/// Computes occupancy statistics.
pub struct RoomStatisticsService;

impl RoomStatisticsService {
    /// Computes statistics for every room relative to `today`.
    ///
    /// Rows are ordered by popularity (highest first), then room code.
    #[must_use]
    pub fn compute(
        today: NaiveDate,
        window_days: i64,
        rooms: Vec<Room>,
        stays: &[RoomStay],
    ) -> Vec<RoomStatistics> {
        let window_start = Duration::try_days(window_days)
            .and_then(|d| today.checked_sub_signed(d))
            .unwrap_or(NaiveDate::MIN);

        let mut rows: Vec<RoomStatistics> = rooms
            .into_iter()
            .map(|room| {
                let room_stays: Vec<&RoomStay> =
                    stays.iter().filter(|s| s.room_code == room.code).collect();
                Self::room_statistics(room, &room_stays, today, window_start, window_days)
            })
            .collect();

        rows.sort_by(|a, b| {
            b.popularity
                .cmp(&a.popularity)
                .then_with(|| a.room.code.cmp(&b.room.code))
        });
        rows
    }

    fn room_statistics(
        room: Room,
        stays: &[&RoomStay],
        today: NaiveDate,
        window_start: NaiveDate,
        window_days: i64,
    ) -> RoomStatistics {
        let recent = stays
            .iter()
            .filter(|s| s.stay.check_out() >= window_start && s.stay.check_in() <= today)
            .count();
        let popularity = if window_days > 0 {
            round_cents(Decimal::from(recent) / Decimal::from(window_days))
        } else {
            Decimal::ZERO
        };

        let last_completed = stays
            .iter()
            .filter(|s| s.stay.check_out() <= today)
            .max_by_key(|s| s.stay.check_out());

        RoomStatistics {
            popularity,
            next_available: Self::next_available(stays, today),
            recent_stay_nights: last_completed.map_or(0, |s| s.stay.nights()),
            last_checkout: last_completed.map(|s| s.stay.check_out()),
            room,
        }
    }

    /// Follows back-to-back stays from `today` until a free night is found.
    fn next_available(stays: &[&RoomStay], today: NaiveDate) -> Option<NaiveDate> {
        let mut candidate = today;
        while let Some(occupying) = stays.iter().find(|s| s.stay.contains(candidate)) {
            candidate = occupying.stay.check_out();
        }
        (candidate != today).then_some(candidate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stay::Stay;
    use hotelres_shared::types::RoomCode;
    use rust_decimal_macros::dec;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn room(code: &str) -> Room {
        Room {
            code: RoomCode::parse(code).unwrap(),
            name: format!("Room {code}"),
            beds: 1,
            bed_type: "Queen".to_string(),
            max_occupancy: 2,
            base_price: dec!(150),
            decor: "modern".to_string(),
        }
    }

    fn booked(code: &str, from: NaiveDate, to: NaiveDate) -> RoomStay {
        RoomStay {
            room_code: RoomCode::parse(code).unwrap(),
            stay: Stay::new(from, to).unwrap(),
            rate: dec!(150),
        }
    }

    #[test]
    fn test_room_without_history() {
        let today = date(2024, 6, 1);
        let rows = RoomStatisticsService::compute(today, 180, vec![room("AAA")], &[]);
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].popularity, Decimal::ZERO);
        assert_eq!(rows[0].next_available, None);
        assert_eq!(rows[0].recent_stay_nights, 0);
        assert_eq!(rows[0].last_checkout, None);
    }

    #[test]
    fn test_popularity_counts_stays_in_window() {
        let today = date(2024, 6, 1);
        let stays = vec![
            booked("AAA", date(2024, 1, 1), date(2024, 1, 5)),
            booked("AAA", date(2024, 3, 1), date(2024, 3, 4)),
            booked("AAA", date(2024, 5, 20), date(2024, 5, 22)),
            // checked out before the window
            booked("AAA", date(2023, 1, 1), date(2023, 1, 3)),
            // future stay, not yet started
            booked("AAA", date(2024, 7, 1), date(2024, 7, 3)),
        ];
        let rows = RoomStatisticsService::compute(today, 180, vec![room("AAA")], &stays);
        // 3 / 180 = 0.0166.. -> 0.02
        assert_eq!(rows[0].popularity, dec!(0.02));
        assert_eq!(rows[0].last_checkout, Some(date(2024, 5, 22)));
        assert_eq!(rows[0].recent_stay_nights, 2);
    }

    #[test]
    fn test_next_available_chains_back_to_back_stays() {
        let today = date(2024, 6, 10);
        let stays = vec![
            booked("AAA", date(2024, 6, 8), date(2024, 6, 12)),
            booked("AAA", date(2024, 6, 12), date(2024, 6, 15)),
            booked("AAA", date(2024, 6, 20), date(2024, 6, 22)),
        ];
        let rows = RoomStatisticsService::compute(today, 180, vec![room("AAA")], &stays);
        assert_eq!(rows[0].next_available, Some(date(2024, 6, 15)));
    }

    #[test]
    fn test_checkout_today_is_available_now() {
        let today = date(2024, 6, 12);
        let stays = vec![booked("AAA", date(2024, 6, 8), date(2024, 6, 12))];
        let rows = RoomStatisticsService::compute(today, 180, vec![room("AAA")], &stays);
        assert_eq!(rows[0].next_available, None);
        assert_eq!(rows[0].last_checkout, Some(today));
        assert_eq!(rows[0].recent_stay_nights, 4);
    }

    #[test]
    fn test_ordering_by_popularity_then_code() {
        let today = date(2024, 6, 1);
        let stays = vec![booked("CCC", date(2024, 5, 1), date(2024, 5, 3))];
        let rows = RoomStatisticsService::compute(
            today,
            180,
            vec![room("BBB"), room("CCC"), room("AAA")],
            &stays,
        );
        let codes: Vec<&str> = rows.iter().map(|r| r.room.code.as_str()).collect();
        assert_eq!(codes, vec!["CCC", "AAA", "BBB"]);
    }
}
