//! Tests for the revenue aggregator.

use chrono::NaiveDate;
use hotelres_shared::types::{MonthBoundary, RoomCode};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::service::RevenueService;
use super::types::{MONTH_LABELS, RowLabel};
use super::RevenueError;
use crate::rooms::RoomRef;
use crate::stay::{RoomStay, Stay};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn room(code: &str) -> RoomRef {
    RoomRef {
        code: RoomCode::parse(code).unwrap(),
        name: format!("Room {code}"),
    }
}

fn charge(code: &str, from: NaiveDate, to: NaiveDate, rate: Decimal) -> RoomStay {
    RoomStay {
        room_code: RoomCode::parse(code).unwrap(),
        stay: Stay::new(from, to).unwrap(),
        rate,
    }
}

fn today() -> NaiveDate {
    date(2024, 6, 15)
}

#[test]
fn test_single_month_stay() {
    let report = RevenueService::compute_monthly_revenue(
        today(),
        &[room("101A")],
        &[charge("101A", date(2024, 3, 10), date(2024, 3, 15), dec!(100))],
        MonthBoundary::HalfOpen,
    )
    .unwrap();

    assert_eq!(report.year, 2024);
    let row = &report.rooms[0];
    assert_eq!(row.room_code().map(RoomCode::as_str), Some("101A"));
    assert_eq!(row.month(3), dec!(500));
    for m in (1..=12).filter(|m| *m != 3) {
        assert_eq!(row.month(m), Decimal::ZERO, "month {m}");
    }
    assert_eq!(row.total, dec!(500));
    assert_eq!(report.grand_total(), dec!(500));
}

#[test]
fn test_stay_spanning_two_months() {
    let report = RevenueService::compute_monthly_revenue(
        today(),
        &[room("AAA")],
        &[charge("AAA", date(2024, 1, 25), date(2024, 2, 5), dec!(80))],
        MonthBoundary::HalfOpen,
    )
    .unwrap();

    let row = &report.rooms[0];
    assert_eq!(row.month(1), dec!(560)); // 7 nights
    assert_eq!(row.month(2), dec!(320)); // 4 nights
    assert_eq!(row.total, dec!(880)); // 11 nights
}

#[test]
fn test_stay_spanning_three_months_fills_the_middle() {
    let report = RevenueService::compute_monthly_revenue(
        today(),
        &[room("AAA")],
        &[charge("AAA", date(2024, 1, 30), date(2024, 3, 2), dec!(10))],
        MonthBoundary::HalfOpen,
    )
    .unwrap();

    let row = &report.rooms[0];
    assert_eq!(row.month(1), dec!(20));
    assert_eq!(row.month(2), dec!(290)); // leap year
    assert_eq!(row.month(3), dec!(10));
}

#[test]
fn test_stays_crossing_year_edges_are_clipped() {
    let report = RevenueService::compute_monthly_revenue(
        today(),
        &[room("AAA")],
        &[
            charge("AAA", date(2023, 12, 28), date(2024, 1, 3), dec!(100)),
            charge("AAA", date(2024, 12, 30), date(2025, 1, 2), dec!(100)),
        ],
        MonthBoundary::HalfOpen,
    )
    .unwrap();

    let row = &report.rooms[0];
    assert_eq!(row.month(1), dec!(200));
    assert_eq!(row.month(12), dec!(200));
    assert_eq!(row.total, dec!(400));
}

#[test]
fn test_inclusive_december_boundary_drops_last_night() {
    let stays = [charge("AAA", date(2024, 12, 30), date(2025, 1, 2), dec!(100))];

    let half_open = RevenueService::compute_monthly_revenue(
        today(),
        &[room("AAA")],
        &stays,
        MonthBoundary::HalfOpen,
    )
    .unwrap();
    let legacy = RevenueService::compute_monthly_revenue(
        today(),
        &[room("AAA")],
        &stays,
        MonthBoundary::InclusiveDecember31,
    )
    .unwrap();

    assert_eq!(half_open.rooms[0].month(12), dec!(200));
    assert_eq!(legacy.rooms[0].month(12), dec!(100));
    assert_eq!(legacy.boundary, MonthBoundary::InclusiveDecember31);
}

#[test]
fn test_contributions_round_to_whole_units() {
    let report = RevenueService::compute_monthly_revenue(
        today(),
        &[room("AAA")],
        &[
            // 3 nights * 106.67 = 320.01 -> 320
            charge("AAA", date(2024, 4, 5), date(2024, 4, 8), dec!(106.67)),
            // 1 night * 99.50 = 99.50 -> 100
            charge("AAA", date(2024, 4, 20), date(2024, 4, 21), dec!(99.50)),
        ],
        MonthBoundary::HalfOpen,
    )
    .unwrap();

    assert_eq!(report.rooms[0].month(4), dec!(420));
    assert!(report.rooms[0].months.iter().all(|c| c.fract().is_zero()));
}

#[test]
fn test_rooms_without_reservations_show_zero() {
    let report = RevenueService::compute_monthly_revenue(
        today(),
        &[room("BBB"), room("AAA")],
        &[charge("AAA", date(2024, 5, 1), date(2024, 5, 3), dec!(50))],
        MonthBoundary::HalfOpen,
    )
    .unwrap();

    assert_eq!(report.rooms.len(), 2);
    let bbb = &report.rooms[1];
    assert_eq!(bbb.room_code().map(RoomCode::as_str), Some("BBB"));
    assert!(bbb.months.iter().all(Decimal::is_zero));
    assert_eq!(bbb.total, Decimal::ZERO);
}

#[test]
fn test_rows_are_ordered_by_room_code_with_totals_last() {
    let report = RevenueService::compute_monthly_revenue(
        today(),
        &[room("CCC"), room("AAA"), room("BBB")],
        &[],
        MonthBoundary::HalfOpen,
    )
    .unwrap();

    let labels: Vec<Option<&str>> = report
        .rows()
        .map(|r| r.room_code().map(RoomCode::as_str))
        .collect();
    assert_eq!(labels, vec![Some("AAA"), Some("BBB"), Some("CCC"), None]);
    let totals = report.totals.as_ref().unwrap();
    assert_eq!(totals.label, RowLabel::Total);
    assert_eq!(totals.room_name(), None);
}

#[test]
fn test_empty_room_set_gives_empty_report() {
    let report =
        RevenueService::compute_monthly_revenue(today(), &[], &[], MonthBoundary::HalfOpen)
            .unwrap();
    assert!(report.is_empty());
    assert!(report.totals.is_none());
    assert_eq!(report.rows().count(), 0);
    assert_eq!(MONTH_LABELS.len(), 12);
    assert_eq!(MONTH_LABELS[11], "Dec");
}

#[test]
fn test_unknown_room_is_rejected() {
    let err = RevenueService::compute_monthly_revenue(
        today(),
        &[room("AAA")],
        &[charge("ZZZ", date(2024, 5, 1), date(2024, 5, 3), dec!(50))],
        MonthBoundary::HalfOpen,
    )
    .unwrap_err();
    assert_eq!(err, RevenueError::UnknownRoom(RoomCode::parse("ZZZ").unwrap()));
}

#[test]
fn test_report_uses_year_of_today() {
    let report = RevenueService::compute_monthly_revenue(
        date(2025, 1, 2),
        &[room("AAA")],
        &[charge("AAA", date(2024, 3, 10), date(2024, 3, 15), dec!(100))],
        MonthBoundary::HalfOpen,
    )
    .unwrap();
    assert_eq!(report.year, 2025);
    assert_eq!(report.grand_total(), Decimal::ZERO);
}

// ============================================================================
// Property tests
// ============================================================================

const CODES: [&str; 4] = ["AAA", "BBB", "CCC", "DDD"];

/// Strategy for a stay inside 2023-12..2025-01 with a whole-cent rate.
fn stay_strategy() -> impl Strategy<Value = RoomStay> {
    (0usize..CODES.len(), 0i64..400, 1i64..40, 1i64..50_000).prop_map(
        |(room, offset, nights, cents)| {
            let start = date(2023, 12, 1) + chrono::Duration::days(offset);
            let end = start + chrono::Duration::days(nights);
            charge(CODES[room], start, end, Decimal::new(cents, 2))
        },
    )
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Each row's total equals the sum of its month cells.
    #[test]
    fn prop_row_total_is_sum_of_months(stays in prop::collection::vec(stay_strategy(), 0..30)) {
        let rooms: Vec<RoomRef> = CODES.iter().map(|c| room(c)).collect();
        let report = RevenueService::compute_monthly_revenue(
            today(), &rooms, &stays, MonthBoundary::HalfOpen,
        ).unwrap();

        for row in report.rows() {
            let sum: Decimal = row.months.iter().copied().sum();
            prop_assert_eq!(row.total, sum);
        }
    }

    /// The totals row is the column-wise sum of the room rows.
    #[test]
    fn prop_totals_row_is_column_sum(stays in prop::collection::vec(stay_strategy(), 0..30)) {
        let rooms: Vec<RoomRef> = CODES.iter().map(|c| room(c)).collect();
        let report = RevenueService::compute_monthly_revenue(
            today(), &rooms, &stays, MonthBoundary::HalfOpen,
        ).unwrap();
        let totals = report.totals.as_ref().unwrap();

        for month in 1..=12 {
            let column: Decimal = report.rooms.iter().map(|r| r.month(month)).sum();
            prop_assert_eq!(totals.month(month), column);
        }
        let room_totals: Decimal = report.rooms.iter().map(|r| r.total).sum();
        prop_assert_eq!(totals.total, room_totals);
    }

    /// Every night of the year is billed to exactly one month.
    #[test]
    fn prop_nights_are_conserved(stay in stay_strategy()) {
        let rooms: Vec<RoomRef> = CODES.iter().map(|c| room(c)).collect();
        let one_unit = RoomStay { rate: Decimal::ONE, ..stay.clone() };
        let report = RevenueService::compute_monthly_revenue(
            today(), &rooms, std::slice::from_ref(&one_unit), MonthBoundary::HalfOpen,
        ).unwrap();

        let in_year = stay.stay.nights_within(date(2024, 1, 1), date(2025, 1, 1));
        prop_assert_eq!(report.grand_total(), Decimal::from(in_year));
    }

    /// The December rule never changes January to November.
    #[test]
    fn prop_boundary_only_affects_december(stays in prop::collection::vec(stay_strategy(), 0..20)) {
        let rooms: Vec<RoomRef> = CODES.iter().map(|c| room(c)).collect();
        let half_open = RevenueService::compute_monthly_revenue(
            today(), &rooms, &stays, MonthBoundary::HalfOpen,
        ).unwrap();
        let legacy = RevenueService::compute_monthly_revenue(
            today(), &rooms, &stays, MonthBoundary::InclusiveDecember31,
        ).unwrap();

        for (a, b) in half_open.rooms.iter().zip(&legacy.rooms) {
            prop_assert_eq!(&a.months[..11], &b.months[..11]);
            prop_assert!(b.months[11] <= a.months[11]);
        }
    }
}
