//! Revenue aggregation service.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use hotelres_shared::types::{MonthBoundary, RoomCode, round_whole};
use rust_decimal::Decimal;

use super::calendar::YearCalendar;
use super::error::RevenueError;
use super::types::{MonthlyRevenueRow, RevenueReport, RowLabel};
use crate::rooms::RoomRef;
use crate::stay::RoomStay;

/// Service for computing the monthly revenue report.
pub struct RevenueService;

impl RevenueService {
    /// Computes revenue per room and month for the year containing `today`.
    ///
    /// `stays` should hold every reservation overlapping that year; stays
    /// outside it contribute nothing. Each (stay, month) contribution is
    /// `nights_in_month * rate` rounded to a whole currency unit.
    ///
    /// # Errors
    ///
    /// Returns `RevenueError::UnknownRoom` if a stay references a room not in
    /// `rooms`, and `RevenueError::YearOutOfRange` for unrepresentable years.
    pub fn compute_monthly_revenue(
        today: NaiveDate,
        rooms: &[RoomRef],
        stays: &[RoomStay],
        boundary: MonthBoundary,
    ) -> Result<RevenueReport, RevenueError> {
        let calendar = YearCalendar::new(today.year(), boundary)?;

        let mut by_room: BTreeMap<&RoomCode, MonthlyRevenueRow> = rooms
            .iter()
            .map(|room| (&room.code, MonthlyRevenueRow::zero(RowLabel::Room(room.clone()))))
            .collect();

        for charge in stays {
            let row = by_room
                .get_mut(&charge.room_code)
                .ok_or_else(|| RevenueError::UnknownRoom(charge.room_code.clone()))?;
            for (cell, (start, end)) in row.months.iter_mut().zip(calendar.months()) {
                let nights = charge.stay.nights_within(start, end);
                if nights > 0 {
                    *cell += round_whole(Decimal::from(nights) * charge.rate);
                }
            }
        }

        let room_rows: Vec<MonthlyRevenueRow> = by_room
            .into_values()
            .map(|mut row| {
                row.refresh_total();
                row
            })
            .collect();

        let totals = (!room_rows.is_empty()).then(|| Self::totals_row(&room_rows));

        Ok(RevenueReport {
            year: calendar.year(),
            boundary,
            rooms: room_rows,
            totals,
        })
    }

    fn totals_row(rows: &[MonthlyRevenueRow]) -> MonthlyRevenueRow {
        let mut totals = MonthlyRevenueRow::zero(RowLabel::Total);
        for row in rows {
            for (sum, cell) in totals.months.iter_mut().zip(row.months) {
                *sum += cell;
            }
        }
        totals.refresh_total();
        totals
    }
}
