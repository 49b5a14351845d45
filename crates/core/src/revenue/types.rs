//! Revenue report types.

use hotelres_shared::types::{MonthBoundary, RoomCode};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::rooms::RoomRef;

/// Short month names, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// What a report row describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum RowLabel {
    /// Revenue of a single room.
    Room(RoomRef),
    /// Column-wise sums over all rooms.
    Total,
}

/// One row of the revenue table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyRevenueRow {
    /// Room or totals label.
    pub label: RowLabel,
    /// Revenue per month, January first.
    pub months: [Decimal; 12],
    /// Sum of the twelve months.
    pub total: Decimal,
}

impl MonthlyRevenueRow {
    /// Creates an all-zero row.
    #[must_use]
    pub fn zero(label: RowLabel) -> Self {
        Self {
            label,
            months: [Decimal::ZERO; 12],
            total: Decimal::ZERO,
        }
    }

    /// Room code, `None` for the totals row.
    #[must_use]
    pub fn room_code(&self) -> Option<&RoomCode> {
        match &self.label {
            RowLabel::Room(room) => Some(&room.code),
            RowLabel::Total => None,
        }
    }

    /// Room name, `None` for the totals row.
    #[must_use]
    pub fn room_name(&self) -> Option<&str> {
        match &self.label {
            RowLabel::Room(room) => Some(room.name.as_str()),
            RowLabel::Total => None,
        }
    }

    /// Revenue for calendar month `month` (1 = January), zero if out of range.
    #[must_use]
    pub fn month(&self, month: u32) -> Decimal {
        usize::try_from(month)
            .ok()
            .and_then(|m| m.checked_sub(1))
            .and_then(|i| self.months.get(i))
            .copied()
            .unwrap_or(Decimal::ZERO)
    }

    /// Recomputes `total` from the month cells.
    pub fn refresh_total(&mut self) {
        self.total = self.months.iter().copied().sum();
    }
}

/// Revenue per room and month for one calendar year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RevenueReport {
    /// Report year.
    pub year: i32,
    /// December boundary rule used.
    pub boundary: MonthBoundary,
    /// One row per room, ordered by room code.
    pub rooms: Vec<MonthlyRevenueRow>,
    /// Column totals; `None` when there are no rooms.
    pub totals: Option<MonthlyRevenueRow>,
}

impl RevenueReport {
    /// Returns true if the report has no room rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }

    /// Room rows followed by the totals row.
    pub fn rows(&self) -> impl Iterator<Item = &MonthlyRevenueRow> {
        self.rooms.iter().chain(self.totals.iter())
    }

    /// Grand total for the year.
    #[must_use]
    pub fn grand_total(&self) -> Decimal {
        self.totals.as_ref().map_or(Decimal::ZERO, |t| t.total)
    }
}
