//! Revenue report repository.

use chrono::{Datelike, NaiveDate};
use sea_orm::{DatabaseConnection, DbErr};

use hotelres_core::revenue::{
    MonthBoundary, RevenueError, RevenueReport, RevenueService, YearCalendar,
};
use hotelres_shared::error::AppError;

use super::reservation::ReservationRepository;
use super::room::RoomRepository;

/// Error types for revenue reporting.
#[derive(Debug, thiserror::Error)]
pub enum RevenueReportError {
    /// The stored data cannot be aggregated.
    #[error(transparent)]
    Revenue(#[from] RevenueError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<RevenueReportError> for AppError {
    fn from(err: RevenueReportError) -> Self {
        match err {
            RevenueReportError::Revenue(e) => Self::Internal(e.to_string()),
            RevenueReportError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Revenue report repository.
#[derive(Debug, Clone)]
pub struct RevenueRepository {
    rooms: RoomRepository,
    reservations: ReservationRepository,
}

impl RevenueRepository {
    /// Creates a new revenue repository.
    #[must_use]
    pub fn new(db: DatabaseConnection) -> Self {
        Self {
            rooms: RoomRepository::new(db.clone()),
            reservations: ReservationRepository::new(db),
        }
    }

    /// Builds the month-by-month revenue report for the year of `today`.
    ///
    /// Reads the reservations touching that year and the room list, then
    /// aggregates them in memory.
    ///
    /// # Errors
    ///
    /// Returns `RevenueReportError::Database` if either read fails and
    /// `RevenueReportError::Revenue` if a reservation names an unknown room.
    pub async fn compute_monthly_revenue(
        &self,
        today: NaiveDate,
        boundary: MonthBoundary,
    ) -> Result<RevenueReport, RevenueReportError> {
        // Reservations first: every room they reference already exists when
        // the room list is read afterwards.
        let calendar = YearCalendar::new(today.year(), boundary)?;
        let stays = self.reservations.list_overlapping_year(&calendar).await?;
        let rooms = self.rooms.list_room_refs().await?;

        tracing::debug!(
            year = calendar.year(),
            rooms = rooms.len(),
            reservations = stays.len(),
            "aggregating revenue"
        );

        Ok(RevenueService::compute_monthly_revenue(
            today, &rooms, &stays, boundary,
        )?)
    }
}
