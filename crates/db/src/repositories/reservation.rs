//! Reservation repository.
//!
//! Booking runs inside a transaction that re-checks the room for
//! overlapping stays before inserting. The `excl_reservations_overlap`
//! constraint catches any booking that races past the re-check.

use chrono::NaiveDate;
use sea_orm::sea_query::{Expr, Func, LikeExpr, SimpleExpr};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, NotSet,
    PaginatorTrait, QueryFilter, QueryOrder, Set, TransactionTrait,
};

use hotelres_core::booking::{BookingError, BookingOptions, BookingRequest, BookingService};
use hotelres_core::revenue::YearCalendar;
use hotelres_core::search::{ReservationQuery, like_pattern};
use hotelres_core::stay::{NewReservation, Reservation, ReservationDetails, RoomStay, Stay};
use hotelres_shared::error::AppError;
use hotelres_shared::types::{ReservationCode, RoomCode};

use super::room::RoomRepository;
use super::{EXCLUSION_VIOLATION, FOREIGN_KEY_VIOLATION, sqlstate};
use crate::entities::{reservations, rooms};

/// Error types for reservation operations.
#[derive(Debug, thiserror::Error)]
pub enum ReservationError {
    /// Reservation not found.
    #[error("Reservation not found: {0}")]
    NotFound(ReservationCode),

    /// Room not found.
    #[error("Room not found: {0}")]
    RoomNotFound(RoomCode),

    /// The room is already booked for part of the requested stay.
    #[error("Room {room} is already booked for part of {stay}")]
    Conflict {
        /// Requested room.
        room: RoomCode,
        /// Requested stay.
        stay: Stay,
    },

    /// The booking request was rejected.
    #[error(transparent)]
    Booking(#[from] BookingError),

    /// Database error.
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<ReservationError> for AppError {
    fn from(err: ReservationError) -> Self {
        match err {
            ReservationError::NotFound(_) | ReservationError::RoomNotFound(_) => {
                Self::NotFound(err.to_string())
            }
            ReservationError::Conflict { .. } => Self::Conflict(err.to_string()),
            ReservationError::Booking(BookingError::Validation(_) | BookingError::InvalidStay(_)) => {
                Self::Validation(err.to_string())
            }
            ReservationError::Booking(_) => Self::BusinessRule(err.to_string()),
            ReservationError::Database(e) => Self::Database(e.to_string()),
        }
    }
}

/// Reservation repository.
#[derive(Debug, Clone)]
pub struct ReservationRepository {
    db: DatabaseConnection,
}

impl ReservationRepository {
    /// Creates a new reservation repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists the stays overlapping `window`, ordered by room then check-in.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_overlapping(&self, window: &Stay) -> Result<Vec<RoomStay>, DbErr> {
        reservations::Entity::find()
            .filter(reservations::Column::CheckIn.lt(window.check_out()))
            .filter(reservations::Column::CheckOut.gt(window.check_in()))
            .order_by_asc(reservations::Column::RoomCode)
            .order_by_asc(reservations::Column::CheckIn)
            .all(&self.db)
            .await?
            .iter()
            .map(reservations::Model::to_room_stay)
            .collect()
    }

    /// Lists the stays with at least one night inside `calendar`'s span.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn list_overlapping_year(
        &self,
        calendar: &YearCalendar,
    ) -> Result<Vec<RoomStay>, DbErr> {
        let (start, end) = calendar.span();
        let window = Stay::new(start, end).map_err(|e| DbErr::Custom(e.to_string()))?;
        self.list_overlapping(&window).await
    }

    /// Finds rooms for a booking request.
    ///
    /// Loads the inventory and every reservation near the requested dates,
    /// then hands both to the planner.
    ///
    /// # Errors
    ///
    /// Returns `ReservationError::Booking` if the request cannot be served
    /// and `ReservationError::Database` if a read fails.
    pub async fn plan_booking(
        &self,
        service: &BookingService,
        today: NaiveDate,
        request: &BookingRequest,
    ) -> Result<BookingOptions, ReservationError> {
        let window = service.lookup_window(request)?;
        let rooms = RoomRepository::new(self.db.clone()).list_rooms().await?;
        let booked = self.list_overlapping(&window).await?;
        Ok(service.plan(today, &rooms, &booked, request)?)
    }

    /// Books a reservation.
    ///
    /// # Errors
    ///
    /// Returns `ReservationError::RoomNotFound` for an unknown room and
    /// `ReservationError::Conflict` if the room is taken for any of the nights.
    pub async fn book(&self, new: &NewReservation) -> Result<Reservation, ReservationError> {
        let txn = self.db.begin().await?;

        let room_exists = rooms::Entity::find_by_id(new.room_code.as_str().to_owned())
            .one(&txn)
            .await?
            .is_some();
        if !room_exists {
            return Err(ReservationError::RoomNotFound(new.room_code.clone()));
        }

        let clashes = reservations::Entity::find()
            .filter(reservations::Column::RoomCode.eq(new.room_code.as_str()))
            .filter(reservations::Column::CheckIn.lt(new.stay.check_out()))
            .filter(reservations::Column::CheckOut.gt(new.stay.check_in()))
            .count(&txn)
            .await?;
        if clashes > 0 {
            return Err(conflict(new));
        }

        let model = reservations::ActiveModel {
            code: NotSet,
            room_code: Set(new.room_code.as_str().to_owned()),
            check_in: Set(new.stay.check_in()),
            check_out: Set(new.stay.check_out()),
            rate: Set(new.rate),
            last_name: Set(new.last_name.clone()),
            first_name: Set(new.first_name.clone()),
            adults: Set(new.adults),
            kids: Set(new.kids),
        }
        .insert(&txn)
        .await
        .map_err(|e| match sqlstate(&e).as_deref() {
            Some(EXCLUSION_VIOLATION) => conflict(new),
            Some(FOREIGN_KEY_VIOLATION) => ReservationError::RoomNotFound(new.room_code.clone()),
            _ => ReservationError::Database(e),
        })?;

        txn.commit().await.map_err(|e| match sqlstate(&e).as_deref() {
            Some(EXCLUSION_VIOLATION) => conflict(new),
            _ => ReservationError::Database(e),
        })?;

        Ok(model.into_domain()?)
    }

    /// Cancels a reservation, returning what was removed.
    ///
    /// # Errors
    ///
    /// Returns `ReservationError::NotFound` if no reservation has `code`.
    pub async fn cancel(&self, code: ReservationCode) -> Result<Reservation, ReservationError> {
        let txn = self.db.begin().await?;

        let existing = reservations::Entity::find_by_id(code.into_inner())
            .one(&txn)
            .await?
            .ok_or(ReservationError::NotFound(code))?;

        reservations::Entity::delete_by_id(code.into_inner())
            .exec(&txn)
            .await?;

        txn.commit().await?;
        Ok(existing.into_domain()?)
    }

    /// Finds a reservation with its room name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn find_by_code(
        &self,
        code: ReservationCode,
    ) -> Result<Option<ReservationDetails>, DbErr> {
        reservations::Entity::find_by_id(code.into_inner())
            .find_also_related(rooms::Entity)
            .one(&self.db)
            .await?
            .map(into_details)
            .transpose()
    }

    /// Searches reservations.
    ///
    /// Names match case-insensitively anywhere in the stored value; the date
    /// range matches stays overlapping it. Unset criteria match everything.
    /// Results are ordered by check-in date, then reservation code.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub async fn search(&self, query: &ReservationQuery) -> Result<Vec<ReservationDetails>, DbErr> {
        let mut select = reservations::Entity::find().find_also_related(rooms::Entity);

        if let Some(first_name) = &query.first_name {
            select = select.filter(name_contains(reservations::Column::FirstName, first_name));
        }
        if let Some(last_name) = &query.last_name {
            select = select.filter(name_contains(reservations::Column::LastName, last_name));
        }
        if let Some(room) = &query.room {
            select = select.filter(reservations::Column::RoomCode.eq(room.as_str()));
        }
        if let Some(code) = query.code {
            select = select.filter(reservations::Column::Code.eq(code.into_inner()));
        }
        if let Some(dates) = &query.dates {
            select = select
                .filter(reservations::Column::CheckIn.lt(dates.check_out()))
                .filter(reservations::Column::CheckOut.gt(dates.check_in()));
        }

        select
            .order_by_asc(reservations::Column::CheckIn)
            .order_by_asc(reservations::Column::Code)
            .all(&self.db)
            .await?
            .into_iter()
            .map(into_details)
            .collect()
    }
}

fn conflict(new: &NewReservation) -> ReservationError {
    ReservationError::Conflict {
        room: new.room_code.clone(),
        stay: new.stay,
    }
}

fn name_contains(column: reservations::Column, needle: &str) -> SimpleExpr {
    Expr::expr(Func::lower(Expr::col((reservations::Entity, column))))
        .like(LikeExpr::new(like_pattern(&needle.to_lowercase())).escape('\\'))
}

fn into_details(
    (reservation, room): (reservations::Model, Option<rooms::Model>),
) -> Result<ReservationDetails, DbErr> {
    let room_name = room.map(|r| r.room_name).ok_or_else(|| {
        DbErr::RecordNotFound(format!(
            "room {} of reservation {}",
            reservation.room_code, reservation.code
        ))
    })?;
    Ok(ReservationDetails {
        reservation: reservation.into_domain()?,
        room_name,
    })
}
