//! Room repository.
//!
//! Reads the room inventory and the occupancy statistics shown on the
//! rooms-and-rates screen.

use chrono::NaiveDate;
use sea_orm::{DatabaseConnection, DbErr, EntityTrait, FromQueryResult, QueryOrder, QuerySelect};

use hotelres_core::rooms::{Room, RoomRef, RoomStatistics, RoomStatisticsService};

use crate::entities::rooms::parse_room_code;
use crate::entities::{reservations, rooms};

#[derive(Debug, FromQueryResult)]
struct RoomRefRow {
    room_code: String,
    room_name: String,
}

/// Room repository.
#[derive(Debug, Clone)]
pub struct RoomRepository {
    db: DatabaseConnection,
}

impl RoomRepository {
    /// Creates a new room repository.
    #[must_use]
    pub const fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists every room ordered by code.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row holds an invalid code.
    pub async fn list_rooms(&self) -> Result<Vec<Room>, DbErr> {
        rooms::Entity::find()
            .order_by_asc(rooms::Column::RoomCode)
            .all(&self.db)
            .await?
            .into_iter()
            .map(rooms::Model::into_domain)
            .collect()
    }

    /// Lists room codes and names ordered by code.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails or a row holds an invalid code.
    pub async fn list_room_refs(&self) -> Result<Vec<RoomRef>, DbErr> {
        rooms::Entity::find()
            .select_only()
            .column(rooms::Column::RoomCode)
            .column(rooms::Column::RoomName)
            .order_by_asc(rooms::Column::RoomCode)
            .into_model::<RoomRefRow>()
            .all(&self.db)
            .await?
            .into_iter()
            .map(|row| {
                Ok(RoomRef {
                    code: parse_room_code(&row.room_code)?,
                    name: row.room_name,
                })
            })
            .collect()
    }

    /// Computes occupancy statistics for every room as of `today`.
    ///
    /// Rows are ordered by popularity, highest first.
    ///
    /// # Errors
    ///
    /// Returns an error if either read fails.
    pub async fn rooms_and_rates(
        &self,
        today: NaiveDate,
        popularity_window_days: i64,
    ) -> Result<Vec<RoomStatistics>, DbErr> {
        let rooms = self.list_rooms().await?;
        let stays = reservations::Entity::find()
            .all(&self.db)
            .await?
            .iter()
            .map(reservations::Model::to_room_stay)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(RoomStatisticsService::compute(
            today,
            popularity_window_days,
            rooms,
            &stays,
        ))
    }
}
