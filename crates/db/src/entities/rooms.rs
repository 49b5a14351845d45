//! `SeaORM` Entity for rooms table.

use hotelres_core::rooms::Room;
use hotelres_shared::types::RoomCode;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "rooms")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub room_code: String,
    #[sea_orm(unique)]
    pub room_name: String,
    pub beds: i32,
    pub bed_type: String,
    pub max_occupancy: i32,
    #[sea_orm(column_type = "Decimal(Some((6, 2)))")]
    pub base_price: Decimal,
    pub decor: String,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::reservations::Entity")]
    Reservations,
}

impl Related<super::reservations::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Reservations.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Converts the row into the domain room.
    ///
    /// # Errors
    ///
    /// Returns `DbErr::Type` if the stored code is not a valid room code.
    pub fn into_domain(self) -> Result<Room, DbErr> {
        Ok(Room {
            code: parse_room_code(&self.room_code)?,
            name: self.room_name,
            beds: self.beds,
            bed_type: self.bed_type,
            max_occupancy: self.max_occupancy,
            base_price: self.base_price,
            decor: self.decor,
        })
    }
}

/// Parses a stored room code, reporting corrupt values as a type error.
pub(crate) fn parse_room_code(raw: &str) -> Result<RoomCode, DbErr> {
    RoomCode::parse(raw).map_err(|e| DbErr::Type(format!("room_code {raw:?}: {e}")))
}
