//! `SeaORM` Entity for reservations table.

use hotelres_core::stay::{Reservation, RoomStay, Stay};
use hotelres_shared::types::ReservationCode;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

use super::rooms::parse_room_code;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "reservations")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub code: i32,
    pub room_code: String,
    pub check_in: Date,
    pub check_out: Date,
    #[sea_orm(column_type = "Decimal(Some((6, 2)))")]
    pub rate: Decimal,
    pub last_name: String,
    pub first_name: String,
    pub adults: i32,
    pub kids: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::rooms::Entity",
        from = "Column::RoomCode",
        to = "super::rooms::Column::RoomCode"
    )]
    Rooms,
}

impl Related<super::rooms::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Rooms.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    fn stay(&self) -> Result<Stay, DbErr> {
        Stay::new(self.check_in, self.check_out)
            .map_err(|e| DbErr::Type(format!("reservation {}: {e}", self.code)))
    }

    /// Converts the row into the domain reservation.
    ///
    /// # Errors
    ///
    /// Returns `DbErr::Type` if the stored room code or dates are invalid.
    pub fn into_domain(self) -> Result<Reservation, DbErr> {
        Ok(Reservation {
            code: ReservationCode(self.code),
            room_code: parse_room_code(&self.room_code)?,
            stay: self.stay()?,
            rate: self.rate,
            last_name: self.last_name,
            first_name: self.first_name,
            adults: self.adults,
            kids: self.kids,
        })
    }

    /// Projects the row onto the fields the aggregators need.
    ///
    /// # Errors
    ///
    /// Returns `DbErr::Type` if the stored room code or dates are invalid.
    pub fn to_room_stay(&self) -> Result<RoomStay, DbErr> {
        Ok(RoomStay {
            room_code: parse_room_code(&self.room_code)?,
            stay: self.stay()?,
            rate: self.rate,
        })
    }
}
