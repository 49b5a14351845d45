//! Initial schema: rooms and reservations.
//!
//! Overlapping stays in one room are rejected by an exclusion constraint,
//! which needs the `btree_gist` extension for the equality part.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(EXTENSIONS_SQL).await?;
        db.execute_unprepared(ROOMS_SQL).await?;
        db.execute_unprepared(RESERVATIONS_SQL).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        let db = manager.get_connection();
        db.execute_unprepared(
            r"
            DROP TABLE IF EXISTS reservations CASCADE;
            DROP TABLE IF EXISTS rooms CASCADE;
            ",
        )
        .await?;
        Ok(())
    }
}

const EXTENSIONS_SQL: &str = r"
CREATE EXTENSION IF NOT EXISTS btree_gist;
";

const ROOMS_SQL: &str = r"
CREATE TABLE rooms (
    room_code VARCHAR(5) PRIMARY KEY,
    room_name VARCHAR(30) NOT NULL UNIQUE,
    beds INTEGER NOT NULL,
    bed_type VARCHAR(8) NOT NULL,
    max_occupancy INTEGER NOT NULL,
    base_price NUMERIC(6,2) NOT NULL,
    decor VARCHAR(20) NOT NULL,
    CONSTRAINT chk_rooms_beds CHECK (beds > 0),
    CONSTRAINT chk_rooms_occupancy CHECK (max_occupancy > 0),
    CONSTRAINT chk_rooms_price CHECK (base_price > 0)
);
";

const RESERVATIONS_SQL: &str = r"
CREATE TABLE reservations (
    code INTEGER GENERATED BY DEFAULT AS IDENTITY (START WITH 10000) PRIMARY KEY,
    room_code VARCHAR(5) NOT NULL REFERENCES rooms(room_code),
    check_in DATE NOT NULL,
    check_out DATE NOT NULL,
    rate NUMERIC(6,2) NOT NULL,
    last_name VARCHAR(15) NOT NULL,
    first_name VARCHAR(15) NOT NULL,
    adults INTEGER NOT NULL,
    kids INTEGER NOT NULL,
    CONSTRAINT chk_reservations_dates CHECK (check_in < check_out),
    CONSTRAINT chk_reservations_rate CHECK (rate > 0),
    CONSTRAINT chk_reservations_party CHECK (adults >= 1 AND kids >= 0),
    CONSTRAINT excl_reservations_overlap EXCLUDE USING gist (
        room_code WITH =,
        daterange(check_in, check_out) WITH &&
    )
);

-- Date-range scans for search, booking windows and the revenue year
CREATE INDEX idx_reservations_dates ON reservations(check_in, check_out);

-- Name search
CREATE INDEX idx_reservations_names ON reservations(lower(last_name), lower(first_name));
";
