//! `SeaORM` entity definitions.
//!
//! Each entity maps one table created by the initial migration.

pub mod prelude;

pub mod reservations;
pub mod rooms;
