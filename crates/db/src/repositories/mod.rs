//! Repository abstractions for data access.
//!
//! Repositories provide a clean interface for database operations,
//! hiding the `SeaORM` implementation details from the rest of the application.

pub mod reservation;
pub mod revenue;
pub mod room;

pub use reservation::{ReservationError, ReservationRepository};
pub use revenue::{RevenueReportError, RevenueRepository};
pub use room::RoomRepository;

use sea_orm::{DbErr, RuntimeErr};

/// PostgreSQL SQLSTATE for an exclusion constraint violation.
pub(crate) const EXCLUSION_VIOLATION: &str = "23P01";

/// PostgreSQL SQLSTATE for a foreign key violation.
pub(crate) const FOREIGN_KEY_VIOLATION: &str = "23503";

/// Extracts the SQLSTATE code from a database error, if the server sent one.
pub(crate) fn sqlstate(err: &DbErr) -> Option<String> {
    match err {
        DbErr::Exec(RuntimeErr::SqlxError(sqlx::Error::Database(e)))
        | DbErr::Query(RuntimeErr::SqlxError(sqlx::Error::Database(e))) => {
            e.code().map(|code| code.into_owned())
        }
        _ => None,
    }
}
