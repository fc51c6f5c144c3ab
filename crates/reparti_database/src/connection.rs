//! Database connection utilities.

use crate::DatabaseResult;
use diesel::pg::PgConnection;
use diesel::prelude::*;
use reparti_error::{DatabaseError, DatabaseErrorKind};

/// Open a fresh connection to the given PostgreSQL URL.
///
/// Connections are not pooled; callers own the returned handle and it is
/// closed when dropped.
pub fn connect(database_url: &str) -> DatabaseResult<PgConnection> {
    PgConnection::establish(database_url).map_err(DatabaseError::from)
}

/// Establish a connection to the PostgreSQL database.
///
/// Reads the `DATABASE_URL` environment variable to determine the connection string.
///
/// # Errors
///
/// Returns an error if:
/// - `DATABASE_URL` environment variable is not set
/// - Connection to the database fails
pub fn establish_connection() -> DatabaseResult<PgConnection> {
    let database_url = std::env::var("DATABASE_URL").map_err(|_| {
        DatabaseError::new(DatabaseErrorKind::Connection(
            "DATABASE_URL environment variable not set".to_string(),
        ))
    })?;

    connect(&database_url)
}
