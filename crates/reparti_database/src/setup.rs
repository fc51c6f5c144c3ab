//! Schema management.

use crate::DatabaseResult;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use reparti_error::{DatabaseError, DatabaseErrorKind};
use tracing::{info, instrument};

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Ensure the `reparti` and `membri` tables exist.
///
/// Runs the embedded migrations. The migration itself uses
/// `CREATE TABLE IF NOT EXISTS`, so tables created by an earlier deployment
/// are adopted as they are. Calling this repeatedly is a no-op.
#[instrument(skip(conn))]
pub fn ensure_schema(conn: &mut PgConnection) -> DatabaseResult<()> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| DatabaseError::new(DatabaseErrorKind::Migration(e.to_string())))?;

    info!(applied = applied.len(), "Database tables verified");
    Ok(())
}
