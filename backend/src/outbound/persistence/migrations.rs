//! Embedded schema migrations applied at startup.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

use crate::domain::ports::UserPersistenceError;

const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

fn migrate_blocking(url: &str) -> Result<usize, UserPersistenceError> {
    let mut conn = PgConnection::establish(url)
        .map_err(|err| UserPersistenceError::connection(format!("{err:?}")))?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| UserPersistenceError::query(format!("migration: {err:?}")))?;
    Ok(applied.len())
}

/// Run all pending migrations against `database_url`.
///
/// Diesel migrations need a synchronous connection, so the work runs on the
/// blocking thread pool.
///
/// # Errors
/// Returns a connection error when the database is unreachable and a query
/// error when a migration fails.
pub async fn run_migrations(database_url: &str) -> Result<(), UserPersistenceError> {
    let url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || migrate_blocking(&url))
        .await
        .map_err(|err| UserPersistenceError::query(format!("migration task failed: {err}")))??;
    info!(applied, "database migrations applied");
    Ok(())
}
