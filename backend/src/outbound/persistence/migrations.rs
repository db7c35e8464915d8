//! Embedded schema migrations, applied at start-up.

use diesel::{Connection, PgConnection};
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Migrations compiled from `backend/migrations`.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Failures while applying migrations.
#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("failed to connect for migrations: {0}")]
    Connect(#[from] diesel::ConnectionError),
    #[error("failed to apply migrations: {message}")]
    Apply { message: String },
    #[error("migration task aborted: {message}")]
    Task { message: String },
}

/// Apply pending migrations over a dedicated synchronous connection.
///
/// Runs on the blocking pool because `diesel_migrations` drives a sync
/// `PgConnection`.
pub async fn run_pending_migrations(database_url: &str) -> Result<usize, MigrationError> {
    let url = database_url.to_owned();
    let applied = tokio::task::spawn_blocking(move || -> Result<usize, MigrationError> {
        let mut connection = PgConnection::establish(&url)?;
        let versions = connection
            .run_pending_migrations(MIGRATIONS)
            .map_err(|err| MigrationError::Apply {
                message: err.to_string(),
            })?;
        Ok(versions.len())
    })
    .await
    .map_err(|err| MigrationError::Task {
        message: err.to_string(),
    })??;

    info!(applied, "database migrations up to date");
    Ok(applied)
}
