//! Embedded schema migrations.
//!
//! Migrations under `backend/migrations` are compiled into the binary and
//! applied over a synchronous `PgConnection`. The async entry point moves the
//! work onto a blocking thread so the runtime is never stalled.

use diesel::Connection;
use diesel::pg::PgConnection;
use diesel_migrations::{EmbeddedMigrations, MigrationHarness, embed_migrations};
use tracing::info;

/// Embedded migrations from the backend/migrations directory.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Failures raised while applying migrations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MigrationError {
    /// The migration connection could not be opened.
    #[error("failed to connect for migrations: {message}")]
    Connection { message: String },
    /// A migration failed to apply.
    #[error("failed to apply migrations: {message}")]
    Apply { message: String },
    /// The blocking migration task panicked or was cancelled.
    #[error("migration task did not complete: {message}")]
    Task { message: String },
}

/// Apply every pending migration and return the versions applied.
///
/// # Errors
/// See [`MigrationError`].
pub fn run_pending_migrations(database_url: &str) -> Result<Vec<String>, MigrationError> {
    let mut conn = PgConnection::establish(database_url).map_err(|err| MigrationError::Connection {
        message: err.to_string(),
    })?;
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|err| MigrationError::Apply {
            message: err.to_string(),
        })?
        .into_iter()
        .map(|version| version.to_string())
        .collect::<Vec<_>>();

    info!(count = applied.len(), versions = ?applied, "database migrations applied");
    Ok(applied)
}

/// Async wrapper around [`run_pending_migrations`].
///
/// # Errors
/// See [`MigrationError`].
pub async fn run_pending_migrations_async(
    database_url: String,
) -> Result<Vec<String>, MigrationError> {
    tokio::task::spawn_blocking(move || run_pending_migrations(&database_url))
        .await
        .map_err(|err| MigrationError::Task {
            message: err.to_string(),
        })?
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn employee_migration_is_embedded() {
        let names: Vec<String> = diesel::migration::MigrationSource::<diesel::pg::Pg>::migrations(
            &MIGRATIONS,
        )
        .expect("embedded migrations load")
        .iter()
        .map(|migration| migration.name().to_string())
        .collect();

        assert!(
            names.iter().any(|name| name.ends_with("create_employee")),
            "missing create_employee in {names:?}"
        );
    }

    #[rstest]
    fn unreachable_database_reports_connection_error() {
        let result = run_pending_migrations("postgres://invalid host/does-not-exist");
        assert!(matches!(result, Err(MigrationError::Connection { .. })));
    }
}
