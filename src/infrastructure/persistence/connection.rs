//! PostgreSQL connection pool setup.
//!
//! The pool is opened once in [`crate::server::run`] and handed to the
//! repository; no handler ever opens its own connection.

use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;
use std::time::Duration;

use crate::config::Config;

/// Failure to obtain the database handle.
#[derive(Debug, thiserror::Error)]
pub enum ConnectionError {
    #[error("database connection string is not configured")]
    MissingConnectionString,

    #[error("failed to connect to database: {0}")]
    Unreachable(#[source] sqlx::Error),

    #[error("failed to apply migrations: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),
}

/// Opens the connection pool using the pool settings from `config`.
///
/// The first connection is established eagerly so a bad connection string or
/// an unreachable server fails at startup instead of on the first request.
///
/// # Errors
///
/// Returns [`ConnectionError::MissingConnectionString`] if `database_url` is
/// empty and [`ConnectionError::Unreachable`] if the server cannot be reached.
pub async fn connect(config: &Config) -> Result<PgPool, ConnectionError> {
    if config.database_url.trim().is_empty() {
        return Err(ConnectionError::MissingConnectionString);
    }

    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(&config.database_url)
        .await
        .map_err(ConnectionError::Unreachable)
}

/// Applies the embedded migrations from `migrations/`.
///
/// # Errors
///
/// Returns [`ConnectionError::Migration`] if a migration fails.
pub async fn migrate(pool: &PgPool) -> Result<(), ConnectionError> {
    sqlx::migrate!("./migrations").run(pool).await?;
    Ok(())
}
