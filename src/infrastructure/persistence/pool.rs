//! PostgreSQL pool construction and migrations.

use std::time::Duration;

use anyhow::{Context, Result};
use sqlx::PgPool;
use sqlx::postgres::PgPoolOptions;

use crate::config::Config;

/// Opens a connection pool using the pool settings from `config`.
///
/// # Errors
///
/// Returns an error if no database URL is configured or the first
/// connection cannot be established.
pub async fn connect_pool(config: &Config) -> Result<PgPool> {
    let url = config
        .database_url
        .as_deref()
        .context("DATABASE_URL is not configured")?;

    PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .acquire_timeout(Duration::from_secs(config.db_connect_timeout))
        .idle_timeout(Duration::from_secs(config.db_idle_timeout))
        .max_lifetime(Duration::from_secs(config.db_max_lifetime))
        .connect(url)
        .await
        .context("Failed to connect to database")
}

/// Applies the embedded migrations.
pub async fn run_migrations(pool: &PgPool) -> Result<()> {
    sqlx::migrate!("./migrations")
        .run(pool)
        .await
        .context("Failed to run database migrations")
}
