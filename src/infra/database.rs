//! PostgreSQL pool construction and schema bootstrap.

use crate::infra::config::Config;
use anyhow::Context;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;

/// Builds connection options from `DATABASE_URL` or the individual DB_* settings.
pub fn connect_options(config: &Config) -> anyhow::Result<PgConnectOptions> {
    if let Some(url) = config.database_url.as_deref() {
        return url
            .parse::<PgConnectOptions>()
            .context("DATABASE_URL is not a valid postgres connection string");
    }
    Ok(PgConnectOptions::new()
        .host(&config.db_host)
        .port(config.db_port)
        .username(&config.db_user)
        .password(&config.db_password)
        .database(&config.db_name))
}

/// Connects a pool and verifies the database answers.
pub async fn connect(config: &Config) -> anyhow::Result<PgPool> {
    let pool = PgPoolOptions::new()
        .max_connections(config.db_max_connections)
        .connect_with(connect_options(config)?)
        .await
        .context("failed to connect to database")?;

    sqlx::query("SELECT 1")
        .execute(&pool)
        .await
        .context("failed to ping database")?;

    tracing::info!(host = %config.db_host, db = %config.db_name, "connected to database");
    Ok(pool)
}

/// Creates the banks table and its lookup indexes if they are missing.
pub async fn init_schema(pool: &PgPool) -> anyhow::Result<()> {
    // Trigram index support for the branch prefix scan.
    sqlx::query("CREATE EXTENSION IF NOT EXISTS pg_trgm")
        .execute(pool)
        .await
        .context("failed to create pg_trgm extension")?;

    sqlx::query(
        "CREATE TABLE IF NOT EXISTS banks_data (
            address TEXT NOT NULL,
            bank_name TEXT NOT NULL,
            is_headquarter BOOLEAN NOT NULL,
            country_name TEXT NOT NULL,
            country_iso2 CHAR(2) NOT NULL,
            swift_code TEXT NOT NULL,
            PRIMARY KEY (swift_code)
        )",
    )
    .execute(pool)
    .await?;

    sqlx::query("CREATE INDEX IF NOT EXISTS idx_banks_country_iso2 ON banks_data (country_iso2)")
        .execute(pool)
        .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_banks_swift_code_pattern
         ON banks_data USING gin (swift_code gin_trgm_ops)",
    )
    .execute(pool)
    .await?;

    tracing::info!("schema ready");
    Ok(())
}
