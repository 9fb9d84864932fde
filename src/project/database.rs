/// SQLite connection setup for the project table
///
/// Opens the pool described by `DatabaseConfig` and makes sure the `projects` table exists.
/// Pool lifetime belongs to the hosting process; handlers only ever see it through a store.

use crate::config::DatabaseConfig;
use anyhow::{Context, Result};
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// Open a connection pool and bootstrap the schema
///
/// File databases are created on first use. For `sqlite::memory:` every connection
/// gets its own database, so callers should keep `max_connections` at 1 there.
pub async fn connect(config: &DatabaseConfig) -> Result<SqlitePool> {
    tracing::info!("🗄️ Opening project database: {}", config.url);

    let options = SqliteConnectOptions::from_str(&config.url)
        .with_context(|| format!("Invalid database url '{}'", config.url))?
        .create_if_missing(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect_with(options)
        .await
        .with_context(|| format!("Failed to open database '{}'", config.url))?;

    init_schema(&pool).await?;

    tracing::info!("✅ Project database ready ({} max connections)", config.max_connections);

    Ok(pool)
}

/// Create the `projects` table if it is missing
///
/// Safe to call multiple times (uses IF NOT EXISTS).
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS projects (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name TEXT NOT NULL,
            project_type TEXT NOT NULL,
            status TEXT NOT NULL
        )
        "#,
    )
    .execute(pool)
    .await
    .context("Failed to create projects table")?;

    Ok(())
}
