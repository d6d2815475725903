use crate::config::ServerConfig;
use sqlx::{migrate::MigrateError, sqlite::SqlitePoolOptions, SqlitePool};

/// Opens the pool described by `config`.
///
/// The pool is the single database handle of the process: built once at
/// startup, cloned into services, closed on shutdown.
pub async fn create_pool(config: &ServerConfig) -> Result<SqlitePool, sqlx::Error> {
    let database_url = &config.database_url;

    // Ensure the data directory exists
    let path = database_url
        .trim_start_matches("sqlite://")
        .trim_start_matches("sqlite:");
    let path = path.split('?').next().unwrap_or(path);
    if let Some(parent) = std::path::Path::new(path).parent() {
        if !parent.as_os_str().is_empty() {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("Failed to create data directory {}: {}", parent.display(), e);
            }
        }
    }

    let pool = SqlitePoolOptions::new()
        .max_connections(config.max_connections)
        .connect(database_url)
        .await?;

    tracing::debug!(database_url = %database_url, "Database pool created");

    Ok(pool)
}

pub async fn run_migrations(pool: &SqlitePool) -> Result<(), MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
