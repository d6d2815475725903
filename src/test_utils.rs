pub mod test_helpers {
    use crate::models::settings::{DEFAULT_ARRAY_SIZE, DEFAULT_SPEED};
    use chrono::Utc;
    use sqlx::{sqlite::SqlitePoolOptions, SqlitePool};
    use tempfile::NamedTempFile;

    /// Create a new in-memory SQLite database for testing
    pub async fn create_test_db() -> Result<SqlitePool, sqlx::Error> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect(":memory:")
            .await?;

        // Run migrations
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok(pool)
    }

    /// Create a temporary file-based SQLite database for testing
    /// Unlike the in-memory database it can be shared by several connections,
    /// so concurrent writers actually contend for the lock
    pub async fn create_test_db_file(
        max_connections: u32,
    ) -> Result<(SqlitePool, NamedTempFile), sqlx::Error> {
        let temp_file = NamedTempFile::new().map_err(sqlx::Error::Io)?;
        let db_path = temp_file
            .path()
            .to_str()
            .ok_or_else(|| sqlx::Error::Configuration("Invalid database path".into()))?;
        let database_url = format!("sqlite://{}", db_path);

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(&database_url)
            .await?;

        // Run migrations
        sqlx::migrate!("./migrations").run(&pool).await?;

        Ok((pool, temp_file))
    }

    /// Insert a bare user row, without the settings row the service would create
    pub async fn insert_user_without_settings(
        pool: &SqlitePool,
        email: &str,
    ) -> Result<i64, sqlx::Error> {
        let result = sqlx::query("INSERT INTO users (email, created_at) VALUES (?, ?)")
            .bind(email)
            .bind(Utc::now())
            .execute(pool)
            .await?;

        Ok(result.last_insert_rowid())
    }

    /// Insert a user together with default settings
    pub async fn insert_test_user(pool: &SqlitePool, email: &str) -> Result<i64, sqlx::Error> {
        let user_id = insert_user_without_settings(pool, email).await?;

        sqlx::query(
            "INSERT INTO settings (user_id, array_size, speed, updated_at) VALUES (?, ?, ?, ?)",
        )
        .bind(user_id)
        .bind(DEFAULT_ARRAY_SIZE)
        .bind(DEFAULT_SPEED)
        .bind(Utc::now())
        .execute(pool)
        .await?;

        Ok(user_id)
    }

    pub async fn count_users(pool: &SqlitePool) -> Result<i64, sqlx::Error> {
        sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users")
            .fetch_one(pool)
            .await
    }
}

// Re-export commonly used test functions at module level for convenience
// Note: This is test-only code. Panic on error is acceptable in tests.
#[cfg(test)]
pub async fn create_test_pool() -> sqlx::SqlitePool {
    match test_helpers::create_test_db().await {
        Ok(pool) => pool,
        Err(e) => panic!("Failed to create test pool: {}", e),
    }
}
