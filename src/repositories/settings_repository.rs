use super::{RepositoryError, RepositoryResult};
use crate::models::settings::{UserArrayConfiguration, DEFAULT_ARRAY_SIZE, DEFAULT_SPEED};
use chrono::{DateTime, Utc};
use sqlx::SqliteConnection;

pub async fn insert_default_settings(
    conn: &mut SqliteConnection,
    user_id: i64,
    now: DateTime<Utc>,
) -> RepositoryResult<UserArrayConfiguration> {
    let settings = sqlx::query_as::<_, UserArrayConfiguration>(
        r#"
        INSERT INTO settings (user_id, array_size, speed, updated_at)
        VALUES (?, ?, ?, ?)
        RETURNING id, user_id, array_size, speed, updated_at
        "#,
    )
    .bind(user_id)
    .bind(DEFAULT_ARRAY_SIZE)
    .bind(DEFAULT_SPEED)
    .bind(now)
    .fetch_one(&mut *conn)
    .await?;

    Ok(settings)
}

pub async fn find_settings_by_user_id(
    conn: &mut SqliteConnection,
    user_id: i64,
) -> RepositoryResult<Option<UserArrayConfiguration>> {
    let settings = sqlx::query_as::<_, UserArrayConfiguration>(
        r#"
        SELECT id, user_id, array_size, speed, updated_at
        FROM settings
        WHERE user_id = ?
        "#,
    )
    .bind(user_id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(settings)
}

/// Writes the mutable columns of `settings` back to its row.
pub async fn update_settings(
    conn: &mut SqliteConnection,
    settings: &UserArrayConfiguration,
) -> RepositoryResult<()> {
    let result = sqlx::query(
        "UPDATE settings SET array_size = ?, speed = ?, updated_at = ? WHERE user_id = ?",
    )
    .bind(settings.array_size)
    .bind(settings.speed)
    .bind(settings.updated_at)
    .bind(settings.user_id)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RepositoryError::NotFound);
    }

    Ok(())
}
