use super::{is_unique_violation, RepositoryError, RepositoryResult};
use crate::models::user::User;
use chrono::{DateTime, Utc};
use sqlx::SqliteConnection;

pub async fn insert_user(
    conn: &mut SqliteConnection,
    email: &str,
    created_at: DateTime<Utc>,
) -> RepositoryResult<User> {
    let result = sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (email, created_at)
        VALUES (?, ?)
        RETURNING id, email, created_at
        "#,
    )
    .bind(email)
    .bind(created_at)
    .fetch_one(&mut *conn)
    .await;

    match result {
        Ok(user) => Ok(user),
        Err(e) if is_unique_violation(&e) => Err(RepositoryError::AlreadyExists),
        Err(e) => Err(RepositoryError::Database(e)),
    }
}

pub async fn find_user_by_email(
    conn: &mut SqliteConnection,
    email: &str,
) -> RepositoryResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, created_at
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(user)
}

pub async fn find_user_by_id(
    conn: &mut SqliteConnection,
    id: i64,
) -> RepositoryResult<Option<User>> {
    let user = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, created_at
        FROM users
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    Ok(user)
}

pub async fn list_users(
    conn: &mut SqliteConnection,
    limit: Option<i64>,
    offset: Option<i64>,
) -> RepositoryResult<Vec<User>> {
    let limit = limit.unwrap_or(100);
    let offset = offset.unwrap_or(0);

    let users = sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, created_at
        FROM users
        ORDER BY id ASC
        LIMIT ? OFFSET ?
        "#,
    )
    .bind(limit)
    .bind(offset)
    .fetch_all(&mut *conn)
    .await?;

    Ok(users)
}
