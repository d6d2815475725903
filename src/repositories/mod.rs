//! Typed queries against the `users` and `settings` tables.
//!
//! Every function takes a `&mut SqliteConnection` so it runs inside the
//! caller's transaction. Nothing here commits.

pub mod settings_repository;
pub mod user_repository;

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("Record not found")]
    NotFound,
    #[error("Record already exists")]
    AlreadyExists,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

/// SQLite reports `SQLITE_CONSTRAINT_UNIQUE` as extended code 2067,
/// Postgres as SQLSTATE 23505.
pub fn is_unique_violation(err: &sqlx::Error) -> bool {
    matches!(
        err,
        sqlx::Error::Database(db_err)
            if db_err.code().as_deref() == Some("2067")
                || db_err.code().as_deref() == Some("23505")
    )
}
