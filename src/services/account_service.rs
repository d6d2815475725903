use crate::models::{SettingsPatch, User, UserArrayConfiguration};
use crate::repositories::{settings_repository, user_repository, RepositoryError};
use chrono::Utc;
use sqlx::SqlitePool;

#[derive(Debug, thiserror::Error)]
pub enum AccountServiceError {
    #[error("Email address is required")]
    InvalidEmail,
    #[error("A user with this email already exists")]
    DuplicateUser,
    #[error("No user with this email was found")]
    UserNotFound,
    #[error("User settings were not found")]
    SettingsNotFound,
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),
}

impl From<RepositoryError> for AccountServiceError {
    fn from(err: RepositoryError) -> Self {
        match err {
            RepositoryError::Database(e) => AccountServiceError::Database(e),
            RepositoryError::AlreadyExists => AccountServiceError::DuplicateUser,
            RepositoryError::NotFound => AccountServiceError::SettingsNotFound,
        }
    }
}

pub type AccountResult<T> = Result<T, AccountServiceError>;

/// Takes the write lock on `BEGIN`. A deferred transaction that reads first
/// gets `SQLITE_BUSY` on lock upgrade instead of waiting out the busy timeout.
const BEGIN_WRITE: &str = "BEGIN IMMEDIATE";

/// Registration, email login and per-user settings.
///
/// Each operation runs in its own transaction on the injected pool. A
/// transaction dropped on an early return is rolled back, so nothing is
/// committed unless the whole operation succeeds. Writers are serialized
/// by SQLite's write lock; readers are not blocked.
#[derive(Clone)]
pub struct AccountService {
    pool: SqlitePool,
}

impl AccountService {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Registers `email` and creates its default settings atomically.
    ///
    /// Concurrent registrations of the same email are settled by the
    /// UNIQUE constraint on `users.email`; the loser gets `DuplicateUser`.
    pub async fn create_user(&self, email: &str) -> AccountResult<i64> {
        validate_email(email)?;

        let mut tx = self.pool.begin_with(BEGIN_WRITE).await?;

        if user_repository::find_user_by_email(&mut *tx, email)
            .await?
            .is_some()
        {
            tracing::warn!(email, "Rejected registration of existing email");
            return Err(AccountServiceError::DuplicateUser);
        }

        let now = Utc::now();
        let user = user_repository::insert_user(&mut *tx, email, now).await?;
        settings_repository::insert_default_settings(&mut *tx, user.id, now).await?;

        tx.commit().await?;

        tracing::info!(user_id = user.id, "Created user with default settings");
        Ok(user.id)
    }

    /// Resolves an email to its user id. No credential is checked.
    pub async fn login_user(&self, email: &str) -> AccountResult<i64> {
        validate_email(email)?;

        let user = self
            .find_user_by_email(email)
            .await?
            .ok_or(AccountServiceError::UserNotFound)?;

        tracing::debug!(user_id = user.id, "User logged in");
        Ok(user.id)
    }

    pub async fn get_user_settings(&self, user_id: i64) -> AccountResult<UserArrayConfiguration> {
        let mut conn = self.pool.acquire().await?;

        settings_repository::find_settings_by_user_id(&mut conn, user_id)
            .await?
            .ok_or(AccountServiceError::SettingsNotFound)
    }

    /// Applies `patch` to the user's settings and returns the stored row.
    pub async fn update_user_settings(
        &self,
        user_id: i64,
        patch: SettingsPatch,
    ) -> AccountResult<UserArrayConfiguration> {
        let mut tx = self.pool.begin_with(BEGIN_WRITE).await?;

        let mut settings = settings_repository::find_settings_by_user_id(&mut *tx, user_id)
            .await?
            .ok_or(AccountServiceError::SettingsNotFound)?;

        patch.apply(&mut settings, Utc::now());
        settings_repository::update_settings(&mut *tx, &settings).await?;

        tx.commit().await?;

        tracing::info!(
            user_id,
            array_size = settings.array_size,
            speed = settings.speed,
            "Updated user settings"
        );
        Ok(settings)
    }

    pub async fn find_user_by_email(&self, email: &str) -> AccountResult<Option<User>> {
        let mut conn = self.pool.acquire().await?;
        Ok(user_repository::find_user_by_email(&mut conn, email).await?)
    }

    pub async fn find_user_by_id(&self, id: i64) -> AccountResult<Option<User>> {
        let mut conn = self.pool.acquire().await?;
        Ok(user_repository::find_user_by_id(&mut conn, id).await?)
    }

    pub async fn list_users(
        &self,
        limit: Option<i64>,
        offset: Option<i64>,
    ) -> AccountResult<Vec<User>> {
        let mut conn = self.pool.acquire().await?;
        Ok(user_repository::list_users(&mut conn, limit, offset).await?)
    }
}

fn validate_email(email: &str) -> AccountResult<()> {
    if email.trim().is_empty() {
        return Err(AccountServiceError::InvalidEmail);
    }
    Ok(())
}
