use crate::services::AccountServiceError;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde_json::json;
use thiserror::Error;

// Type alias for Result with our AppError
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("A user with this email already exists")]
    DuplicateUser,

    #[error("No user with this email was found")]
    UserNotFound,

    #[error("User settings were not found")]
    SettingsNotFound,

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<AccountServiceError> for AppError {
    fn from(err: AccountServiceError) -> Self {
        match err {
            AccountServiceError::InvalidEmail => AppError::Validation(err.to_string()),
            AccountServiceError::DuplicateUser => AppError::DuplicateUser,
            AccountServiceError::UserNotFound => AppError::UserNotFound,
            AccountServiceError::SettingsNotFound => AppError::SettingsNotFound,
            AccountServiceError::Database(e) => AppError::Database(e),
        }
    }
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::DuplicateUser => StatusCode::BAD_REQUEST,
            AppError::UserNotFound | AppError::SettingsNotFound => StatusCode::NOT_FOUND,
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let detail = match self {
            AppError::Database(ref e) => {
                tracing::error!("Database error while handling request: {}", e);
                "Internal server error".to_string()
            }
            _ => self.to_string(),
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}
