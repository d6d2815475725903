//! JSON request and response bodies of the HTTP API.
//!
//! These are kept apart from the storage rows in `models` so either side
//! can change without the other.

use crate::models::{SettingsPatch, UserArrayConfiguration};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize)]
pub struct UserCreateRequest {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserCreateResponse {
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct UserLoginRequest {
    pub email: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UserLoginResponse {
    pub user_id: i64,
}

#[derive(Debug, Deserialize)]
pub struct GetUserSettingsQuery {
    pub user_id: i64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct GetUserSettingsResponse {
    pub user_id: i64,
    pub array_size: i64,
    pub speed: i64,
    pub updated_at: DateTime<Utc>,
}

impl From<UserArrayConfiguration> for GetUserSettingsResponse {
    fn from(settings: UserArrayConfiguration) -> Self {
        Self {
            user_id: settings.user_id,
            array_size: settings.array_size,
            speed: settings.speed,
            updated_at: settings.updated_at,
        }
    }
}

/// `array_size` and `speed` may be omitted or null to keep the stored value.
#[derive(Debug, Deserialize)]
pub struct UpdateUserSettingsRequest {
    pub user_id: i64,
    #[serde(default)]
    pub array_size: Option<i64>,
    #[serde(default)]
    pub speed: Option<i64>,
}

impl UpdateUserSettingsRequest {
    pub fn patch(&self) -> SettingsPatch {
        SettingsPatch {
            array_size: self.array_size,
            speed: self.speed,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UpdateUserSettingsResponse {
    pub user_id: i64,
    pub array_size: i64,
    pub speed: i64,
}

impl From<UserArrayConfiguration> for UpdateUserSettingsResponse {
    fn from(settings: UserArrayConfiguration) -> Self {
        Self {
            user_id: settings.user_id,
            array_size: settings.array_size,
            speed: settings.speed,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}
