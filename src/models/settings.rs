use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

pub const DEFAULT_ARRAY_SIZE: i64 = 100;
pub const DEFAULT_SPEED: i64 = 1;

/// Per-user visualizer settings, stored in the `settings` table.
///
/// Every user owns exactly one row; it is created together with the user
/// and removed by the foreign key cascade if the user row is deleted.
#[derive(Debug, Clone, FromRow, Serialize, Deserialize)]
pub struct UserArrayConfiguration {
    pub id: i64,
    pub user_id: i64,
    pub array_size: i64,
    pub speed: i64,
    pub updated_at: DateTime<Utc>,
}

/// Field-level changes requested for a settings row.
///
/// `None` means the field was absent from the request. A present value of
/// zero is also treated as "leave unchanged", matching what existing
/// clients rely on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct SettingsPatch {
    pub array_size: Option<i64>,
    pub speed: Option<i64>,
}

impl SettingsPatch {
    pub fn is_empty(&self) -> bool {
        effective(self.array_size).is_none() && effective(self.speed).is_none()
    }

    /// Applies the patch in place and refreshes `updated_at`.
    pub fn apply(&self, settings: &mut UserArrayConfiguration, now: DateTime<Utc>) {
        if let Some(array_size) = effective(self.array_size) {
            settings.array_size = array_size;
        }
        if let Some(speed) = effective(self.speed) {
            settings.speed = speed;
        }
        settings.updated_at = next_updated_at(settings.updated_at, now);
    }
}

fn effective(value: Option<i64>) -> Option<i64> {
    value.filter(|v| *v != 0)
}

/// The wall clock may step backwards or repeat; `updated_at` must not.
pub fn next_updated_at(previous: DateTime<Utc>, now: DateTime<Utc>) -> DateTime<Utc> {
    if now > previous {
        now
    } else {
        previous + Duration::microseconds(1)
    }
}
