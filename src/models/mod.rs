pub mod settings;
pub mod user;

#[cfg(test)]
mod settings_test;

pub use settings::{SettingsPatch, UserArrayConfiguration, DEFAULT_ARRAY_SIZE, DEFAULT_SPEED};
pub use user::User;
