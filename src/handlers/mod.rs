pub mod account_handlers;

pub use account_handlers::{
    create_user_handler, get_settings_handler, health_check_handler, login_handler,
    update_settings_handler,
};
