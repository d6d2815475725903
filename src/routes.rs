use crate::{handlers, AppState};
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

/// API routes without transport layers, so tests can drive them directly.
pub fn api_router(app_state: AppState) -> Router {
    let users = Router::new()
        .route("/users/create", post(handlers::create_user_handler))
        .route("/users/login", post(handlers::login_handler))
        .route(
            "/users/settings",
            get(handlers::get_settings_handler).patch(handlers::update_settings_handler),
        );

    Router::new()
        .nest("/api/v1", users)
        .route("/health-check", get(handlers::health_check_handler))
        .with_state(app_state)
}

pub fn app(app_state: AppState, cors_layer: CorsLayer) -> Router {
    api_router(app_state)
        .layer(cors_layer)
        .layer(TraceLayer::new_for_http())
}
