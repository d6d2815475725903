use crate::error::Result;
use crate::schemas::{
    GetUserSettingsQuery, GetUserSettingsResponse, HealthResponse, UpdateUserSettingsRequest,
    UpdateUserSettingsResponse, UserCreateRequest, UserCreateResponse, UserLoginRequest,
    UserLoginResponse,
};
use crate::AppState;
use axum::{
    extract::{Query, State},
    Json,
};

pub async fn create_user_handler(
    State(app_state): State<AppState>,
    Json(request): Json<UserCreateRequest>,
) -> Result<Json<UserCreateResponse>> {
    let user_id = app_state
        .account_service
        .create_user(&request.email)
        .await?;

    Ok(Json(UserCreateResponse { user_id }))
}

pub async fn login_handler(
    State(app_state): State<AppState>,
    Json(request): Json<UserLoginRequest>,
) -> Result<Json<UserLoginResponse>> {
    let user_id = app_state.account_service.login_user(&request.email).await?;

    Ok(Json(UserLoginResponse { user_id }))
}

pub async fn get_settings_handler(
    State(app_state): State<AppState>,
    Query(query): Query<GetUserSettingsQuery>,
) -> Result<Json<GetUserSettingsResponse>> {
    let settings = app_state
        .account_service
        .get_user_settings(query.user_id)
        .await?;

    Ok(Json(settings.into()))
}

pub async fn update_settings_handler(
    State(app_state): State<AppState>,
    Json(request): Json<UpdateUserSettingsRequest>,
) -> Result<Json<UpdateUserSettingsResponse>> {
    let settings = app_state
        .account_service
        .update_user_settings(request.user_id, request.patch())
        .await?;

    Ok(Json(settings.into()))
}

pub async fn health_check_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "OK".to_string(),
    })
}
