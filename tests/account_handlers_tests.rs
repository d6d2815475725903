//! HTTP-level tests for the account and settings endpoints.

use algoviz::{routes, test_utils::test_helpers, AppState};
use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

async fn setup_app() -> (Router, sqlx::SqlitePool) {
    let pool = test_helpers::create_test_db().await.unwrap();
    let app = routes::api_router(AppState::new(pool.clone()));
    (app, pool)
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let body = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);
    (status, body)
}

#[tokio::test]
async fn test_create_get_update_scenario() {
    let (app, _pool) = setup_app().await;

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/users/create",
            json!({ "email": "a@x.com" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "user_id": 1 }));

    let (status, body) = send(&app, get_request("/api/v1/users/settings?user_id=1")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user_id"], 1);
    assert_eq!(body["array_size"], 100);
    assert_eq!(body["speed"], 1);
    assert!(body["updated_at"].is_string());

    let (status, body) = send(
        &app,
        json_request(
            Method::PATCH,
            "/api/v1/users/settings",
            json!({ "user_id": 1, "speed": 5 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "user_id": 1, "array_size": 100, "speed": 5 }));
}

#[tokio::test]
async fn test_create_duplicate_is_bad_request() {
    let (app, pool) = setup_app().await;
    let request = || {
        json_request(
            Method::POST,
            "/api/v1/users/create",
            json!({ "email": "dup@x.com" }),
        )
    };

    let (status, _) = send(&app, request()).await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(&app, request()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["detail"].as_str().unwrap().contains("already exists"));
    assert_eq!(test_helpers::count_users(&pool).await.unwrap(), 1);
}

#[tokio::test]
async fn test_create_empty_email_is_unprocessable() {
    let (app, _pool) = setup_app().await;

    let (status, body) = send(
        &app,
        json_request(Method::POST, "/api/v1/users/create", json!({ "email": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_create_missing_email_is_rejected() {
    let (app, _pool) = setup_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/api/v1/users/create",
            json!({ "mail": "a@x.com" }),
        ))
        .await
        .unwrap();
    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_login() {
    let (app, pool) = setup_app().await;
    let user_id = test_helpers::insert_test_user(&pool, "known@x.com")
        .await
        .unwrap();

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/users/login",
            json!({ "email": "known@x.com" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "user_id": user_id }));

    let (status, body) = send(
        &app,
        json_request(
            Method::POST,
            "/api/v1/users/login",
            json!({ "email": "unknown@x.com" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert!(body["detail"].is_string());
}

#[tokio::test]
async fn test_settings_not_found() {
    let (app, pool) = setup_app().await;
    let orphan = test_helpers::insert_user_without_settings(&pool, "orphan@x.com")
        .await
        .unwrap();

    let (status, _) = send(
        &app,
        get_request(&format!("/api/v1/users/settings?user_id={}", orphan)),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = send(
        &app,
        json_request(
            Method::PATCH,
            "/api/v1/users/settings",
            json!({ "user_id": 777, "array_size": 20 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_get_settings_requires_integer_user_id() {
    let (app, _pool) = setup_app().await;

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/users/settings?user_id=abc"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let response = app
        .clone()
        .oneshot(get_request("/api/v1/users/settings"))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_update_with_null_and_zero_fields() {
    let (app, pool) = setup_app().await;
    let user_id = test_helpers::insert_test_user(&pool, "patch@x.com")
        .await
        .unwrap();

    let (status, body) = send(
        &app,
        json_request(
            Method::PATCH,
            "/api/v1/users/settings",
            json!({ "user_id": user_id, "array_size": 250, "speed": null }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["array_size"], 250);
    assert_eq!(body["speed"], 1);

    let (status, body) = send(
        &app,
        json_request(
            Method::PATCH,
            "/api/v1/users/settings",
            json!({ "user_id": user_id, "array_size": 0, "speed": 3 }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["array_size"], 250);
    assert_eq!(body["speed"], 3);
}

#[tokio::test]
async fn test_health_check() {
    let (app, _pool) = setup_app().await;

    let (status, body) = send(&app, get_request("/health-check")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "status": "OK" }));
}
