#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, CONTENT_TYPE, COOKIE};
use axum::http::{Method, Request, StatusCode};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use salle_api::auth::jwt::JwtConfig;
use salle_api::auth::password::hash_password;
use salle_api::config::ServerConfig;
use salle_api::router::build_app_router;
use salle_api::state::AppState;
use salle_db::models::user::{CreateUser, User};
use salle_db::repositories::UserRepo;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

/// Password used by every account created through [`register`] and [`create_admin`].
pub const TEST_PASSWORD: &str = "kord-a-kvarta-7";

/// Role id seeded for `admin` by the first migration.
pub const ADMIN_ROLE_ID: i64 = 1;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        session_cookie_secure: false,
        password_min_length: 8,
        jwt: JwtConfig {
            secret: "integration-test-secret-with-enough-length".to_string(),
            access_token_expiry_mins: 60,
            refresh_token_expiry_days: 14,
        },
    }
}

/// Build the full application router (same middleware stack as `main.rs`).
pub fn build_test_app(pool: PgPool) -> Router {
    let state = AppState {
        pool,
        config: Arc::new(test_config()),
    };
    build_app_router(state)
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request).await.expect("request should be handled")
}

fn json_request(method: Method, uri: &str, token: Option<&str>, body: Option<Value>) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(AUTHORIZATION, format!("Bearer {token}"));
    }
    match body {
        Some(body) => builder
            .header(CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .expect("request should build"),
        None => builder.body(Body::empty()).expect("request should build"),
    }
}

pub async fn get(app: Router, uri: &str) -> Response {
    send(app, json_request(Method::GET, uri, None, None)).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, json_request(Method::GET, uri, Some(token), None)).await
}

/// GET authenticated only through the `salle_session` cookie.
pub async fn get_with_cookie(app: Router, uri: &str, cookie: &str) -> Response {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .header(COOKIE, cookie)
        .body(Body::empty())
        .expect("request should build");
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response {
    send(app, json_request(Method::POST, uri, None, Some(body))).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, json_request(Method::POST, uri, Some(token), Some(body))).await
}

pub async fn post_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, json_request(Method::POST, uri, Some(token), None)).await
}

pub async fn put_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response {
    send(app, json_request(Method::PUT, uri, Some(token), Some(body))).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(app, json_request(Method::DELETE, uri, Some(token), None)).await
}

/// Collect the response body and parse it as JSON.
pub async fn body_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should be readable")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be JSON")
}

// ---------------------------------------------------------------------------
// Account helpers
// ---------------------------------------------------------------------------

/// Register a member through the API and return the `data` payload.
pub async fn register(pool: &PgPool, username: &str, first_name: &str, last_name: &str) -> Value {
    let body = serde_json::json!({
        "username": username,
        "email": format!("{username}@salle.test"),
        "password": TEST_PASSWORD,
        "first_name": first_name,
        "last_name": last_name,
    });
    let response = post_json(build_test_app(pool.clone()), "/api/v1/auth/register", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}

/// Register a member and return only their access token.
pub async fn member_token(pool: &PgPool, username: &str) -> String {
    let data = register(pool, username, "Test", username).await;
    data["access_token"]
        .as_str()
        .expect("access_token should be a string")
        .to_string()
}

/// Create an admin account directly in the database.
pub async fn create_admin(pool: &PgPool, username: &str) -> User {
    let input = CreateUser {
        username: username.to_string(),
        email: format!("{username}@salle.test"),
        first_name: "Admin".to_string(),
        last_name: username.to_string(),
        password_hash: hash_password(TEST_PASSWORD).expect("hashing should succeed"),
        role_id: ADMIN_ROLE_ID,
    };
    UserRepo::create(pool, &input)
        .await
        .expect("admin creation should succeed")
}

/// Log in through the API.
pub async fn login(pool: &PgPool, username: &str, password: &str) -> Response {
    let body = serde_json::json!({ "username": username, "password": password });
    post_json(build_test_app(pool.clone()), "/api/v1/auth/login", body).await
}

/// Create an admin and return an access token for them.
pub async fn admin_token(pool: &PgPool) -> String {
    create_admin(pool, "trener").await;
    let response = login(pool, "trener", TEST_PASSWORD).await;
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await["data"]["access_token"]
        .as_str()
        .expect("access_token should be a string")
        .to_string()
}

/// Create an event through the admin API and return its `data` payload.
pub async fn create_event(
    pool: &PgPool,
    admin_token: &str,
    title: &str,
    start_date: chrono::DateTime<chrono::Utc>,
    event_type: &str,
) -> Value {
    let body = serde_json::json!({
        "title": title,
        "start_date": start_date.to_rfc3339(),
        "location": "Praha",
        "event_type": event_type,
    });
    let response =
        post_json_auth(build_test_app(pool.clone()), "/api/v1/admin/events", body, admin_token)
            .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"].clone()
}
