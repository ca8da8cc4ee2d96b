//! Tests for the JSON error body and status mapping.

mod common;

use assert_matches::assert_matches;
use axum::body::Body;
use axum::http::header::CONTENT_TYPE;
use axum::http::{Method, Request, StatusCode};
use common::{body_json, build_test_app, get_auth, member_token};
use salle_db::repositories::FencerProfileRepo;
use sqlx::PgPool;
use tower::ServiceExt;

#[sqlx::test(migrations = "../db/migrations")]
async fn not_found_uses_error_envelope(pool: PgPool) {
    let token = member_token(&pool, "missing").await;

    let response = get_auth(build_test_app(pool), "/api/v1/training/notes/31337", &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = body_json(response).await;
    assert_eq!(json["code"], "NOT_FOUND");
    assert_matches!(json["error"].as_str(), Some(msg) if msg.contains("TrainingNote"));
}

#[sqlx::test(migrations = "../db/migrations")]
async fn malformed_json_is_rejected(pool: PgPool) {
    let token = member_token(&pool, "sloppy").await;

    let request = Request::builder()
        .method(Method::POST)
        .uri("/api/v1/training/notes")
        .header(CONTENT_TYPE, "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from("{ not json"))
        .unwrap();
    let response = build_test_app(pool).oneshot(request).await.unwrap();

    assert!(response.status().is_client_error());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn account_without_profile_gets_not_found(pool: PgPool) {
    let token = member_token(&pool, "orphan").await;
    let profile = sqlx::query_scalar::<_, i64>(
        "SELECT p.id FROM fencer_profiles p JOIN users u ON u.id = p.user_id WHERE u.username = 'orphan'",
    )
    .fetch_one(&pool)
    .await
    .unwrap();
    FencerProfileRepo::delete(&pool, profile).await.unwrap();

    let response = get_auth(build_test_app(pool), "/api/v1/payment", &token).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(response).await["code"], "NOT_FOUND");
}
