//! HTTP-level tests for albums, sub-albums, photos and likes.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{
    admin_token, body_json, build_test_app, create_event, get_auth, member_token, post_auth,
    post_json_auth,
};
use sqlx::PgPool;

/// Create an event and return the id of the album created with it.
async fn album_for_new_event(pool: &PgPool, admin: &str, member: &str) -> i64 {
    create_event(pool, admin, "Regional cup", Utc::now() - Duration::days(1), "tournament").await;
    let response = get_auth(build_test_app(pool.clone()), "/api/v1/albums", member).await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["event_title"], "Regional cup");
    json["data"][0]["id"].as_i64().unwrap()
}

async fn add_photo(pool: &PgPool, token: &str, subalbum_id: i64, path: &str) -> i64 {
    let body = serde_json::json!({
        "title": "Final bout",
        "photo_path": path,
        "is_featured": true,
    });
    let response = post_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/subalbums/{subalbum_id}/photos"),
        body,
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

async fn create_subalbum(pool: &PgPool, token: &str, album_id: i64, name: &str) -> i64 {
    let body = serde_json::json!({ "name": name });
    let response = post_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/albums/{album_id}/subalbums"),
        body,
        token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn album_lists_subalbums_with_photo_counts(pool: PgPool) {
    let admin = admin_token(&pool).await;
    let member = member_token(&pool, "photographer").await;
    let album_id = album_for_new_event(&pool, &admin, &member).await;
    let subalbum_id = create_subalbum(&pool, &member, album_id, "Saturday").await;
    add_photo(&pool, &member, subalbum_id, "event_photos/1.jpg").await;
    add_photo(&pool, &member, subalbum_id, "event_photos/2.jpg").await;
    create_subalbum(&pool, &member, album_id, "Sunday").await;

    let response = get_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/albums/{album_id}"),
        &member,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["event"]["title"], "Regional cup");
    // Newest sub-album first.
    assert_eq!(json["data"]["subalbums"][0]["name"], "Sunday");
    assert_eq!(json["data"]["subalbums"][0]["photo_count"], 0);
    assert_eq!(json["data"]["subalbums"][1]["name"], "Saturday");
    assert_eq!(json["data"]["subalbums"][1]["photo_count"], 2);
    // The first photo became the cover.
    assert_eq!(json["data"]["album"]["cover_photo_path"], "event_photos/1.jpg");

    let response = get_auth(build_test_app(pool), "/api/v1/albums", &member).await;
    assert_eq!(body_json(response).await["data"][0]["photo_count"], 2);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn like_toggles_on_and_off(pool: PgPool) {
    let admin = admin_token(&pool).await;
    let member = member_token(&pool, "fan").await;
    let album_id = album_for_new_event(&pool, &admin, &member).await;
    let subalbum_id = create_subalbum(&pool, &member, album_id, "Saturday").await;
    let photo_id = add_photo(&pool, &member, subalbum_id, "event_photos/a.jpg").await;
    let like_uri = format!("/api/v1/photos/{photo_id}/like");

    let response = post_auth(build_test_app(pool.clone()), &like_uri, &member).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["liked"], true);
    assert_eq!(json["data"]["like_count"], 1);

    let response = post_auth(build_test_app(pool.clone()), &like_uri, &admin).await;
    assert_eq!(body_json(response).await["data"]["like_count"], 2);

    let response = post_auth(build_test_app(pool.clone()), &like_uri, &member).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["liked"], false);
    assert_eq!(json["data"]["like_count"], 1);

    let response = get_auth(build_test_app(pool.clone()), "/api/v1/photos", &member).await;
    let json = body_json(response).await;
    assert_eq!(json["data"][0]["like_count"], 1);
    assert_eq!(json["data"][0]["liked_by_me"], false);

    let response = get_auth(
        build_test_app(pool),
        &format!("/api/v1/photos/{photo_id}"),
        &admin,
    )
    .await;
    assert_eq!(body_json(response).await["data"]["liked_by_me"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn missing_gallery_objects_are_not_found(pool: PgPool) {
    let member = member_token(&pool, "curious").await;

    for uri in ["/api/v1/photos/424242", "/api/v1/albums/424242", "/api/v1/subalbums/424242/photos"] {
        let response = get_auth(build_test_app(pool.clone()), uri, &member).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND, "uri: {uri}");
    }

    let response = post_auth(build_test_app(pool), "/api/v1/photos/424242/like", &member).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn photo_requires_a_path(pool: PgPool) {
    let admin = admin_token(&pool).await;
    let member = member_token(&pool, "careless").await;
    let album_id = album_for_new_event(&pool, &admin, &member).await;
    let subalbum_id = create_subalbum(&pool, &member, album_id, "Saturday").await;

    let body = serde_json::json!({ "title": "No file", "photo_path": "" });
    let response = post_json_auth(
        build_test_app(pool),
        &format!("/api/v1/subalbums/{subalbum_id}/photos"),
        body,
        &member,
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
