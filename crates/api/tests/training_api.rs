//! HTTP-level tests for training notes and circuit trainings.

mod common;

use axum::http::StatusCode;
use common::{
    body_json, build_test_app, delete_auth, get_auth, member_token, post_json_auth, put_json_auth,
};
use sqlx::PgPool;

// ---------------------------------------------------------------------------
// Notes
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn notes_are_listed_newest_date_first(pool: PgPool) {
    let token = member_token(&pool, "diary").await;

    for (date, text) in [("2025-03-01", "Footwork"), ("2025-03-05", "Bouting")] {
        let body = serde_json::json!({ "date": date, "notes": text });
        let response =
            post_json_auth(build_test_app(pool.clone()), "/api/v1/training/notes", body, &token)
                .await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    let response = get_auth(build_test_app(pool), "/api/v1/training/notes", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    let notes = json["data"].as_array().unwrap();
    assert_eq!(notes.len(), 2);
    assert_eq!(notes[0]["notes"], "Bouting");
    assert_eq!(notes[1]["date"], "2025-03-01");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn note_without_date_defaults_to_today(pool: PgPool) {
    let token = member_token(&pool, "today").await;

    let body = serde_json::json!({ "notes": "Lunges" });
    let response =
        post_json_auth(build_test_app(pool), "/api/v1/training/notes", body, &token).await;

    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    let today = chrono::Utc::now().date_naive().to_string();
    assert_eq!(json["data"]["date"], today.as_str());
}

#[sqlx::test(migrations = "../db/migrations")]
async fn blank_note_is_rejected(pool: PgPool) {
    let token = member_token(&pool, "blank").await;

    let body = serde_json::json!({ "notes": "   " });
    let response =
        post_json_auth(build_test_app(pool), "/api/v1/training/notes", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn notes_of_other_fencers_are_not_found(pool: PgPool) {
    let owner = member_token(&pool, "owner").await;
    let other = member_token(&pool, "other").await;

    let body = serde_json::json!({ "notes": "Private" });
    let response =
        post_json_auth(build_test_app(pool.clone()), "/api/v1/training/notes", body, &owner).await;
    let id = body_json(response).await["data"]["id"].as_i64().unwrap();
    let uri = format!("/api/v1/training/notes/{id}");

    let response = get_auth(build_test_app(pool.clone()), &uri, &other).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = serde_json::json!({ "notes": "Hijacked" });
    let response = put_json_auth(build_test_app(pool.clone()), &uri, body, &other).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = delete_auth(build_test_app(pool.clone()), &uri, &other).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // The owner still sees the original text and can delete it.
    let response = get_auth(build_test_app(pool.clone()), &uri, &owner).await;
    assert_eq!(body_json(response).await["data"]["notes"], "Private");
    let response = delete_auth(build_test_app(pool), &uri, &owner).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
}

// ---------------------------------------------------------------------------
// Circuits
// ---------------------------------------------------------------------------

async fn create_circuit(pool: &PgPool, token: &str, name: &str, is_public: bool) -> i64 {
    let body = serde_json::json!({
        "name": name,
        "exercises": "Jumping jacks\n\n  Push-ups  \nPlank",
        "is_public": is_public,
    });
    let response =
        post_json_auth(build_test_app(pool.clone()), "/api/v1/training/circuits", body, token)
            .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    body_json(response).await["data"]["id"].as_i64().unwrap()
}

#[sqlx::test(migrations = "../db/migrations")]
async fn circuit_exercises_are_parsed_per_line(pool: PgPool) {
    let token = member_token(&pool, "coach").await;
    let id = create_circuit(&pool, &token, "Masíčko", false).await;

    let response = get_auth(
        build_test_app(pool),
        &format!("/api/v1/training/circuits/{id}"),
        &token,
    )
    .await;

    let json = body_json(response).await;
    assert_eq!(
        json["data"]["exercise_list"],
        serde_json::json!(["Jumping jacks", "Push-ups", "Plank"])
    );
    assert_eq!(json["data"]["can_manage"], true);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn private_circuits_are_hidden_from_others(pool: PgPool) {
    let author = member_token(&pool, "author").await;
    let reader = member_token(&pool, "reader").await;
    let private_id = create_circuit(&pool, &author, "Private", false).await;
    let public_id = create_circuit(&pool, &author, "Public", true).await;

    let response = get_auth(build_test_app(pool.clone()), "/api/v1/training/circuits", &reader).await;
    let json = body_json(response).await;
    let ids: Vec<i64> = json["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![public_id]);

    let response = get_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/training/circuits/{private_id}"),
        &reader,
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Visible but not editable.
    let body = serde_json::json!({ "name": "Renamed" });
    let response = put_json_auth(
        build_test_app(pool),
        &format!("/api/v1/training/circuits/{public_id}"),
        body,
        &reader,
    )
    .await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn songs_are_attached_and_removed(pool: PgPool) {
    let token = member_token(&pool, "dj").await;
    let id = create_circuit(&pool, &token, "With music", true).await;

    let body = serde_json::json!({ "name": "Eye of the Tiger", "audio_path": "circuit_songs/tiger.mp3" });
    let response = post_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/training/circuits/{id}/songs"),
        body,
        &token,
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let song_id = body_json(response).await["data"]["id"].as_i64().unwrap();

    let response = get_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/training/circuits/{id}"),
        &token,
    )
    .await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["songs"][0]["name"], "Eye of the Tiger");

    let uri = format!("/api/v1/training/circuits/{id}/songs/{song_id}");
    let response = delete_auth(build_test_app(pool.clone()), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);
    let response = delete_auth(build_test_app(pool), &uri, &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn circuit_without_exercises_is_rejected(pool: PgPool) {
    let token = member_token(&pool, "lazy").await;

    let body = serde_json::json!({ "name": "Empty", "exercises": " \n \n" });
    let response =
        post_json_auth(build_test_app(pool), "/api/v1/training/circuits", body, &token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
