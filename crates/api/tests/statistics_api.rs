//! HTTP-level tests for the "about me", individual and club statistics pages.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{
    admin_token, body_json, build_test_app, create_event, get_auth, post_json_auth, put_json_auth,
    register,
};
use serde_json::Value;
use sqlx::PgPool;

async fn record(pool: &PgPool, admin: &str, event_id: &Value, fencer_id: &Value, wins: i32, losses: i32) {
    let body = serde_json::json!({
        "fencer_id": fencer_id,
        "wins": wins,
        "losses": losses,
        "touches_scored": wins * 5,
        "touches_received": losses * 5,
    });
    let response = post_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/events/{event_id}/participations"),
        body,
        admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn about_me_shows_recent_results_and_totals(pool: PgPool) {
    let admin = admin_token(&pool).await;
    let member = register(&pool, "aboutme", "Karel", "Veselý").await;
    let token = member["access_token"].as_str().unwrap().to_string();
    let fencer_id = &member["profile"]["id"];

    for days in 1..=12 {
        let event = create_event(&pool, &admin, &format!("Bout night {days}"), Utc::now() - Duration::days(days), "other").await;
        record(&pool, &admin, &event["id"], fencer_id, 1, 1).await;
    }

    let response = get_auth(build_test_app(pool), "/api/v1/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["data"]["user"]["first_name"], "Karel");
    assert!(json["data"]["club"].is_null());
    let recent = json["data"]["recent_participations"].as_array().unwrap();
    assert_eq!(recent.len(), 10);
    assert_eq!(recent[0]["event_title"], "Bout night 1");
    assert_eq!(json["data"]["totals"]["events"], 12);
    assert_eq!(json["data"]["totals"]["wins"], 12);
    assert_eq!(json["data"]["totals"]["win_rate"], 50.0);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn individual_statistics_sum_every_participation(pool: PgPool) {
    let admin = admin_token(&pool).await;
    let member = register(&pool, "solo", "", "").await;
    let token = member["access_token"].as_str().unwrap().to_string();
    let fencer_id = &member["profile"]["id"];

    let first = create_event(&pool, &admin, "Cup A", Utc::now() - Duration::days(30), "tournament").await;
    let second = create_event(&pool, &admin, "Cup B", Utc::now() - Duration::days(3), "tournament").await;
    record(&pool, &admin, &first["id"], fencer_id, 3, 2).await;
    record(&pool, &admin, &second["id"], fencer_id, 5, 1).await;
    // Re-recording replaces the earlier result.
    record(&pool, &admin, &second["id"], fencer_id, 5, 1).await;

    let response = get_auth(build_test_app(pool), "/api/v1/statistics/individual", &token).await;
    let json = body_json(response).await;

    assert_eq!(json["data"]["participations"].as_array().unwrap().len(), 2);
    assert_eq!(json["data"]["totals"]["wins"], 8);
    assert_eq!(json["data"]["totals"]["losses"], 3);
    assert_eq!(json["data"]["totals"]["touch_difference"], 25);
    assert_eq!(json["data"]["totals"]["win_rate"], 72.7);
}

#[sqlx::test(migrations = "../db/migrations")]
async fn club_statistics_rank_members(pool: PgPool) {
    let admin = admin_token(&pool).await;

    let response = post_json_auth(
        build_test_app(pool.clone()),
        "/api/v1/admin/clubs",
        serde_json::json!({ "name": "Šerm Brno" }),
        &admin,
    )
    .await;
    let club_id = body_json(response).await["data"]["id"].clone();

    let alice = register(&pool, "alice", "Alice", "Dvořák").await;
    let bob = register(&pool, "bob", "Bob", "Král").await;
    for member in [&alice, &bob] {
        let response = put_json_auth(
            build_test_app(pool.clone()),
            &format!("/api/v1/admin/profiles/{}", member["profile"]["id"]),
            serde_json::json!({ "club_id": club_id }),
            &admin,
        )
        .await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    let event = create_event(&pool, &admin, "Club champs", Utc::now() - Duration::days(2), "tournament").await;
    create_event(&pool, &admin, "Charity run", Utc::now() - Duration::days(4), "humanitarian").await;
    record(&pool, &admin, &event["id"], &alice["profile"]["id"], 2, 3).await;
    record(&pool, &admin, &event["id"], &bob["profile"]["id"], 4, 1).await;

    // Tournaments without a club member must not show up on the club page.
    create_event(&pool, &admin, "Foreign cup", Utc::now() - Duration::days(1), "tournament").await;
    let outsider = register(&pool, "outsider", "Olga", "Cizí").await;
    let other_cup =
        create_event(&pool, &admin, "Other club cup", Utc::now() - Duration::days(3), "tournament").await;
    record(&pool, &admin, &other_cup["id"], &outsider["profile"]["id"], 1, 1).await;

    let token = alice["access_token"].as_str().unwrap();
    let response = get_auth(build_test_app(pool), "/api/v1/statistics/club", token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;

    assert_eq!(json["data"]["club"]["name"], "Šerm Brno");
    let members = json["data"]["members"].as_array().unwrap();
    assert_eq!(members.len(), 2);
    assert_eq!(members[0]["display_name"], "Bob Král");
    assert_eq!(members[0]["wins"], 4);
    assert_eq!(members[1]["display_name"], "Alice Dvořák");
    assert_eq!(json["data"]["participations"].as_array().unwrap().len(), 2);

    let tournaments = json["data"]["tournaments"].as_array().unwrap();
    assert_eq!(tournaments.len(), 1);
    assert_eq!(tournaments[0]["title"], "Club champs");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn club_statistics_without_club_is_bad_request(pool: PgPool) {
    let member = register(&pool, "loner", "", "").await;
    let token = member["access_token"].as_str().unwrap();

    let response = get_auth(build_test_app(pool), "/api/v1/statistics/club", token).await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "BAD_REQUEST");
    assert_eq!(json["error"], "Your profile is not assigned to a club");
}

#[sqlx::test(migrations = "../db/migrations")]
async fn payment_status_is_created_on_first_visit(pool: PgPool) {
    let admin = admin_token(&pool).await;
    let member = register(&pool, "payer", "", "").await;
    let token = member["access_token"].as_str().unwrap();

    let response = get_auth(build_test_app(pool.clone()), "/api/v1/payment", token).await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert_eq!(json["data"]["is_paid"], false);
    let first_id = json["data"]["id"].clone();

    let response = put_json_auth(
        build_test_app(pool.clone()),
        &format!("/api/v1/admin/payments/{}", member["profile"]["id"]),
        serde_json::json!({ "is_paid": true, "amount": "2500.00", "payment_date": "2025-09-01" }),
        &admin,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get_auth(build_test_app(pool), "/api/v1/payment", token).await;
    let json = body_json(response).await;
    assert_eq!(json["data"]["id"], first_id);
    assert_eq!(json["data"]["is_paid"], true);
    assert_eq!(json["data"]["amount"], "2500.00");
}
