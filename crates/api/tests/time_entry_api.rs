//! HTTP-level integration tests for the time entry endpoints.
//!
//! Covers the authorization gate (401 without a credential on both verbs),
//! the membership gate (404 unknown project, 403 non-member), and the
//! list/create operations.

mod common;

use axum::http::StatusCode;
use common::{
    auth_token, body_json, build_test_app, get, get_auth, post_json, post_json_auth, seed_project,
};
use serde_json::json;
use sqlx::PgPool;
use worklog_db::repositories::ProjectRepo;

const OWNER: i64 = 1;
const MEMBER: i64 = 2;
const OUTSIDER: i64 = 3;

fn entries_path(project_id: i64) -> String {
    format!("/api/v1/projects/{project_id}/time-entries")
}

// ---------------------------------------------------------------------------
// Authorization gate
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn list_without_token_is_unauthorized(pool: PgPool) {
    let project_id = seed_project(&pool, OWNER, "p").await;
    let app = build_test_app(pool);

    let response = get(app, &entries_path(project_id)).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_without_token_is_unauthorized(pool: PgPool) {
    let project_id = seed_project(&pool, OWNER, "p").await;
    let app = build_test_app(pool);

    let response = post_json(
        app,
        &entries_path(project_id),
        json!({ "date": "2026-08-28", "duration": 60 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn garbage_token_is_unauthorized(pool: PgPool) {
    let project_id = seed_project(&pool, OWNER, "p").await;
    let app = build_test_app(pool);

    let response = get_auth(app, &entries_path(project_id), "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

// ---------------------------------------------------------------------------
// Membership gate
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn unknown_project_is_not_found(pool: PgPool) {
    let app = build_test_app(pool);
    let token = auth_token(OWNER);

    let response = get_auth(app, &entries_path(999_999), &token).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn non_member_is_forbidden(pool: PgPool) {
    let project_id = seed_project(&pool, OWNER, "p").await;
    let app = build_test_app(pool);
    let token = auth_token(OUTSIDER);

    let response = get_auth(app, &entries_path(project_id), &token).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
    let json = body_json(response).await;
    assert_eq!(json["code"], "FORBIDDEN");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn member_may_list(pool: PgPool) {
    let project_id = seed_project(&pool, OWNER, "p").await;
    ProjectRepo::add_member(&pool, project_id, MEMBER).await.unwrap();

    let app = build_test_app(pool);
    let token = auth_token(MEMBER);

    let response = get_auth(app, &entries_path(project_id), &token).await;
    assert_eq!(response.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Create / list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_then_list_round_trip(pool: PgPool) {
    let project_id = seed_project(&pool, OWNER, "p").await;
    let token = auth_token(OWNER);

    let app = build_test_app(pool.clone());
    let response = post_json_auth(
        app,
        &entries_path(project_id),
        &token,
        json!({ "date": "2026-08-28", "duration": 90, "note": "  deep work " }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    let data = &json["data"];
    assert_eq!(data["user_id"], OWNER, "user comes from the token");
    assert_eq!(data["project_id"], project_id);
    assert_eq!(data["duration_mins"], 90);
    assert_eq!(data["note"], "deep work", "note must be stored trimmed");

    let app = build_test_app(pool);
    let response = get_auth(app, &entries_path(project_id), &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let entries = json["data"].as_array().expect("data should be an array");
    assert_eq!(entries.len(), 1);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn create_with_invalid_payload_returns_field_errors(pool: PgPool) {
    let project_id = seed_project(&pool, OWNER, "p").await;
    let app = build_test_app(pool);
    let token = auth_token(OWNER);

    let response = post_json_auth(
        app,
        &entries_path(project_id),
        &token,
        json!({ "duration": 0 }),
    )
    .await;

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    let fields: Vec<_> = json["fields"]
        .as_array()
        .expect("fields should be an array")
        .iter()
        .map(|f| f["field"].as_str().unwrap().to_string())
        .collect();
    assert!(fields.contains(&"date".to_string()));
    assert!(fields.contains(&"duration".to_string()));
}
