//! CORS behaviour of the shared router.

mod common;

use axum::http::{header, StatusCode};
use common::{build_test_app, options_preflight};
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn preflight_advertises_only_served_verbs(pool: PgPool) {
    let app = build_test_app(pool);
    let response =
        options_preflight(app, "/api/v1/projects", "http://localhost:5173", "GET").await;
    assert_eq!(response.status(), StatusCode::OK);

    let allowed = response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_METHODS)
        .expect("preflight should carry an allow-methods header")
        .to_str()
        .unwrap();
    for verb in ["GET", "POST", "PUT", "DELETE"] {
        assert!(allowed.contains(verb), "missing {verb} in {allowed}");
    }
    assert!(!allowed.contains("PATCH"), "unexpected PATCH in {allowed}");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn preflight_from_unknown_origin_is_not_allowed(pool: PgPool) {
    let app = build_test_app(pool);
    let response =
        options_preflight(app, "/api/v1/projects", "http://evil.example.com", "GET").await;
    assert!(response
        .headers()
        .get(header::ACCESS_CONTROL_ALLOW_ORIGIN)
        .is_none());
}
