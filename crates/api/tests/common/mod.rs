//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the full application router (same middleware stack as production)
//! and provides request/response helpers on top of `tower::ServiceExt`.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Request};
use axum::response::Response;
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use worklog_api::auth::jwt::{generate_access_token, JwtConfig};
use worklog_api::config::ServerConfig;
use worklog_api::router::build_app_router;
use worklog_api::state::AppState;
use worklog_db::models::project::CreateProject;
use worklog_db::repositories::ProjectRepo;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret-not-for-production".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Build the full application router with all middleware layers, using the
/// given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
    };
    build_app_router(state, &config)
}

/// Mint a valid access token for `user_id` using the test secret.
pub fn auth_token(user_id: i64) -> String {
    generate_access_token(user_id, &test_config().jwt)
        .expect("token generation should succeed")
}

/// Seed a project owned by `owner_id` directly through the repository.
pub async fn seed_project(pool: &PgPool, owner_id: i64, name: &str) -> i64 {
    let input = CreateProject {
        name: name.to_string(),
        description: None,
    };
    ProjectRepo::create(pool, owner_id, &input)
        .await
        .expect("project creation should succeed")
        .id
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(app: Router, request: Request<Body>) -> Response {
    app.oneshot(request)
        .await
        .expect("request should be handled")
}

/// Unauthenticated GET.
pub async fn get(app: Router, uri: &str) -> Response {
    send(
        app,
        Request::builder()
            .uri(uri)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

/// GET with a bearer token.
pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response {
    send(
        app,
        Request::builder()
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

/// Unauthenticated POST with a JSON body.
pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

/// POST with a bearer token and a JSON body.
pub async fn post_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(
        app,
        Request::builder()
            .method("POST")
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

/// PUT with a bearer token and a JSON body.
pub async fn put_json_auth(
    app: Router,
    uri: &str,
    token: &str,
    body: serde_json::Value,
) -> Response {
    send(
        app,
        Request::builder()
            .method("PUT")
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
    )
    .await
}

/// CORS preflight: OPTIONS with an `Origin` and a requested method.
pub async fn options_preflight(app: Router, uri: &str, origin: &str, method: &str) -> Response {
    send(
        app,
        Request::builder()
            .method("OPTIONS")
            .uri(uri)
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, method)
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

/// DELETE with a bearer token.
pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response {
    send(
        app,
        Request::builder()
            .method("DELETE")
            .uri(uri)
            .header(header::AUTHORIZATION, format!("Bearer {token}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response) -> serde_json::Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("body should collect")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body should be valid JSON")
}
