//! Route definitions for projects.
//!
//! Mounted at `/projects` by `api_routes()`.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

/// Project routes.
///
/// ```text
/// POST /                      -> create_project
/// GET  /{project_id}          -> get_project
/// POST /{project_id}/members  -> add_member
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(projects::create_project))
        .route("/{project_id}", get(projects::get_project))
        .route("/{project_id}/members", post(projects::add_member))
}
