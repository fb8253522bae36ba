//! Route tables.

pub mod health;
pub mod notebooks;
pub mod projects;
pub mod time_entries;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /projects                                 create
/// /projects/{project_id}                    get
/// /projects/{project_id}/members            add member (owner only)
///
/// /projects/{project_id}/notebooks          list, create
/// /notebooks/{id}                           get, update, delete
///
/// /projects/{project_id}/time-entries       list, create
/// ```
///
/// Every route requires the authorization gate; handlers declare the
/// [`crate::middleware::auth::AuthUser`] extractor.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", projects::router())
        .nest(
            "/projects/{project_id}/notebooks",
            notebooks::project_router(),
        )
        .nest(
            "/projects/{project_id}/time-entries",
            time_entries::router(),
        )
        .nest("/notebooks", notebooks::router())
}
