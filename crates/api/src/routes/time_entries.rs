//! Route definitions for time entries.
//!
//! Mounted at `/projects/{project_id}/time-entries` by `api_routes()`; the
//! project id from the parent path is extracted by each handler.

use axum::routing::get;
use axum::Router;

use crate::handlers::time_entries;
use crate::state::AppState;

/// Time entry routes.
///
/// ```text
/// GET  /  -> list_entries
/// POST /  -> create_entry
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(time_entries::list_entries).post(time_entries::create_entry),
    )
}
