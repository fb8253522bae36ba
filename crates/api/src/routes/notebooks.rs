//! Route definitions for notebooks.
//!
//! The collection is nested under the owning project; single-notebook
//! operations live at `/notebooks/{id}`.

use axum::routing::get;
use axum::Router;

use crate::handlers::notebooks;
use crate::state::AppState;

/// Project-scoped notebook routes.
///
/// ```text
/// GET  /  -> list_notebooks
/// POST /  -> create_notebook
/// ```
pub fn project_router() -> Router<AppState> {
    Router::new().route(
        "/",
        get(notebooks::list_notebooks).post(notebooks::create_notebook),
    )
}

/// Single-notebook routes.
///
/// ```text
/// GET    /{id} -> get_notebook
/// PUT    /{id} -> update_notebook
/// DELETE /{id} -> delete_notebook
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/{id}",
        get(notebooks::get_notebook)
            .put(notebooks::update_notebook)
            .delete(notebooks::delete_notebook),
    )
}
