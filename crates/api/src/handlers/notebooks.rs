//! Handlers for project notebooks.
//!
//! The schema rules (required project reference, trimmed non-empty name,
//! content floor) live in `worklog_core::notebook`; handlers here only wire
//! the validated result to the repository and map failures to HTTP errors.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use worklog_core::error::CoreError;
use worklog_core::notebook::{validate_new_notebook, validate_notebook_update, NotebookDraft};
use worklog_core::types::DbId;
use worklog_db::models::notebook::UpdateNotebook;
use worklog_db::repositories::{NotebookRepo, ProjectRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Resolve a project or fail with 404.
async fn require_project(state: &AppState, project_id: DbId) -> AppResult<()> {
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;
    Ok(())
}

/// GET /projects/{project_id}/notebooks
///
/// List a project's notebooks, newest first.
pub async fn list_notebooks(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    require_project(&state, project_id).await?;

    let notebooks = NotebookRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: notebooks }))
}

/// POST /projects/{project_id}/notebooks
///
/// Create a notebook. The owning project comes from the path; the draft is
/// validated and normalized before insertion.
pub async fn create_notebook(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(mut draft): Json<NotebookDraft>,
) -> AppResult<impl IntoResponse> {
    require_project(&state, project_id).await?;

    // The path is authoritative for the owning project.
    draft.project_id = Some(project_id);
    let new = validate_new_notebook(&draft)?;

    let notebook = NotebookRepo::create(&state.pool, &new).await?;

    tracing::info!(
        user_id = auth.user_id,
        notebook_id = notebook.id,
        project_id,
        name = %notebook.name,
        "Notebook created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: notebook })))
}

/// GET /notebooks/{id}
///
/// Get a single notebook by ID.
pub async fn get_notebook(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let notebook = NotebookRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Notebook",
                id,
            })
        })?;

    Ok(Json(DataResponse { data: notebook }))
}

/// PUT /notebooks/{id}
///
/// Update a notebook's name and/or content. Refreshes `updated_at`.
pub async fn update_notebook(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNotebook>,
) -> AppResult<impl IntoResponse> {
    validate_notebook_update(input.name.as_deref())?;

    let notebook = NotebookRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Notebook",
                id,
            })
        })?;

    tracing::info!(
        user_id = auth.user_id,
        notebook_id = id,
        "Notebook updated"
    );

    Ok(Json(DataResponse { data: notebook }))
}

/// DELETE /notebooks/{id}
///
/// Delete a notebook.
pub async fn delete_notebook(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let deleted = NotebookRepo::delete(&state.pool, id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Notebook",
            id,
        }));
    }

    tracing::info!(
        user_id = auth.user_id,
        notebook_id = id,
        "Notebook deleted"
    );

    Ok(StatusCode::NO_CONTENT)
}
