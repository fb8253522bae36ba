//! Handlers for project CRUD and membership.
//!
//! Projects exist here mainly as the parent of notebooks and time entries;
//! the full project surface lives in the wider platform.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use worklog_core::error::CoreError;
use worklog_core::types::DbId;
use worklog_db::models::project::CreateProject;
use worklog_db::repositories::ProjectRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Body for adding a project member.
#[derive(Debug, serde::Deserialize)]
pub struct AddMember {
    pub user_id: DbId,
}

/// POST /projects
///
/// Create a project owned by the authenticated caller.
pub async fn create_project(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateProject>,
) -> AppResult<impl IntoResponse> {
    if input.name.trim().is_empty() {
        return Err(AppError::BadRequest("Project name is required".to_string()));
    }

    let project = ProjectRepo::create(&state.pool, auth.user_id, &input).await?;

    tracing::info!(
        user_id = auth.user_id,
        project_id = project.id,
        name = %project.name,
        "Project created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: project })))
}

/// GET /projects/{project_id}
///
/// Get a single project by ID.
pub async fn get_project(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Project",
                id: project_id,
            })
        })?;

    Ok(Json(DataResponse { data: project }))
}

/// POST /projects/{project_id}/members
///
/// Add a user to the project's member list. Only the owner may do this.
pub async fn add_member(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(input): Json<AddMember>,
) -> AppResult<impl IntoResponse> {
    let project = ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Project",
                id: project_id,
            })
        })?;

    if project.owner_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the project owner can add members".to_string(),
        )));
    }

    ProjectRepo::add_member(&state.pool, project_id, input.user_id).await?;

    tracing::info!(
        user_id = auth.user_id,
        project_id,
        member_id = input.user_id,
        "Project member added"
    );

    Ok(StatusCode::NO_CONTENT)
}
