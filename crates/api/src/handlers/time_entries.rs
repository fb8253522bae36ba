//! Handlers for project time entries.
//!
//! Both operations run behind the authorization gate and additionally check
//! project membership: 404 when the project does not exist, 403 when the
//! caller is neither the owner nor a member.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use worklog_core::error::CoreError;
use worklog_core::time_tracking::{validate_new_time_entry, TimeEntryDraft};
use worklog_core::types::DbId;
use worklog_db::repositories::{ProjectRepo, TimeEntryRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Resolve the project and verify the caller may access it.
async fn require_membership(
    state: &AppState,
    project_id: DbId,
    user_id: DbId,
) -> AppResult<()> {
    ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Project",
            id: project_id,
        }))?;

    if !ProjectRepo::is_member(&state.pool, project_id, user_id).await? {
        return Err(AppError::Core(CoreError::Forbidden(
            "User is not a member of this project".to_string(),
        )));
    }

    Ok(())
}

/// GET /projects/{project_id}/time-entries
///
/// List all time entries for a project.
pub async fn list_entries(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    require_membership(&state, project_id, auth.user_id).await?;

    let entries = TimeEntryRepo::list_by_project(&state.pool, project_id).await?;
    Ok(Json(DataResponse { data: entries }))
}

/// POST /projects/{project_id}/time-entries
///
/// Create a time entry for the authenticated caller against the project.
pub async fn create_entry(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
    Json(draft): Json<TimeEntryDraft>,
) -> AppResult<impl IntoResponse> {
    require_membership(&state, project_id, auth.user_id).await?;

    let new = validate_new_time_entry(&draft)?;
    let entry = TimeEntryRepo::create(&state.pool, auth.user_id, project_id, &new).await?;

    tracing::info!(
        user_id = auth.user_id,
        entry_id = entry.id,
        project_id,
        duration_mins = entry.duration_mins,
        "Time entry created"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: entry })))
}
