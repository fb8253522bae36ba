//! Repository for the `time_entries` table.

use sqlx::PgPool;
use worklog_core::time_tracking::NewTimeEntry;
use worklog_core::types::DbId;

use crate::models::time_entry::TimeEntry;

/// Column list for time_entries queries.
const COLUMNS: &str =
    "id, user_id, project_id, task_id, entry_date, duration_mins, note, created_at, updated_at";

/// Provides CRUD operations for time entries.
pub struct TimeEntryRepo;

impl TimeEntryRepo {
    /// Insert a validated time entry for `user_id` against `project_id`.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        project_id: DbId,
        input: &NewTimeEntry,
    ) -> Result<TimeEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO time_entries (user_id, project_id, task_id, entry_date, duration_mins, note)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TimeEntry>(&query)
            .bind(user_id)
            .bind(project_id)
            .bind(input.task_id)
            .bind(input.date)
            .bind(input.duration_mins)
            .bind(&input.note)
            .fetch_one(pool)
            .await
    }

    /// List a project's time entries, most recent work first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<TimeEntry>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM time_entries
             WHERE project_id = $1
             ORDER BY entry_date DESC, created_at DESC"
        );
        sqlx::query_as::<_, TimeEntry>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
