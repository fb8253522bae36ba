//! Time entry model.

use chrono::NaiveDate;
use serde::Serialize;
use sqlx::FromRow;
use worklog_core::types::{DbId, Timestamp};

/// A row from the `time_entries` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TimeEntry {
    pub id: DbId,
    pub user_id: DbId,
    pub project_id: DbId,
    pub task_id: Option<DbId>,
    pub entry_date: NaiveDate,
    pub duration_mins: i64,
    pub note: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
