//! Time entry validation.
//!
//! A time entry records work done by a user against a project, optionally
//! linked to a task. Durations are whole minutes; entries not linked to a
//! task are allowed (manual entries).

use chrono::NaiveDate;
use serde::Deserialize;

use crate::types::DbId;
use crate::validation::FieldError;

/// A candidate time entry as submitted by a client.
///
/// The owning project and user are not part of the draft: the project comes
/// from the route path and the user from the authenticated caller.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TimeEntryDraft {
    pub task_id: Option<DbId>,
    pub date: Option<NaiveDate>,
    /// Duration in minutes.
    pub duration: Option<i64>,
    pub note: Option<String>,
}

/// A validated time entry ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTimeEntry {
    pub task_id: Option<DbId>,
    pub date: NaiveDate,
    pub duration_mins: i64,
    /// Trimmed; may be an empty string if the client sent only whitespace.
    pub note: Option<String>,
}

/// Validate and normalize a time entry draft.
///
/// Rules:
/// - `date` is required.
/// - `duration` is required and must be strictly positive.
/// - `task_id`, when present, must be a well-formed reference (positive id).
/// - `note` has leading/trailing whitespace stripped.
pub fn validate_new_time_entry(draft: &TimeEntryDraft) -> Result<NewTimeEntry, Vec<FieldError>> {
    let mut errors = Vec::new();

    if draft.date.is_none() {
        errors.push(FieldError::new("date", "is required"));
    }

    let duration = match draft.duration {
        None => {
            errors.push(FieldError::new("duration", "is required"));
            None
        }
        Some(mins) if mins <= 0 => {
            errors.push(FieldError::new("duration", "must be a positive number of minutes"));
            None
        }
        Some(mins) => Some(mins),
    };

    if let Some(task_id) = draft.task_id {
        if task_id <= 0 {
            errors.push(FieldError::new("task", "is not a valid task reference"));
        }
    }

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewTimeEntry {
        task_id: draft.task_id,
        date: draft.date.unwrap(),
        duration_mins: duration.unwrap(),
        note: draft.note.as_deref().map(|n| n.trim().to_string()),
    })
}
