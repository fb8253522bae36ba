//! Notebook validation and shaping.
//!
//! A notebook is a freeform document attached to a project. The persistence
//! schema is deliberately thin: a required owning project reference, a
//! required trimmed name, and content that is never absent (empty string is
//! the floor). The declarative rules are expressed here as an explicit
//! validation function so accept/reject behavior is testable without a
//! database.

use serde::Deserialize;

use crate::types::DbId;
use crate::validation::FieldError;

/// A candidate notebook as submitted by a client, before validation.
///
/// Every field is optional at this stage; [`validate_new_notebook`] decides
/// what is actually required. Nested routes fill `project_id` from the path
/// before validating, so the reference check still runs on one code path.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct NotebookDraft {
    pub project_id: Option<DbId>,
    pub name: Option<String>,
    pub content: Option<String>,
}

/// A validated, normalized notebook ready for insertion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewNotebook {
    pub project_id: DbId,
    /// Leading/trailing whitespace already stripped.
    pub name: String,
    /// Defaults to the empty string when the draft omitted it.
    pub content: String,
}

/// Validate and normalize a notebook draft.
///
/// Rules:
/// - `project_id` is required and must be a well-formed reference
///   (positive id).
/// - `name` is required and must be non-empty after trimming.
/// - `content` defaults to `""` when absent.
///
/// Returns every failing field, not just the first.
pub fn validate_new_notebook(draft: &NotebookDraft) -> Result<NewNotebook, Vec<FieldError>> {
    let mut errors = Vec::new();

    let project_id = match draft.project_id {
        None => {
            errors.push(FieldError::new("project", "is required"));
            None
        }
        Some(id) if id <= 0 => {
            errors.push(FieldError::new("project", "is not a valid project reference"));
            None
        }
        Some(id) => Some(id),
    };

    let name = match draft.name.as_deref().map(str::trim) {
        None => {
            errors.push(FieldError::new("name", "is required"));
            None
        }
        Some("") => {
            errors.push(FieldError::new("name", "must not be empty"));
            None
        }
        Some(trimmed) => Some(trimmed.to_string()),
    };

    if !errors.is_empty() {
        return Err(errors);
    }

    Ok(NewNotebook {
        // Both are Some when no errors were recorded.
        project_id: project_id.unwrap(),
        name: name.unwrap(),
        content: draft.content.clone().unwrap_or_default(),
    })
}

/// Validate the updatable fields of a notebook.
///
/// `name`, when provided, must be non-empty after trimming. `content` may be
/// set to any string including `""`.
pub fn validate_notebook_update(name: Option<&str>) -> Result<(), Vec<FieldError>> {
    match name.map(str::trim) {
        Some("") => Err(vec![FieldError::new("name", "must not be empty")]),
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(project_id: Option<DbId>, name: Option<&str>, content: Option<&str>) -> NotebookDraft {
        NotebookDraft {
            project_id,
            name: name.map(str::to_string),
            content: content.map(str::to_string),
        }
    }

    // -- validate_new_notebook ----------------------------------------------

    #[test]
    fn accepts_complete_draft() {
        let result = validate_new_notebook(&draft(Some(7), Some("Meeting notes"), Some("agenda")));
        let notebook = result.expect("draft should validate");
        assert_eq!(notebook.project_id, 7);
        assert_eq!(notebook.name, "Meeting notes");
        assert_eq!(notebook.content, "agenda");
    }

    #[test]
    fn missing_project_rejected() {
        let errors = validate_new_notebook(&draft(None, Some("n"), None)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "project");
    }

    #[test]
    fn non_positive_project_reference_rejected() {
        let errors = validate_new_notebook(&draft(Some(0), Some("n"), None)).unwrap_err();
        assert_eq!(errors[0].field, "project");

        let errors = validate_new_notebook(&draft(Some(-3), Some("n"), None)).unwrap_err();
        assert_eq!(errors[0].field, "project");
    }

    #[test]
    fn missing_name_rejected() {
        let errors = validate_new_notebook(&draft(Some(1), None, None)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn whitespace_only_name_rejected() {
        let errors = validate_new_notebook(&draft(Some(1), Some("   \t"), None)).unwrap_err();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "name");
    }

    #[test]
    fn all_failures_reported_together() {
        let errors = validate_new_notebook(&draft(None, Some(""), None)).unwrap_err();
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["project", "name"]);
    }

    #[test]
    fn name_is_trimmed() {
        let notebook =
            validate_new_notebook(&draft(Some(1), Some("  Scratchpad  "), None)).unwrap();
        assert_eq!(notebook.name, "Scratchpad");
    }

    #[test]
    fn content_defaults_to_empty_string() {
        let notebook = validate_new_notebook(&draft(Some(1), Some("n"), None)).unwrap();
        assert_eq!(notebook.content, "");
    }

    #[test]
    fn provided_content_kept_verbatim() {
        let notebook =
            validate_new_notebook(&draft(Some(1), Some("n"), Some("  raw  "))).unwrap();
        // Only the name is trimmed; content is stored as given.
        assert_eq!(notebook.content, "  raw  ");
    }

    // -- validate_notebook_update -------------------------------------------

    #[test]
    fn update_without_name_is_valid() {
        assert!(validate_notebook_update(None).is_ok());
    }

    #[test]
    fn update_with_name_is_valid() {
        assert!(validate_notebook_update(Some("Renamed")).is_ok());
    }

    #[test]
    fn update_with_blank_name_rejected() {
        let errors = validate_notebook_update(Some(" ")).unwrap_err();
        assert_eq!(errors[0].field, "name");
    }
}
