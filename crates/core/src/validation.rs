//! Structured field-level validation results.
//!
//! Validation functions in this crate return `Result<T, Vec<FieldError>>` so
//! callers get every offending field in one pass instead of failing on the
//! first problem.

use serde::Serialize;

/// A single validation failure, naming the field it applies to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    /// The offending field, as it appears in the request payload.
    pub field: &'static str,
    /// Human-readable description of what is wrong.
    pub message: String,
}

impl FieldError {
    pub fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// Format a list of field errors as `field: message; field: message`.
///
/// Used when a structured error has to collapse into a single message string
/// (logging, `Display` on wrapper errors).
pub fn join_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| format!("{}: {}", e.field, e.message))
        .collect::<Vec<_>>()
        .join("; ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_formats_each_error() {
        let errors = vec![
            FieldError::new("project", "is required"),
            FieldError::new("name", "must not be empty"),
        ];
        assert_eq!(
            join_field_errors(&errors),
            "project: is required; name: must not be empty"
        );
    }

    #[test]
    fn join_empty_list_is_empty_string() {
        assert_eq!(join_field_errors(&[]), "");
    }
}
