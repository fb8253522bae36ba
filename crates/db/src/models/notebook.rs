//! Notebook model.
//!
//! Insertion goes through [`worklog_core::notebook::NewNotebook`], which is
//! only obtainable from the validation function, so unvalidated drafts never
//! reach the repository.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use worklog_core::types::{DbId, Timestamp};

/// A row from the `notebooks` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Notebook {
    pub id: DbId,
    pub project_id: DbId,
    pub name: String,
    /// Never NULL; defaults to the empty string.
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for updating a notebook. Absent fields are left unchanged.
#[derive(Debug, Deserialize)]
pub struct UpdateNotebook {
    pub name: Option<String>,
    pub content: Option<String>,
}
