//! Repository for the `notebooks` table.

use sqlx::PgPool;
use worklog_core::notebook::NewNotebook;
use worklog_core::types::DbId;

use crate::models::notebook::{Notebook, UpdateNotebook};

/// Column list for notebooks queries.
const COLUMNS: &str = "id, project_id, name, content, created_at, updated_at";

/// Provides CRUD operations for notebooks.
pub struct NotebookRepo;

impl NotebookRepo {
    /// Insert a validated notebook, returning the created row.
    ///
    /// `created_at`/`updated_at` are set by the database on insert.
    pub async fn create(pool: &PgPool, input: &NewNotebook) -> Result<Notebook, sqlx::Error> {
        let query = format!(
            "INSERT INTO notebooks (project_id, name, content)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notebook>(&query)
            .bind(input.project_id)
            .bind(&input.name)
            .bind(&input.content)
            .fetch_one(pool)
            .await
    }

    /// Find a notebook by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Notebook>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notebooks WHERE id = $1");
        sqlx::query_as::<_, Notebook>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List a project's notebooks, newest first.
    pub async fn list_by_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<Notebook>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM notebooks
             WHERE project_id = $1
             ORDER BY created_at DESC"
        );
        sqlx::query_as::<_, Notebook>(&query)
            .bind(project_id)
            .fetch_all(pool)
            .await
    }

    /// Update a notebook by ID, returning the updated row.
    ///
    /// Absent fields are left unchanged; `updated_at` is refreshed on every
    /// update. The caller is expected to have validated the name and to pass
    /// it pre-trimmed.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNotebook,
    ) -> Result<Option<Notebook>, sqlx::Error> {
        let name = input.name.as_deref().map(str::trim);
        let query = format!(
            "UPDATE notebooks SET
                name = COALESCE($2, name),
                content = COALESCE($3, content),
                updated_at = now()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Notebook>(&query)
            .bind(id)
            .bind(name)
            .bind(&input.content)
            .fetch_optional(pool)
            .await
    }

    /// Delete a notebook by ID. Returns whether a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notebooks WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
