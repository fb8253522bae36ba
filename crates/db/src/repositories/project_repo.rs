//! Repository for the `projects` and `project_members` tables.

use sqlx::PgPool;
use worklog_core::types::DbId;

use crate::models::project::{CreateProject, Project};

/// Column list for projects queries.
const COLUMNS: &str = "id, owner_id, name, description, status, created_at, updated_at";

/// Provides CRUD and membership operations for projects.
pub struct ProjectRepo;

impl ProjectRepo {
    /// Create a new project owned by `owner_id`, returning the created row.
    pub async fn create(
        pool: &PgPool,
        owner_id: DbId,
        input: &CreateProject,
    ) -> Result<Project, sqlx::Error> {
        let query = format!(
            "INSERT INTO projects (owner_id, name, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(owner_id)
            .bind(input.name.trim())
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    /// Find an active project by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1 AND status = 'active'");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Add a user to a project's member list. Idempotent.
    pub async fn add_member(
        pool: &PgPool,
        project_id: DbId,
        user_id: DbId,
    ) -> Result<(), sqlx::Error> {
        sqlx::query(
            "INSERT INTO project_members (project_id, user_id)
             VALUES ($1, $2)
             ON CONFLICT DO NOTHING",
        )
        .bind(project_id)
        .bind(user_id)
        .execute(pool)
        .await?;
        Ok(())
    }

    /// Whether `user_id` may access the project: the owner or any member.
    pub async fn is_member(
        pool: &PgPool,
        project_id: DbId,
        user_id: DbId,
    ) -> Result<bool, sqlx::Error> {
        let (found,): (bool,) = sqlx::query_as(
            "SELECT EXISTS (
                 SELECT 1 FROM projects
                 WHERE id = $1 AND owner_id = $2
                 UNION ALL
                 SELECT 1 FROM project_members
                 WHERE project_id = $1 AND user_id = $2
             )",
        )
        .bind(project_id)
        .bind(user_id)
        .fetch_one(pool)
        .await?;
        Ok(found)
    }
}
