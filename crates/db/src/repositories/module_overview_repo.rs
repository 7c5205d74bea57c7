//! Repository for the `module_overviews` table.
//!
//! Every query joins `subjects` so rows come back with the subject's name
//! and code. Writes wrap the DML in a CTE and join on its `RETURNING` set.
//! Deleting a subject leaves its overview in place; such rows carry empty
//! subject name and code.

use sqlx::PgPool;
use scheduler_core::types::DbId;

use crate::models::module_overview::{CreateModuleOverview, ModuleOverview, UpdateModuleOverview};

const COLUMNS: &str = "m.id, m.subject_id, COALESCE(s.name, '') AS subject_name, \
                       COALESCE(s.code, '') AS subject_code, \
                       m.description, m.lecture_count, m.tutorial_count, m.lab_count, \
                       m.assignment_count, m.created_at, m.updated_at";

/// Provides CRUD operations for module overviews.
pub struct ModuleOverviewRepo;

impl ModuleOverviewRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateModuleOverview,
    ) -> Result<ModuleOverview, sqlx::Error> {
        let query = format!(
            "WITH m AS (
                INSERT INTO module_overviews
                    (subject_id, description, lecture_count, tutorial_count, lab_count, assignment_count)
                VALUES ($1, $2, $3, $4, $5, $6)
                RETURNING *
             )
             SELECT {COLUMNS} FROM m LEFT JOIN subjects s ON s.id = m.subject_id"
        );
        sqlx::query_as::<_, ModuleOverview>(&query)
            .bind(input.subject_id)
            .bind(&input.description)
            .bind(input.lecture_count)
            .bind(input.tutorial_count)
            .bind(input.lab_count)
            .bind(input.assignment_count)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ModuleOverview>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM module_overviews m
             LEFT JOIN subjects s ON s.id = m.subject_id
             WHERE m.id = $1"
        );
        sqlx::query_as::<_, ModuleOverview>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all overviews ordered by subject code.
    pub async fn list(pool: &PgPool) -> Result<Vec<ModuleOverview>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM module_overviews m
             LEFT JOIN subjects s ON s.id = m.subject_id
             ORDER BY s.code NULLS LAST, m.id"
        );
        sqlx::query_as::<_, ModuleOverview>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update an overview. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateModuleOverview,
    ) -> Result<Option<ModuleOverview>, sqlx::Error> {
        let query = format!(
            "WITH m AS (
                UPDATE module_overviews SET
                    description = COALESCE($2, description),
                    lecture_count = COALESCE($3, lecture_count),
                    tutorial_count = COALESCE($4, tutorial_count),
                    lab_count = COALESCE($5, lab_count),
                    assignment_count = COALESCE($6, assignment_count)
                WHERE id = $1
                RETURNING *
             )
             SELECT {COLUMNS} FROM m LEFT JOIN subjects s ON s.id = m.subject_id"
        );
        sqlx::query_as::<_, ModuleOverview>(&query)
            .bind(id)
            .bind(&input.description)
            .bind(input.lecture_count)
            .bind(input.tutorial_count)
            .bind(input.lab_count)
            .bind(input.assignment_count)
            .fetch_optional(pool)
            .await
    }

    /// Delete an overview, returning the removed row (`None` if absent).
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<ModuleOverview>, sqlx::Error> {
        let query = format!(
            "WITH m AS (DELETE FROM module_overviews WHERE id = $1 RETURNING *)
             SELECT {COLUMNS} FROM m LEFT JOIN subjects s ON s.id = m.subject_id"
        );
        sqlx::query_as::<_, ModuleOverview>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
