//! Repository for the `subjects` table.

use sqlx::PgPool;
use scheduler_core::types::DbId;

use crate::models::subject::{CreateSubject, Subject, UpdateSubject};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, name, code, credit, time_duration, department, year, created_at, updated_at";

/// Provides CRUD operations for subjects.
pub struct SubjectRepo;

impl SubjectRepo {
    /// Insert a new subject, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateSubject) -> Result<Subject, sqlx::Error> {
        let query = format!(
            "INSERT INTO subjects (name, code, credit, time_duration, department, year)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subject>(&query)
            .bind(&input.name)
            .bind(&input.code)
            .bind(input.credit)
            .bind(input.time_duration)
            .bind(&input.department)
            .bind(input.year)
            .fetch_one(pool)
            .await
    }

    /// Find a subject by its internal ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Subject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subjects WHERE id = $1");
        sqlx::query_as::<_, Subject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all subjects ordered by year, then code.
    pub async fn list(pool: &PgPool) -> Result<Vec<Subject>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM subjects ORDER BY year, code");
        sqlx::query_as::<_, Subject>(&query).fetch_all(pool).await
    }

    /// Update a subject. Only non-`None` fields in `input` are applied.
    ///
    /// Returns `None` if no row with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateSubject,
    ) -> Result<Option<Subject>, sqlx::Error> {
        let query = format!(
            "UPDATE subjects SET
                name = COALESCE($2, name),
                code = COALESCE($3, code),
                credit = COALESCE($4, credit),
                time_duration = COALESCE($5, time_duration),
                department = COALESCE($6, department),
                year = COALESCE($7, year)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Subject>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.code)
            .bind(input.credit)
            .bind(input.time_duration)
            .bind(&input.department)
            .bind(input.year)
            .fetch_optional(pool)
            .await
    }

    /// Delete a subject, returning the removed row (`None` if absent).
    ///
    /// A module overview for the subject is kept.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<Option<Subject>, sqlx::Error> {
        let query = format!("DELETE FROM subjects WHERE id = $1 RETURNING {COLUMNS}");
        sqlx::query_as::<_, Subject>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
