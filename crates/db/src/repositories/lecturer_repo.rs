//! Repository for the `lecturers` table.

use sqlx::PgPool;
use scheduler_core::types::DbId;

use crate::models::lecturer::{CreateLecturer, Lecturer, UpdateLecturer};

const COLUMNS: &str = "id, name, code, department, email, available_from, available_to, \
                       available_days, created_at, updated_at";

/// Provides CRUD operations for lecturers.
pub struct LecturerRepo;

impl LecturerRepo {
    /// Insert a new lecturer, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateLecturer) -> Result<Lecturer, sqlx::Error> {
        let query = format!(
            "INSERT INTO lecturers
                (name, code, department, email, available_from, available_to, available_days)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lecturer>(&query)
            .bind(&input.name)
            .bind(&input.code)
            .bind(&input.department)
            .bind(&input.email)
            .bind(input.available_from)
            .bind(input.available_to)
            .bind(&input.available_days)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Lecturer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lecturers WHERE id = $1");
        sqlx::query_as::<_, Lecturer>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all lecturers ordered by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Lecturer>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM lecturers ORDER BY name");
        sqlx::query_as::<_, Lecturer>(&query).fetch_all(pool).await
    }

    /// Update a lecturer. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateLecturer,
    ) -> Result<Option<Lecturer>, sqlx::Error> {
        let query = format!(
            "UPDATE lecturers SET
                name = COALESCE($2, name),
                code = COALESCE($3, code),
                department = COALESCE($4, department),
                email = COALESCE($5, email),
                available_from = COALESCE($6, available_from),
                available_to = COALESCE($7, available_to),
                available_days = COALESCE($8, available_days)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Lecturer>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.code)
            .bind(&input.department)
            .bind(&input.email)
            .bind(input.available_from)
            .bind(input.available_to)
            .bind(&input.available_days)
            .fetch_optional(pool)
            .await
    }

    /// Delete a lecturer. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM lecturers WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
