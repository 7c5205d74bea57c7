//! Repository for the `batches` table.

use sqlx::PgPool;
use scheduler_core::types::DbId;

use crate::models::batch::{Batch, CreateBatch, UpdateBatch};

const COLUMNS: &str = "id, name, intake_type, batch_no, year, semester, department, \
                       student_count, start_date, end_date, schedule_type, created_at, updated_at";

/// Provides CRUD operations for batches.
pub struct BatchRepo;

impl BatchRepo {
    /// Insert a new batch, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateBatch) -> Result<Batch, sqlx::Error> {
        let query = format!(
            "INSERT INTO batches
                (name, intake_type, batch_no, year, semester, department,
                 student_count, start_date, end_date, schedule_type)
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Batch>(&query)
            .bind(&input.name)
            .bind(&input.intake_type)
            .bind(&input.batch_no)
            .bind(input.year)
            .bind(input.semester)
            .bind(&input.department)
            .bind(input.student_count)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.schedule_type)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Batch>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM batches WHERE id = $1");
        sqlx::query_as::<_, Batch>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the batch owning a batch number, if any.
    pub async fn find_by_batch_no(
        pool: &PgPool,
        batch_no: &str,
    ) -> Result<Option<Batch>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM batches WHERE batch_no = $1");
        sqlx::query_as::<_, Batch>(&query)
            .bind(batch_no)
            .fetch_optional(pool)
            .await
    }

    /// List all batches, newest intake first.
    pub async fn list(pool: &PgPool) -> Result<Vec<Batch>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM batches ORDER BY start_date DESC, batch_no");
        sqlx::query_as::<_, Batch>(&query).fetch_all(pool).await
    }

    /// Update a batch. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateBatch,
    ) -> Result<Option<Batch>, sqlx::Error> {
        let query = format!(
            "UPDATE batches SET
                name = COALESCE($2, name),
                intake_type = COALESCE($3, intake_type),
                batch_no = COALESCE($4, batch_no),
                year = COALESCE($5, year),
                semester = COALESCE($6, semester),
                department = COALESCE($7, department),
                student_count = COALESCE($8, student_count),
                start_date = COALESCE($9, start_date),
                end_date = COALESCE($10, end_date),
                schedule_type = COALESCE($11, schedule_type)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Batch>(&query)
            .bind(id)
            .bind(&input.name)
            .bind(&input.intake_type)
            .bind(&input.batch_no)
            .bind(input.year)
            .bind(input.semester)
            .bind(&input.department)
            .bind(input.student_count)
            .bind(input.start_date)
            .bind(input.end_date)
            .bind(&input.schedule_type)
            .fetch_optional(pool)
            .await
    }

    /// Delete a batch. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM batches WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
