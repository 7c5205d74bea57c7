//! Repository for the `facility_issues` table.

use sqlx::PgPool;
use scheduler_core::facility::ISSUE_RESOLVED;
use scheduler_core::types::DbId;

use crate::models::facility_issue::{CreateFacilityIssue, FacilityIssue, UpdateFacilityIssue};

const COLUMNS: &str = "id, room_id, issues, description, status, created_at, updated_at";

/// Provides CRUD operations for facility issues.
pub struct FacilityIssueRepo;

impl FacilityIssueRepo {
    /// Insert a new issue report. Status starts at the column default (`Pending`).
    pub async fn create(
        pool: &PgPool,
        input: &CreateFacilityIssue,
    ) -> Result<FacilityIssue, sqlx::Error> {
        let query = format!(
            "INSERT INTO facility_issues (room_id, issues, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FacilityIssue>(&query)
            .bind(input.room_id)
            .bind(&input.issues)
            .bind(&input.description)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<FacilityIssue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM facility_issues WHERE id = $1");
        sqlx::query_as::<_, FacilityIssue>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all issues, most recent first.
    pub async fn list(pool: &PgPool) -> Result<Vec<FacilityIssue>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM facility_issues ORDER BY created_at DESC, id DESC");
        sqlx::query_as::<_, FacilityIssue>(&query)
            .fetch_all(pool)
            .await
    }

    /// Update an issue. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateFacilityIssue,
    ) -> Result<Option<FacilityIssue>, sqlx::Error> {
        let query = format!(
            "UPDATE facility_issues SET
                issues = COALESCE($2, issues),
                description = COALESCE($3, description),
                status = COALESCE($4, status)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FacilityIssue>(&query)
            .bind(id)
            .bind(&input.issues)
            .bind(&input.description)
            .bind(&input.status)
            .fetch_optional(pool)
            .await
    }

    /// Mark an issue resolved.
    pub async fn resolve(pool: &PgPool, id: DbId) -> Result<Option<FacilityIssue>, sqlx::Error> {
        let query = format!(
            "UPDATE facility_issues SET status = $2 WHERE id = $1 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, FacilityIssue>(&query)
            .bind(id)
            .bind(ISSUE_RESOLVED)
            .fetch_optional(pool)
            .await
    }

    /// Delete an issue. Returns `true` if a row was removed.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM facility_issues WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
