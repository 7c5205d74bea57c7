//! Repository for the append-only `activities` table.

use sqlx::PgPool;

use crate::models::activity::{Activity, CreateActivity};

const COLUMNS: &str = "id, activity_type, subject_name, subject_code, created_at";

/// Records and lists activity log entries.
pub struct ActivityRepo;

impl ActivityRepo {
    /// Append one entry.
    pub async fn record(
        pool: &PgPool,
        input: &CreateActivity<'_>,
    ) -> Result<Activity, sqlx::Error> {
        let query = format!(
            "INSERT INTO activities (activity_type, subject_name, subject_code)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(input.activity_type)
            .bind(input.subject_name)
            .bind(input.subject_code)
            .fetch_one(pool)
            .await
    }

    /// The `limit` most recent entries, newest first.
    pub async fn list_recent(pool: &PgPool, limit: i64) -> Result<Vec<Activity>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM activities ORDER BY created_at DESC, id DESC LIMIT $1"
        );
        sqlx::query_as::<_, Activity>(&query)
            .bind(limit)
            .fetch_all(pool)
            .await
    }
}
