//! Activity log model.

use serde::Serialize;
use sqlx::FromRow;
use scheduler_core::types::{DbId, Timestamp};

/// A row from the append-only `activities` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: DbId,
    #[serde(rename = "type")]
    pub activity_type: String,
    pub subject_name: String,
    pub subject_code: String,
    pub created_at: Timestamp,
}

/// Values for a new activity record.
#[derive(Debug, Clone)]
pub struct CreateActivity<'a> {
    pub activity_type: &'a str,
    pub subject_name: &'a str,
    pub subject_code: &'a str,
}
