//! Batch (student cohort) entity model and DTOs.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use scheduler_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `batches` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Batch {
    pub id: DbId,
    pub name: String,
    pub intake_type: String,
    pub batch_no: String,
    pub year: i32,
    pub semester: i32,
    pub department: String,
    pub student_count: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub schedule_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new batch.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateBatch {
    #[validate(length(min = 1, message = "Batch name is required"))]
    pub name: String,
    pub intake_type: String,
    #[validate(length(min = 1, message = "Batch number is required"))]
    pub batch_no: String,
    #[validate(range(min = 1, max = 4, message = "Year must be between 1 and 4"))]
    pub year: i32,
    #[validate(range(min = 1, max = 2, message = "Semester must be 1 or 2"))]
    pub semester: i32,
    #[validate(length(min = 1, message = "Department is required"))]
    pub department: String,
    #[validate(range(min = 1, message = "Student count must be at least 1"))]
    pub student_count: i32,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub schedule_type: String,
}

/// DTO for partially updating a batch.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBatch {
    #[validate(length(min = 1, message = "Batch name is required"))]
    pub name: Option<String>,
    pub intake_type: Option<String>,
    #[validate(length(min = 1, message = "Batch number is required"))]
    pub batch_no: Option<String>,
    #[validate(range(min = 1, max = 4, message = "Year must be between 1 and 4"))]
    pub year: Option<i32>,
    #[validate(range(min = 1, max = 2, message = "Semester must be 1 or 2"))]
    pub semester: Option<i32>,
    #[validate(length(min = 1, message = "Department is required"))]
    pub department: Option<String>,
    #[validate(range(min = 1, message = "Student count must be at least 1"))]
    pub student_count: Option<i32>,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
    pub schedule_type: Option<String>,
}
