//! Subject entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use scheduler_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `subjects` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    pub id: DbId,
    pub name: String,
    /// Institution-assigned subject code, e.g. `IT1010`.
    #[serde(rename = "subjectId")]
    pub code: String,
    pub credit: i32,
    /// Session length in minutes.
    pub time_duration: i32,
    pub department: String,
    pub year: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new subject.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubject {
    #[validate(length(min = 1, message = "Subject name is required"))]
    pub name: String,
    #[serde(rename = "subjectId")]
    #[validate(length(min = 1, message = "Subject ID is required"))]
    pub code: String,
    #[validate(range(min = 1, max = 10, message = "Credit must be between 1 and 10"))]
    pub credit: i32,
    #[validate(range(min = 40, max = 60, message = "Time duration must be between 40 and 60 minutes"))]
    pub time_duration: i32,
    #[validate(length(min = 1, message = "Department is required"))]
    pub department: String,
    #[validate(range(min = 1, max = 4, message = "Year must be between 1 and 4"))]
    pub year: i32,
}

/// DTO for partially updating a subject. Only provided fields are checked.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateSubject {
    #[validate(length(min = 1, message = "Subject name is required"))]
    pub name: Option<String>,
    #[serde(rename = "subjectId")]
    #[validate(length(min = 1, message = "Subject ID is required"))]
    pub code: Option<String>,
    #[validate(range(min = 1, max = 10, message = "Credit must be between 1 and 10"))]
    pub credit: Option<i32>,
    #[validate(range(min = 40, max = 60, message = "Time duration must be between 40 and 60 minutes"))]
    pub time_duration: Option<i32>,
    #[validate(length(min = 1, message = "Department is required"))]
    pub department: Option<String>,
    #[validate(range(min = 1, max = 4, message = "Year must be between 1 and 4"))]
    pub year: Option<i32>,
}
