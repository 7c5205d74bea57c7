//! Lecturer entity model and DTOs.

use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use scheduler_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `lecturers` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Lecturer {
    pub id: DbId,
    pub name: String,
    /// Staff number, unique across lecturers.
    #[serde(rename = "lecturerId")]
    pub code: String,
    pub department: String,
    pub email: Option<String>,
    pub available_from: NaiveTime,
    pub available_to: NaiveTime,
    pub available_days: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new lecturer.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateLecturer {
    #[validate(length(min = 1, message = "Lecturer name is required"))]
    pub name: String,
    #[serde(rename = "lecturerId")]
    #[validate(length(min = 1, message = "Lecturer ID is required"))]
    pub code: String,
    #[validate(length(min = 1, message = "Department is required"))]
    pub department: String,
    #[validate(email(message = "Email address is invalid"))]
    pub email: Option<String>,
    pub available_from: NaiveTime,
    pub available_to: NaiveTime,
    #[serde(default)]
    pub available_days: Vec<String>,
}

/// DTO for partially updating a lecturer.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateLecturer {
    #[validate(length(min = 1, message = "Lecturer name is required"))]
    pub name: Option<String>,
    #[serde(rename = "lecturerId")]
    #[validate(length(min = 1, message = "Lecturer ID is required"))]
    pub code: Option<String>,
    #[validate(length(min = 1, message = "Department is required"))]
    pub department: Option<String>,
    #[validate(email(message = "Email address is invalid"))]
    pub email: Option<String>,
    pub available_from: Option<NaiveTime>,
    pub available_to: Option<NaiveTime>,
    pub available_days: Option<Vec<String>>,
}
