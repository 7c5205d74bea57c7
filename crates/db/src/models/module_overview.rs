//! Module overview model and DTOs.
//!
//! An overview hangs off exactly one subject; responses carry the subject's
//! name and code joined in.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use scheduler_core::types::{DbId, Timestamp};
use validator::Validate;

/// A `module_overviews` row joined with its subject.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ModuleOverview {
    pub id: DbId,
    pub subject_id: DbId,
    pub subject_name: String,
    pub subject_code: String,
    pub description: Option<String>,
    pub lecture_count: i32,
    pub tutorial_count: i32,
    pub lab_count: i32,
    pub assignment_count: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a module overview.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateModuleOverview {
    pub subject_id: DbId,
    pub description: Option<String>,
    #[serde(default)]
    #[validate(range(min = 0, message = "Lecture count must not be negative"))]
    pub lecture_count: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "Tutorial count must not be negative"))]
    pub tutorial_count: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "Lab count must not be negative"))]
    pub lab_count: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "Assignment count must not be negative"))]
    pub assignment_count: i32,
}

/// DTO for partially updating a module overview.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateModuleOverview {
    pub description: Option<String>,
    #[validate(range(min = 0, message = "Lecture count must not be negative"))]
    pub lecture_count: Option<i32>,
    #[validate(range(min = 0, message = "Tutorial count must not be negative"))]
    pub tutorial_count: Option<i32>,
    #[validate(range(min = 0, message = "Lab count must not be negative"))]
    pub lab_count: Option<i32>,
    #[validate(range(min = 0, message = "Assignment count must not be negative"))]
    pub assignment_count: Option<i32>,
}
