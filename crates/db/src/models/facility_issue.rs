//! Facility issue (room maintenance report) model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use scheduler_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `facility_issues` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilityIssue {
    pub id: DbId,
    pub room_id: DbId,
    pub issues: Vec<String>,
    pub description: Option<String>,
    pub status: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for reporting a facility issue.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateFacilityIssue {
    #[validate(range(min = 1, message = "Room id must be positive"))]
    pub room_id: DbId,
    #[validate(length(min = 1, message = "At least one issue must be reported"))]
    pub issues: Vec<String>,
    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,
}

/// DTO for partially updating a facility issue.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateFacilityIssue {
    #[validate(length(min = 1, message = "At least one issue must be reported"))]
    pub issues: Option<Vec<String>>,
    #[validate(length(max = 2000, message = "Description must be at most 2000 characters"))]
    pub description: Option<String>,
    pub status: Option<String>,
}
