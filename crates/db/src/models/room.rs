//! Room entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use scheduler_core::types::{DbId, Timestamp};
use validator::Validate;

/// A row from the `rooms` table.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Room {
    pub id: DbId,
    pub location_id: String,
    pub hall_type: String,
    pub department: String,
    pub seating_capacity: i32,
    pub computer_count: i32,
    pub floor: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new room.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRoom {
    #[validate(length(min = 1, message = "Location ID is required"))]
    pub location_id: String,
    pub hall_type: String,
    #[validate(length(min = 1, message = "Department is required"))]
    pub department: String,
    #[validate(range(min = 1, message = "Seating capacity must be at least 1"))]
    pub seating_capacity: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "Computer count must not be negative"))]
    pub computer_count: i32,
    #[serde(default)]
    #[validate(range(min = 0, message = "Floor must not be negative"))]
    pub floor: i32,
}

/// DTO for partially updating a room.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRoom {
    #[validate(length(min = 1, message = "Location ID is required"))]
    pub location_id: Option<String>,
    pub hall_type: Option<String>,
    #[validate(length(min = 1, message = "Department is required"))]
    pub department: Option<String>,
    #[validate(range(min = 1, message = "Seating capacity must be at least 1"))]
    pub seating_capacity: Option<i32>,
    #[validate(range(min = 0, message = "Computer count must not be negative"))]
    pub computer_count: Option<i32>,
    #[validate(range(min = 0, message = "Floor must not be negative"))]
    pub floor: Option<i32>,
}
