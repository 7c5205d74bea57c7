//! Repository for the `rooms` table.

use sqlx::PgPool;
use scheduler_core::types::DbId;

use crate::models::room::{CreateRoom, Room, UpdateRoom};

const COLUMNS: &str = "id, location_id, hall_type, department, seating_capacity, \
                       computer_count, floor, created_at, updated_at";

/// Provides CRUD operations for rooms.
pub struct RoomRepo;

impl RoomRepo {
    /// Insert a new room, returning the created row.
    pub async fn create(pool: &PgPool, input: &CreateRoom) -> Result<Room, sqlx::Error> {
        let query = format!(
            "INSERT INTO rooms
                (location_id, hall_type, department, seating_capacity, computer_count, floor)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(&input.location_id)
            .bind(&input.hall_type)
            .bind(&input.department)
            .bind(input.seating_capacity)
            .bind(input.computer_count)
            .bind(input.floor)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = $1");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List all rooms ordered by floor, then location.
    pub async fn list(pool: &PgPool) -> Result<Vec<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms ORDER BY floor, location_id");
        sqlx::query_as::<_, Room>(&query).fetch_all(pool).await
    }

    /// Update a room. Only non-`None` fields in `input` are applied.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateRoom,
    ) -> Result<Option<Room>, sqlx::Error> {
        let query = format!(
            "UPDATE rooms SET
                location_id = COALESCE($2, location_id),
                hall_type = COALESCE($3, hall_type),
                department = COALESCE($4, department),
                seating_capacity = COALESCE($5, seating_capacity),
                computer_count = COALESCE($6, computer_count),
                floor = COALESCE($7, floor)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .bind(&input.location_id)
            .bind(&input.hall_type)
            .bind(&input.department)
            .bind(input.seating_capacity)
            .bind(input.computer_count)
            .bind(input.floor)
            .fetch_optional(pool)
            .await
    }

    /// Delete a room. Returns `true` if a row was removed.
    ///
    /// Bookings and facility issues that reference the room are left untouched.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM rooms WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
