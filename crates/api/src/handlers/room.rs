//! Handlers for the `/rooms` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use scheduler_core::error::CoreError;
use scheduler_core::rooms::VALID_HALL_TYPES;
use scheduler_core::types::DbId;
use scheduler_core::validation::{validate_one_of, validate_request};
use scheduler_db::models::room::{CreateRoom, Room, UpdateRoom};
use scheduler_db::repositories::RoomRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Room", id })
}

/// POST /api/rooms
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateRoom>,
) -> AppResult<(StatusCode, Json<Room>)> {
    validate_request(&input)?;
    validate_one_of("hall type", &input.hall_type, VALID_HALL_TYPES)?;

    let room = RoomRepo::create(&state.pool, &input).await?;
    tracing::info!(room_id = room.id, location_id = %room.location_id, "Room created");
    Ok((StatusCode::CREATED, Json(room)))
}

/// GET /api/rooms
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Room>>> {
    let rooms = RoomRepo::list(&state.pool).await?;
    Ok(Json(rooms))
}

/// GET /api/rooms/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Room>> {
    let room = RoomRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(room))
}

/// PUT /api/rooms/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateRoom>,
) -> AppResult<Json<Room>> {
    validate_request(&input)?;
    if let Some(hall_type) = &input.hall_type {
        validate_one_of("hall type", hall_type, VALID_HALL_TYPES)?;
    }

    let room = RoomRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(room_id = id, "Room updated");
    Ok(Json(room))
}

/// DELETE /api/rooms/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if RoomRepo::delete(&state.pool, id).await? {
        tracing::info!(room_id = id, "Room deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
