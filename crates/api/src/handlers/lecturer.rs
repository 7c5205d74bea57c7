//! Handlers for the `/lecturers` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use scheduler_core::academics::{validate_availability_window, validate_weekdays};
use scheduler_core::error::CoreError;
use scheduler_core::types::DbId;
use scheduler_core::validation::validate_request;
use scheduler_db::models::lecturer::{CreateLecturer, Lecturer, UpdateLecturer};
use scheduler_db::repositories::LecturerRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Lecturer",
        id,
    })
}

/// POST /api/lecturers
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateLecturer>,
) -> AppResult<(StatusCode, Json<Lecturer>)> {
    validate_request(&input)?;
    validate_availability_window(input.available_from, input.available_to)?;
    validate_weekdays(&input.available_days)?;

    let lecturer = LecturerRepo::create(&state.pool, &input).await?;
    tracing::info!(lecturer_id = lecturer.id, code = %lecturer.code, "Lecturer created");
    Ok((StatusCode::CREATED, Json(lecturer)))
}

/// GET /api/lecturers
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Lecturer>>> {
    let lecturers = LecturerRepo::list(&state.pool).await?;
    Ok(Json(lecturers))
}

/// GET /api/lecturers/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Lecturer>> {
    let lecturer = LecturerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(lecturer))
}

/// PUT /api/lecturers/{id}
///
/// The availability window is checked against the stored values for any
/// bound the request leaves out.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateLecturer>,
) -> AppResult<Json<Lecturer>> {
    validate_request(&input)?;
    if let Some(days) = &input.available_days {
        validate_weekdays(days)?;
    }

    let existing = LecturerRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    validate_availability_window(
        input.available_from.unwrap_or(existing.available_from),
        input.available_to.unwrap_or(existing.available_to),
    )?;

    let lecturer = LecturerRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(lecturer_id = id, "Lecturer updated");
    Ok(Json(lecturer))
}

/// DELETE /api/lecturers/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if LecturerRepo::delete(&state.pool, id).await? {
        tracing::info!(lecturer_id = id, "Lecturer deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
