//! Handlers for the `/batches` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use scheduler_core::academics::{validate_date_range, VALID_INTAKE_TYPES, VALID_SCHEDULE_TYPES};
use scheduler_core::error::CoreError;
use scheduler_core::types::DbId;
use scheduler_core::validation::{validate_one_of, validate_request};
use scheduler_db::models::batch::{Batch, CreateBatch, UpdateBatch};
use scheduler_db::repositories::BatchRepo;
use scheduler_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

const DUPLICATE_BATCH_NO: &str = "Batch number already exists";

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Batch", id })
}

/// Reject `batch_no` when a record other than `own_id` already holds it.
async fn ensure_batch_no_free(
    pool: &DbPool,
    batch_no: &str,
    own_id: Option<DbId>,
) -> AppResult<()> {
    match BatchRepo::find_by_batch_no(pool, batch_no).await? {
        Some(holder) if Some(holder.id) != own_id => {
            Err(CoreError::Conflict(DUPLICATE_BATCH_NO.to_string()).into())
        }
        _ => Ok(()),
    }
}

/// POST /api/batches
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateBatch>,
) -> AppResult<(StatusCode, Json<Batch>)> {
    validate_request(&input)?;
    validate_one_of("intake type", &input.intake_type, VALID_INTAKE_TYPES)?;
    validate_one_of("schedule type", &input.schedule_type, VALID_SCHEDULE_TYPES)?;
    validate_date_range(input.start_date, input.end_date)?;
    ensure_batch_no_free(&state.pool, &input.batch_no, None).await?;

    let batch = BatchRepo::create(&state.pool, &input).await?;
    tracing::info!(batch_id = batch.id, batch_no = %batch.batch_no, "Batch created");
    Ok((StatusCode::CREATED, Json(batch)))
}

/// GET /api/batches
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Batch>>> {
    let batches = BatchRepo::list(&state.pool).await?;
    Ok(Json(batches))
}

/// GET /api/batches/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Batch>> {
    let batch = BatchRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(batch))
}

/// PUT /api/batches/{id}
///
/// Keeping the record's own `batchNo` is allowed; taking another record's
/// number is rejected.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateBatch>,
) -> AppResult<Json<Batch>> {
    validate_request(&input)?;
    if let Some(intake) = &input.intake_type {
        validate_one_of("intake type", intake, VALID_INTAKE_TYPES)?;
    }
    if let Some(schedule) = &input.schedule_type {
        validate_one_of("schedule type", schedule, VALID_SCHEDULE_TYPES)?;
    }

    let existing = BatchRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    validate_date_range(
        input.start_date.unwrap_or(existing.start_date),
        input.end_date.unwrap_or(existing.end_date),
    )?;
    if let Some(batch_no) = &input.batch_no {
        ensure_batch_no_free(&state.pool, batch_no, Some(id)).await?;
    }

    let batch = BatchRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(batch_id = id, "Batch updated");
    Ok(Json(batch))
}

/// DELETE /api/batches/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if BatchRepo::delete(&state.pool, id).await? {
        tracing::info!(batch_id = id, "Batch deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
