//! Handlers for the `/subjects` resource.
//!
//! Every mutation appends a `subject_*` entry to the activity log.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use scheduler_core::activity::{SUBJECT_CREATED, SUBJECT_DELETED, SUBJECT_UPDATED};
use scheduler_core::error::CoreError;
use scheduler_core::types::DbId;
use scheduler_core::validation::validate_request;
use scheduler_db::models::subject::{CreateSubject, Subject, UpdateSubject};
use scheduler_db::repositories::SubjectRepo;

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::activity;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Subject",
        id,
    })
}

/// POST /api/subjects
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateSubject>,
) -> AppResult<(StatusCode, Json<Subject>)> {
    validate_request(&input)?;
    let subject = SubjectRepo::create(&state.pool, &input).await?;

    activity::record(&state.pool, SUBJECT_CREATED, &subject.name, &subject.code).await;
    tracing::info!(subject_id = subject.id, code = %subject.code, "Subject created");

    Ok((StatusCode::CREATED, Json(subject)))
}

/// GET /api/subjects
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<Subject>>> {
    let subjects = SubjectRepo::list(&state.pool).await?;
    Ok(Json(subjects))
}

/// GET /api/subjects/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Subject>> {
    let subject = SubjectRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(subject))
}

/// PUT /api/subjects/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateSubject>,
) -> AppResult<Json<Subject>> {
    validate_request(&input)?;
    let subject = SubjectRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    activity::record(&state.pool, SUBJECT_UPDATED, &subject.name, &subject.code).await;
    tracing::info!(subject_id = id, "Subject updated");

    Ok(Json(subject))
}

/// DELETE /api/subjects/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let subject = SubjectRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    activity::record(&state.pool, SUBJECT_DELETED, &subject.name, &subject.code).await;
    tracing::info!(subject_id = id, "Subject deleted");

    Ok(StatusCode::NO_CONTENT)
}
