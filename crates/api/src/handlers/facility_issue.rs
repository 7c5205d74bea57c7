//! Handlers for the `/facility-issues` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use scheduler_core::error::CoreError;
use scheduler_core::facility::{validate_issues, VALID_ISSUE_STATUSES};
use scheduler_core::types::DbId;
use scheduler_core::validation::{validate_one_of, validate_request};
use scheduler_db::models::facility_issue::{
    CreateFacilityIssue, FacilityIssue, UpdateFacilityIssue,
};
use scheduler_db::repositories::{FacilityIssueRepo, RoomRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Facility issue",
        id,
    })
}

/// POST /api/facility-issues
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateFacilityIssue>,
) -> AppResult<(StatusCode, Json<FacilityIssue>)> {
    validate_request(&input)?;
    validate_issues(&input.issues)?;
    if RoomRepo::find_by_id(&state.pool, input.room_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Room",
            id: input.room_id,
        }));
    }

    let issue = FacilityIssueRepo::create(&state.pool, &input).await?;
    tracing::info!(
        issue_id = issue.id,
        room_id = issue.room_id,
        count = issue.issues.len(),
        "Facility issue reported",
    );
    Ok((StatusCode::CREATED, Json(issue)))
}

/// GET /api/facility-issues
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<FacilityIssue>>> {
    let issues = FacilityIssueRepo::list(&state.pool).await?;
    Ok(Json(issues))
}

/// GET /api/facility-issues/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<FacilityIssue>> {
    let issue = FacilityIssueRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(issue))
}

/// PUT /api/facility-issues/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateFacilityIssue>,
) -> AppResult<Json<FacilityIssue>> {
    validate_request(&input)?;
    if let Some(issues) = &input.issues {
        validate_issues(issues)?;
    }
    if let Some(status) = &input.status {
        validate_one_of("status", status, VALID_ISSUE_STATUSES)?;
    }

    let issue = FacilityIssueRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(issue_id = id, status = %issue.status, "Facility issue updated");
    Ok(Json(issue))
}

/// PUT /api/facility-issues/{id}/resolve
pub async fn resolve(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<FacilityIssue>> {
    let issue = FacilityIssueRepo::resolve(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(issue_id = id, "Facility issue resolved");
    Ok(Json(issue))
}

/// DELETE /api/facility-issues/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    if FacilityIssueRepo::delete(&state.pool, id).await? {
        tracing::info!(issue_id = id, "Facility issue deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(not_found(id))
    }
}
