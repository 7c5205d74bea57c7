//! Handlers for the `/module-overviews` resource.
//!
//! Mutations append a `module_*` activity carrying the subject's name and
//! code.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use scheduler_core::activity::{MODULE_CREATED, MODULE_DELETED, MODULE_UPDATED};
use scheduler_core::error::CoreError;
use scheduler_core::types::DbId;
use scheduler_core::validation::validate_request;
use scheduler_db::models::module_overview::{
    CreateModuleOverview, ModuleOverview, UpdateModuleOverview,
};
use scheduler_db::repositories::{ModuleOverviewRepo, SubjectRepo};

use crate::error::{AppError, AppResult};
use crate::extract::AppJson;
use crate::handlers::activity;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Module overview",
        id,
    })
}

/// POST /api/module-overviews
pub async fn create(
    State(state): State<AppState>,
    AppJson(input): AppJson<CreateModuleOverview>,
) -> AppResult<(StatusCode, Json<ModuleOverview>)> {
    validate_request(&input)?;
    if SubjectRepo::find_by_id(&state.pool, input.subject_id).await?.is_none() {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Subject",
            id: input.subject_id,
        }));
    }

    let overview = ModuleOverviewRepo::create(&state.pool, &input).await?;

    activity::record(
        &state.pool,
        MODULE_CREATED,
        &overview.subject_name,
        &overview.subject_code,
    )
    .await;
    tracing::info!(
        module_overview_id = overview.id,
        subject_id = overview.subject_id,
        "Module overview created",
    );

    Ok((StatusCode::CREATED, Json(overview)))
}

/// GET /api/module-overviews
pub async fn list(State(state): State<AppState>) -> AppResult<Json<Vec<ModuleOverview>>> {
    let overviews = ModuleOverviewRepo::list(&state.pool).await?;
    Ok(Json(overviews))
}

/// GET /api/module-overviews/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<ModuleOverview>> {
    let overview = ModuleOverviewRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(overview))
}

/// PUT /api/module-overviews/{id}
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    AppJson(input): AppJson<UpdateModuleOverview>,
) -> AppResult<Json<ModuleOverview>> {
    validate_request(&input)?;
    let overview = ModuleOverviewRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;

    activity::record(
        &state.pool,
        MODULE_UPDATED,
        &overview.subject_name,
        &overview.subject_code,
    )
    .await;
    tracing::info!(module_overview_id = id, "Module overview updated");

    Ok(Json(overview))
}

/// DELETE /api/module-overviews/{id}
pub async fn delete(State(state): State<AppState>, Path(id): Path<DbId>) -> AppResult<StatusCode> {
    let overview = ModuleOverviewRepo::delete(&state.pool, id)
        .await?
        .ok_or_else(|| not_found(id))?;

    activity::record(
        &state.pool,
        MODULE_DELETED,
        &overview.subject_name,
        &overview.subject_code,
    )
    .await;
    tracing::info!(module_overview_id = id, "Module overview deleted");

    Ok(StatusCode::NO_CONTENT)
}
