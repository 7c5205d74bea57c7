//! Handlers for global settings.

use axum::extract::State;
use axum::Json;
use scheduler_core::settings::{parse_max_workload, validate_max_workload, MAX_WORKLOAD_KEY};
use scheduler_db::models::setting::MaxWorkload;
use scheduler_db::repositories::SettingRepo;

use crate::error::AppResult;
use crate::extract::AppJson;
use crate::state::AppState;

/// GET /api/settings/max-workload
///
/// Returns the default when nothing has been stored yet.
pub async fn get_max_workload(State(state): State<AppState>) -> AppResult<Json<MaxWorkload>> {
    let stored = SettingRepo::get(&state.pool, MAX_WORKLOAD_KEY).await?;
    Ok(Json(MaxWorkload {
        max_workload: parse_max_workload(stored.as_deref()),
    }))
}

/// POST /api/settings/max-workload
pub async fn set_max_workload(
    State(state): State<AppState>,
    AppJson(input): AppJson<MaxWorkload>,
) -> AppResult<Json<MaxWorkload>> {
    validate_max_workload(input.max_workload)?;
    SettingRepo::upsert(&state.pool, MAX_WORKLOAD_KEY, &input.max_workload.to_string()).await?;

    tracing::info!(max_workload = input.max_workload, "Maximum workload updated");
    Ok(Json(input))
}
