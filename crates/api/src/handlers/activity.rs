//! Handlers for the activity feed, plus the helper other handlers use to
//! append to it.

use axum::extract::{Query, State};
use axum::Json;
use scheduler_core::activity::clamp_limit;
use scheduler_db::models::activity::{Activity, CreateActivity};
use scheduler_db::repositories::ActivityRepo;
use scheduler_db::DbPool;

use crate::error::AppResult;
use crate::query::LimitParams;
use crate::state::AppState;

/// GET /api/activities
pub async fn list_recent(
    State(state): State<AppState>,
    Query(params): Query<LimitParams>,
) -> AppResult<Json<Vec<Activity>>> {
    let activities = ActivityRepo::list_recent(&state.pool, clamp_limit(params.limit)).await?;
    Ok(Json(activities))
}

/// Append an activity entry after a successful mutation.
///
/// The mutation has already been committed, so a failed write is logged
/// and does not fail the request.
pub(crate) async fn record(pool: &DbPool, activity_type: &str, subject_name: &str, subject_code: &str) {
    let entry = CreateActivity {
        activity_type,
        subject_name,
        subject_code,
    };
    if let Err(e) = ActivityRepo::record(pool, &entry).await {
        tracing::warn!(error = %e, activity_type, subject_code, "Failed to record activity");
    }
}
