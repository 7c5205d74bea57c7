//! Route definitions for the `/facility-issues` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::facility_issue;
use crate::state::AppState;

/// Routes mounted at `/facility-issues`.
///
/// ```text
/// GET    /               -> list
/// POST   /               -> create
/// GET    /{id}           -> get_by_id
/// PUT    /{id}           -> update
/// DELETE /{id}           -> delete
/// PUT    /{id}/resolve   -> resolve
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(facility_issue::list).post(facility_issue::create))
        .route(
            "/{id}",
            get(facility_issue::get_by_id)
                .put(facility_issue::update)
                .delete(facility_issue::delete),
        )
        .route("/{id}/resolve", put(facility_issue::resolve))
}
