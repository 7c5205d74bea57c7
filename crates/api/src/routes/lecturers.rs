//! Route definitions for the `/lecturers` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::lecturer;
use crate::state::AppState;

/// Routes mounted at `/lecturers`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// GET    /{id}    -> get_by_id
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(lecturer::list).post(lecturer::create))
        .route(
            "/{id}",
            get(lecturer::get_by_id).put(lecturer::update).delete(lecturer::delete),
        )
}
