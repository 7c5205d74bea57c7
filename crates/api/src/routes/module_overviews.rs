use axum::routing::get;
use axum::Router;

use crate::handlers::module_overview;
use crate::state::AppState;

/// Routes mounted at `/module-overviews`.
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
        .route("/", get(module_overview::list).post(module_overview::create))
        .route(
            "/{id}",
            get(module_overview::get_by_id)
                .put(module_overview::update)
                .delete(module_overview::delete),
        )
}
