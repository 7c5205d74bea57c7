use axum::routing::get;
use axum::Router;

use crate::handlers::settings;
use crate::state::AppState;

/// Routes mounted at `/settings`.
///
/// ```text
/// GET    /max-workload    -> get_max_workload
/// POST   /max-workload    -> set_max_workload
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/max-workload",
        get(settings::get_max_workload).post(settings::set_max_workload),
    )
}
