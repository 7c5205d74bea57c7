use axum::routing::post;
use axum::Router;

use crate::handlers::timetable;
use crate::state::AppState;

/// Routes mounted at `/timetable`.
///
/// ```text
/// POST   /grid    -> build_grid
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/grid", post(timetable::build_grid))
}
