use axum::routing::get;
use axum::Router;

use crate::handlers::activity;
use crate::state::AppState;

/// Routes mounted at `/activities`.
///
/// ```text
/// GET    /    -> list_recent (?limit=)
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/", get(activity::list_recent))
}
