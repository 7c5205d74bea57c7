pub mod activities;
pub mod batches;
pub mod bookings;
pub mod facility_issues;
pub mod health;
pub mod lecturers;
pub mod module_overviews;
pub mod rooms;
pub mod settings;
pub mod subjects;
pub mod timetable;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// ```text
/// /subjects                          list, create
/// /subjects/{id}                     get, update, delete
/// /lecturers                         list, create
/// /lecturers/{id}                    get, update, delete
/// /batches                           list, create
/// /batches/{id}                      get, update, delete
/// /rooms                             list, create
/// /rooms/{id}                        get, update, delete
/// /bookings                          list (?roomId=&date=&status=), create
/// /bookings/{id}                     get, update, delete
/// /bookings/{id}/status              set status (PUT)
/// /facility-issues                   list, create
/// /facility-issues/{id}              get, update, delete
/// /facility-issues/{id}/resolve      mark resolved (PUT)
/// /module-overviews                  list, create
/// /module-overviews/{id}             get, update, delete
/// /activities                        recent activity (?limit=)
/// /settings/max-workload             get, set (POST)
/// /timetable/grid                    place schedules on the week grid (POST)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/subjects", subjects::router())
        .nest("/lecturers", lecturers::router())
        .nest("/batches", batches::router())
        .nest("/rooms", rooms::router())
        .nest("/bookings", bookings::router())
        .nest("/facility-issues", facility_issues::router())
        .nest("/module-overviews", module_overviews::router())
        .nest("/activities", activities::router())
        .nest("/settings", settings::router())
        .nest("/timetable", timetable::router())
}
