//! Timetable grid endpoint.

use axum::Json;
use scheduler_core::timetable::{self, Schedule, TimetableGrid};
use serde::Deserialize;

use crate::extract::AppJson;

/// Body of `POST /api/timetable/grid`.
#[derive(Debug, Deserialize)]
pub struct GridRequest {
    pub schedules: Vec<Schedule>,
}

/// POST /api/timetable/grid
///
/// Pure placement; nothing is read from or written to the database.
pub async fn build_grid(AppJson(input): AppJson<GridRequest>) -> Json<TimetableGrid> {
    Json(timetable::build_grid(&input.schedules))
}
