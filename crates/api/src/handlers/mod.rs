//! Request handlers, one submodule per resource.
//!
//! Handlers validate input through `scheduler_core`, delegate to the
//! matching repository in `scheduler_db`, and map errors via [`AppError`].
//!
//! [`AppError`]: crate::error::AppError

pub mod activity;
pub mod batch;
pub mod booking;
pub mod facility_issue;
pub mod lecturer;
pub mod module_overview;
pub mod room;
pub mod settings;
pub mod subject;
pub mod timetable;
