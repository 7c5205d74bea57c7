//! Domain rules for the academic scheduler.
//!
//! This crate performs no I/O. Handlers and repositories call into it for
//! field validation, enumerated values, booking conflict detection, and
//! timetable grid placement.

pub mod academics;
pub mod activity;
pub mod booking;
pub mod error;
pub mod facility;
pub mod rooms;
pub mod settings;
pub mod timetable;
pub mod types;
pub mod validation;
