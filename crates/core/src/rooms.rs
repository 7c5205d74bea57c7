//! Room classification constants.

pub const HALL_LECTURE: &str = "Lecture Hall";
pub const HALL_LABORATORY: &str = "Laboratory";
pub const HALL_MEETING_ROOM: &str = "Meeting Room";

/// All valid room hall types.
pub const VALID_HALL_TYPES: &[&str] = &[HALL_LECTURE, HALL_LABORATORY, HALL_MEETING_ROOM];
