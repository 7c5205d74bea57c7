//! Enumerations and cross-field rules for lecturers and batches.
//!
//! Single-field bounds (credits, years, durations) live on the request DTOs
//! as `validator` rules.

use chrono::{NaiveDate, NaiveTime};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Batch enumerations
// ---------------------------------------------------------------------------

pub const INTAKE_JANUARY: &str = "January";
pub const INTAKE_MAY: &str = "May";
pub const INTAKE_SEPTEMBER: &str = "September";

/// All valid batch intake types.
pub const VALID_INTAKE_TYPES: &[&str] = &[INTAKE_JANUARY, INTAKE_MAY, INTAKE_SEPTEMBER];

pub const SCHEDULE_WEEKDAY: &str = "Weekday";
pub const SCHEDULE_WEEKEND: &str = "Weekend";

/// All valid batch schedule types.
pub const VALID_SCHEDULE_TYPES: &[&str] = &[SCHEDULE_WEEKDAY, SCHEDULE_WEEKEND];

// ---------------------------------------------------------------------------
// Lecturer availability
// ---------------------------------------------------------------------------

/// Day names accepted in a lecturer's `availableDays` list.
pub const VALID_WEEKDAYS: &[&str] = &[
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
    "Sunday",
];

/// Validate that a lecturer's availability window starts before it ends.
pub fn validate_availability_window(from: NaiveTime, to: NaiveTime) -> Result<(), CoreError> {
    if from >= to {
        return Err(CoreError::Validation(
            "Availability start time must be before end time".to_string(),
        ));
    }
    Ok(())
}

/// Validate every entry of an `availableDays` list.
pub fn validate_weekdays(days: &[String]) -> Result<(), CoreError> {
    for day in days {
        crate::validation::validate_one_of("available day", day, VALID_WEEKDAYS)?;
    }
    Ok(())
}

/// Validate that a batch's start date does not fall after its end date.
pub fn validate_date_range(start: NaiveDate, end: NaiveDate) -> Result<(), CoreError> {
    if start > end {
        return Err(CoreError::Validation(
            "Start date must not be after end date".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn t(h: u32, m: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(h, m, 0).unwrap()
    }

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn availability_window_must_be_ordered() {
        assert!(validate_availability_window(t(8, 0), t(17, 0)).is_ok());
        assert!(validate_availability_window(t(12, 0), t(12, 0)).is_err());
        assert!(validate_availability_window(t(14, 0), t(9, 0)).is_err());
    }

    #[test]
    fn same_day_batch_is_allowed() {
        assert!(validate_date_range(d(2025, 1, 6), d(2025, 1, 6)).is_ok());
    }

    #[test]
    fn inverted_batch_dates_rejected() {
        assert!(validate_date_range(d(2025, 6, 1), d(2025, 1, 1)).is_err());
    }

    #[test]
    fn weekday_list_checked_entry_by_entry() {
        let ok = vec!["Monday".to_string(), "Friday".to_string()];
        assert!(validate_weekdays(&ok).is_ok());

        let bad = vec!["Monday".to_string(), "Funday".to_string()];
        assert!(validate_weekdays(&bad).is_err());
    }
}
