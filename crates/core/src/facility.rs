//! Facility issue statuses and report validation.

use crate::error::CoreError;

/// Reported, not yet handled.
pub const ISSUE_PENDING: &str = "Pending";
/// Fixed by facilities staff.
pub const ISSUE_RESOLVED: &str = "Resolved";

/// All valid facility issue statuses.
pub const VALID_ISSUE_STATUSES: &[&str] = &[ISSUE_PENDING, ISSUE_RESOLVED];

/// Validate the list of problems attached to a facility report.
///
/// At least one issue is required and none may be blank.
pub fn validate_issues(issues: &[String]) -> Result<(), CoreError> {
    if issues.is_empty() {
        return Err(CoreError::Validation(
            "At least one issue must be reported".to_string(),
        ));
    }
    if issues.iter().any(|i| i.trim().is_empty()) {
        return Err(CoreError::Validation(
            "Issue descriptions must not be empty".to_string(),
        ));
    }
    Ok(())
}
