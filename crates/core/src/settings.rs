//! Global settings keys, defaults, and value rules.

use crate::error::CoreError;

/// Settings key holding the maximum teaching workload per lecturer.
pub const MAX_WORKLOAD_KEY: &str = "max_workload";

/// Workload reported before an administrator stores a value.
pub const DEFAULT_MAX_WORKLOAD: i32 = 20;

/// Validate a maximum workload value.
pub fn validate_max_workload(value: i32) -> Result<(), CoreError> {
    if value < 1 {
        return Err(CoreError::Validation(
            "Maximum workload must be at least 1".to_string(),
        ));
    }
    Ok(())
}

/// Parse a stored max-workload value, falling back to the default when the
/// stored text is not a positive integer.
pub fn parse_max_workload(stored: Option<&str>) -> i32 {
    stored
        .and_then(|s| s.trim().parse::<i32>().ok())
        .filter(|v| *v >= 1)
        .unwrap_or(DEFAULT_MAX_WORKLOAD)
}
