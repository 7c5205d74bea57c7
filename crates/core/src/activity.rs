//! Activity log event types and listing limits.
//!
//! Activities are append-only records written as a side effect of subject
//! and module overview mutations.

pub const SUBJECT_CREATED: &str = "subject_created";
pub const SUBJECT_UPDATED: &str = "subject_updated";
pub const SUBJECT_DELETED: &str = "subject_deleted";
pub const MODULE_CREATED: &str = "module_created";
pub const MODULE_UPDATED: &str = "module_updated";
pub const MODULE_DELETED: &str = "module_deleted";

/// Number of activities returned when the caller gives no limit.
pub const DEFAULT_LIST_LIMIT: i64 = 50;
/// Upper bound on a single activity listing.
pub const MAX_LIST_LIMIT: i64 = 200;

/// Clamp a caller-provided listing limit into `1..=MAX_LIST_LIMIT`.
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIST_LIMIT).clamp(1, MAX_LIST_LIMIT)
}
