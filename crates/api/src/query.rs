//! Query parameter types shared by list handlers.

use serde::Deserialize;

/// `?limit=` for the activity feed. Clamped by
/// `scheduler_core::activity::clamp_limit`.
#[derive(Debug, Default, Deserialize)]
pub struct LimitParams {
    pub limit: Option<i64>,
}
