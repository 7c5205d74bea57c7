//! Settings payloads.

use serde::{Deserialize, Serialize};

/// Body and response of `/settings/max-workload`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MaxWorkload {
    pub max_workload: i32,
}
