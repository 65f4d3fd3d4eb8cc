//! Request types for the deduction API.
//!
//! Uploads are sent as the raw request body. Run parameters travel in the
//! query string.

use serde::{Deserialize, Serialize};

/// Query parameters accepted by the deduction endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ThresholdQuery {
    /// Threshold hours for this run. Falls back to the configured default.
    #[serde(default)]
    pub threshold_hours: Option<u32>,
}
