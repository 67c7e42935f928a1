//! Response bodies

use serde::{Deserialize, Serialize};

/// Body of `GET /health`
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    /// "healthy" when every expected image is present, else "degraded"
    pub status: String,
    pub missing_assets: Vec<String>,
    pub uptime_seconds: u64,
    pub version: String,
}
