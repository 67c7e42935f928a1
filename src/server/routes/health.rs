//! Health Routes
//!
//! - GET /health/live - Liveness probe (process is alive)
//! - GET /health/ready - Readiness probe (every expected image is present)
//! - GET /health - Full health status

use axum::{extract::State, http::StatusCode, Json};
use std::sync::Arc;

use crate::assets::missing_files;
use crate::server::dto::HealthResponse;
use crate::server::error::{ServerError, ServerResult};
use crate::server::state::ServerState;

/// GET /health/live
pub async fn liveness() -> StatusCode {
    StatusCode::OK
}

/// GET /health/ready
///
/// 503 while the asset directory is missing or lacks an expected image.
pub async fn readiness(State(state): State<Arc<ServerState>>) -> StatusCode {
    match missing_files(&state.asset_dir, &state.catalog) {
        Ok(missing) if missing.is_empty() => StatusCode::OK,
        Ok(missing) => {
            tracing::debug!(?missing, "Not ready: assets missing");
            StatusCode::SERVICE_UNAVAILABLE
        }
        Err(_) => StatusCode::SERVICE_UNAVAILABLE,
    }
}

/// GET /health
pub async fn full_health(
    State(state): State<Arc<ServerState>>,
) -> ServerResult<Json<HealthResponse>> {
    let missing = missing_files(&state.asset_dir, &state.catalog).map_err(|e| {
        ServerError::AssetsUnavailable(format!("{}: {}", state.asset_dir.display(), e))
    })?;

    let status = if missing.is_empty() {
        "healthy"
    } else {
        "degraded"
    };

    Ok(Json(HealthResponse {
        status: status.to_string(),
        missing_assets: missing,
        uptime_seconds: state.uptime_seconds(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_liveness() {
        let status = liveness().await;
        assert_eq!(status, StatusCode::OK);
    }
}
