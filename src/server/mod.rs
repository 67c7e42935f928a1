//! Asset Host
//!
//! Serves the built WASM frontend and the body/organ images, built with
//! Axum. It holds no dashboard state; every interaction happens in the
//! browser.
//!
//! # Endpoints
//!
//! ## Health
//! - `GET /health/live` - Liveness probe
//! - `GET /health/ready` - Readiness probe (all expected images present)
//! - `GET /health` - Full health status with missing images
//!
//! ## Static
//! - `GET {public_url}/{image}` - Images from `assets.dir`
//! - `GET /*` - Frontend from `server.dist_dir`, falling back to `index.html`
//!
//! # Example
//!
//! ```rust,no_run
//! use patient_dashboard::config::Config;
//! use patient_dashboard::server::{serve, ServerState};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::default();
//!     serve(ServerState::from_config(&config), &config.server).await?;
//!     Ok(())
//! }
//! ```

pub mod dto;
pub mod error;
pub mod routes;
pub mod state;

pub use error::{ServerError, ServerResult};
pub use state::ServerState;

use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::{
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

use crate::config::ServerConfig;

/// Build the router with health routes and static file services
pub fn build_router(state: ServerState) -> Router {
    let health_routes = Router::new()
        .route("/live", get(routes::health::liveness))
        .route("/ready", get(routes::health::readiness))
        .route("/", get(routes::health::full_health));

    let frontend = ServeDir::new(&state.dist_dir)
        .fallback(ServeFile::new(state.dist_dir.join("index.html")));
    let images = ServeDir::new(&state.asset_dir);
    let prefix = state.asset_base.prefix().to_string();

    let router = Router::new().nest("/health", health_routes);

    // An empty prefix puts images at the root next to the frontend files; an
    // absolute URL means images are hosted elsewhere.
    let router = if prefix.is_empty() {
        router.fallback_service(images.fallback(frontend))
    } else if prefix.starts_with('/') {
        router
            .nest_service(&prefix, images)
            .fallback_service(frontend)
    } else {
        tracing::info!("Images hosted externally at {}", prefix);
        router.fallback_service(frontend)
    };

    router
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}

/// Start the asset host
pub async fn serve(state: ServerState, config: &ServerConfig) -> Result<(), ServerError> {
    let router = build_router(state);

    let addr = config.addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;

    tracing::info!("Patient dashboard listening on http://{}", addr);

    axum::serve(listener, router)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| ServerError::Internal(format!("Server error: {}", e)))?;

    tracing::info!("Patient dashboard shut down gracefully");
    Ok(())
}

/// Wait for shutdown signal
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::{expected_files, AssetBase};
    use crate::organs::OrganCatalog;
    use crate::server::dto::HealthResponse;
    use axum::{
        body::Body,
        http::{Request, StatusCode},
        response::Response,
    };
    use tempfile::TempDir;
    use tower::util::ServiceExt;

    struct Fixture {
        assets: TempDir,
        dist: TempDir,
    }

    impl Fixture {
        fn new(with_images: bool) -> Self {
            let assets = TempDir::new().unwrap();
            let dist = TempDir::new().unwrap();

            std::fs::write(dist.path().join("index.html"), "<html>dashboard</html>").unwrap();
            if with_images {
                for file in expected_files(&OrganCatalog::builtin()) {
                    std::fs::write(assets.path().join(file), b"\x89PNG").unwrap();
                }
            }

            Self { assets, dist }
        }

        fn router(&self, prefix: &str) -> Router {
            build_router(ServerState::new(
                self.assets.path().to_path_buf(),
                AssetBase::new(prefix),
                self.dist.path().to_path_buf(),
            ))
        }
    }

    async fn get(app: Router, uri: &str) -> Response {
        app.oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_bytes(response: Response) -> Vec<u8> {
        axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec()
    }

    async fn body_text(response: Response) -> String {
        String::from_utf8(body_bytes(response).await).unwrap()
    }

    #[tokio::test]
    async fn test_health_live() {
        let fixture = Fixture::new(false);
        let response = get(fixture.router(""), "/health/live").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_ready_requires_images() {
        let fixture = Fixture::new(false);
        let response = get(fixture.router(""), "/health/ready").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

        let fixture = Fixture::new(true);
        let response = get(fixture.router(""), "/health/ready").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_full_lists_missing_images() {
        let fixture = Fixture::new(true);
        std::fs::remove_file(fixture.assets.path().join("body_plain_light.png")).unwrap();

        let response = get(fixture.router(""), "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let health: HealthResponse = serde_json::from_str(&body_text(response).await).unwrap();
        assert_eq!(health.status, "degraded");
        assert_eq!(health.missing_assets, vec!["body_plain_light.png"]);
    }

    #[tokio::test]
    async fn test_health_full_without_asset_dir() {
        let fixture = Fixture::new(false);
        let app = build_router(ServerState::new(
            fixture.assets.path().join("gone"),
            AssetBase::default(),
            fixture.dist.path().to_path_buf(),
        ));

        let response = get(app, "/health").await;
        assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(body_text(response).await.contains("ASSETS_UNAVAILABLE"));
    }

    #[tokio::test]
    async fn test_images_served_at_root() {
        let fixture = Fixture::new(true);
        let response = get(fixture.router(""), "/organ_lungs_dark.png").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_bytes(response).await, b"\x89PNG");
    }

    #[tokio::test]
    async fn test_images_served_under_prefix() {
        let fixture = Fixture::new(true);

        let response = get(fixture.router("/static"), "/static/body_skin_light.png").await;
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_frontend_fallback_to_index() {
        let fixture = Fixture::new(true);

        let response = get(fixture.router(""), "/").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("dashboard"));

        let response = get(fixture.router("/static"), "/anything/else").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert!(body_text(response).await.contains("dashboard"));
    }
}
