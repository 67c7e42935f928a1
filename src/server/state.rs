//! Server State
//!
//! Shared state accessible by the health handlers.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Instant;

use crate::assets::AssetBase;
use crate::config::Config;
use crate::organs::OrganCatalog;

/// Shared state for all handlers
#[derive(Clone)]
pub struct ServerState {
    /// Directory images are served from
    pub asset_dir: PathBuf,
    /// URL prefix images are requested under
    pub asset_base: AssetBase,
    /// Built frontend directory
    pub dist_dir: PathBuf,
    /// Catalog deciding which overlay images are expected
    pub catalog: Arc<OrganCatalog>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl ServerState {
    pub fn new(asset_dir: PathBuf, asset_base: AssetBase, dist_dir: PathBuf) -> Self {
        Self {
            asset_dir,
            asset_base,
            dist_dir,
            catalog: Arc::new(OrganCatalog::builtin()),
            start_time: Instant::now(),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.assets.dir.clone(),
            config.asset_base(),
            config.server.dist_dir.clone(),
        )
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
