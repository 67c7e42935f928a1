//! # Patient Dashboard
//!
//! Themable body-diagram viewer: organ overlays on a base body image, with a
//! health meter for the selected organ.
//!
//! ## Modules
//!
//! - [`theme`]: theme ids, palettes, asset bundles and the theme context
//! - [`organs`]: organ catalog and health metric resolution
//! - [`dashboard`]: UI state, interactions and frame derivation
//! - [`assets`]: image naming conventions and base-path resolution
//! - [`patient`]: header demographics
//! - [`config`]: TOML + environment configuration
//! - `server`: static asset host (feature `server`)
//!
//! ## Quick Start
//!
//! ```rust
//! use patient_dashboard::{Dashboard, Interaction, UiState, ViewMode};
//! use chrono::NaiveDate;
//!
//! let dashboard = Dashboard::default();
//! let mut state = UiState::default();
//!
//! state.apply(Interaction::SelectViewMode(ViewMode::Organs));
//! state.apply(Interaction::PointerEnter("lungs".to_string()));
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let frame = dashboard.frame(&state, today);
//! assert_eq!(frame.middle.overlays[0].class, "organ-overlay hovered");
//! ```

pub mod assets;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod organs;
pub mod patient;
pub mod theme;

#[cfg(feature = "server")]
pub mod logging;
#[cfg(feature = "server")]
pub mod server;

// Re-export top-level types for convenience
pub use assets::AssetBase;

pub use dashboard::{
    Dashboard, DashboardFrame, Interaction, ModeExitPolicy, RightPanel, UiState, ViewMode,
};

pub use error::{DashboardError, DashboardResult};

pub use organs::{metric_for, HealthMetric, HealthStatus, MeterColor, OrganCatalog, OrganDescriptor};

pub use patient::PatientProfile;

pub use theme::{Palette, ThemeBundle, ThemeContext, ThemeId, ThemeRegistry};

pub use config::{Config, ConfigError, LoggingConfig};
