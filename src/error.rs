//! Dashboard error types
//!
//! The render path itself is total: unknown health statuses and stale organ
//! ids degrade instead of failing. These errors only come from parsing
//! external input (config values, CLI arguments) and building catalogs.

use thiserror::Error;

/// Errors raised while parsing or assembling dashboard inputs
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// Theme identifier outside {dark, light}
    #[error("Unknown theme: {0} (expected \"dark\" or \"light\")")]
    UnknownTheme(String),

    /// View mode outside {body, organs}
    #[error("Unknown view mode: {0} (expected \"body\" or \"organs\")")]
    UnknownViewMode(String),

    /// Mode exit policy outside {preserve, clear_hover, clear_all}
    #[error("Unknown mode exit policy: {0}")]
    UnknownPolicy(String),

    /// Interaction string that does not follow the `verb[:argument]` syntax
    #[error("Invalid interaction: {0}")]
    InvalidInteraction(String),

    /// Two catalog entries share an id
    #[error("Duplicate organ id in catalog: {0}")]
    DuplicateOrgan(String),

    /// Patient profile is missing required fields
    #[error("Invalid patient profile: {0}")]
    InvalidPatient(String),
}

/// Result type alias for dashboard operations
pub type DashboardResult<T> = Result<T, DashboardError>;
