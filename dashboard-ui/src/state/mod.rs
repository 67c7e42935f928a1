//! State Management
//!
//! Signals holding the dashboard UI state and the theme context.

pub mod dashboard;

pub use dashboard::{initial_state_from, DashboardSignals, ThemeHandle};
