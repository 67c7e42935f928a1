//! Dashboard view model
//!
//! - **state**: `UiState`, `ViewMode`, `Interaction` and the transition function
//! - **frame**: pure derivation of the presentation frame from a state snapshot
//! - **view**: `Dashboard`, binding registry, catalog and patient together
//!
//! # Flow
//!
//! ```text
//! Interaction → UiState::apply → Dashboard::frame → renderer
//! ```
//!
//! # Example
//!
//! ```rust
//! use patient_dashboard::dashboard::{Dashboard, Interaction, UiState, ViewMode};
//! use chrono::NaiveDate;
//!
//! let dashboard = Dashboard::default();
//! let mut state = UiState::default();
//!
//! state.apply(Interaction::SelectViewMode(ViewMode::Organs));
//! state.apply(Interaction::Click("lungs".to_string()));
//!
//! let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
//! let frame = dashboard.frame(&state, today);
//! assert_eq!(frame.right.meter().unwrap().value, 20);
//! ```

pub mod frame;
pub mod state;
pub mod view;

pub use frame::{
    DashboardFrame, HeaderFrame, ImageFrame, LeftPanel, MeterFrame, MiddlePanel, ModeButton,
    OrganRow, OverlayFrame, OverlayStyle, RightPanel, PLACEHOLDER_PROMPT,
};
pub use state::{Interaction, ModeExitPolicy, UiState, ViewMode};
pub use view::Dashboard;
