//! Themes
//!
//! - **registry**: `ThemeId`, palettes and per-theme asset bundles
//! - **context**: the active-theme value passed down to views

pub mod context;
pub mod registry;

pub use context::ThemeContext;
pub use registry::{Palette, ThemeBundle, ThemeId, ThemeRegistry};
