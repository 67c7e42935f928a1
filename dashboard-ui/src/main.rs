//! Patient Health Dashboard
//!
//! Body-diagram viewer built with Leptos (WASM).
//!
//! # Features
//!
//! - Dark and light themes
//! - Body and organs view modes
//! - Interactive organ overlays with hover highlight
//! - Health meter for the selected organ
//!
//! # Architecture
//!
//! Client-side rendered (CSR) Leptos application. All state lives in the
//! browser; every interaction goes through `UiState::apply` and the page is
//! rendered from the derived `DashboardFrame`.
//!
//! Build-time settings (read with `option_env!`):
//! - `DASHBOARD_PUBLIC_URL`: image base-path prefix
//! - `DASHBOARD_THEME`: initial theme
//! - `DASHBOARD_MODE_EXIT_POLICY`: preserve, clear_hover or clear_all

use leptos::*;

mod app;
mod components;
mod state;

fn main() {
    // Set up panic hook for better error messages in WASM
    console_error_panic_hook::set_once();

    // Mount the app to the document body
    mount_to_body(|| view! { <app::App /> });
}
