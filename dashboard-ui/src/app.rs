//! App Root Component
//!
//! Builds the dashboard model, owns the UI state signal and lays out the
//! header and the three panels.

use leptos::*;
use patient_dashboard::{AssetBase, Dashboard, UiState};

use crate::components::{palette_style, BodyView, Header, HealthMeter, ModePanel};
use crate::state::{initial_state_from, DashboardSignals, ThemeHandle};

/// Image base path baked in at build time
fn public_url() -> &'static str {
    option_env!("DASHBOARD_PUBLIC_URL").unwrap_or("")
}

fn initial_state() -> UiState {
    match initial_state_from(
        option_env!("DASHBOARD_THEME"),
        option_env!("DASHBOARD_MODE_EXIT_POLICY"),
    ) {
        Ok(state) => state,
        Err(err) => {
            web_sys::console::warn_1(&format!("Ignoring build settings: {}", err).into());
            UiState::default()
        }
    }
}

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let dashboard = Dashboard::with_assets(AssetBase::new(public_url()));
    let signals = DashboardSignals::new(initial_state());
    let theme = ThemeHandle::new(&dashboard, signals);

    // Age is computed against the day the page was loaded
    let today = chrono::Local::now().date_naive();
    let frame = create_memo(move |_| signals.ui.with(|state| dashboard.frame(state, today)));

    view! {
        <div
            class=move || frame.with(|f| f.container_class.clone())
            style=move || frame.with(|f| palette_style(&f.palette))
        >
            <Header frame=frame theme=theme />

            <div class="main-content-wrapper">
                <ModePanel frame=frame signals=signals />
                <BodyView frame=frame signals=signals />
                <HealthMeter frame=frame />
            </div>
        </div>
    }
}
