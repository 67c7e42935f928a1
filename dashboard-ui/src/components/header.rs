//! Header Component
//!
//! Title, patient demographics and the theme toggle.

use leptos::*;
use patient_dashboard::DashboardFrame;

use crate::state::ThemeHandle;

#[component]
pub fn Header(frame: Memo<DashboardFrame>, theme: ThemeHandle) -> impl IntoView {
    view! {
        <header class="app-header">
            <div class="header-content-left">
                <h1>{move || frame.with(|f| f.header.title)}</h1>
                <p class="patient-details">
                    {move || frame.with(|f| f.header.patient_details.clone())}
                </p>
            </div>
            <button
                class="theme-toggle-button"
                title=move || format!("Current theme: {}", theme.theme().label())
                on:click=move |_| theme.toggle()
            >
                {move || theme.toggle_label()}
            </button>
        </header>
    }
}
