//! Health Meter Component
//!
//! Meter for the active organ, or the placeholder prompt.

use leptos::*;
use patient_dashboard::{DashboardFrame, RightPanel};

#[component]
pub fn HealthMeter(frame: Memo<DashboardFrame>) -> impl IntoView {
    view! {
        <div class="right-panel">
            <h2>"Organ Health Metrics:"</h2>
            {move || match frame.with(|f| f.right.clone()) {
                RightPanel::Meter(meter) => view! {
                    <div class="health-meter-container">
                        <h3>{meter.heading.clone()}</h3>
                        <div class="meter-bar-outer">
                            <div class="meter-bar-inner" style=meter.bar_css()></div>
                        </div>
                        <p class="meter-status">{meter.status_text()}</p>
                    </div>
                }.into_view(),
                RightPanel::Prompt { text } => view! {
                    <p class="meter-placeholder">{text}</p>
                }.into_view(),
            }}
        </div>
    }
}
