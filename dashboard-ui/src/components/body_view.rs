//! Body View Component
//!
//! Base body image with the organ overlays stacked on top.

use leptos::*;
use patient_dashboard::dashboard::OverlayFrame;
use patient_dashboard::{DashboardFrame, Interaction};

use crate::state::DashboardSignals;

#[component]
pub fn BodyView(frame: Memo<DashboardFrame>, signals: DashboardSignals) -> impl IntoView {
    view! {
        <div class="middle-section-body-container">
            <img
                src=move || frame.with(|f| f.middle.base_image.src.clone())
                alt=move || frame.with(|f| f.middle.base_image.alt)
                class=move || frame.with(|f| f.middle.base_image.class)
            />

            <For
                each=move || frame.with(|f| f.middle.overlays.clone())
                key=overlay_key
                children=move |overlay| view! {
                    <OrganOverlay overlay=overlay frame=frame signals=signals />
                }
            />
        </div>
    }
}

/// Overlays survive hover changes and are only replaced when their image
/// changes (theme switch)
fn overlay_key(overlay: &OverlayFrame) -> (&'static str, String) {
    (overlay.organ_id, overlay.src.clone())
}

/// Positioned organ image; hover highlights it, click selects it
#[component]
fn OrganOverlay(
    overlay: OverlayFrame,
    frame: Memo<DashboardFrame>,
    signals: DashboardSignals,
) -> impl IntoView {
    let id = overlay.organ_id;

    view! {
        <img
            src=overlay.src
            alt=overlay.alt
            class=move || frame.with(|f| f.middle.overlay_class(id))
            style=overlay.style.css()
            on:mouseenter=move |_| signals.dispatch(Interaction::PointerEnter(id.to_string()))
            on:mouseleave=move |_| signals.dispatch(Interaction::PointerLeave(id.to_string()))
            on:click=move |_| signals.dispatch(Interaction::Click(id.to_string()))
        />
    }
}
