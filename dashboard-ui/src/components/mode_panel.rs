//! Mode Panel Component
//!
//! View-mode buttons, plus the interactive organ list in organs mode.

use leptos::*;
use patient_dashboard::dashboard::OrganRow;
use patient_dashboard::{DashboardFrame, Interaction};

use crate::state::DashboardSignals;

#[component]
pub fn ModePanel(frame: Memo<DashboardFrame>, signals: DashboardSignals) -> impl IntoView {
    // The list is only rebuilt when it appears or disappears
    let in_organs = create_memo(move |_| frame.with(|f| f.left.organ_list.is_some()));

    view! {
        <div class="left-panel">
            <h2>"View Mode:"</h2>
            <ul>
                {move || {
                    frame.with(|f| f.left.modes.clone())
                        .into_iter()
                        .map(|button| {
                            let mode = button.mode;
                            view! {
                                <li>
                                    <button
                                        class=button.class
                                        on:click=move |_| signals.dispatch(Interaction::SelectViewMode(mode))
                                    >
                                        {button.label}
                                    </button>
                                </li>
                            }
                        })
                        .collect_view()
                }}
            </ul>

            {move || in_organs.get().then(|| view! {
                <h2>"Organs (Interactive):"</h2>
                <ul>
                    <For
                        each=move || frame.with(|f| f.left.organ_list.clone().unwrap_or_default())
                        key=|row| row.organ_id
                        children=move |row| view! {
                            <OrganListRow row=row frame=frame signals=signals />
                        }
                    />
                </ul>
            })}
        </div>
    }
}

/// One selectable organ in the list
#[component]
fn OrganListRow(
    row: OrganRow,
    frame: Memo<DashboardFrame>,
    signals: DashboardSignals,
) -> impl IntoView {
    let id = row.organ_id;

    view! {
        <li
            class=move || frame.with(|f| f.left.row_class(id))
            on:mouseenter=move |_| signals.dispatch(Interaction::PointerEnter(id.to_string()))
            on:mouseleave=move |_| signals.dispatch(Interaction::PointerLeave(id.to_string()))
            on:click=move |_| signals.dispatch(Interaction::Click(id.to_string()))
        >
            {row.name}
        </li>
    }
}
