//! End-to-end interaction flows through the public dashboard API

use chrono::NaiveDate;
use patient_dashboard::dashboard::{Dashboard, Interaction, RightPanel, UiState, ViewMode};
use patient_dashboard::dashboard::PLACEHOLDER_PROMPT;
use patient_dashboard::{AssetBase, MeterColor, ThemeId};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()
}

fn replay(events: &[&str]) -> UiState {
    let mut state = UiState::default();
    state.apply_all(events.iter().map(|e| e.parse::<Interaction>().unwrap()));
    state
}

#[test]
fn test_initial_load() {
    let dashboard = Dashboard::default();
    let frame = dashboard.frame(&UiState::default(), today());

    assert_eq!(frame.theme, ThemeId::Dark);
    assert_eq!(frame.middle.base_image.src, "/body_skin_dark.png");
    assert!(frame.left.organ_list.is_none());
    assert_eq!(frame.header.patient_details, "Chron, Stark | 08/22/1990 | 34 | M");
    assert_eq!(
        frame.right,
        RightPanel::Prompt {
            text: PLACEHOLDER_PROMPT
        }
    );
}

#[test]
fn test_click_lungs_overlay_shows_weak_meter() {
    let dashboard = Dashboard::default();
    let state = replay(&["mode:organs", "click:lungs"]);

    assert_eq!(state.active_organ(), Some("lungs"));

    let frame = dashboard.frame(&state, today());
    let meter = frame.right.meter().expect("meter shown");
    assert_eq!(meter.value, 20);
    assert_eq!(meter.color, MeterColor::Red);
    assert_eq!(meter.status_label, "Weak");
    assert_eq!(meter.heading, "Lungs Health");
}

#[test]
fn test_mode_round_trip_keeps_active_organ() {
    let dashboard = Dashboard::default();
    let state = replay(&["mode:organs", "click:lungs", "mode:body", "mode:organs"]);

    assert_eq!(state.view_mode(), ViewMode::Organs);
    assert_eq!(state.active_organ(), Some("lungs"));

    let frame = dashboard.frame(&state, today());
    assert_eq!(frame.right.meter().map(|m| m.value), Some(20));
}

#[test]
fn test_meter_stays_visible_in_body_mode() {
    let dashboard = Dashboard::default();
    let state = replay(&["mode:organs", "click:lungs", "mode:body"]);

    let frame = dashboard.frame(&state, today());
    assert!(frame.middle.overlays.is_empty());
    assert!(frame.right.meter().is_some());
}

#[test]
fn test_hover_enter_and_leave() {
    let mut state = replay(&["mode:organs"]);

    state.apply(Interaction::PointerEnter("lungs".to_string()));
    assert!(state.is_hovered("lungs"));
    assert_eq!(state.active_organ(), None);

    state.apply(Interaction::PointerLeave("lungs".to_string()));
    assert!(!state.is_hovered("lungs"));
}

#[test]
fn test_theme_toggle_with_active_organ() {
    let dashboard = Dashboard::with_assets(AssetBase::new("/assets"));
    let before = replay(&["mode:organs", "click:lungs"]);
    let mut after = before.clone();
    after.apply(Interaction::ToggleTheme);

    assert_eq!(after.active_organ(), before.active_organ());
    assert_eq!(after.view_mode(), before.view_mode());

    let dark = dashboard.frame(&before, today());
    let light = dashboard.frame(&after, today());

    assert_eq!(dark.middle.base_image.src, "/assets/body_plain_dark.png");
    assert_eq!(light.middle.base_image.src, "/assets/body_plain_light.png");
    assert_eq!(light.middle.overlays[0].src, "/assets/organ_lungs_light.png");
    assert_ne!(dark.palette, light.palette);
    assert_eq!(dark.right, light.right);
    assert_eq!(dark.left.organ_list, light.left.organ_list);
    assert_eq!(light.header.toggle_label, "Switch to Dark Theme");
}
