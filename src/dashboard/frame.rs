//! Render derivation
//!
//! [`DashboardFrame::derive`] turns a state snapshot into the attributes the
//! renderer needs: image sources, class names, percentage placements and
//! labels. It is pure and cheap, so it runs on every render without caching.

use serde::Serialize;

use super::state::{UiState, ViewMode};
use crate::organs::{HealthMetric, MeterColor, OrganCatalog, OrganDescriptor};
use crate::theme::{Palette, ThemeContext, ThemeId};

pub const DASHBOARD_TITLE: &str = "Patient Health Dashboard";
pub const PLACEHOLDER_PROMPT: &str = "Hover over or select an organ to see its health metrics.";

pub const SELECTED_VIEW_CLASS: &str = "selected-view";
pub const SELECTED_ITEM_CLASS: &str = "selected-item";
pub const BASE_IMAGE_CLASS: &str = "base-body-image";
const OVERLAY_CLASS: &str = "organ-overlay";
const OVERLAY_HOVERED_CLASS: &str = "organ-overlay hovered";

/// Everything one render of the dashboard shows
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct DashboardFrame {
    pub theme: ThemeId,
    pub container_class: String,
    pub palette: Palette,
    pub header: HeaderFrame,
    pub left: LeftPanel,
    pub middle: MiddlePanel,
    pub right: RightPanel,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct HeaderFrame {
    pub title: &'static str,
    pub patient_details: String,
    pub toggle_label: String,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct LeftPanel {
    pub modes: Vec<ModeButton>,
    /// Present only in organs mode
    pub organ_list: Option<Vec<OrganRow>>,
}

impl LeftPanel {
    /// Class of an organ's list row; empty when it is not listed
    pub fn row_class(&self, organ_id: &str) -> &'static str {
        self.organ_list
            .iter()
            .flatten()
            .find(|row| row.organ_id == organ_id)
            .map_or("", |row| row.class)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ModeButton {
    pub mode: ViewMode,
    pub label: &'static str,
    pub class: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OrganRow {
    pub organ_id: &'static str,
    pub name: &'static str,
    pub class: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MiddlePanel {
    pub base_image: ImageFrame,
    pub overlays: Vec<OverlayFrame>,
}

impl MiddlePanel {
    /// Class of an organ's overlay, so a kept element can restyle in place
    pub fn overlay_class(&self, organ_id: &str) -> &'static str {
        self.overlays
            .iter()
            .find(|overlay| overlay.organ_id == organ_id)
            .map_or(OVERLAY_CLASS, |overlay| overlay.class)
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ImageFrame {
    pub src: String,
    pub alt: &'static str,
    pub class: &'static str,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OverlayFrame {
    pub organ_id: &'static str,
    pub src: String,
    pub alt: &'static str,
    pub class: &'static str,
    pub style: OverlayStyle,
}

/// Percentage placement of an overlay inside the body container
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct OverlayStyle {
    pub top: String,
    pub left: String,
    pub width: String,
    pub height: String,
}

impl OverlayStyle {
    fn for_organ(organ: &OrganDescriptor) -> Self {
        Self {
            top: percent(organ.position.top),
            left: percent(organ.position.left),
            width: percent(organ.size.width),
            height: percent(organ.size.height),
        }
    }

    /// Inline `style` attribute value
    pub fn css(&self) -> String {
        format!(
            "position: absolute; top: {}; left: {}; width: {}; height: {}; cursor: pointer;",
            self.top, self.left, self.width, self.height
        )
    }
}

fn percent(value: f32) -> String {
    format!("{}%", value)
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RightPanel {
    Meter(MeterFrame),
    Prompt { text: &'static str },
}

impl RightPanel {
    pub fn meter(&self) -> Option<&MeterFrame> {
        match self {
            RightPanel::Meter(meter) => Some(meter),
            RightPanel::Prompt { .. } => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct MeterFrame {
    pub organ_id: &'static str,
    pub heading: String,
    pub value: u8,
    pub color: MeterColor,
    pub bar_width: String,
    pub status_label: &'static str,
}

impl MeterFrame {
    fn new(organ: &OrganDescriptor, metric: HealthMetric) -> Self {
        Self {
            organ_id: organ.id,
            heading: format!("{} Health", organ.name),
            value: metric.value,
            color: metric.color,
            bar_width: metric.bar_width(),
            status_label: organ.status.label(),
        }
    }

    /// `Status: Weak`
    pub fn status_text(&self) -> String {
        format!("Status: {}", self.status_label)
    }

    /// Inline style of the inner meter bar
    pub fn bar_css(&self) -> String {
        format!("width: {}; background-color: {};", self.bar_width, self.color.css())
    }
}

impl DashboardFrame {
    /// Derive the frame for a state snapshot
    pub fn derive(
        state: &UiState,
        theme: &ThemeContext,
        catalog: &OrganCatalog,
        patient_details: String,
    ) -> Self {
        let bundle = theme.bundle();
        let mode = state.view_mode();
        let in_organs = mode == ViewMode::Organs;

        let modes = ViewMode::all()
            .iter()
            .map(|m| ModeButton {
                mode: *m,
                label: m.label(),
                class: if *m == mode { SELECTED_VIEW_CLASS } else { "" },
            })
            .collect();

        let organ_list = in_organs.then(|| {
            catalog
                .iter()
                .map(|organ| OrganRow {
                    organ_id: organ.id,
                    name: organ.name,
                    class: if state.active_organ() == Some(organ.id) {
                        SELECTED_ITEM_CLASS
                    } else {
                        ""
                    },
                })
                .collect()
        });

        let base_image = ImageFrame {
            src: bundle.body_image(mode).to_string(),
            alt: match mode {
                ViewMode::Body => "Human Body",
                ViewMode::Organs => "Human Body Outline",
            },
            class: BASE_IMAGE_CLASS,
        };

        let overlays = if in_organs {
            catalog
                .iter()
                .map(|organ| OverlayFrame {
                    organ_id: organ.id,
                    src: bundle.overlay_image(organ.id),
                    alt: organ.name,
                    class: if state.is_hovered(organ.id) {
                        OVERLAY_HOVERED_CLASS
                    } else {
                        OVERLAY_CLASS
                    },
                    style: OverlayStyle::for_organ(organ),
                })
                .collect()
        } else {
            Vec::new()
        };

        // A stale active id renders exactly like no selection
        let right = state
            .active_organ()
            .and_then(|id| catalog.lookup(id))
            .map(|organ| RightPanel::Meter(MeterFrame::new(organ, organ.metric())))
            .unwrap_or(RightPanel::Prompt {
                text: PLACEHOLDER_PROMPT,
            });

        Self {
            theme: theme.theme(),
            container_class: theme.container_class(),
            palette: bundle.palette,
            header: HeaderFrame {
                title: DASHBOARD_TITLE,
                patient_details,
                toggle_label: theme.toggle_label(),
            },
            left: LeftPanel { modes, organ_list },
            middle: MiddlePanel {
                base_image,
                overlays,
            },
            right,
        }
    }
}
