//! Theme registry
//!
//! Static palette tables plus the per-theme asset bundle. Bundles are built
//! once when the registry is constructed and never change afterwards.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::assets::AssetBase;
use crate::dashboard::ViewMode;
use crate::error::DashboardError;

/// Theme identifier
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ThemeId {
    #[default]
    Dark,
    Light,
}

impl ThemeId {
    /// Both themes, in display order
    pub fn all() -> &'static [ThemeId] {
        &[ThemeId::Dark, ThemeId::Light]
    }

    /// The other theme
    pub fn toggle(self) -> ThemeId {
        match self {
            ThemeId::Dark => ThemeId::Light,
            ThemeId::Light => ThemeId::Dark,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ThemeId::Dark => "dark",
            ThemeId::Light => "light",
        }
    }

    /// Capitalized name used in button labels
    pub fn label(&self) -> &'static str {
        match self {
            ThemeId::Dark => "Dark",
            ThemeId::Light => "Light",
        }
    }
}

impl fmt::Display for ThemeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ThemeId {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dark" => Ok(ThemeId::Dark),
            "light" => Ok(ThemeId::Light),
            other => Err(DashboardError::UnknownTheme(other.to_string())),
        }
    }
}

/// The six color tokens of a theme
///
/// Values are CSS custom-property references; the stylesheet defines them.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Palette {
    pub body_bg: &'static str,
    pub panel_bg: &'static str,
    pub panel_accent: &'static str,
    pub text_color: &'static str,
    pub heading_color: &'static str,
    pub highlight_color: &'static str,
}

impl Palette {
    /// All tokens as (name, value) pairs
    pub fn tokens(&self) -> [(&'static str, &'static str); 6] {
        [
            ("body_bg", self.body_bg),
            ("panel_bg", self.panel_bg),
            ("panel_accent", self.panel_accent),
            ("text_color", self.text_color),
            ("heading_color", self.heading_color),
            ("highlight_color", self.highlight_color),
        ]
    }
}

const DARK_PALETTE: Palette = Palette {
    body_bg: "var(--color-dark-bg)",
    panel_bg: "var(--color-dark-panel-bg)",
    panel_accent: "var(--color-dark-panel-accent)",
    text_color: "var(--color-dark-text)",
    heading_color: "var(--color-dark-heading)",
    highlight_color: "var(--color-dark-highlight)",
};

const LIGHT_PALETTE: Palette = Palette {
    body_bg: "var(--color-light-bg)",
    panel_bg: "var(--color-light-panel-bg)",
    panel_accent: "var(--color-light-panel-accent)",
    text_color: "var(--color-light-text)",
    heading_color: "var(--color-light-heading)",
    highlight_color: "var(--color-light-highlight)",
};

/// Palette plus asset references for one theme
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ThemeBundle {
    pub id: ThemeId,
    pub palette: Palette,
    /// Skin-covered body, shown in body mode
    pub body_skin_image: String,
    /// Plain outline body, shown in organs mode
    pub body_plain_image: String,
    pub lungs_overlay_image: String,
    #[serde(skip)]
    assets: AssetBase,
}

impl ThemeBundle {
    fn build(id: ThemeId, palette: Palette, assets: &AssetBase) -> Self {
        Self {
            id,
            palette,
            body_skin_image: assets.body_image(id, ViewMode::Body),
            body_plain_image: assets.body_image(id, ViewMode::Organs),
            lungs_overlay_image: assets.organ_overlay(id, "lungs"),
            assets: assets.clone(),
        }
    }

    /// Base body image for a view mode
    pub fn body_image(&self, mode: ViewMode) -> &str {
        match mode {
            ViewMode::Body => &self.body_skin_image,
            ViewMode::Organs => &self.body_plain_image,
        }
    }

    /// Overlay image for any catalog organ
    pub fn overlay_image(&self, organ_id: &str) -> String {
        self.assets.organ_overlay(self.id, organ_id)
    }

    /// All asset paths carried by the bundle
    pub fn asset_paths(&self) -> [&str; 3] {
        [
            &self.body_skin_image,
            &self.body_plain_image,
            &self.lungs_overlay_image,
        ]
    }
}

/// Lookup from theme id to bundle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThemeRegistry {
    dark: ThemeBundle,
    light: ThemeBundle,
    assets: AssetBase,
}

impl ThemeRegistry {
    /// Build both bundles against an asset base-path prefix
    pub fn new(assets: AssetBase) -> Self {
        Self {
            dark: ThemeBundle::build(ThemeId::Dark, DARK_PALETTE, &assets),
            light: ThemeBundle::build(ThemeId::Light, LIGHT_PALETTE, &assets),
            assets,
        }
    }

    pub fn resolve(&self, id: ThemeId) -> &ThemeBundle {
        match id {
            ThemeId::Dark => &self.dark,
            ThemeId::Light => &self.light,
        }
    }

    /// Bundles in [`ThemeId::all`] order
    pub fn iter(&self) -> impl Iterator<Item = &ThemeBundle> {
        ThemeId::all().iter().map(|id| self.resolve(*id))
    }

    pub fn assets(&self) -> &AssetBase {
        &self.assets
    }
}

impl Default for ThemeRegistry {
    fn default() -> Self {
        Self::new(AssetBase::default())
    }
}
