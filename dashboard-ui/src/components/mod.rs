//! UI Components
//!
//! Leptos components for the four dashboard regions. Each one renders from
//! the derived frame and reports interactions back through the signals.

pub mod body_view;
pub mod header;
pub mod health_meter;
pub mod mode_panel;

pub use body_view::BodyView;
pub use header::Header;
pub use health_meter::HealthMeter;
pub use mode_panel::ModePanel;

use patient_dashboard::Palette;

/// Inline style for the app container. Panels pick the palette up through
/// the custom properties declared in `style.css`.
pub fn palette_style(palette: &Palette) -> String {
    format!(
        "background-color: {}; color: {}; --panel-bg: {}; --panel-accent: {}; --heading-color: {}; --highlight-color: {};",
        palette.body_bg,
        palette.text_color,
        palette.panel_bg,
        palette.panel_accent,
        palette.heading_color,
        palette.highlight_color,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use patient_dashboard::{ThemeId, ThemeRegistry};

    #[test]
    fn test_palette_style_uses_theme_tokens() {
        let registry = ThemeRegistry::default();
        let style = palette_style(&registry.resolve(ThemeId::Light).palette);

        assert!(style.starts_with("background-color: var(--color-light-bg);"));
        assert!(style.contains("--highlight-color: var(--color-light-highlight);"));
    }
}
