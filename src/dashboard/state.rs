//! Dashboard UI state
//!
//! Four independent flags (theme, view mode, hovered organs, active organ)
//! changed only through [`UiState::apply`]. Nothing here outlives the page.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;
use crate::theme::ThemeId;

/// Skin-covered body or plain outline with organ overlays
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Body,
    Organs,
}

impl ViewMode {
    pub fn all() -> &'static [ViewMode] {
        &[ViewMode::Body, ViewMode::Organs]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewMode::Body => "body",
            ViewMode::Organs => "organs",
        }
    }

    /// Button label
    pub fn label(&self) -> &'static str {
        match self {
            ViewMode::Body => "Body",
            ViewMode::Organs => "Organs",
        }
    }
}

impl fmt::Display for ViewMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ViewMode {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "body" => Ok(ViewMode::Body),
            "organs" => Ok(ViewMode::Organs),
            other => Err(DashboardError::UnknownViewMode(other.to_string())),
        }
    }
}

/// What happens to organ flags when leaving organs mode
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ModeExitPolicy {
    /// Keep hover and active flags
    Preserve,
    /// Drop hover flags, keep the active organ
    #[default]
    ClearHover,
    /// Drop hover flags and the active organ
    ClearAll,
}

impl ModeExitPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModeExitPolicy::Preserve => "preserve",
            ModeExitPolicy::ClearHover => "clear_hover",
            ModeExitPolicy::ClearAll => "clear_all",
        }
    }
}

impl fmt::Display for ModeExitPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ModeExitPolicy {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "preserve" => Ok(ModeExitPolicy::Preserve),
            "clear_hover" => Ok(ModeExitPolicy::ClearHover),
            "clear_all" => Ok(ModeExitPolicy::ClearAll),
            other => Err(DashboardError::UnknownPolicy(other.to_string())),
        }
    }
}

/// A single user interaction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Interaction {
    /// Theme toggle button
    ToggleTheme,
    /// Body / Organs button
    SelectViewMode(ViewMode),
    /// Pointer entered an organ's list row or overlay
    PointerEnter(String),
    /// Pointer left an organ's list row or overlay
    PointerLeave(String),
    /// Organ list row or overlay clicked
    Click(String),
}

impl fmt::Display for Interaction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Interaction::ToggleTheme => write!(f, "toggle-theme"),
            Interaction::SelectViewMode(mode) => write!(f, "mode:{}", mode),
            Interaction::PointerEnter(id) => write!(f, "enter:{}", id),
            Interaction::PointerLeave(id) => write!(f, "leave:{}", id),
            Interaction::Click(id) => write!(f, "click:{}", id),
        }
    }
}

/// Parses the `verb[:argument]` form used by the CLI replay command
impl FromStr for Interaction {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (verb, arg) = match s.split_once(':') {
            Some((verb, arg)) => (verb, Some(arg.trim())),
            None => (s, None),
        };

        match (verb, arg) {
            ("toggle-theme", None) => Ok(Interaction::ToggleTheme),
            ("mode", Some(mode)) => Ok(Interaction::SelectViewMode(mode.parse()?)),
            ("enter", Some(id)) if !id.is_empty() => Ok(Interaction::PointerEnter(id.to_string())),
            ("leave", Some(id)) if !id.is_empty() => Ok(Interaction::PointerLeave(id.to_string())),
            ("click", Some(id)) if !id.is_empty() => Ok(Interaction::Click(id.to_string())),
            _ => Err(DashboardError::InvalidInteraction(s.to_string())),
        }
    }
}

/// Transient UI state owned by the dashboard view
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UiState {
    active_theme: ThemeId,
    view_mode: ViewMode,
    hovered: BTreeSet<String>,
    active_organ: Option<String>,
    exit_policy: ModeExitPolicy,
}

impl Default for UiState {
    fn default() -> Self {
        Self::new(ThemeId::Dark, ViewMode::Body, ModeExitPolicy::default())
    }
}

impl UiState {
    pub fn new(theme: ThemeId, view_mode: ViewMode, exit_policy: ModeExitPolicy) -> Self {
        Self {
            active_theme: theme,
            view_mode,
            hovered: BTreeSet::new(),
            active_organ: None,
            exit_policy,
        }
    }

    pub fn active_theme(&self) -> ThemeId {
        self.active_theme
    }

    pub fn view_mode(&self) -> ViewMode {
        self.view_mode
    }

    pub fn exit_policy(&self) -> ModeExitPolicy {
        self.exit_policy
    }

    pub fn active_organ(&self) -> Option<&str> {
        self.active_organ.as_deref()
    }

    pub fn is_hovered(&self, organ_id: &str) -> bool {
        self.hovered.contains(organ_id)
    }

    /// First hovered organ in id order, if any
    pub fn hovered_organ(&self) -> Option<&str> {
        self.hovered.iter().next().map(String::as_str)
    }

    pub fn hovered_organs(&self) -> impl Iterator<Item = &str> {
        self.hovered.iter().map(String::as_str)
    }

    /// Apply one interaction. Returns whether anything changed.
    ///
    /// Organ list rows and overlays only exist in organs mode, so enter and
    /// click events arriving in body mode are ignored. Leave events are
    /// always honoured.
    pub fn apply(&mut self, interaction: Interaction) -> bool {
        match interaction {
            Interaction::ToggleTheme => {
                self.active_theme = self.active_theme.toggle();
                tracing::debug!(theme = %self.active_theme, "Switching theme");
                true
            }
            Interaction::SelectViewMode(mode) => self.select_view_mode(mode),
            Interaction::PointerEnter(id) => {
                if self.view_mode != ViewMode::Organs {
                    tracing::debug!(organ = %id, "Ignoring pointer-enter outside organs mode");
                    return false;
                }
                self.hovered.insert(id)
            }
            Interaction::PointerLeave(id) => self.hovered.remove(&id),
            Interaction::Click(id) => {
                if self.view_mode != ViewMode::Organs {
                    tracing::debug!(organ = %id, "Ignoring click outside organs mode");
                    return false;
                }
                if self.active_organ.as_deref() == Some(id.as_str()) {
                    return false;
                }
                self.active_organ = Some(id);
                true
            }
        }
    }

    fn select_view_mode(&mut self, mode: ViewMode) -> bool {
        if self.view_mode == mode {
            return false;
        }

        let leaving_organs = self.view_mode == ViewMode::Organs;
        self.view_mode = mode;

        if leaving_organs {
            match self.exit_policy {
                ModeExitPolicy::Preserve => {}
                ModeExitPolicy::ClearHover => self.hovered.clear(),
                ModeExitPolicy::ClearAll => {
                    self.hovered.clear();
                    self.active_organ = None;
                }
            }
        }
        true
    }

    /// Apply a sequence of interactions in order
    pub fn apply_all<I>(&mut self, interactions: I)
    where
        I: IntoIterator<Item = Interaction>,
    {
        for interaction in interactions {
            self.apply(interaction);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn organs_mode() -> UiState {
        let mut state = UiState::default();
        state.apply(Interaction::SelectViewMode(ViewMode::Organs));
        state
    }

    #[test]
    fn test_initial_state() {
        let state = UiState::default();
        assert_eq!(state.active_theme(), ThemeId::Dark);
        assert_eq!(state.view_mode(), ViewMode::Body);
        assert_eq!(state.active_organ(), None);
        assert_eq!(state.hovered_organ(), None);
    }

    #[test]
    fn test_click_sets_active_and_never_clears() {
        let mut state = organs_mode();

        assert!(state.apply(Interaction::Click("lungs".into())));
        assert_eq!(state.active_organ(), Some("lungs"));

        // Clicking again is a no-op; there is no deselect
        assert!(!state.apply(Interaction::Click("lungs".into())));
        assert_eq!(state.active_organ(), Some("lungs"));

        assert!(state.apply(Interaction::Click("heart".into())));
        assert_eq!(state.active_organ(), Some("heart"));
    }

    #[test]
    fn test_hover_tracks_each_organ_independently() {
        let mut state = organs_mode();

        state.apply(Interaction::PointerEnter("lungs".into()));
        state.apply(Interaction::PointerEnter("heart".into()));
        assert!(state.is_hovered("lungs"));
        assert!(state.is_hovered("heart"));

        state.apply(Interaction::PointerLeave("heart".into()));
        assert!(state.is_hovered("lungs"));
        assert!(!state.is_hovered("heart"));

        state.apply(Interaction::PointerLeave("lungs".into()));
        assert_eq!(state.hovered_organ(), None);
    }

    #[test]
    fn test_hover_independent_of_active() {
        let mut state = organs_mode();
        state.apply(Interaction::Click("lungs".into()));

        state.apply(Interaction::PointerEnter("lungs".into()));
        assert!(state.is_hovered("lungs"));
        state.apply(Interaction::PointerLeave("lungs".into()));
        assert!(!state.is_hovered("lungs"));

        assert_eq!(state.active_organ(), Some("lungs"));
    }

    #[test]
    fn test_organ_events_ignored_in_body_mode() {
        let mut state = UiState::default();

        assert!(!state.apply(Interaction::PointerEnter("lungs".into())));
        assert!(!state.apply(Interaction::Click("lungs".into())));
        assert_eq!(state.active_organ(), None);
        assert!(!state.is_hovered("lungs"));
    }

    #[test]
    fn test_leave_honoured_in_body_mode() {
        let mut state = UiState::new(ThemeId::Dark, ViewMode::Organs, ModeExitPolicy::Preserve);
        state.apply(Interaction::PointerEnter("lungs".into()));
        state.apply(Interaction::SelectViewMode(ViewMode::Body));
        assert!(state.is_hovered("lungs"));

        assert!(state.apply(Interaction::PointerLeave("lungs".into())));
        assert!(!state.is_hovered("lungs"));
        assert_eq!(state.hovered_organ(), None);
    }

    #[test]
    fn test_mode_exit_policies() {
        let run = |policy| {
            let mut state = UiState::new(ThemeId::Dark, ViewMode::Organs, policy);
            state.apply(Interaction::Click("lungs".into()));
            state.apply(Interaction::PointerEnter("lungs".into()));
            state.apply(Interaction::SelectViewMode(ViewMode::Body));
            state.apply(Interaction::SelectViewMode(ViewMode::Organs));
            (state.active_organ().map(str::to_string), state.is_hovered("lungs"))
        };

        assert_eq!(run(ModeExitPolicy::Preserve), (Some("lungs".to_string()), true));
        assert_eq!(run(ModeExitPolicy::ClearHover), (Some("lungs".to_string()), false));
        assert_eq!(run(ModeExitPolicy::ClearAll), (None, false));
    }

    #[test]
    fn test_selecting_current_mode_is_noop() {
        let mut state = UiState::default();
        assert!(!state.apply(Interaction::SelectViewMode(ViewMode::Body)));
        assert!(state.apply(Interaction::SelectViewMode(ViewMode::Organs)));
    }

    #[test]
    fn test_theme_toggle_leaves_other_flags() {
        let mut state = organs_mode();
        state.apply(Interaction::Click("lungs".into()));

        state.apply(Interaction::ToggleTheme);
        assert_eq!(state.active_theme(), ThemeId::Light);
        assert_eq!(state.view_mode(), ViewMode::Organs);
        assert_eq!(state.active_organ(), Some("lungs"));

        state.apply(Interaction::ToggleTheme);
        assert_eq!(state.active_theme(), ThemeId::Dark);
    }

    #[test]
    fn test_interaction_parsing() {
        assert_eq!("toggle-theme".parse(), Ok(Interaction::ToggleTheme));
        assert_eq!(
            "mode:organs".parse(),
            Ok(Interaction::SelectViewMode(ViewMode::Organs))
        );
        assert_eq!(
            "click:lungs".parse(),
            Ok(Interaction::Click("lungs".to_string()))
        );
        assert_eq!(
            "enter: lungs".parse::<Interaction>().unwrap().to_string(),
            "enter:lungs"
        );

        assert!("mode:sideways".parse::<Interaction>().is_err());
        assert!("click:".parse::<Interaction>().is_err());
        assert!("wave".parse::<Interaction>().is_err());
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("clear-all".parse(), Ok(ModeExitPolicy::ClearAll));
        assert_eq!("preserve".parse(), Ok(ModeExitPolicy::Preserve));
        assert!("forget".parse::<ModeExitPolicy>().is_err());
    }
}
