//! Dashboard Signals
//!
//! Reactive wrapper around `UiState`. Components receive these handles as
//! props rather than looking them up from context.

use leptos::*;
use patient_dashboard::{
    Dashboard, DashboardResult, Interaction, ModeExitPolicy, ThemeContext, ThemeId, UiState,
    ViewMode,
};

/// The single writable UI state of the page
#[derive(Clone, Copy)]
pub struct DashboardSignals {
    pub ui: RwSignal<UiState>,
}

impl DashboardSignals {
    pub fn new(initial: UiState) -> Self {
        Self {
            ui: create_rw_signal(initial),
        }
    }

    /// Apply an interaction, notifying subscribers only when it changed
    /// something
    pub fn dispatch(&self, interaction: Interaction) {
        let label = interaction.to_string();
        let mut next = self.ui.get_untracked();

        if next.apply(interaction) {
            web_sys::console::debug_1(&format!("interaction: {}", label).into());
            self.ui.set(next);
        }
    }
}

/// Theme context handed to components that read or switch the theme
#[derive(Clone, Copy)]
pub struct ThemeHandle {
    context: Memo<ThemeContext>,
    signals: DashboardSignals,
}

impl ThemeHandle {
    /// Derive the context from the active theme; it is rebuilt whenever the
    /// theme id changes.
    pub fn new(dashboard: &Dashboard, signals: DashboardSignals) -> Self {
        let dashboard = dashboard.clone();
        let context = create_memo(move |_| {
            dashboard.theme_context(signals.ui.with(|state| state.active_theme()))
        });
        Self { context, signals }
    }

    pub fn theme(&self) -> ThemeId {
        self.context.with(|ctx| ctx.theme())
    }

    pub fn toggle_label(&self) -> String {
        self.context.with(|ctx| ctx.toggle_label())
    }

    pub fn toggle(&self) {
        let next = self.context.with_untracked(|ctx| ctx.toggle().theme());
        web_sys::console::log_1(&format!("Switching theme to: {}", next).into());
        self.signals.dispatch(Interaction::ToggleTheme);
    }
}

/// Initial state from build-time settings
pub fn initial_state_from(
    theme: Option<&str>,
    exit_policy: Option<&str>,
) -> DashboardResult<UiState> {
    let theme: ThemeId = theme.map(str::parse).transpose()?.unwrap_or_default();
    let exit_policy: ModeExitPolicy = exit_policy.map(str::parse).transpose()?.unwrap_or_default();
    Ok(UiState::new(theme, ViewMode::Body, exit_policy))
}
