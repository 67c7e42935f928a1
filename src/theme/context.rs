//! Theme context
//!
//! The value handed down to every view that needs colors or images. It is
//! rebuilt from the theme id rather than mutated, so one render always reads
//! a single consistent bundle.

use std::fmt;
use std::sync::Arc;

use super::registry::{ThemeBundle, ThemeId, ThemeRegistry};

/// Active theme id plus the registry it resolves against
#[derive(Clone)]
pub struct ThemeContext {
    registry: Arc<ThemeRegistry>,
    theme: ThemeId,
}

impl ThemeContext {
    pub fn new(registry: Arc<ThemeRegistry>, theme: ThemeId) -> Self {
        Self { registry, theme }
    }

    pub fn theme(&self) -> ThemeId {
        self.theme
    }

    /// Bundle for the active theme
    pub fn bundle(&self) -> &ThemeBundle {
        self.registry.resolve(self.theme)
    }

    /// Context for the other theme
    pub fn toggle(&self) -> ThemeContext {
        let next = self.theme.toggle();
        tracing::debug!(theme = %next, "Switching theme");
        Self::new(Arc::clone(&self.registry), next)
    }

    /// Label for the toggle control, naming the theme it switches to
    pub fn toggle_label(&self) -> String {
        format!("Switch to {} Theme", self.theme.toggle().label())
    }

    /// Class applied to the outermost container
    pub fn container_class(&self) -> String {
        format!("app-container {}-theme", self.theme)
    }
}

impl PartialEq for ThemeContext {
    fn eq(&self, other: &Self) -> bool {
        self.theme == other.theme && Arc::ptr_eq(&self.registry, &other.registry)
    }
}

impl fmt::Debug for ThemeContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ThemeContext")
            .field("theme", &self.theme)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_recomputes_bundle() {
        let registry = Arc::new(ThemeRegistry::default());
        let ctx = ThemeContext::new(Arc::clone(&registry), ThemeId::Dark);

        assert_eq!(ctx.bundle().id, ThemeId::Dark);
        assert_eq!(ctx.toggle_label(), "Switch to Light Theme");
        assert_eq!(ctx.container_class(), "app-container dark-theme");

        let toggled = ctx.toggle();
        assert_eq!(toggled.theme(), ThemeId::Light);
        assert_eq!(toggled.bundle().id, ThemeId::Light);
        assert_eq!(toggled.toggle_label(), "Switch to Dark Theme");

        // Toggling leaves the source context unchanged
        assert_eq!(ctx.theme(), ThemeId::Dark);
        assert_eq!(toggled.toggle(), ctx);
    }
}
