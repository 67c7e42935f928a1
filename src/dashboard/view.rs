//! The composing dashboard view
//!
//! Holds the shared read-only collaborators (theme registry, organ catalog,
//! patient) and derives frames from whatever state snapshot it is given.
//! The state itself stays with the caller.

use chrono::NaiveDate;
use std::sync::Arc;

use super::frame::DashboardFrame;
use super::state::UiState;
use crate::assets::AssetBase;
use crate::organs::OrganCatalog;
use crate::patient::PatientProfile;
use crate::theme::{ThemeContext, ThemeId, ThemeRegistry};

#[derive(Debug, Clone)]
pub struct Dashboard {
    registry: Arc<ThemeRegistry>,
    catalog: Arc<OrganCatalog>,
    patient: PatientProfile,
}

impl Dashboard {
    pub fn new(registry: ThemeRegistry, catalog: OrganCatalog, patient: PatientProfile) -> Self {
        Self {
            registry: Arc::new(registry),
            catalog: Arc::new(catalog),
            patient,
        }
    }

    /// Built-in catalog and default patient, assets under `assets`
    pub fn with_assets(assets: AssetBase) -> Self {
        Self::new(
            ThemeRegistry::new(assets),
            OrganCatalog::builtin(),
            PatientProfile::default(),
        )
    }

    pub fn registry(&self) -> &ThemeRegistry {
        &self.registry
    }

    pub fn catalog(&self) -> &OrganCatalog {
        &self.catalog
    }

    pub fn patient(&self) -> &PatientProfile {
        &self.patient
    }

    /// Theme context for a theme id, sharing this dashboard's registry
    pub fn theme_context(&self, theme: ThemeId) -> ThemeContext {
        ThemeContext::new(Arc::clone(&self.registry), theme)
    }

    /// Frame for `state`, computing the patient's age on `today`
    pub fn frame(&self, state: &UiState, today: NaiveDate) -> DashboardFrame {
        let theme = self.theme_context(state.active_theme());
        DashboardFrame::derive(
            state,
            &theme,
            &self.catalog,
            self.patient.details_line(today),
        )
    }
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::with_assets(AssetBase::default())
    }
}
