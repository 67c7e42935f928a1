//! Organ catalog
//!
//! Static, ordered list of organs that can be overlaid on the body image.
//! Catalog order is display order.

use serde::Serialize;
use std::collections::HashSet;

use super::health::{metric_for, HealthMetric, HealthStatus};
use crate::error::{DashboardError, DashboardResult};

/// Offset inside the body container, in percent
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Position {
    pub top: f32,
    pub left: f32,
}

/// Overlay size relative to the body container, in percent
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

/// Static metadata for one overlay-able body region
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OrganDescriptor {
    pub id: &'static str,
    pub name: &'static str,
    pub position: Position,
    pub size: Size,
    pub status: HealthStatus,
}

impl OrganDescriptor {
    pub fn metric(&self) -> HealthMetric {
        metric_for(self.status)
    }
}

// Positions are tuned against the body_plain images.
const LAYERED_ORGANS: [OrganDescriptor; 1] = [OrganDescriptor {
    id: "lungs",
    name: "Lungs",
    position: Position {
        top: 16.0,
        left: 25.0,
    },
    size: Size {
        width: 50.0,
        height: 18.0,
    },
    status: HealthStatus::Weak,
}];

/// Ordered organ collection with unique ids
#[derive(Debug, Clone, PartialEq)]
pub struct OrganCatalog {
    organs: Vec<OrganDescriptor>,
}

impl OrganCatalog {
    /// Build a catalog, rejecting duplicate ids
    pub fn new(organs: Vec<OrganDescriptor>) -> DashboardResult<Self> {
        let mut seen = HashSet::new();
        for organ in &organs {
            if !seen.insert(organ.id) {
                return Err(DashboardError::DuplicateOrgan(organ.id.to_string()));
            }
        }
        Ok(Self { organs })
    }

    /// The catalog shipped with the dashboard
    pub fn builtin() -> Self {
        Self {
            organs: LAYERED_ORGANS.to_vec(),
        }
    }

    /// Find an organ by id. Absence is an ordinary outcome (nothing
    /// selected, or a stale id).
    pub fn lookup(&self, id: &str) -> Option<&OrganDescriptor> {
        self.organs.iter().find(|organ| organ.id == id)
    }

    /// Lookup followed by metric resolution
    pub fn metric_for_id(&self, id: &str) -> Option<HealthMetric> {
        self.lookup(id).map(OrganDescriptor::metric)
    }

    pub fn iter(&self) -> impl Iterator<Item = &OrganDescriptor> {
        self.organs.iter()
    }

    pub fn len(&self) -> usize {
        self.organs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.organs.is_empty()
    }
}

impl Default for OrganCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}
