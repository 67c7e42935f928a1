//! Organs
//!
//! - **catalog**: organ descriptors and id lookup
//! - **health**: health status and the derived meter metric

pub mod catalog;
pub mod health;

pub use catalog::{OrganCatalog, OrganDescriptor, Position, Size};
pub use health::{metric_for, HealthMetric, HealthStatus, MeterColor};
