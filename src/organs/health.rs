//! Health status and the metric derived from it

use serde::{Deserialize, Serialize};
use std::fmt;

/// Qualitative health of an organ
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum HealthStatus {
    Good,
    Moderate,
    Weak,
    #[default]
    #[serde(other)]
    Unknown,
}

impl HealthStatus {
    /// Parse free-form status text. Never fails: anything unrecognised,
    /// including the empty string, is `Unknown`.
    pub fn parse(s: &str) -> HealthStatus {
        match s.trim().to_ascii_lowercase().as_str() {
            "good" => HealthStatus::Good,
            "moderate" => HealthStatus::Moderate,
            "weak" => HealthStatus::Weak,
            _ => HealthStatus::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            HealthStatus::Good => "good",
            HealthStatus::Moderate => "moderate",
            HealthStatus::Weak => "weak",
            HealthStatus::Unknown => "unknown",
        }
    }

    /// Capitalized status text shown under the meter
    pub fn label(&self) -> &'static str {
        match self {
            HealthStatus::Good => "Good",
            HealthStatus::Moderate => "Moderate",
            HealthStatus::Weak => "Weak",
            HealthStatus::Unknown => "Unknown",
        }
    }
}

impl fmt::Display for HealthStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// Meter bar color
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum MeterColor {
    Green,
    Orange,
    Red,
    Gray,
}

impl MeterColor {
    /// CSS color keyword
    pub fn css(&self) -> &'static str {
        match self {
            MeterColor::Green => "green",
            MeterColor::Orange => "orange",
            MeterColor::Red => "red",
            MeterColor::Gray => "gray",
        }
    }
}

impl fmt::Display for MeterColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.css())
    }
}

/// Value (0-100) and color shown by the health meter
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct HealthMetric {
    pub value: u8,
    pub color: MeterColor,
}

impl HealthMetric {
    /// Bar width as a CSS percentage
    pub fn bar_width(&self) -> String {
        format!("{}%", self.value)
    }
}

/// Metric for a health status
pub fn metric_for(status: HealthStatus) -> HealthMetric {
    let (value, color) = match status {
        HealthStatus::Good => (80, MeterColor::Green),
        HealthStatus::Moderate => (50, MeterColor::Orange),
        HealthStatus::Weak => (20, MeterColor::Red),
        HealthStatus::Unknown => (0, MeterColor::Gray),
    };
    HealthMetric { value, color }
}
