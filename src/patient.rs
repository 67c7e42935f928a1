//! Patient profile shown in the dashboard header

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, DashboardResult};

/// Demographics for the header line
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct PatientProfile {
    pub family_name: String,
    pub given_name: String,
    pub date_of_birth: NaiveDate,
    pub sex: String,
}

impl Default for PatientProfile {
    fn default() -> Self {
        Self {
            family_name: "Chron".to_string(),
            given_name: "Stark".to_string(),
            date_of_birth: NaiveDate::from_ymd_opt(1990, 8, 22).unwrap_or_default(),
            sex: "M".to_string(),
        }
    }
}

impl PatientProfile {
    /// Reject profiles with blank fields
    pub fn validate(&self) -> DashboardResult<()> {
        let fields = [
            ("family_name", &self.family_name),
            ("given_name", &self.given_name),
            ("sex", &self.sex),
        ];
        for (name, value) in fields {
            if value.trim().is_empty() {
                return Err(DashboardError::InvalidPatient(format!("{} is empty", name)));
            }
        }
        Ok(())
    }

    /// Age in whole years on `today`. Zero for birth dates in the future.
    pub fn age_on(&self, today: NaiveDate) -> u32 {
        let dob = self.date_of_birth;
        let mut age = today.year() - dob.year();
        if (today.month(), today.day()) < (dob.month(), dob.day()) {
            age -= 1;
        }
        age.max(0) as u32
    }

    /// `Chron, Stark | 08/22/1990 | 34 | M`
    pub fn details_line(&self, today: NaiveDate) -> String {
        format!(
            "{}, {} | {} | {} | {}",
            self.family_name,
            self.given_name,
            self.date_of_birth.format("%m/%d/%Y"),
            self.age_on(today),
            self.sex
        )
    }
}
