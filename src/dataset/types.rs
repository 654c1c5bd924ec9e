//! Core data types for the launch dataset
//!
//! - `LaunchRecord`: one row of the launch records file
//! - `OutcomeClass`: binary launch outcome
//! - `PayloadBounds`: global payload range computed at load time

use serde::{Deserialize, Serialize};

/// Dropdown sentinel meaning "every launch site"
pub const ALL_SITES: &str = "ALL";

/// Launch sites offered by the site dropdown, in display order
pub const LAUNCH_SITES: [&str; 4] = ["CCAFS LC-40", "VAFB SLC-4E", "KSC LC-39A", "CCAFS SLC-40"];

/// A single launch record
///
/// Field names map onto the column headers of the launch records file;
/// any other columns in the file are ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LaunchRecord {
    /// Launch site name
    #[serde(rename = "Launch Site")]
    pub launch_site: String,
    /// Payload mass in kilograms
    #[serde(rename = "Payload Mass (kg)")]
    pub payload_mass_kg: f64,
    /// Booster hardware generation, e.g. "v1.1" or "FT"
    #[serde(rename = "Booster Version Category")]
    pub booster_version_category: String,
    /// Launch outcome
    #[serde(rename = "class")]
    pub class: OutcomeClass,
}

impl LaunchRecord {
    pub fn new(
        launch_site: impl Into<String>,
        payload_mass_kg: f64,
        booster_version_category: impl Into<String>,
        class: OutcomeClass,
    ) -> Self {
        Self {
            launch_site: launch_site.into(),
            payload_mass_kg,
            booster_version_category: booster_version_category.into(),
            class,
        }
    }

    /// Check the invariants serde can't express
    pub fn validate(&self) -> Result<(), String> {
        if !self.payload_mass_kg.is_finite() {
            return Err(format!(
                "payload mass must be finite, got {}",
                self.payload_mass_kg
            ));
        }
        if self.payload_mass_kg < 0.0 {
            return Err(format!(
                "payload mass must be >= 0, got {}",
                self.payload_mass_kg
            ));
        }
        if self.launch_site.trim().is_empty() {
            return Err("launch site is empty".to_string());
        }
        Ok(())
    }
}

/// Binary launch outcome, stored as 0 / 1 in the file
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(try_from = "u8", into = "u8")]
pub enum OutcomeClass {
    Failure,
    Success,
}

impl OutcomeClass {
    /// Numeric value used for means and chart axes
    pub fn value(self) -> u8 {
        match self {
            OutcomeClass::Failure => 0,
            OutcomeClass::Success => 1,
        }
    }

    pub fn is_success(self) -> bool {
        self == OutcomeClass::Success
    }
}

impl TryFrom<u8> for OutcomeClass {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(OutcomeClass::Failure),
            1 => Ok(OutcomeClass::Success),
            other => Err(format!("outcome class must be 0 or 1, got {}", other)),
        }
    }
}

impl From<OutcomeClass> for u8 {
    fn from(class: OutcomeClass) -> Self {
        class.value()
    }
}

impl std::fmt::Display for OutcomeClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// Minimum and maximum payload mass over the whole dataset
#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct PayloadBounds {
    pub min: f64,
    pub max: f64,
}

impl PayloadBounds {
    /// Compute bounds over a set of records, `None` if there are none
    pub fn from_records(records: &[LaunchRecord]) -> Option<Self> {
        let mut iter = records.iter().map(|r| r.payload_mass_kg);
        let first = iter.next()?;
        let (min, max) = iter.fold((first, first), |(lo, hi), v| (lo.min(v), hi.max(v)));
        Some(Self { min, max })
    }
}

impl std::fmt::Display for PayloadBounds {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{} kg, {} kg]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outcome_class_conversion() {
        assert_eq!(OutcomeClass::try_from(0), Ok(OutcomeClass::Failure));
        assert_eq!(OutcomeClass::try_from(1), Ok(OutcomeClass::Success));
        assert!(OutcomeClass::try_from(2).is_err());
        assert_eq!(u8::from(OutcomeClass::Success), 1);
        assert_eq!(OutcomeClass::Failure.to_string(), "0");
    }

    #[test]
    fn test_record_validation() {
        let ok = LaunchRecord::new("KSC LC-39A", 3000.0, "FT", OutcomeClass::Success);
        assert!(ok.validate().is_ok());

        let negative = LaunchRecord::new("KSC LC-39A", -1.0, "FT", OutcomeClass::Success);
        assert!(negative.validate().is_err());

        let nan = LaunchRecord::new("KSC LC-39A", f64::NAN, "FT", OutcomeClass::Success);
        assert!(nan.validate().is_err());

        let no_site = LaunchRecord::new("  ", 10.0, "FT", OutcomeClass::Failure);
        assert!(no_site.validate().is_err());
    }

    #[test]
    fn test_payload_bounds() {
        assert_eq!(PayloadBounds::from_records(&[]), None);

        let records = vec![
            LaunchRecord::new("A", 500.0, "v1", OutcomeClass::Success),
            LaunchRecord::new("A", 9000.0, "v2", OutcomeClass::Failure),
            LaunchRecord::new("B", 0.0, "v1", OutcomeClass::Success),
        ];
        let bounds = PayloadBounds::from_records(&records).unwrap();
        assert_eq!(bounds.min, 0.0);
        assert_eq!(bounds.max, 9000.0);
    }
}
