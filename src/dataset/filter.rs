//! Record filters
//!
//! The two predicates the dashboard filters by: launch site and an inclusive
//! payload range.

use super::types::ALL_SITES;
use serde::{Deserialize, Serialize};

/// Site dropdown value: every site, or one named site
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SiteSelection {
    #[default]
    All,
    Site(String),
}

impl SiteSelection {
    /// Parse a dropdown value; `"ALL"` is the sentinel for every site
    pub fn parse(value: &str) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value.to_string())
        }
    }

    /// Whether a record from `site` passes this filter
    pub fn matches(&self, site: &str) -> bool {
        match self {
            SiteSelection::All => true,
            SiteSelection::Site(selected) => selected == site,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, SiteSelection::All)
    }
}

impl From<String> for SiteSelection {
    fn from(value: String) -> Self {
        if value == ALL_SITES {
            SiteSelection::All
        } else {
            SiteSelection::Site(value)
        }
    }
}

impl From<&str> for SiteSelection {
    fn from(value: &str) -> Self {
        Self::parse(value)
    }
}

impl From<SiteSelection> for String {
    fn from(selection: SiteSelection) -> Self {
        match selection {
            SiteSelection::All => ALL_SITES.to_string(),
            SiteSelection::Site(site) => site,
        }
    }
}

impl std::fmt::Display for SiteSelection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SiteSelection::All => write!(f, "{}", ALL_SITES),
            SiteSelection::Site(site) => write!(f, "{}", site),
        }
    }
}

/// Inclusive payload mass range in kilograms
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(into = "[f64; 2]")]
pub struct PayloadRange {
    low: f64,
    high: f64,
}

/// Rejected payload range
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("Invalid payload range [{low}, {high}]: bounds must be finite with low <= high")]
pub struct InvalidPayloadRange {
    pub low: f64,
    pub high: f64,
}

impl PayloadRange {
    /// Create a range; both ends must be finite and `low <= high`
    pub fn new(low: f64, high: f64) -> Result<Self, InvalidPayloadRange> {
        if !low.is_finite() || !high.is_finite() || low > high {
            return Err(InvalidPayloadRange { low, high });
        }
        Ok(Self { low, high })
    }

    pub fn low(&self) -> f64 {
        self.low
    }

    pub fn high(&self) -> f64 {
        self.high
    }

    /// Inclusive containment check
    pub fn contains(&self, payload_mass_kg: f64) -> bool {
        payload_mass_kg >= self.low && payload_mass_kg <= self.high
    }
}

impl From<PayloadRange> for [f64; 2] {
    fn from(range: PayloadRange) -> Self {
        [range.low, range.high]
    }
}

impl From<super::PayloadBounds> for PayloadRange {
    fn from(bounds: super::PayloadBounds) -> Self {
        Self {
            low: bounds.min,
            high: bounds.max,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_selection_parse() {
        assert_eq!(SiteSelection::parse("ALL"), SiteSelection::All);
        assert_eq!(
            SiteSelection::parse("KSC LC-39A"),
            SiteSelection::Site("KSC LC-39A".to_string())
        );
        // The sentinel is case sensitive, same as the dropdown value
        assert!(!SiteSelection::parse("all").is_all());
    }

    #[test]
    fn test_site_selection_matches() {
        assert!(SiteSelection::All.matches("VAFB SLC-4E"));
        let ksc = SiteSelection::parse("KSC LC-39A");
        assert!(ksc.matches("KSC LC-39A"));
        assert!(!ksc.matches("VAFB SLC-4E"));
    }

    #[test]
    fn test_site_selection_serde() {
        let json = serde_json::to_string(&SiteSelection::All).unwrap();
        assert_eq!(json, r#""ALL""#);

        let site: SiteSelection = serde_json::from_str(r#""CCAFS LC-40""#).unwrap();
        assert_eq!(site, SiteSelection::Site("CCAFS LC-40".to_string()));
    }

    #[test]
    fn test_payload_range_is_inclusive() {
        let range = PayloadRange::new(1000.0, 5000.0).unwrap();
        assert!(range.contains(1000.0));
        assert!(range.contains(5000.0));
        assert!(range.contains(2500.5));
        assert!(!range.contains(999.9));
        assert!(!range.contains(5000.1));
    }

    #[test]
    fn test_payload_range_accepts_non_step_values() {
        let range = PayloadRange::new(1234.5, 1234.5).unwrap();
        assert!(range.contains(1234.5));
    }

    #[test]
    fn test_payload_range_rejects_invalid() {
        assert!(PayloadRange::new(5000.0, 1000.0).is_err());
        assert!(PayloadRange::new(f64::NAN, 1000.0).is_err());
        assert!(PayloadRange::new(0.0, f64::INFINITY).is_err());
    }

    #[test]
    fn test_payload_range_serializes_as_pair() {
        let range = PayloadRange::new(0.0, 10000.0).unwrap();
        assert_eq!(serde_json::to_string(&range).unwrap(), "[0.0,10000.0]");
    }
}
