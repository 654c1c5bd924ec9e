//! Dashboard UI state
//!
//! The whole page has one implicit state: the selected site and the selected
//! payload range. Every dropdown or slider event replaces it.

use serde::Serialize;

use crate::dataset::{Dataset, PayloadRange, SiteSelection};

/// Current value of every input component
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardState {
    pub site: SiteSelection,
    pub payload_range: PayloadRange,
}

impl DashboardState {
    pub fn new(site: SiteSelection, payload_range: PayloadRange) -> Self {
        Self {
            site,
            payload_range,
        }
    }

    /// State on page load: every site, full payload range of the dataset
    pub fn initial(dataset: &Dataset) -> Self {
        Self {
            site: SiteSelection::All,
            payload_range: dataset.bounds().into(),
        }
    }

    /// Replace the site, keeping the range
    pub fn with_site(mut self, site: SiteSelection) -> Self {
        self.site = site;
        self
    }

    /// Replace the range, keeping the site
    pub fn with_payload_range(mut self, payload_range: PayloadRange) -> Self {
        self.payload_range = payload_range;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_support::scenario_dataset;

    #[test]
    fn test_initial_state() {
        let dataset = scenario_dataset();
        let state = DashboardState::initial(&dataset);

        assert!(state.site.is_all());
        assert_eq!(state.payload_range.low(), 500.0);
        assert_eq!(state.payload_range.high(), 9000.0);
    }

    #[test]
    fn test_transitions_keep_other_input() {
        let dataset = scenario_dataset();
        let range = PayloadRange::new(1000.0, 2000.0).unwrap();

        let state = DashboardState::initial(&dataset)
            .with_site(SiteSelection::parse("KSC LC-39A"))
            .with_payload_range(range);

        assert_eq!(state.site, SiteSelection::parse("KSC LC-39A"));
        assert_eq!(state.payload_range, range);
    }
}
