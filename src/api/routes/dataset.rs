//! Dataset Routes
//!
//! - GET /api/v1/dataset - Summary of the loaded launch records

use axum::{extract::State, Json};
use std::collections::BTreeMap;
use std::sync::Arc;

use crate::api::dto::{DatasetSummary, SiteSummary};
use crate::api::state::AppState;
use crate::dataset::Dataset;

/// GET /api/v1/dataset
pub async fn get_summary(State(state): State<Arc<AppState>>) -> Json<DatasetSummary> {
    Json(summarize(&state.dataset))
}

/// Record and success counts, overall and per site
pub fn summarize(dataset: &Dataset) -> DatasetSummary {
    // site -> (launches, successes)
    let mut per_site: BTreeMap<&str, (usize, usize)> = BTreeMap::new();
    for record in dataset.records() {
        let entry = per_site.entry(record.launch_site.as_str()).or_default();
        entry.0 += 1;
        if record.class.is_success() {
            entry.1 += 1;
        }
    }

    let sites: Vec<SiteSummary> = per_site
        .into_iter()
        .map(|(site, (launches, successes))| SiteSummary {
            site: site.to_string(),
            launches,
            successes,
            success_rate: successes as f64 / launches as f64,
        })
        .collect();

    DatasetSummary {
        records: dataset.len(),
        successes: sites.iter().map(|s| s.successes).sum(),
        payload_bounds: dataset.bounds(),
        sites,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::test_support::scenario_dataset;

    #[test]
    fn test_summarize() {
        let summary = summarize(&scenario_dataset());

        assert_eq!(summary.records, 4);
        assert_eq!(summary.successes, 2);
        assert_eq!(summary.sites.len(), 3);
        assert_eq!(summary.sites[0].site, "CCAFS LC-40");
        assert_eq!(summary.sites[0].launches, 2);
        assert_eq!(summary.sites[0].success_rate, 0.5);
        assert_eq!(summary.payload_bounds.max, 9000.0);
    }
}
