//! Launch dataset
//!
//! The launch records are loaded once at startup and never mutated. Both
//! chart callbacks read from the same `Dataset` through a shared `Arc`.
//!
//! ## Components
//!
//! - **Types**: `LaunchRecord`, `OutcomeClass`, `PayloadBounds`
//! - **Loader**: CSV reader with header-name column mapping and validation
//! - **Filters**: `SiteSelection` and `PayloadRange`

mod error;
mod filter;
mod loader;
mod types;

pub use error::{DatasetError, DatasetResult};
pub use filter::{InvalidPayloadRange, PayloadRange, SiteSelection};
pub use loader::DatasetLoader;
pub use types::{LaunchRecord, OutcomeClass, PayloadBounds, ALL_SITES, LAUNCH_SITES};

use std::collections::BTreeMap;
use std::path::Path;

/// Read-only collection of launch records plus their payload bounds
#[derive(Debug, Clone)]
pub struct Dataset {
    records: Vec<LaunchRecord>,
    bounds: PayloadBounds,
}

impl Dataset {
    /// Load a comma-delimited file with a header row
    pub fn load(path: impl AsRef<Path>) -> DatasetResult<Self> {
        DatasetLoader::new().load(path.as_ref())
    }

    /// Build a dataset from already-parsed records
    ///
    /// Every record is validated; the first invalid one is reported with its
    /// 1-based position.
    pub fn from_records(records: Vec<LaunchRecord>) -> DatasetResult<Self> {
        for (idx, record) in records.iter().enumerate() {
            record.validate().map_err(|reason| DatasetError::InvalidRecord {
                line: idx as u64 + 1,
                reason,
            })?;
        }

        let bounds = PayloadBounds::from_records(&records).ok_or(DatasetError::Empty)?;

        Ok(Self { records, bounds })
    }

    pub fn records(&self) -> &[LaunchRecord] {
        &self.records
    }

    /// Global payload bounds computed at load time
    pub fn bounds(&self) -> PayloadBounds {
        self.bounds
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Records matching a site and, optionally, an inclusive payload range
    ///
    /// Iteration preserves file order.
    pub fn filter<'a>(
        &'a self,
        site: &'a SiteSelection,
        range: Option<PayloadRange>,
    ) -> impl Iterator<Item = &'a LaunchRecord> + 'a {
        self.records.iter().filter(move |r| {
            site.matches(&r.launch_site)
                && range.map_or(true, |range| range.contains(r.payload_mass_kg))
        })
    }

    /// Number of records per launch site, sorted by site name
    pub fn site_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for record in &self.records {
            *counts.entry(record.launch_site.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Distinct launch sites, sorted by name
    pub fn sites(&self) -> Vec<&str> {
        self.site_counts().into_keys().collect()
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;

    /// The four-record scenario used across the chart tests
    pub fn scenario_dataset() -> Dataset {
        Dataset::from_records(vec![
            LaunchRecord::new("CCAFS LC-40", 500.0, "v1", OutcomeClass::Success),
            LaunchRecord::new("CCAFS LC-40", 9000.0, "v2", OutcomeClass::Failure),
            LaunchRecord::new("KSC LC-39A", 3000.0, "v1", OutcomeClass::Success),
            LaunchRecord::new("VAFB SLC-4E", 7000.0, "v2", OutcomeClass::Failure),
        ])
        .expect("scenario records are valid")
    }
}
