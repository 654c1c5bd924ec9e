//! Data Transfer Objects
//!
//! Request and response types for the API endpoints.
//! These types are serialized/deserialized to/from JSON.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::dashboard::{DashboardLayout, Dependency, Figure};
use crate::dataset::PayloadBounds;

// ============================================
// UPDATE DTOs
// ============================================

/// Callback dispatch request
#[derive(Debug, Default, Deserialize)]
pub struct UpdateRequest {
    /// Current input values
    #[serde(default)]
    pub state: StateDto,
    /// Outputs to recompute; takes precedence over `triggered_by`
    #[serde(default)]
    pub outputs: Option<Vec<String>>,
    /// Input component that changed
    #[serde(default)]
    pub triggered_by: Option<String>,
}

/// Input values as sent by the page
#[derive(Debug, Default, Deserialize)]
pub struct StateDto {
    /// Dropdown value, defaults to "ALL"
    #[serde(default)]
    pub site: Option<String>,
    /// Slider value [low, high], defaults to the dataset's payload bounds
    #[serde(default)]
    pub payload_range: Option<[f64; 2]>,
}

/// Callback dispatch response
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    /// Output id -> figure
    pub figures: BTreeMap<String, Figure>,
}

// ============================================
// LAYOUT DTOs
// ============================================

/// Page layout plus callback wiring
#[derive(Debug, Serialize)]
pub struct LayoutResponse {
    pub layout: DashboardLayout,
    pub dependencies: Vec<Dependency>,
}

// ============================================
// DATASET DTOs
// ============================================

/// Loaded dataset summary
#[derive(Debug, Serialize)]
pub struct DatasetSummary {
    pub records: usize,
    pub successes: usize,
    pub payload_bounds: PayloadBounds,
    pub sites: Vec<SiteSummary>,
}

#[derive(Debug, Serialize)]
pub struct SiteSummary {
    pub site: String,
    pub launches: usize,
    pub successes: usize,
    pub success_rate: f64,
}

// ============================================
// HEALTH DTOs
// ============================================

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Overall status: healthy, unhealthy
    pub status: String,
    /// Dataset status: ok, empty
    pub dataset: String,
    /// Number of loaded records
    pub records: usize,
    /// Server uptime in seconds
    pub uptime_seconds: u64,
    /// Version string
    pub version: String,
}
