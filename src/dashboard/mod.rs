//! Dashboard
//!
//! Page layout, chart callbacks and the registry that wires them together.
//!
//! ## Components
//!
//! - **Layout**: static page description and its HTML rendering
//! - **Callbacks**: success pie chart, payload scatter chart
//! - **Registry**: output id -> callback, with declared input ids
//! - **State**: the (site, payload range) pair every callback reads

mod error;
pub mod figure;
pub mod layout;
pub mod page;
pub mod proportion;
pub mod registry;
pub mod scatter;
pub mod state;

pub use error::{DashboardError, DashboardResult};
pub use figure::{Figure, Trace};
pub use layout::{
    DashboardLayout, PAYLOAD_SLIDER_ID, PIE_CHART_ID, SCATTER_CHART_ID, SITE_DROPDOWN_ID,
};
pub use page::render_html;
pub use proportion::success_pie_chart;
pub use registry::{CallbackRegistry, Dependency};
pub use scatter::payload_scatter_chart;
pub use state::DashboardState;

use crate::dataset::Dataset;

/// Compare the dropdown's fixed site list against the loaded data
///
/// Sites offered without records will render the empty placeholder pie;
/// sites in the data but not offered can't be selected individually.
pub fn check_site_coverage(layout: &DashboardLayout, dataset: &Dataset) {
    let counts = dataset.site_counts();
    let offered = layout.site_options();

    for site in &offered {
        if !counts.contains_key(site) {
            tracing::warn!(site = %site, "Dropdown site has no launch records");
        }
    }

    for site in counts.keys() {
        if !offered.contains(site) {
            tracing::warn!(site = %site, "Launch site in dataset is not offered by the dropdown");
        }
    }
}
