//! # SpaceX Dash
//!
//! Interactive dashboard over SpaceX launch records: a site dropdown and a
//! payload range slider drive a success pie chart and a payload vs. outcome
//! scatter chart.
//!
//! ## Modules
//!
//! - [`dataset`]: Launch records, loader and filters
//! - [`dashboard`]: Layout, chart callbacks and the callback registry
//! - [`api`]: HTTP server with Axum
//! - [`config`]: TOML configuration with environment overrides
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use spacex_dash::dashboard::{payload_scatter_chart, success_pie_chart};
//! use spacex_dash::dataset::{Dataset, PayloadRange, SiteSelection};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let dataset = Dataset::load("spacex_launch_dash.csv")?;
//!
//!     // Success rate per launch site
//!     let pie = success_pie_chart(&dataset, &SiteSelection::All);
//!     println!("{}", pie.title());
//!
//!     // Launches from one site with payloads between 2 and 6 tonnes
//!     let site = SiteSelection::parse("KSC LC-39A");
//!     let scatter = payload_scatter_chart(&dataset, &site, PayloadRange::new(2000.0, 6000.0)?);
//!     println!("{} points", scatter.point_count());
//!
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod config;
pub mod dashboard;
pub mod dataset;

// Re-export top-level types for convenience
pub use dataset::{
    Dataset, DatasetError, DatasetLoader, DatasetResult, LaunchRecord, OutcomeClass,
    PayloadBounds, PayloadRange, SiteSelection,
};

pub use dashboard::{
    CallbackRegistry, DashboardError, DashboardLayout, DashboardState, Figure,
};

pub use api::{build_router, serve, ApiError, AppState};

pub use config::{Config, ConfigError, DatasetConfig, LoggingConfig, ServerConfig};
