//! Application State
//!
//! Shared state accessible by all API handlers.
//! Wrapped in Arc for thread-safe sharing across async tasks. Nothing in
//! here is mutated after startup, so handlers need no locks.

use crate::config::ServerConfig;
use crate::dashboard::{render_html, CallbackRegistry, DashboardLayout, DashboardState};
use crate::dataset::Dataset;
use std::sync::Arc;
use std::time::Instant;

/// Shared application state for all handlers
#[derive(Clone)]
pub struct AppState {
    /// Launch records, loaded once at startup
    pub dataset: Arc<Dataset>,
    /// Static page description
    pub layout: Arc<DashboardLayout>,
    /// Rendered page, built once from `layout`
    pub page: Arc<String>,
    /// Chart callbacks keyed by output id
    pub callbacks: Arc<CallbackRegistry>,
    /// Server configuration
    pub config: Arc<ServerConfig>,
    /// Server start time for uptime tracking
    pub start_time: Instant,
}

impl AppState {
    /// Create an AppState with the standard dashboard callbacks
    pub fn new(dataset: Dataset, config: ServerConfig) -> Self {
        Self::with_callbacks(dataset, config, CallbackRegistry::dashboard())
    }

    /// Create an AppState with a custom callback registry
    pub fn with_callbacks(
        dataset: Dataset,
        config: ServerConfig,
        callbacks: CallbackRegistry,
    ) -> Self {
        let layout = DashboardLayout::build(dataset.bounds());
        let page = render_html(&layout);

        Self {
            dataset: Arc::new(dataset),
            layout: Arc::new(layout),
            page: Arc::new(page),
            callbacks: Arc::new(callbacks),
            config: Arc::new(config),
            start_time: Instant::now(),
        }
    }

    /// State the page starts in
    pub fn initial_state(&self) -> DashboardState {
        DashboardState::initial(&self.dataset)
    }

    /// Get server uptime in seconds
    pub fn uptime_seconds(&self) -> u64 {
        self.start_time.elapsed().as_secs()
    }
}
