//! SpaceX Dash server
//!
//! Run with: cargo run --bin spacex-dash
//!
//! Loads `spacex_launch_dash.csv` from the working directory and serves the
//! dashboard on http://127.0.0.1:8050. See [`spacex_dash::config`] for the
//! optional config file and environment overrides:
//! - `SPACEX_DASH_DATASET`: Launch records file
//! - `SPACEX_DASH_HOST` / `SPACEX_DASH_PORT`: Bind address
//! - `SPACEX_DASH_LOG_LEVEL` / `SPACEX_DASH_LOG_FORMAT`: Logging
//! - `RUST_LOG`: Log filter, overrides the configured level

use spacex_dash::api::{serve, AppState};
use spacex_dash::config::{Config, LoggingConfig};
use spacex_dash::dashboard::check_site_coverage;
use spacex_dash::dataset::DatasetLoader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Config lookup logs nothing until tracing is up, so read it first
    let config = Config::load_default()?;
    init_tracing(&config.logging);

    tracing::info!("Starting SpaceX Dash v{}", env!("CARGO_PKG_VERSION"));
    tracing::info!("Dataset: {:?}", config.dataset.path);

    // Dataset problems are fatal: nothing to serve without it
    let loader = DatasetLoader::new().with_delimiter(config.dataset.delimiter_byte()?);
    let dataset = match loader.load(&config.dataset.path) {
        Ok(dataset) => dataset,
        Err(e) => {
            tracing::error!("Failed to load dataset: {}", e);
            return Err(e.into());
        }
    };

    let state = AppState::new(dataset, config.server.clone());
    check_site_coverage(&state.layout, &state.dataset);

    serve(state, &config.server).await?;

    tracing::info!("SpaceX Dash stopped");
    Ok(())
}

/// Initialize the tracing subscriber; `RUST_LOG` wins over the config level
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&logging.level));

    let registry = tracing_subscriber::registry().with(filter);

    if logging.is_json() {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}
