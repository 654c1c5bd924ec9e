//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.
//! With no config file and no overrides, the defaults read
//! `spacex_launch_dash.csv` from the working directory and serve on
//! `127.0.0.1:8050`.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub dataset: DatasetConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Launch records file configuration
#[derive(Debug, Clone, Deserialize)]
pub struct DatasetConfig {
    #[serde(default = "default_dataset_path")]
    pub path: PathBuf,

    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

fn default_dataset_path() -> PathBuf {
    PathBuf::from("spacex_launch_dash.csv")
}

fn default_delimiter() -> char {
    ','
}

impl Default for DatasetConfig {
    fn default() -> Self {
        Self {
            path: default_dataset_path(),
            delimiter: default_delimiter(),
        }
    }
}

impl DatasetConfig {
    /// Delimiter as the single byte the CSV reader expects
    pub fn delimiter_byte(&self) -> Result<u8, ConfigError> {
        u8::try_from(self.delimiter)
            .ok()
            .filter(u8::is_ascii)
            .ok_or(ConfigError::InvalidValue {
                key: "dataset.delimiter",
                value: self.delimiter.to_string(),
            })
    }
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8050
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Create config with custom host and port
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
        }
    }

    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "spacex_dash=info,tower_http=debug".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::from_toml(&content).map_err(|e| match e {
            ConfigError::Parse { error, .. } => ConfigError::Parse {
                path: path.to_path_buf(),
                error,
            },
            other => other,
        })
    }

    /// Parse configuration from TOML text
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse {
            path: PathBuf::new(),
            error: e.to_string(),
        })
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load from default locations or environment
    ///
    /// A config file that exists but fails to load is an error; it is not
    /// silently replaced by defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        for path in Self::default_paths() {
            if path.exists() {
                let config = Self::load_with_env(&path)?;
                tracing::info!("Loaded config from {:?}", path);
                return Ok(config);
            }
        }

        tracing::info!("Using default config with environment overrides");
        Ok(Self::from_env())
    }

    /// Config file locations, in lookup order
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("spacex-dash").join("config.toml"));
        }
        paths.push(PathBuf::from("./spacex-dash.toml"));
        paths
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Apply overrides from any key lookup
    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        // Dataset overrides
        if let Some(path) = lookup("SPACEX_DASH_DATASET") {
            self.dataset.path = PathBuf::from(path);
        }

        // Server overrides
        if let Some(host) = lookup("SPACEX_DASH_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("SPACEX_DASH_PORT") {
            match port.parse() {
                Ok(p) => self.server.port = p,
                Err(_) => tracing::warn!("Ignoring invalid SPACEX_DASH_PORT: {}", port),
            }
        }

        // Logging overrides
        if let Some(level) = lookup("SPACEX_DASH_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("SPACEX_DASH_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid value for {key}: {value:?}")]
    InvalidValue { key: &'static str, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# SpaceX Dash Configuration
#
# Environment variables override these settings:
# - SPACEX_DASH_DATASET
# - SPACEX_DASH_HOST
# - SPACEX_DASH_PORT
# - SPACEX_DASH_LOG_LEVEL
# - SPACEX_DASH_LOG_FORMAT

[dataset]
# Launch records file, relative to the working directory
path = "spacex_launch_dash.csv"

# Field delimiter (single ASCII character)
delimiter = ","

[server]
# Dashboard host
host = "127.0.0.1"

# Dashboard port
port = 8050

[logging]
# Log filter, e.g. "info" or "spacex_dash=debug,tower_http=info"
# RUST_LOG takes precedence when set
level = "spacex_dash=info,tower_http=debug"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
