//! Configuration management.
//!
//! Settings are read from a TOML file and can be overridden with
//! `ARTICLE_QUERY_*` environment variables (nested keys are separated with
//! `__`, e.g. `ARTICLE_QUERY_API__HOST`).
//!
//! ```toml
//! [api]
//! host = "https://eventregistry.org"
//! timeout_secs = 30
//!
//! [pagination]
//! sort_by = "date"
//! sort_by_asc = false
//! max_items = 500
//!
//! [logging]
//! level = "debug"
//! ```

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::pagination::IterOptions;

/// Application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Service connection settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Defaults for paginated article retrieval
    #[serde(default)]
    pub pagination: PaginationConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Service connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the service
    #[serde(default = "default_host")]
    pub host: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,

    /// Custom user agent (defaults to `article-query/<version>`)
    #[serde(default)]
    pub user_agent: Option<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            timeout_secs: default_timeout(),
            user_agent: None,
        }
    }
}

fn default_host() -> String {
    "https://eventregistry.org".to_string()
}

fn default_timeout() -> u64 {
    30
}

/// Defaults for paginated article retrieval
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaginationConfig {
    /// Sort key sent as `articlesSortBy`
    #[serde(default = "default_sort_by")]
    pub sort_by: String,

    /// Ascending sort
    #[serde(default)]
    pub sort_by_asc: bool,

    /// Stop after this many articles (unbounded when unset)
    #[serde(default)]
    pub max_items: Option<usize>,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            sort_by: default_sort_by(),
            sort_by_asc: false,
            max_items: None,
        }
    }
}

fn default_sort_by() -> String {
    "rel".to_string()
}

impl From<&PaginationConfig> for IterOptions {
    fn from(config: &PaginationConfig) -> Self {
        IterOptions {
            sort_by: config.sort_by.clone(),
            sort_by_asc: config.sort_by_asc,
            max_items: config.max_items,
            ..IterOptions::default()
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Default level filter when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

/// Load configuration from a file, with environment overrides
pub fn load_config(path: &Path) -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(config::File::from(path))
        .add_source(env_source())
        .build()?;

    settings.try_deserialize()
}

/// Load configuration from environment variables only
pub fn get_config() -> Result<Config, config::ConfigError> {
    let settings = config::Config::builder()
        .add_source(env_source())
        .build()?;

    settings.try_deserialize()
}

/// `ARTICLE_QUERY_<SECTION>__<KEY>` overrides, e.g. `ARTICLE_QUERY_API__HOST`
fn env_source() -> config::Environment {
    config::Environment::with_prefix("ARTICLE_QUERY")
        .prefix_separator("_")
        .separator("__")
}

/// Find a configuration file in the default locations
///
/// Checks `./article-query.toml`, then `<config dir>/article-query/config.toml`.
pub fn find_config_file() -> Option<PathBuf> {
    let local = PathBuf::from("article-query.toml");
    if local.is_file() {
        return Some(local);
    }

    dirs::config_dir()
        .map(|dir| dir.join("article-query").join("config.toml"))
        .filter(|path| path.is_file())
}
