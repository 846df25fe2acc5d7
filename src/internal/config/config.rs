// src/internal/config/config.rs

use std::collections::HashMap;

use config::{Config, ConfigError, Environment, File};
use serde::{Deserialize, Serialize};

// Version information from build script - using option_env! for safety
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version information
pub fn get_version_info() -> String {
    let build_timestamp = option_env!("VERGEN_BUILD_TIMESTAMP").unwrap_or("unknown");
    let build_date = option_env!("VERGEN_BUILD_DATE").unwrap_or("unknown");
    let rustc_semver = option_env!("VERGEN_RUSTC_SEMVER").unwrap_or("unknown");
    let cargo_target_triple = option_env!("VERGEN_CARGO_TARGET_TRIPLE").unwrap_or("unknown");

    format!(
        "lightning-logger version {} (facade {})\n\
         Built: {} ({})\n\
         Rust: {}\n\
         Target: {}",
        VERSION,
        crate::internal::facade::FACADE_VERSION,
        build_date,
        build_timestamp,
        rustc_semver,
        cargo_target_triple
    )
}

/// Remote logging backend endpoints
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_transaction_path")]
    pub transaction_path: String,
    #[serde(default = "default_log_path")]
    pub log_path: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub headers: HashMap<String, String>,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            transaction_path: default_transaction_path(),
            log_path: default_log_path(),
            timeout_secs: default_timeout_secs(),
            headers: HashMap::new(),
        }
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8080".to_string()
}
fn default_transaction_path() -> String {
    "/transactions".to_string()
}
fn default_log_path() -> String {
    "/logs".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}

/// Location the page context is captured from
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PageConfig {
    #[serde(default = "default_page_url")]
    pub url: String,
}

impl Default for PageConfig {
    fn default() -> Self {
        Self {
            url: default_page_url(),
        }
    }
}

fn default_page_url() -> String {
    "about:blank".to_string()
}

/// ConsoleKind selects where mirrored messages are written
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub enum ConsoleKind {
    #[serde(rename = "tracing")]
    #[default]
    Tracing,
    #[serde(rename = "std")]
    Std,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConsoleConfig {
    #[serde(default)]
    pub kind: ConsoleKind,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_true")]
    pub color: bool,
    #[serde(default)]
    pub output_path: Option<String>,
    #[serde(default)]
    pub append_to_file: bool,
    #[serde(default)]
    pub disable_console: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
            color: true,
            output_path: None,
            append_to_file: false,
            disable_console: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}
fn default_log_format() -> String {
    "compact".to_string()
}
fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub page: PageConfig,
    #[serde(default)]
    pub console: ConsoleConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load from the default file locations and the environment
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(None)
    }

    /// Load with an explicit config file taking precedence over the default locations
    pub fn load_from(path: Option<&str>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("backend.base_url", default_base_url())?
            .set_default("backend.transaction_path", default_transaction_path())?
            .set_default("backend.log_path", default_log_path())?
            .set_default("backend.timeout_secs", default_timeout_secs() as i64)?
            .set_default("page.url", default_page_url())?
            .set_default("console.kind", "tracing")?
            .set_default("logging.level", "info")?
            .set_default("logging.format", "compact")?
            .set_default("logging.color", true)?
            .add_source(File::with_name("lightning-logger").required(false))
            .add_source(File::with_name("/etc/lightning-logger/config").required(false));

        if let Some(path) = path {
            builder = builder.add_source(File::with_name(path).required(true));
        }

        let config = builder
            .add_source(
                Environment::with_prefix("LIGHTNING_LOGGER")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let app_config: AppConfig = config.try_deserialize()?;

        if app_config.backend.base_url.trim().is_empty() {
            return Err(ConfigError::Message("backend base_url is required".to_string()));
        }

        Ok(app_config)
    }
}
