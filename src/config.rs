//! Application Configuration
//!
//! Resolved once at start-up: page config script, then compile-time
//! environment, then defaults.

use console_logger::LevelFilter;
use reqwest::Url;
use serde::Deserialize;
use thiserror::Error;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::INFO;

/// `id` of the `<script type="application/json">` element holding overrides
pub const CONFIG_ELEMENT_ID: &str = "app-config";

#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("invalid config document: {0}")]
    Document(String),

    #[error("invalid API base URL {0:?}: {1}")]
    BaseUrl(String, String),

    #[error("invalid log level {0:?}")]
    LogLevel(String),
}

/// Optional overrides, as written in the page config document
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigOverrides {
    pub api_base_url: Option<String>,
    pub log_level: Option<String>,
}

impl ConfigOverrides {
    pub fn from_json(document: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(document).map_err(|e| ConfigError::Document(e.to_string()))
    }

    /// Values baked in at compile time
    pub fn from_build_env() -> Self {
        Self {
            api_base_url: option_env!("TASTYBITES_API_BASE_URL").map(str::to_string),
            log_level: option_env!("TASTYBITES_LOG_LEVEL").map(str::to_string),
        }
    }

    /// Fields set here win over `fallback`
    pub fn or(self, fallback: ConfigOverrides) -> Self {
        Self {
            api_base_url: self.api_base_url.or(fallback.api_base_url),
            log_level: self.log_level.or(fallback.log_level),
        }
    }
}

/// Injected configuration, provided through context
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub log_level: LevelFilter,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }
}

impl AppConfig {
    /// Apply overrides; invalid values fall back to defaults and are
    /// returned alongside so they can be logged once logging is up.
    pub fn resolve(overrides: ConfigOverrides) -> (Self, Vec<ConfigError>) {
        let mut config = AppConfig::default();
        let mut problems = Vec::new();

        if let Some(raw) = overrides.api_base_url {
            match normalize_base_url(&raw) {
                Ok(url) => config.api_base_url = url,
                Err(e) => problems.push(e),
            }
        }
        if let Some(raw) = overrides.log_level {
            match console_logger::parse_level(&raw) {
                Ok(level) => config.log_level = level,
                Err(_) => problems.push(ConfigError::LogLevel(raw)),
            }
        }

        (config, problems)
    }

    /// Read the page config document, layered over the build environment
    pub fn load() -> (Self, Vec<ConfigError>) {
        let mut problems = Vec::new();
        let page = match read_config_element() {
            Some(document) => ConfigOverrides::from_json(&document).unwrap_or_else(|e| {
                problems.push(e);
                ConfigOverrides::default()
            }),
            None => ConfigOverrides::default(),
        };

        let (config, mut invalid) = AppConfig::resolve(page.or(ConfigOverrides::from_build_env()));
        problems.append(&mut invalid);
        (config, problems)
    }
}

/// Trim, drop trailing slashes, and require an http(s) origin
pub fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed).map_err(|e| ConfigError::BaseUrl(raw.to_string(), e.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(ConfigError::BaseUrl(
            raw.to_string(),
            format!("unsupported scheme {}", other),
        )),
    }
}

fn read_config_element() -> Option<String> {
    let document = web_sys::window()?.document()?;
    let element = document.get_element_by_id(CONFIG_ELEMENT_ID)?;
    element.text_content().filter(|text| !text.trim().is_empty())
}
