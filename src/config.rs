//! Configuration System
//!
//! Handles loading configuration from TOML files and environment variables.
//! Only the API base URL can be overridden from the environment.

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::stats::{resolve_api_base, API_URL_ENV, DEFAULT_API_BASE};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub api: ApiConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Statistics API configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    /// Base URL or path prefix of the statistics API
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Origin that a relative `base_url` is resolved against
    #[serde(default = "default_origin")]
    pub origin: String,
}

fn default_base_url() -> String {
    DEFAULT_API_BASE.to_string()
}

fn default_origin() -> String {
    "http://localhost:8000".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            origin: default_origin(),
        }
    }
}

impl ApiConfig {
    /// Absolute base URL for outbound requests.
    ///
    /// An absolute `base_url` is used as is; a path prefix such as `/api/`
    /// is appended to `origin`.
    pub fn resolved_base_url(&self) -> Result<String, ConfigError> {
        let base = resolve_api_base(Some(&self.base_url));

        if let Ok(url) = reqwest::Url::parse(&base) {
            return match url.scheme() {
                "http" | "https" => Ok(base),
                scheme => Err(ConfigError::InvalidUrl {
                    url: base.clone(),
                    error: format!("unsupported scheme {:?}, expected http or https", scheme),
                }),
            };
        }

        let origin = reqwest::Url::parse(&self.origin).map_err(|e| ConfigError::InvalidUrl {
            url: self.origin.clone(),
            error: e.to_string(),
        })?;
        if !matches!(origin.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: self.origin.clone(),
                error: format!("unsupported scheme {:?}, expected http or https", origin.scheme()),
            });
        }

        let joined = format!(
            "{}/{}",
            origin.as_str().trim_end_matches('/'),
            base.trim_start_matches('/')
        );

        reqwest::Url::parse(&joined)
            .map(|_| joined.clone())
            .map_err(|e| ConfigError::InvalidUrl {
                url: joined,
                error: e.to_string(),
            })
    }
}

/// Dashboard server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8084
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
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
    "info".to_string()
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

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Load the explicit path if given, otherwise the first default location
    /// that exists, otherwise defaults. Environment overrides apply in every
    /// case.
    pub fn discover(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        match explicit {
            Some(path) => Self::load_with_env(path),
            None => Self::load_default(),
        }
    }

    /// Load from default locations or environment.
    ///
    /// A config file that exists but cannot be read or parsed is an error,
    /// not a silent fallback to defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("bikeboard").join("config.toml")),
            Some(PathBuf::from("./bikeboard.toml")),
        ];

        Self::load_first(config_paths.iter().flatten())
    }

    fn load_first<'a>(paths: impl IntoIterator<Item = &'a PathBuf>) -> Result<Self, ConfigError> {
        for path in paths {
            if path.exists() {
                let config = Self::load_with_env(path)?;
                tracing::info!("Loaded config from {:?}", path);
                return Ok(config);
            }
        }

        tracing::info!("Using default config with environment overrides");
        let mut config = Config::default();
        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides to an existing config
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(url) = lookup(API_URL_ENV) {
            if !url.trim().is_empty() {
                self.api.base_url = url.trim().to_string();
            }
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

    #[error("Invalid URL {url:?}: {error}")]
    InvalidUrl { url: String, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Bikeboard Configuration
#
# Environment variables override these settings:
# - BIKEBOARD_API_URL  (api.base_url)
# - RUST_LOG           (log filter, takes precedence over logging.level)

[api]
# Base URL of the statistics API. A path prefix is resolved against `origin`.
base_url = "/api/"

# Origin of the statistics API
origin = "http://localhost:8000"

[server]
# Dashboard server host
host = "0.0.0.0"

# Dashboard server port
port = 8084

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
