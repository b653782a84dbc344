//! Stats API Client
//!
//! HTTP client for the two read-only statistics endpoints.

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::config::{ApiConfig, ConfigError};
use crate::stats::{
    join_url, DurationStatsResponse, FetchError, HourRangeStatsResponse, DURATION_STATS_PATH,
    HOUR_RANGE_STATS_PATH,
};

/// Stats API REST client
///
/// Each call performs exactly one GET request: no retries, no caching,
/// and no timeout beyond reqwest's defaults.
#[derive(Debug, Clone)]
pub struct StatsClient {
    client: Client,
    base_url: String,
}

impl StatsClient {
    /// Create a client for an absolute base URL such as
    /// `http://localhost:8000/api/`
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Create a client from configuration, resolving a relative base
    /// against the configured origin.
    pub fn from_config(config: &ApiConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.resolved_base_url()?))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL of an endpoint path
    pub fn endpoint_url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// GET `<base>/trip-duration-stats`
    pub async fn fetch_duration_stats(&self) -> Result<DurationStatsResponse, FetchError> {
        self.get_json(DURATION_STATS_PATH).await
    }

    /// GET `<base>/hour-range-stats`
    pub async fn fetch_hour_range_stats(&self) -> Result<HourRangeStatsResponse, FetchError> {
        self.get_json(HOUR_RANGE_STATS_PATH).await
    }

    /// GET an endpoint and decode its JSON body.
    ///
    /// Failures are logged before being returned.
    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = self.endpoint_url(path);

        let result = self.send_get(&url).await;
        if let Err(ref e) = result {
            tracing::error!(endpoint = path, error = %e, "Error fetching stats");
        }
        result
    }

    async fn send_get<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        tracing::debug!(url, "GET stats");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;

        serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
