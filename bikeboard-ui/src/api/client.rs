//! HTTP API Client
//!
//! Fetches a chart view's statistics from the stats API with gloo-net.

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use bikeboard::stats::{join_url, resolve_api_base, FetchError};
use bikeboard::view::ChartView;

/// API base URL: `BIKEBOARD_API_URL` at build time, else `/api/`
pub fn api_base() -> String {
    resolve_api_base(option_env!("BIKEBOARD_API_URL"))
}

/// GET the view's endpoint and decode the response.
///
/// Failures are written to the browser console before being returned.
pub async fn fetch<V: ChartView>() -> Result<V::Response, FetchError> {
    let url = join_url(&api_base(), V::ENDPOINT);

    let result = get_json(&url).await;
    if let Err(ref e) = result {
        web_sys::console::error_1(&format!("Error fetching {}: {}", V::ENDPOINT, e).into());
    }
    result
}

async fn get_json<T: DeserializeOwned>(url: &str) -> Result<T, FetchError> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| FetchError::Transport {
            url: url.to_string(),
            message: e.to_string(),
        })?;

    if !response.ok() {
        return Err(FetchError::Status {
            url: url.to_string(),
            status: response.status(),
        });
    }

    let body = response.text().await.map_err(|e| FetchError::Transport {
        url: url.to_string(),
        message: e.to_string(),
    })?;

    serde_json::from_str(&body).map_err(|e| FetchError::Decode {
        url: url.to_string(),
        message: e.to_string(),
    })
}
