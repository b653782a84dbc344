//! Stats API Endpoints
//!
//! Fixed endpoint paths and base URL resolution.

/// Environment variable overriding the API base URL
pub const API_URL_ENV: &str = "BIKEBOARD_API_URL";

/// Default API base: a path prefix proxied to the stats backend
pub const DEFAULT_API_BASE: &str = "/api/";

/// Trip duration statistics endpoint
pub const DURATION_STATS_PATH: &str = "trip-duration-stats";

/// Trip hour-of-day statistics endpoint
pub const HOUR_RANGE_STATS_PATH: &str = "hour-range-stats";

/// Pick the API base: a non-blank override wins, otherwise the default prefix.
pub fn resolve_api_base(override_url: Option<&str>) -> String {
    match override_url.map(str::trim) {
        Some(url) if !url.is_empty() => url.to_string(),
        _ => DEFAULT_API_BASE.to_string(),
    }
}

/// Join a base URL and an endpoint path with exactly one slash between them.
///
/// `join_url("/api/", "/trip-duration-stats")` is `/api/trip-duration-stats`.
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    let path = path.trim_start_matches('/');

    if path.is_empty() {
        return format!("{}/", base);
    }

    format!("{}/{}", base, path)
}
