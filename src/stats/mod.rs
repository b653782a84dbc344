//! Trip Statistics Model
//!
//! Response shapes returned by the stats API, the rows derived from them
//! for charting, and the endpoint/base-URL rules shared by every client.
//!
//! - **endpoints**: Endpoint paths, default base prefix, URL joining
//! - **types**: Parallel-array responses and chart rows
//! - **transform**: Response → row conversion with validation
//! - **error**: `FetchError` and `ValidationError`
//!
//! # Data Flow
//!
//! ```text
//!   GET /trip-duration-stats  → DurationStatsResponse  → Vec<DurationRow>
//!   GET /hour-range-stats     → HourRangeStatsResponse → Vec<HourRangeRow>
//! ```
//!
//! This module has no platform dependencies; it is shared between the
//! native dashboard and the WASM frontend.

pub mod endpoints;
pub mod error;
pub mod transform;
pub mod types;

pub use endpoints::{
    join_url, resolve_api_base, API_URL_ENV, DEFAULT_API_BASE, DURATION_STATS_PATH,
    HOUR_RANGE_STATS_PATH,
};
pub use error::{FetchError, ValidationError};
pub use transform::{hour_label, transform_duration, transform_hour_range};
pub use types::{DurationRow, DurationStatsResponse, HourRangeRow, HourRangeStatsResponse};
