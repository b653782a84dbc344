//! # Bikeboard
//!
//! Trip statistics dashboard - fetches precomputed bicycle-trip statistics
//! from a stats API and renders them as a duration line chart and an
//! hour-of-day bar chart.
//!
//! ## Features
//!
//! - **Shared core**: Response types, transforms and the view lifecycle
//!   compile without platform dependencies, for native and WASM builds
//! - **Mount-guarded views**: Results arriving after a view unmounts are
//!   discarded
//! - **Dashboard server**: Server-rendered SVG charts behind an Axum shell
//! - **CLI**: Charts as terminal tables, JSON or CSV
//!
//! ## Modules
//!
//! - [`stats`]: Response shapes, transforms and errors
//! - [`view`]: Chart views and their state machine
//! - [`render`]: SVG, HTML and text rendering
//! - [`api`]: Stats API client (`server` feature)
//! - [`config`]: TOML configuration (`server` feature)
//! - [`logging`]: Tracing subscriber setup (`server` feature)
//! - [`web`]: Dashboard server (`server` feature)
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use bikeboard::stats::{transform_duration, DurationStatsResponse};
//!
//! let rows = transform_duration(DurationStatsResponse {
//!     hours: vec![0, 1, 2],
//!     count: vec![5, 10, 3],
//! })
//! .unwrap();
//!
//! assert_eq!(rows[1].count, 10);
//! ```

pub mod render;
pub mod stats;
pub mod view;

#[cfg(feature = "server")]
pub mod api;
#[cfg(feature = "server")]
pub mod config;
#[cfg(feature = "server")]
pub mod logging;
#[cfg(feature = "server")]
pub mod web;

// Re-export top-level types for convenience
pub use stats::{
    DurationRow, DurationStatsResponse, FetchError, HourRangeRow, HourRangeStatsResponse,
    ValidationError,
};

pub use view::{ChartView, ChartViewModel, HourRange, MountToken, TripDuration, ViewState};

pub use render::{render_page, render_svg, render_view, render_view_text, ChartSpec};

#[cfg(feature = "server")]
pub use api::{load_view, Fetch, StatsClient, StatsSource};

#[cfg(feature = "server")]
pub use config::{Config, ConfigError};

#[cfg(feature = "server")]
pub use web::{build_router, serve, AppState, ServeError};
