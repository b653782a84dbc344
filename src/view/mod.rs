//! Chart Views
//!
//! The fetch → transform → render lifecycle shared by both dashboard views.
//!
//! - **charts**: The `ChartView` contract and its two instances
//! - **state**: `ViewState` machine and the per-instance `ChartViewModel`
//!
//! # Lifecycle
//!
//! ```text
//!   mount() ──► Loading ──finish(token, Ok)──► Loaded(rows)   (empty rows = "no data")
//!                  │
//!                  └──────finish(token, Err)─► Failed(message)
//!
//!   unmount() deactivates the token: a late finish() is discarded.
//! ```

pub mod charts;
pub mod state;

pub use charts::{ChartView, HourRange, TripDuration, NAV_LINKS, ROOT_ROUTE};
pub use state::{ChartViewModel, MountToken, ViewState};
