//! Stats API Access
//!
//! Outbound side of the dashboard: the reqwest client for the statistics
//! backend and the source abstraction the views load through.
//!
//! # Endpoints
//!
//! - `GET <base>/trip-duration-stats` - Trip counts per duration hour
//! - `GET <base>/hour-range-stats` - Trip counts per hour of day
//!
//! # Example
//!
//! ```rust,no_run
//! use bikeboard::api::{load_view, StatsClient};
//! use bikeboard::view::{ChartViewModel, TripDuration};
//! use tokio::sync::Mutex;
//!
//! #[tokio::main]
//! async fn main() {
//!     let client = StatsClient::new("http://localhost:8000/api/");
//!     let model = Mutex::new(ChartViewModel::<TripDuration>::new());
//!
//!     load_view(&model, &client).await;
//!     println!("{:?}", model.lock().await.state());
//! }
//! ```

pub mod client;
pub mod source;

pub use client::StatsClient;
pub use source::{load_view, Fetch, StatsSource};
