//! Stats API access for the browser

pub mod client;

pub use client::{api_base, fetch};
