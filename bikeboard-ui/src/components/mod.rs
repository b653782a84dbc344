//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod chart;
pub mod loading;
pub mod nav;

pub use chart::Chart;
pub use loading::Loading;
pub use nav::Nav;
