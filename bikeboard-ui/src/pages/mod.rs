//! Pages
//!
//! One page per chart view. Both share [`chart_view::chart_page`].

pub mod chart_view;
pub mod hour_range;
pub mod trip_duration;

pub use hour_range::HourRangePage;
pub use trip_duration::TripDurationPage;
