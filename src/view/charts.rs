//! Chart View Definitions
//!
//! Each dashboard screen is a type implementing [`ChartView`]. The trait
//! pins down everything that differs between screens: route, endpoint,
//! user-facing messages, transform and chart shape.

use std::fmt::Debug;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::render::chart::{ChartKind, ChartPoint, ChartSpec};
use crate::stats::{
    transform_duration, transform_hour_range, DurationRow, DurationStatsResponse, HourRangeRow,
    HourRangeStatsResponse, ValidationError, DURATION_STATS_PATH, HOUR_RANGE_STATS_PATH,
};

/// Root path; redirects to the trip duration view
pub const ROOT_ROUTE: &str = "/";

/// Navigation entries in display order: (route, label)
pub const NAV_LINKS: [(&str, &str); 2] = [
    (TripDuration::ROUTE, TripDuration::NAV_LABEL),
    (HourRange::ROUTE, HourRange::NAV_LABEL),
];

/// One independently mounted chart screen
pub trait ChartView: 'static {
    /// Body returned by the view's endpoint
    type Response: DeserializeOwned + Send + 'static;
    /// Transformed row handed to the chart
    type Row: Clone + Debug + Serialize + Send + Sync + 'static;

    /// Short identifier used in logs
    const NAME: &'static str;
    /// Navigation path of the view
    const ROUTE: &'static str;
    /// Stats API endpoint, relative to the API base
    const ENDPOINT: &'static str;
    const NAV_LABEL: &'static str;
    const TITLE: &'static str;
    const LOADING_MESSAGE: &'static str;
    const EMPTY_MESSAGE: &'static str;
    /// Fixed message shown in place of the chart when loading fails
    const ERROR_MESSAGE: &'static str;

    /// Convert a response into rows, preserving order.
    fn transform(response: Self::Response) -> Result<Vec<Self::Row>, ValidationError>;

    /// Describe the chart drawn for these rows.
    fn chart(rows: &[Self::Row]) -> ChartSpec;
}

/// Line chart of trip counts by duration in whole hours
#[derive(Debug, Clone, Copy, Default)]
pub struct TripDuration;

impl ChartView for TripDuration {
    type Response = DurationStatsResponse;
    type Row = DurationRow;

    const NAME: &'static str = "trip-duration";
    const ROUTE: &'static str = "/trip-duration";
    const ENDPOINT: &'static str = DURATION_STATS_PATH;
    const NAV_LABEL: &'static str = "Trip Duration";
    const TITLE: &'static str = "Trip Duration Statistics";
    const LOADING_MESSAGE: &'static str = "Loading trip duration statistics...";
    const EMPTY_MESSAGE: &'static str = "No data available";
    const ERROR_MESSAGE: &'static str = "Failed to load trip duration statistics";

    fn transform(response: DurationStatsResponse) -> Result<Vec<DurationRow>, ValidationError> {
        transform_duration(response)
    }

    fn chart(rows: &[DurationRow]) -> ChartSpec {
        ChartSpec {
            kind: ChartKind::Line,
            title: Self::TITLE,
            x_label: "Hours",
            y_label: "Count",
            series_name: "Trip Count",
            color: "#8884d8",
            points: rows
                .iter()
                .map(|row| ChartPoint::new(row.hour.to_string(), row.count))
                .collect(),
            label_every_category: false,
            show_legend: true,
        }
    }
}

/// Bar chart of trip counts by hour of day
#[derive(Debug, Clone, Copy, Default)]
pub struct HourRange;

impl ChartView for HourRange {
    type Response = HourRangeStatsResponse;
    type Row = HourRangeRow;

    const NAME: &'static str = "hour-range";
    const ROUTE: &'static str = "/hour-range";
    const ENDPOINT: &'static str = HOUR_RANGE_STATS_PATH;
    const NAV_LABEL: &'static str = "Hour Range";
    const TITLE: &'static str = "Trips by Hour of Day";
    const LOADING_MESSAGE: &'static str = "Loading trip hour range statistics...";
    const EMPTY_MESSAGE: &'static str = "No hour range data available";
    const ERROR_MESSAGE: &'static str = "Failed to load trip hour range statistics";

    fn transform(response: HourRangeStatsResponse) -> Result<Vec<HourRangeRow>, ValidationError> {
        transform_hour_range(response)
    }

    fn chart(rows: &[HourRangeRow]) -> ChartSpec {
        ChartSpec {
            kind: ChartKind::Bar,
            title: Self::TITLE,
            x_label: "Hour of Day",
            y_label: "Trip Count",
            series_name: "Trip Count",
            color: "#82ca9d",
            points: rows
                .iter()
                .map(|row| ChartPoint::new(row.hour_bucket.clone(), row.count))
                .collect(),
            label_every_category: true,
            show_legend: false,
        }
    }
}
