//! Stats API response shapes and chart rows.

use serde::{Deserialize, Serialize};

/// Trip counts grouped by whole hours of trip duration.
///
/// `hours[i]` is paired with `count[i]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationStatsResponse {
    pub hours: Vec<i64>,
    pub count: Vec<i64>,
}

/// Trip counts grouped by hour of day (0-23).
///
/// `hour_bucket[i]` is paired with `count[i]`. A `null` count, or a count
/// array shorter than `hour_bucket`, marks the paired value as missing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRangeStatsResponse {
    pub hour_bucket: Vec<i64>,
    #[serde(default)]
    pub count: Vec<Option<i64>>,
}

/// One point of the duration line chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationRow {
    pub hour: i64,
    pub count: i64,
}

/// One bar of the hour-of-day chart
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HourRangeRow {
    #[serde(rename = "hourBucket")]
    pub hour_bucket: String,
    pub count: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hour_range_null_counts_deserialize() {
        let response: HourRangeStatsResponse =
            serde_json::from_str(r#"{"hour_bucket": [1, 2], "count": [3, null]}"#).unwrap();
        assert_eq!(response.count, vec![Some(3), None]);
    }

    #[test]
    fn test_hour_range_row_field_names() {
        let row = HourRangeRow {
            hour_bucket: "9:00".to_string(),
            count: 4,
        };
        let json = serde_json::to_value(&row).unwrap();
        assert_eq!(json, serde_json::json!({"hourBucket": "9:00", "count": 4}));
    }

    #[test]
    fn test_duration_rejects_non_numeric() {
        let result: Result<DurationStatsResponse, _> =
            serde_json::from_str(r#"{"hours": ["a"], "count": [1]}"#);
        assert!(result.is_err());
    }
}
