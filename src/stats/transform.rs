//! Response → Row Transforms
//!
//! Pairs the parallel arrays of a response into chart rows. Row order is
//! the order of the first array; nothing is sorted or deduplicated.

use super::error::ValidationError;
use super::types::{DurationRow, DurationStatsResponse, HourRangeRow, HourRangeStatsResponse};

/// Category label for an hour-of-day bucket: `9` → `"9:00"`.
pub fn hour_label(bucket: i64) -> String {
    format!("{}:00", bucket)
}

/// Build duration rows, one per entry of `hours`.
pub fn transform_duration(
    response: DurationStatsResponse,
) -> Result<Vec<DurationRow>, ValidationError> {
    let DurationStatsResponse { hours, count } = response;

    if count.len() != hours.len() {
        return Err(ValidationError::LengthMismatch {
            field: "count",
            expected: hours.len(),
            actual: count.len(),
        });
    }
    check_counts(count.iter().copied().enumerate())?;

    Ok(hours
        .into_iter()
        .zip(count)
        .map(|(hour, count)| DurationRow { hour, count })
        .collect())
}

/// Build hour-of-day rows, one per entry of `hour_bucket`.
///
/// Missing counts (null, or past the end of a short `count` array) become 0.
/// A `count` array longer than `hour_bucket` is rejected.
pub fn transform_hour_range(
    response: HourRangeStatsResponse,
) -> Result<Vec<HourRangeRow>, ValidationError> {
    let HourRangeStatsResponse { hour_bucket, count } = response;

    if count.len() > hour_bucket.len() {
        return Err(ValidationError::LengthMismatch {
            field: "count",
            expected: hour_bucket.len(),
            actual: count.len(),
        });
    }
    check_counts(
        count
            .iter()
            .enumerate()
            .filter_map(|(index, c)| c.map(|c| (index, c))),
    )?;

    let out_of_range = hour_bucket.iter().filter(|b| !(0..24).contains(*b)).count();
    if out_of_range > 0 {
        tracing::warn!(out_of_range, "Hour buckets outside 0-23 in hour range stats");
    }

    Ok(hour_bucket
        .into_iter()
        .enumerate()
        .map(|(index, bucket)| HourRangeRow {
            hour_bucket: hour_label(bucket),
            count: count.get(index).copied().flatten().unwrap_or(0),
        })
        .collect())
}

fn check_counts(counts: impl Iterator<Item = (usize, i64)>) -> Result<(), ValidationError> {
    for (index, count) in counts {
        if count < 0 {
            return Err(ValidationError::NegativeCount { index, count });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_rows_pair_in_order() {
        let rows = transform_duration(DurationStatsResponse {
            hours: vec![0, 1, 2],
            count: vec![5, 10, 3],
        })
        .unwrap();

        assert_eq!(
            rows,
            vec![
                DurationRow { hour: 0, count: 5 },
                DurationRow { hour: 1, count: 10 },
                DurationRow { hour: 2, count: 3 },
            ]
        );
    }

    #[test]
    fn test_duration_preserves_unsorted_order() {
        let rows = transform_duration(DurationStatsResponse {
            hours: vec![7, 2, 7, 0],
            count: vec![1, 2, 3, 4],
        })
        .unwrap();

        let hours: Vec<i64> = rows.iter().map(|r| r.hour).collect();
        assert_eq!(hours, vec![7, 2, 7, 0]);
        assert_eq!(rows.len(), 4);
    }

    #[test]
    fn test_duration_length_mismatch() {
        let err = transform_duration(DurationStatsResponse {
            hours: vec![0, 1],
            count: vec![5],
        })
        .unwrap_err();

        assert_eq!(
            err,
            ValidationError::LengthMismatch {
                field: "count",
                expected: 2,
                actual: 1
            }
        );
    }

    #[test]
    fn test_duration_negative_count() {
        let err = transform_duration(DurationStatsResponse {
            hours: vec![0, 1],
            count: vec![5, -2],
        })
        .unwrap_err();

        assert_eq!(err, ValidationError::NegativeCount { index: 1, count: -2 });
    }

    #[test]
    fn test_duration_empty() {
        let rows = transform_duration(DurationStatsResponse::default()).unwrap();
        assert!(rows.is_empty());
    }

    #[test]
    fn test_hour_range_missing_count_defaults_to_zero() {
        let rows = transform_hour_range(HourRangeStatsResponse {
            hour_bucket: vec![9, 10],
            count: vec![Some(4)],
        })
        .unwrap();

        assert_eq!(
            rows,
            vec![
                HourRangeRow { hour_bucket: "9:00".to_string(), count: 4 },
                HourRangeRow { hour_bucket: "10:00".to_string(), count: 0 },
            ]
        );
    }

    #[test]
    fn test_hour_range_null_count_defaults_to_zero() {
        let rows = transform_hour_range(HourRangeStatsResponse {
            hour_bucket: vec![0, 1, 2],
            count: vec![Some(1), None, Some(3)],
        })
        .unwrap();

        let counts: Vec<i64> = rows.iter().map(|r| r.count).collect();
        assert_eq!(counts, vec![1, 0, 3]);
    }

    #[test]
    fn test_hour_range_labels() {
        let rows = transform_hour_range(HourRangeStatsResponse {
            hour_bucket: (0..24).collect(),
            count: (0..24).map(Some).collect(),
        })
        .unwrap();

        for (bucket, row) in rows.iter().enumerate() {
            assert_eq!(row.hour_bucket, format!("{}:00", bucket));
            assert_eq!(row.count, bucket as i64);
        }
        assert_eq!(hour_label(23), "23:00");
    }

    #[test]
    fn test_hour_range_out_of_range_bucket_still_labelled() {
        let rows = transform_hour_range(HourRangeStatsResponse {
            hour_bucket: vec![25],
            count: vec![Some(1)],
        })
        .unwrap();

        assert_eq!(rows[0].hour_bucket, "25:00");
    }

    #[test]
    fn test_hour_range_extra_counts_rejected() {
        let err = transform_hour_range(HourRangeStatsResponse {
            hour_bucket: vec![9],
            count: vec![Some(1), Some(2)],
        })
        .unwrap_err();

        assert!(matches!(err, ValidationError::LengthMismatch { expected: 1, actual: 2, .. }));
    }

    #[test]
    fn test_hour_range_negative_count() {
        let err = transform_hour_range(HourRangeStatsResponse {
            hour_bucket: vec![9, 10],
            count: vec![None, Some(-5)],
        })
        .unwrap_err();

        assert_eq!(err, ValidationError::NegativeCount { index: 1, count: -5 });
    }
}
