//! Day-to-month aggregation of point series.

use std::collections::BTreeMap;

use crate::granularity::Granularity;
use crate::types::{MonthKey, TimeSeriesPoint};

/// Running totals for one calendar month.
#[derive(Debug, Default)]
struct MonthlyBucket {
    clicks: u64,
    impressions: u64,
    ctrs: Vec<f64>,
    positions: Vec<f64>,
}

impl MonthlyBucket {
    fn push(&mut self, point: &TimeSeriesPoint) {
        self.clicks += point.clicks;
        self.impressions += point.impressions;
        self.ctrs.push(point.ctr);
        self.positions.push(point.position);
    }

    fn into_point(self, key: MonthKey) -> TimeSeriesPoint {
        TimeSeriesPoint {
            date: key.first_day(),
            clicks: self.clicks,
            impressions: self.impressions,
            ctr: mean(&self.ctrs),
            position: mean(&self.positions),
        }
    }
}

/// A bucket only exists once a point was pushed, so `values` is never empty.
fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Buckets a series at `granularity`.
///
/// [`Granularity::Day`] returns the points unchanged. [`Granularity::Month`]
/// emits one record per calendar month, ascending, dated on the first of the
/// month, with summed clicks and impressions and the arithmetic mean of the
/// members' `ctr` and `position`. The monthly `ctr` is the mean of the
/// per-point values, not `clicks / impressions` of the month.
#[must_use]
pub fn aggregate(points: &[TimeSeriesPoint], granularity: Granularity) -> Vec<TimeSeriesPoint> {
    match granularity {
        Granularity::Day => points.to_vec(),
        Granularity::Month => aggregate_by_month(points),
    }
}

/// Collapses a series into one record per calendar month.
#[must_use]
pub fn aggregate_by_month(points: &[TimeSeriesPoint]) -> Vec<TimeSeriesPoint> {
    let mut buckets: BTreeMap<MonthKey, MonthlyBucket> = BTreeMap::new();

    for point in points {
        buckets.entry(point.month_key()).or_default().push(point);
    }

    buckets
        .into_iter()
        .map(|(key, bucket)| bucket.into_point(key))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, NaiveDate};
    use std::collections::HashSet;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn test_two_points_in_one_month() {
        let points = vec![
            TimeSeriesPoint::new(date(2025, 1, 5), 10, 100, 10.0, 5.0),
            TimeSeriesPoint::new(date(2025, 1, 20), 20, 300, 6.0, 7.0),
        ];

        let monthly = aggregate(&points, Granularity::Month);

        assert_eq!(monthly.len(), 1);
        let january = &monthly[0];
        assert_eq!(january.date, date(2025, 1, 1));
        assert_eq!(january.month_key().to_string(), "2025-01");
        assert_eq!(january.clicks, 30);
        assert_eq!(january.impressions, 400);
        // Mean of per-point CTRs, not 30 / 400 * 100 = 7.5.
        assert_close(january.ctr, 8.0);
        assert_close(january.position, 6.0);
    }

    #[test]
    fn test_day_granularity_passes_through() {
        let points = vec![
            TimeSeriesPoint::new(date(2025, 1, 5), 10, 100, 10.0, 5.0),
            TimeSeriesPoint::new(date(2025, 1, 20), 20, 300, 6.0, 7.0),
        ];
        assert_eq!(aggregate(&points, Granularity::Day), points);
    }

    #[test]
    fn test_empty_input() {
        assert!(aggregate(&[], Granularity::Month).is_empty());
        assert!(aggregate(&[], Granularity::Day).is_empty());
    }

    #[test]
    fn test_output_length_matches_distinct_months() {
        let start = date(2024, 6, 1);
        let points: Vec<_> = (0..70)
            .map(|i| TimeSeriesPoint::new(start + Duration::days(7 * i), 500, 12_000, 4.0, 7.5))
            .collect();

        let monthly = aggregate(&points, Granularity::Month);
        let distinct: HashSet<_> = points.iter().map(TimeSeriesPoint::month_key).collect();

        assert_eq!(monthly.len(), distinct.len());
        assert!(monthly.windows(2).all(|w| w[0].date < w[1].date));
        assert_eq!(
            monthly.iter().map(|p| p.clicks).sum::<u64>(),
            points.iter().map(|p| p.clicks).sum::<u64>()
        );
    }

    #[test]
    fn test_sorted_across_years() {
        let points = vec![
            TimeSeriesPoint::new(date(2025, 2, 3), 1, 10, 1.0, 3.0),
            TimeSeriesPoint::new(date(2024, 12, 30), 2, 20, 2.0, 4.0),
            TimeSeriesPoint::new(date(2025, 1, 6), 3, 30, 3.0, 5.0),
        ];

        let keys: Vec<String> = aggregate(&points, Granularity::Month)
            .iter()
            .map(|p| p.month_key().to_string())
            .collect();

        assert_eq!(keys, ["2024-12", "2025-01", "2025-02"]);
    }

    #[test]
    fn test_singleton_months_are_stable() {
        let points = vec![
            TimeSeriesPoint::new(date(2025, 1, 1), 10, 100, 4.2, 5.1),
            TimeSeriesPoint::new(date(2025, 2, 1), 20, 300, 3.9, 6.3),
            TimeSeriesPoint::new(date(2025, 3, 1), 30, 500, 4.7, 4.8),
        ];

        let once = aggregate(&points, Granularity::Month);
        assert_eq!(once, points);
        assert_eq!(aggregate(&once, Granularity::Month), once);
    }
}
