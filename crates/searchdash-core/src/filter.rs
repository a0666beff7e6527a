//! Date-window filtering of point series.

use crate::types::{PeriodWindow, TimeSeriesPoint};

/// Returns the points whose date lies in `window`, in their original order.
///
/// An empty result is valid. The input is not modified.
#[must_use]
pub fn filter_range(points: &[TimeSeriesPoint], window: &PeriodWindow) -> Vec<TimeSeriesPoint> {
    points
        .iter()
        .filter(|p| window.contains(p.date))
        .cloned()
        .collect()
}
