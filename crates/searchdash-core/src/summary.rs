//! Summary statistics over point series.

use crate::error::{DashboardError, Result};
use crate::types::{Summary, TimeSeriesPoint};

/// Computes totals and averages over a (possibly aggregated) series.
///
/// `average_ctr` is derived from the totals as
/// `total_clicks / total_impressions * 100`, and is `0` when there are no
/// impressions. This differs from the per-point `ctr` field, which monthly
/// aggregation averages instead.
///
/// Fails with [`DashboardError::EmptySeries`] when `points` is empty, since the
/// mean position is undefined.
pub fn summarize(points: &[TimeSeriesPoint]) -> Result<Summary> {
    if points.is_empty() {
        return Err(DashboardError::EmptySeries);
    }

    let total_clicks: u64 = points.iter().map(|p| p.clicks).sum();
    let total_impressions: u64 = points.iter().map(|p| p.impressions).sum();

    let average_ctr = if total_impressions > 0 {
        total_clicks as f64 / total_impressions as f64 * 100.0
    } else {
        0.0
    };

    let average_position =
        points.iter().map(|p| p.position).sum::<f64>() / points.len() as f64;

    Ok(Summary {
        total_clicks,
        total_impressions,
        average_ctr,
        average_position,
    })
}
