//! Share calculations for dimension breakdowns.
//!
//! Country bars are scaled against the leading row, device slices against the
//! total. Both return `0.0` where the denominator is zero.

use crate::types::{CountryMetrics, DeviceMetrics};

/// Something that reports a click count.
pub trait Clicks {
    /// Number of clicks.
    fn clicks(&self) -> u64;
}

impl Clicks for CountryMetrics {
    fn clicks(&self) -> u64 {
        self.clicks
    }
}

impl Clicks for DeviceMetrics {
    fn clicks(&self) -> u64 {
        self.clicks
    }
}

/// Each row's clicks as a percentage of the first row's clicks.
///
/// Rows are expected in descending order, so the first row maps to `100.0`.
#[must_use]
pub fn relative_to_leader<T: Clicks>(rows: &[T]) -> Vec<f64> {
    let leader = rows.first().map_or(0, Clicks::clicks);
    rows.iter().map(|r| percent(r.clicks(), leader)).collect()
}

/// Each row's clicks as a percentage of all rows' clicks.
#[must_use]
pub fn share_of_total<T: Clicks>(rows: &[T]) -> Vec<f64> {
    let total: u64 = rows.iter().map(Clicks::clicks).sum();
    rows.iter().map(|r| percent(r.clicks(), total)).collect()
}

fn percent(part: u64, whole: u64) -> f64 {
    if whole == 0 {
        return 0.0;
    }
    part as f64 / whole as f64 * 100.0
}
