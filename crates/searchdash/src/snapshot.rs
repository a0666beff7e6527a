//! Serializable view of a dashboard selection.

use serde::{Deserialize, Serialize};

use searchdash_core::{
    Breakdowns, DashboardError, Period, PeriodWindow, Result, Site, Summary, TimeSeriesPoint,
};

/// Everything a renderer needs to draw the current selection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DashboardSnapshot {
    /// Selected site.
    pub site: Site,
    /// Selected period.
    pub period: Period,
    /// Current window and granularity.
    pub window: PeriodWindow,
    /// Displayed series, filtered and bucketed.
    pub series: Vec<TimeSeriesPoint>,
    /// Summary of the displayed series, `None` when the window holds no points.
    pub summary: Option<Summary>,
    /// Summary of the whole loaded series.
    pub overall_summary: Option<Summary>,
    /// Breakdown tables.
    pub breakdowns: Breakdowns,
    /// Country clicks relative to the leading country, in percent.
    pub country_shares: Vec<f64>,
    /// Device clicks as a share of all device clicks, in percent.
    pub device_shares: Vec<f64>,
}

impl DashboardSnapshot {
    /// Serializes the snapshot to a JSON string.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| DashboardError::Other(e.to_string()))
    }

    /// Serializes the snapshot to an indented JSON string.
    pub fn to_json_pretty(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| DashboardError::Other(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use searchdash_core::Granularity;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_snapshot_json() {
        let snapshot = DashboardSnapshot {
            site: Site::new("https://example.com"),
            period: Period::ThreeMonths,
            window: PeriodWindow::new(date(2025, 6, 30), date(2025, 9, 30), Granularity::Month)
                .unwrap(),
            series: vec![TimeSeriesPoint::new(date(2025, 7, 1), 30, 400, 8.0, 6.0)],
            summary: None,
            overall_summary: None,
            breakdowns: Breakdowns::default(),
            country_shares: Vec::new(),
            device_shares: Vec::new(),
        };

        let json: serde_json::Value = serde_json::from_str(&snapshot.to_json().unwrap()).unwrap();

        assert_eq!(json["site"], "https://example.com");
        assert_eq!(json["period"], "3months");
        assert_eq!(json["window"]["granularity"], "month");
        assert_eq!(json["series"][0]["date"], "2025-07-01");
        assert!(json["summary"].is_null());

        let pretty = snapshot.to_json_pretty().unwrap();
        let back: DashboardSnapshot = serde_json::from_str(&pretty).unwrap();
        assert_eq!(back, snapshot);
    }
}
