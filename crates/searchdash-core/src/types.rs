//! Core data types for search-performance reporting.
//!
//! This module defines the fundamental data structures:
//!
//! - [`Site`] - A web property the session can report on
//! - [`TimeSeriesPoint`] - One dated record of clicks, impressions, CTR and position
//! - [`MonthKey`] - The `YYYY-MM` key monthly aggregation groups by
//! - [`PeriodWindow`] - A resolved, inclusive date window plus its granularity
//! - [`Summary`] - Totals and averages over a series
//! - [`CountryMetrics`], [`DeviceMetrics`], [`PageMetrics`], [`QueryMetrics`] - Breakdown rows
//! - [`Breakdowns`] and [`SiteReport`] - Everything loaded for a selected site

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{DashboardError, Result};
use crate::granularity::Granularity;

/// A web property, identified by its URL or domain property string.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Site(String);

impl Site {
    /// Creates a new site from its property string.
    #[must_use]
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Returns the site as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Site {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Site {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for Site {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// One dated search-performance record.
///
/// `ctr` is carried as supplied. It is not kept consistent with
/// `clicks / impressions`, and monthly aggregation averages it as an
/// independent field.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesPoint {
    /// Day the record covers (first day of the month for monthly records).
    pub date: NaiveDate,
    /// Number of clicks.
    pub clicks: u64,
    /// Number of impressions.
    pub impressions: u64,
    /// Click-through rate in percent.
    pub ctr: f64,
    /// Average ranking position, lower is better.
    pub position: f64,
}

impl TimeSeriesPoint {
    /// Creates a new point.
    #[must_use]
    pub const fn new(date: NaiveDate, clicks: u64, impressions: u64, ctr: f64, position: f64) -> Self {
        Self {
            date,
            clicks,
            impressions,
            ctr,
            position,
        }
    }

    /// Returns the month this point falls in.
    #[must_use]
    pub fn month_key(&self) -> MonthKey {
        MonthKey::from_date(self.date)
    }
}

/// Calendar month key, displayed as `YYYY-MM`.
///
/// Ordering is chronological. Keys are only built from dates, so every key
/// names a real month.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct MonthKey {
    first_day: NaiveDate,
}

impl MonthKey {
    /// Returns the key of the month containing `date`.
    #[must_use]
    pub fn from_date(date: NaiveDate) -> Self {
        Self {
            first_day: date - Days::new(u64::from(date.day0())),
        }
    }

    /// Calendar year.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.first_day.year()
    }

    /// Calendar month, 1-12.
    #[must_use]
    pub fn month(&self) -> u32 {
        self.first_day.month()
    }

    /// First day of the month, used as the representative date of a monthly record.
    #[must_use]
    pub const fn first_day(&self) -> NaiveDate {
        self.first_day
    }
}

impl fmt::Display for MonthKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year(), self.month())
    }
}

/// A resolved date window. Both bounds are inclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PeriodWindow {
    /// First day in the window.
    pub start: NaiveDate,
    /// Last day in the window.
    pub end: NaiveDate,
    /// Granularity the window is displayed at.
    pub granularity: Granularity,
}

impl PeriodWindow {
    /// Creates a window, rejecting a start after the end.
    pub fn new(start: NaiveDate, end: NaiveDate, granularity: Granularity) -> Result<Self> {
        if start > end {
            return Err(DashboardError::InvalidRange { start, end });
        }
        Ok(Self {
            start,
            end,
            granularity,
        })
    }

    /// Returns true if `date` lies within the window.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// Returns the same window displayed at another granularity.
    #[must_use]
    pub const fn with_granularity(mut self, granularity: Granularity) -> Self {
        self.granularity = granularity;
        self
    }
}

/// Totals and averages over a series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Sum of clicks.
    pub total_clicks: u64,
    /// Sum of impressions.
    pub total_impressions: u64,
    /// Click-through rate in percent, derived from the totals.
    pub average_ctr: f64,
    /// Mean of the points' positions.
    pub average_position: f64,
}

/// Traffic attributed to one country.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CountryMetrics {
    /// Country name.
    pub country: String,
    /// Number of clicks.
    pub clicks: u64,
    /// Number of impressions.
    pub impressions: u64,
    /// Click-through rate in percent.
    pub ctr: f64,
}

/// Traffic attributed to one device class.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DeviceMetrics {
    /// Device class (e.g. "Mobile").
    pub device: String,
    /// Number of clicks.
    pub clicks: u64,
    /// Number of impressions.
    pub impressions: u64,
}

/// Performance of one landing page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageMetrics {
    /// Page path.
    pub page: String,
    /// Number of clicks.
    pub clicks: u64,
    /// Number of impressions.
    pub impressions: u64,
    /// Click-through rate in percent.
    pub ctr: f64,
    /// Average ranking position.
    pub position: f64,
}

/// Performance of one search query.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct QueryMetrics {
    /// Query text.
    pub query: String,
    /// Number of clicks.
    pub clicks: u64,
    /// Number of impressions.
    pub impressions: u64,
    /// Click-through rate in percent.
    pub ctr: f64,
    /// Average ranking position.
    pub position: f64,
}

/// Dimension breakdowns shown next to the time series.
///
/// Rows are kept in the order the provider supplied them, which is
/// descending by clicks for every table a provider reports.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Breakdowns {
    /// Traffic by country.
    pub countries: Vec<CountryMetrics>,
    /// Traffic by device class.
    pub devices: Vec<DeviceMetrics>,
    /// Top landing pages.
    pub top_pages: Vec<PageMetrics>,
    /// Top search queries.
    pub top_queries: Vec<QueryMetrics>,
}

/// Everything loaded for one site.
///
/// Held immutably for the session once loaded; views are derived from it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SiteReport {
    /// The site the report belongs to.
    pub site: Site,
    /// Raw series, ascending by date.
    pub series: Vec<TimeSeriesPoint>,
    /// Dimension breakdowns.
    pub breakdowns: Breakdowns,
}

impl SiteReport {
    /// Creates a report for a site.
    #[must_use]
    pub const fn new(site: Site, series: Vec<TimeSeriesPoint>, breakdowns: Breakdowns) -> Self {
        Self {
            site,
            series,
            breakdowns,
        }
    }

    /// Returns the first and last date covered by the series.
    #[must_use]
    pub fn date_range(&self) -> Option<(NaiveDate, NaiveDate)> {
        Some((self.series.first()?.date, self.series.last()?.date))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_month_key_display_and_order() {
        let jan = MonthKey::from_date(date(2025, 1, 20));
        let dec = MonthKey::from_date(date(2024, 12, 31));

        assert_eq!(jan.to_string(), "2025-01");
        assert_eq!(dec.to_string(), "2024-12");
        assert!(dec < jan);
        assert_eq!(jan.first_day(), date(2025, 1, 1));
        assert_eq!((dec.year(), dec.month()), (2024, 12));
        assert_eq!(MonthKey::from_date(date(2024, 2, 29)).first_day(), date(2024, 2, 1));
    }

    #[test]
    fn test_window_rejects_inverted_range() {
        let err = PeriodWindow::new(date(2025, 9, 30), date(2025, 7, 1), Granularity::Day)
            .unwrap_err();
        assert_eq!(
            err,
            DashboardError::InvalidRange {
                start: date(2025, 9, 30),
                end: date(2025, 7, 1),
            }
        );
    }

    #[test]
    fn test_window_contains_bounds() {
        let window =
            PeriodWindow::new(date(2025, 7, 1), date(2025, 9, 30), Granularity::Month).unwrap();

        assert!(window.contains(date(2025, 7, 1)));
        assert!(window.contains(date(2025, 9, 30)));
        assert!(!window.contains(date(2025, 6, 30)));
        assert!(!window.contains(date(2025, 10, 1)));
    }

    #[test]
    fn test_single_day_window() {
        let window =
            PeriodWindow::new(date(2025, 7, 1), date(2025, 7, 1), Granularity::Day).unwrap();
        assert!(window.contains(date(2025, 7, 1)));
    }

    #[test]
    fn test_point_serializes_iso_date() {
        let point = TimeSeriesPoint::new(date(2025, 1, 5), 10, 100, 10.0, 5.0);
        let json = serde_json::to_value(&point).unwrap();
        assert_eq!(json["date"], "2025-01-05");
        assert_eq!(json["clicks"], 10);
    }

    #[test]
    fn test_report_date_range() {
        let report = SiteReport::new(
            Site::new("https://example.com"),
            vec![
                TimeSeriesPoint::new(date(2024, 6, 1), 1, 10, 3.5, 9.0),
                TimeSeriesPoint::new(date(2025, 9, 27), 1, 10, 3.5, 5.0),
            ],
            Breakdowns::default(),
        );
        assert_eq!(
            report.date_range(),
            Some((date(2024, 6, 1), date(2025, 9, 27)))
        );
    }
}
