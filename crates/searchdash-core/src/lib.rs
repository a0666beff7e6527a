#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/searchdash/searchdash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Core types and transforms for search-performance dashboards.
//!
//! The pipeline a dashboard runs on every selection change is
//! [`filter_range`] → [`aggregate()`] → [`summarize`], with windows coming
//! from a [`PeriodResolver`]. The three steps are pure functions over slices.
//!
//! Around the pipeline this crate defines:
//!
//! - [`SearchAnalyticsProvider`](provider::SearchAnalyticsProvider) - Source of sites, series and breakdowns
//! - [`ReportCache`](cache::ReportCache) - Caching abstraction for loaded reports
//! - [`frame`] - Conversion between point series and polars frames

/// Day-to-month aggregation.
pub mod aggregate;
/// Share calculations for breakdown tables.
pub mod breakdown;
/// Cache trait for loaded reports.
pub mod cache;
/// Error types for dashboard operations.
pub mod error;
/// Date-window filtering.
pub mod filter;
/// Conversion between point series and data frames.
pub mod frame;
/// Granularity and period token definitions.
pub mod granularity;
/// Period resolution against an anchor date.
pub mod period;
/// Provider trait for analytics sources.
pub mod provider;
/// Summary statistics.
pub mod summary;
/// Core data types (TimeSeriesPoint, PeriodWindow, Summary, etc.).
pub mod types;

// Re-export commonly used items at crate root
pub use aggregate::{aggregate, aggregate_by_month};
pub use breakdown::{relative_to_leader, share_of_total};
pub use cache::ReportCache;
pub use error::{DashboardError, Result};
pub use filter::filter_range;
pub use frame::{series_from_frame, series_to_frame};
pub use granularity::{Granularity, Period};
pub use period::PeriodResolver;
pub use provider::SearchAnalyticsProvider;
pub use summary::summarize;
pub use types::{
    Breakdowns, CountryMetrics, DeviceMetrics, MonthKey, PageMetrics, PeriodWindow, QueryMetrics,
    Site, SiteReport, Summary, TimeSeriesPoint,
};
