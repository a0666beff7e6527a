//! Error types for dashboard operations.
//!
//! This module defines [`DashboardError`] which covers the validation failures
//! of the filter/aggregate/summary pipeline as well as the provider and
//! dashboard-state failures around it.

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur while resolving periods, summarizing series or
/// driving the dashboard.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DashboardError {
    /// The period token is not one of the known tokens, or has no implicit window.
    #[error("Invalid period: {0}")]
    InvalidPeriod(String),

    /// The granularity token is neither `day` nor `month`.
    #[error("Invalid granularity: {0}")]
    InvalidGranularity(String),

    /// A date window whose start lies after its end.
    #[error("Invalid range: start {start} is after end {end}")]
    InvalidRange {
        /// Requested start of the window.
        start: NaiveDate,
        /// Requested end of the window.
        end: NaiveDate,
    },

    /// A mean was requested over a series with no points.
    #[error("Cannot summarize an empty series")]
    EmptySeries,

    /// The operation requires a signed-in session.
    #[error("Not authenticated")]
    NotAuthenticated,

    /// The operation requires a selected site.
    #[error("No site selected")]
    NoSiteSelected,

    /// The site is not one of the sites available to the session.
    #[error("Site not found: {0}")]
    SiteNotFound(String),

    /// Sign-in with the analytics provider failed.
    #[error("Authentication failed for provider {0}")]
    AuthenticationFailed(String),

    /// Error converting between point series and data frames.
    #[error("Frame error: {0}")]
    Frame(String),

    /// Any other error.
    #[error("{0}")]
    Other(String),
}

/// Result type alias using [`DashboardError`].
pub type Result<T> = std::result::Result<T, DashboardError>;
