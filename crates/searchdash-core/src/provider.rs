//! Provider trait for search analytics sources.

use async_trait::async_trait;
use chrono::NaiveDate;
use polars::prelude::DataFrame;
use std::fmt::Debug;

use crate::{
    error::Result,
    types::{Breakdowns, Site},
};

/// Source of search-performance data for a signed-in account.
///
/// Implementations own the sign-in handshake and whatever transport sits
/// behind it; callers only see sites, frames and breakdown tables.
#[async_trait]
pub trait SearchAnalyticsProvider: Send + Sync + Debug {
    /// Returns the name of this provider (e.g., "Demo").
    fn name(&self) -> &str;

    /// Signs in and returns the sites the account can report on.
    async fn authenticate(&self) -> Result<Vec<Site>>;

    /// Returns the first and last dates the provider holds data for on a site.
    ///
    /// Callers that hold a site's whole history fetch exactly this span.
    async fn available_range(&self, site: &Site) -> Result<(NaiveDate, NaiveDate)>;

    /// Fetches the performance series for a site.
    ///
    /// Returns a DataFrame with columns: date, clicks, impressions, ctr, position
    /// (see [`crate::frame`]), covering the data available between `start` and
    /// `end` inclusive.
    async fn fetch_performance(
        &self,
        site: &Site,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<DataFrame>;

    /// Fetches the country, device, page and query breakdowns for a site.
    async fn fetch_breakdowns(&self, site: &Site) -> Result<Breakdowns>;
}
