//! Cache trait for storing loaded site reports.
//!
//! This module defines the [`ReportCache`] trait that lets a dashboard skip the
//! provider when a site is selected again.

use async_trait::async_trait;
use std::time::Duration;

use crate::{
    error::Result,
    types::{Site, SiteReport},
};

/// Trait for caching loaded site reports.
///
/// Entries are keyed by provider name and site.
#[async_trait]
pub trait ReportCache: Send + Sync {
    /// Retrieves a cached report.
    ///
    /// Returns `Ok(Some(report))` if cached, `Ok(None)` if not cached.
    async fn get_report(&self, provider: &str, site: &Site) -> Result<Option<SiteReport>>;

    /// Stores a report in the cache, replacing any previous entry for its site.
    async fn put_report(&self, provider: &str, report: &SiteReport) -> Result<()>;

    /// Removes cache entries older than the specified TTL.
    ///
    /// Returns the number of entries invalidated.
    async fn invalidate_stale(&self, ttl: Duration) -> Result<usize>;

    /// Clears all cached data.
    async fn clear(&self) -> Result<()>;
}
