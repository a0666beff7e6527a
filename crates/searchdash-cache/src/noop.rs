//! No-op cache implementation.

use async_trait::async_trait;
use searchdash_core::{ReportCache, Result, Site, SiteReport};
use std::time::Duration;
use tracing::trace;

/// A no-op cache that doesn't store anything.
///
/// `get_report` always returns `Ok(None)` and `put_report` returns `Ok(())`.
/// Useful for disabling caching or forcing every site selection through the
/// provider.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCache;

impl NoopCache {
    /// Create a new no-op cache.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

#[async_trait]
impl ReportCache for NoopCache {
    async fn get_report(&self, _provider: &str, _site: &Site) -> Result<Option<SiteReport>> {
        trace!("NoopCache: get_report called, returning None");
        Ok(None)
    }

    async fn put_report(&self, _provider: &str, _report: &SiteReport) -> Result<()> {
        trace!("NoopCache: put_report called, doing nothing");
        Ok(())
    }

    async fn invalidate_stale(&self, _ttl: Duration) -> Result<usize> {
        trace!("NoopCache: invalidate_stale called, returning 0");
        Ok(0)
    }

    async fn clear(&self) -> Result<()> {
        trace!("NoopCache: clear called, doing nothing");
        Ok(())
    }
}
