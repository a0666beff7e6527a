//! In-memory cache implementation.

use async_trait::async_trait;
use chrono::Utc;
use searchdash_core::{ReportCache, Result, Site, SiteReport};
use std::collections::HashMap;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, instrument};

/// Cache entry with timestamp for TTL-based invalidation.
#[derive(Debug, Clone)]
struct CacheEntry<T> {
    data: T,
    cached_at: chrono::DateTime<Utc>,
}

impl<T> CacheEntry<T> {
    fn new(data: T) -> Self {
        Self {
            data,
            cached_at: Utc::now(),
        }
    }

    fn is_stale(&self, ttl: Duration) -> bool {
        let age = Utc::now().signed_duration_since(self.cached_at);
        age > chrono::TimeDelta::from_std(ttl).unwrap_or(chrono::TimeDelta::MAX)
    }
}

/// Key for report cache entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ReportKey {
    provider: String,
    site: Site,
}

impl ReportKey {
    fn new(provider: &str, site: &Site) -> Self {
        Self {
            provider: provider.to_string(),
            site: site.clone(),
        }
    }
}

/// In-memory report cache.
///
/// Reports are stored in a `RwLock`-protected `HashMap` and are lost when the
/// cache is dropped. Reports are cloned on get/put.
#[derive(Debug, Default)]
pub struct InMemoryCache {
    reports: RwLock<HashMap<ReportKey, CacheEntry<SiteReport>>>,
}

impl InMemoryCache {
    /// Create a new empty in-memory cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of cached reports.
    pub async fn len(&self) -> usize {
        self.reports.read().await.len()
    }

    /// Returns true if no reports are cached.
    pub async fn is_empty(&self) -> bool {
        self.reports.read().await.is_empty()
    }
}

#[async_trait]
impl ReportCache for InMemoryCache {
    #[instrument(skip(self), fields(provider = %provider, site = %site))]
    async fn get_report(&self, provider: &str, site: &Site) -> Result<Option<SiteReport>> {
        let cache = self.reports.read().await;
        match cache.get(&ReportKey::new(provider, site)) {
            Some(entry) => {
                debug!("Cache hit for site report");
                Ok(Some(entry.data.clone()))
            }
            None => {
                debug!("Cache miss for site report");
                Ok(None)
            }
        }
    }

    #[instrument(skip(self, report), fields(provider = %provider, site = %report.site))]
    async fn put_report(&self, provider: &str, report: &SiteReport) -> Result<()> {
        let key = ReportKey::new(provider, &report.site);

        let mut cache = self.reports.write().await;
        cache.insert(key, CacheEntry::new(report.clone()));
        debug!("Cached report with {} points", report.series.len());
        Ok(())
    }

    #[instrument(skip(self))]
    async fn invalidate_stale(&self, ttl: Duration) -> Result<usize> {
        let mut cache = self.reports.write().await;
        let before = cache.len();
        cache.retain(|_, entry| !entry.is_stale(ttl));
        let removed = before - cache.len();

        if removed > 0 {
            debug!("Invalidated {} stale cache entries", removed);
        }

        Ok(removed)
    }

    #[instrument(skip(self))]
    async fn clear(&self) -> Result<()> {
        self.reports.write().await.clear();
        debug!("Cleared all cache entries");
        Ok(())
    }
}
