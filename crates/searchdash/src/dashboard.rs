//! Dashboard selection state and the views derived from it.

use std::sync::Arc;

use chrono::NaiveDate;
use polars::prelude::DataFrame;
use tracing::{debug, warn};

use searchdash_core::{
    Breakdowns, DashboardError, Granularity, Period, PeriodResolver, PeriodWindow, ReportCache,
    Result, SearchAnalyticsProvider, Site, SiteReport, Summary, TimeSeriesPoint, aggregate,
    filter_range, relative_to_leader, series_from_frame, series_to_frame, share_of_total,
    summarize,
};

use crate::snapshot::DashboardSnapshot;

/// Window shown before any period is picked: 2025-07-01 to 2025-09-30.
const INITIAL_RANGE: ((i32, u32, u32), (i32, u32, u32)) = ((2025, 7, 1), (2025, 9, 30));

/// Owns the selection state of a search-performance dashboard.
///
/// The dashboard signs in through a [`SearchAnalyticsProvider`], loads one
/// [`SiteReport`] per site selection and keeps it immutable. Every view
/// ([`display_series`](Self::display_series), [`summary`](Self::summary), ...)
/// is recomputed from that report and the current window on each call.
/// Operations that fail leave the previous state untouched.
///
/// # Example
///
/// ```rust,ignore
/// use searchdash::{Dashboard, MockProvider, Site};
///
/// let mut dashboard = Dashboard::new(MockProvider::new());
/// dashboard.authenticate().await?;
/// dashboard.select_site(&Site::new("https://example.com")).await?;
/// dashboard.set_period("12months")?;
///
/// let summary = dashboard.summary()?;
/// ```
pub struct Dashboard {
    provider: Arc<dyn SearchAnalyticsProvider>,
    cache: Option<Arc<dyn ReportCache>>,
    resolver: PeriodResolver,
    authenticated: bool,
    sites: Vec<Site>,
    report: Option<SiteReport>,
    period: Period,
    window: PeriodWindow,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("provider", &self.provider.name())
            .field("cache", &self.cache.as_ref().map(|_| "configured"))
            .field("resolver", &self.resolver)
            .field("authenticated", &self.authenticated)
            .field("sites", &self.sites)
            .field("selected_site", &self.selected_site())
            .field("period", &self.period)
            .field("window", &self.window)
            .finish()
    }
}

impl Dashboard {
    /// Create a dashboard over a provider.
    #[must_use]
    pub fn new<P: SearchAnalyticsProvider + 'static>(provider: P) -> Self {
        Self::with_provider(Arc::new(provider))
    }

    /// Create a dashboard over a shared provider.
    #[must_use]
    pub fn with_provider(provider: Arc<dyn SearchAnalyticsProvider>) -> Self {
        let ((sy, sm, sd), (ey, em, ed)) = INITIAL_RANGE;
        let start = NaiveDate::from_ymd_opt(sy, sm, sd).expect("initial start is a valid date");
        let end = NaiveDate::from_ymd_opt(ey, em, ed).expect("initial end is a valid date");

        Self {
            provider,
            cache: None,
            resolver: PeriodResolver::default(),
            authenticated: false,
            sites: Vec::new(),
            report: None,
            period: Period::Custom,
            window: PeriodWindow {
                start,
                end,
                granularity: Granularity::Month,
            },
        }
    }

    /// Set the cache consulted before the provider on site selection.
    #[must_use]
    pub fn with_cache(mut self, cache: Arc<dyn ReportCache>) -> Self {
        self.cache = Some(cache);
        self
    }

    /// Set the resolver named periods are anchored with.
    #[must_use]
    pub const fn with_resolver(mut self, resolver: PeriodResolver) -> Self {
        self.resolver = resolver;
        self
    }

    // Session

    /// Sign in through the provider and remember the sites it offers.
    pub async fn authenticate(&mut self) -> Result<&[Site]> {
        debug!(provider = self.provider.name(), "Signing in");

        let sites = self.provider.authenticate().await.inspect_err(|e| {
            warn!(provider = self.provider.name(), error = %e, "Sign-in failed");
        })?;

        debug!(count = sites.len(), "Signed in");
        self.authenticated = true;
        self.sites = sites;
        Ok(&self.sites)
    }

    /// Returns true once [`authenticate`](Self::authenticate) succeeded.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    /// Sites available to the session.
    #[must_use]
    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    /// Select a site and load its report.
    ///
    /// The configured cache is checked first; on a miss the site's whole
    /// history, as reported by the provider, is fetched and cached.
    pub async fn select_site(&mut self, site: &Site) -> Result<()> {
        if !self.authenticated {
            return Err(DashboardError::NotAuthenticated);
        }
        if !self.sites.contains(site) {
            return Err(DashboardError::SiteNotFound(site.to_string()));
        }

        let report = self.load_report(site).await?;
        debug!(site = %site, points = report.series.len(), "Site selected");
        self.report = Some(report);
        Ok(())
    }

    /// Currently selected site.
    #[must_use]
    pub fn selected_site(&self) -> Option<&Site> {
        self.report.as_ref().map(|r| &r.site)
    }

    /// Report loaded for the selected site.
    pub fn report(&self) -> Result<&SiteReport> {
        if !self.authenticated {
            return Err(DashboardError::NotAuthenticated);
        }
        self.report.as_ref().ok_or(DashboardError::NoSiteSelected)
    }

    async fn load_report(&self, site: &Site) -> Result<SiteReport> {
        let provider = self.provider.name();

        if let Some(cache) = &self.cache {
            match cache.get_report(provider, site).await {
                Ok(Some(cached)) => {
                    debug!(provider, site = %site, "Cache hit for site report");
                    return Ok(cached);
                }
                Ok(None) => {}
                Err(e) => {
                    warn!(provider, error = %e, "Failed to read report cache");
                }
            }
        }

        let (start, end) = self.provider.available_range(site).await?;
        debug!(provider, site = %site, start = %start, end = %end, "Fetching site report");

        let frame = self.provider.fetch_performance(site, start, end).await?;
        let series = series_from_frame(&frame)?;
        let breakdowns = self.provider.fetch_breakdowns(site).await?;
        let report = SiteReport::new(site.clone(), series, breakdowns);

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.put_report(provider, &report).await {
                warn!(provider, error = %e, "Failed to cache site report");
            }
        }

        Ok(report)
    }

    // Selection

    /// Currently selected period.
    #[must_use]
    pub const fn period(&self) -> Period {
        self.period
    }

    /// Current window, including its granularity.
    #[must_use]
    pub const fn window(&self) -> PeriodWindow {
        self.window
    }

    /// Current granularity.
    #[must_use]
    pub const fn granularity(&self) -> Granularity {
        self.window.granularity
    }

    /// Select a period by token (`1month`, `3months`, `12months`, `16months`, `custom`).
    pub fn set_period(&mut self, token: &str) -> Result<PeriodWindow> {
        self.select_period(token.parse()?)
    }

    /// Select a period.
    ///
    /// Named periods replace the window and apply their default granularity.
    /// [`Period::Custom`] keeps the current window and granularity.
    pub fn select_period(&mut self, period: Period) -> Result<PeriodWindow> {
        if period != Period::Custom {
            self.window = self.resolver.resolve(period)?;
        }
        self.period = period;
        debug!(period = %period, start = %self.window.start, end = %self.window.end, "Period selected");
        Ok(self.window)
    }

    /// Set both bounds of a custom window, keeping the granularity.
    pub fn set_custom_range(&mut self, start: NaiveDate, end: NaiveDate) -> Result<PeriodWindow> {
        self.window = self.resolver.custom(start, end, self.window.granularity)?;
        self.period = Period::Custom;
        debug!(start = %start, end = %end, "Custom range selected");
        Ok(self.window)
    }

    /// Move the start of the window, switching to a custom period.
    pub fn set_custom_start(&mut self, start: NaiveDate) -> Result<PeriodWindow> {
        self.set_custom_range(start, self.window.end)
    }

    /// Move the end of the window, switching to a custom period.
    pub fn set_custom_end(&mut self, end: NaiveDate) -> Result<PeriodWindow> {
        self.set_custom_range(self.window.start, end)
    }

    /// Change the granularity without touching the window or the period.
    pub fn set_granularity(&mut self, granularity: Granularity) {
        self.window = self.window.with_granularity(granularity);
        debug!(granularity = %granularity, "Granularity selected");
    }

    // Views

    /// Series to display: the report filtered to the window, then bucketed at
    /// the current granularity.
    pub fn display_series(&self) -> Result<Vec<TimeSeriesPoint>> {
        let report = self.report()?;
        let filtered = filter_range(&report.series, &self.window);
        Ok(aggregate(&filtered, self.window.granularity))
    }

    /// Summary of the displayed series.
    ///
    /// Fails with [`DashboardError::EmptySeries`] when no point falls in the window.
    pub fn summary(&self) -> Result<Summary> {
        summarize(&self.display_series()?)
    }

    /// Summary of the whole loaded series, independent of the window.
    pub fn overall_summary(&self) -> Result<Summary> {
        summarize(&self.report()?.series)
    }

    /// Displayed series as a polars frame.
    pub fn display_frame(&self) -> Result<DataFrame> {
        series_to_frame(&self.display_series()?)
    }

    /// Breakdown tables of the selected site.
    pub fn breakdowns(&self) -> Result<&Breakdowns> {
        Ok(&self.report()?.breakdowns)
    }

    /// Everything a renderer needs for the current selection.
    ///
    /// A window without points yields a snapshot with an empty series and no
    /// period summary rather than an error.
    pub fn snapshot(&self) -> Result<DashboardSnapshot> {
        let report = self.report()?;
        let series = self.display_series()?;

        let summary = match summarize(&series) {
            Ok(summary) => Some(summary),
            Err(DashboardError::EmptySeries) => None,
            Err(e) => return Err(e),
        };

        Ok(DashboardSnapshot {
            site: report.site.clone(),
            period: self.period,
            window: self.window,
            summary,
            overall_summary: summarize(&report.series).ok(),
            series,
            country_shares: relative_to_leader(&report.breakdowns.countries),
            device_shares: share_of_total(&report.breakdowns.devices),
            breakdowns: report.breakdowns.clone(),
        })
    }
}
