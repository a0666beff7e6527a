#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/searchdash/searchdash/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

//! Mock search analytics provider.
//!
//! This crate provides a demo data provider that implements the
//! [`SearchAnalyticsProvider`] trait from `searchdash-core` without any
//! network access.
//!
//! # Features
//!
//! - Simulated sign-in and loading latency (1.5 s and 1 s by default)
//! - Two demo sites
//! - Weekly series with a rising click trend and an improving position
//! - Seeded generation, so the same seed always yields the same data
//!
//! # Example
//!
//! ```no_run
//! use searchdash_mock::MockProvider;
//! use searchdash_core::{SearchAnalyticsProvider, Site};
//! use chrono::NaiveDate;
//!
//! # async fn example() -> searchdash_core::Result<()> {
//! let provider = MockProvider::new();
//! let sites = provider.authenticate().await?;
//! let start = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
//! let end = NaiveDate::from_ymd_opt(2025, 9, 30).unwrap();
//!
//! let df = provider.fetch_performance(&sites[0], start, end).await?;
//! println!("Fetched {} rows", df.height());
//! # Ok(())
//! # }
//! ```

use std::time::Duration;

use async_trait::async_trait;
use chrono::{Days, NaiveDate};
use polars::prelude::DataFrame;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use searchdash_core::{
    Breakdowns, CountryMetrics, DashboardError, DeviceMetrics, PageMetrics, QueryMetrics, Result,
    SearchAnalyticsProvider, Site, TimeSeriesPoint, series_to_frame,
};
use tokio::time::sleep;
use tracing::debug;

/// Sites every demo account can report on.
const DEMO_SITES: [&str; 2] = ["https://example.com", "https://blog.example.com"];

/// First day of the generated series.
const SERIES_START: (i32, u32, u32) = (2024, 6, 1);

/// Last day the generated series may reach.
const SERIES_END: (i32, u32, u32) = (2025, 9, 30);

/// Days between generated points.
const SERIES_STEP_DAYS: u64 = 7;

/// Default simulated sign-in latency in milliseconds.
const DEFAULT_SIGN_IN_LATENCY_MS: u64 = 1500;

/// Default simulated loading latency in milliseconds.
const DEFAULT_LOAD_LATENCY_MS: u64 = 1000;

/// Default generator seed.
const DEFAULT_SEED: u64 = 0x5eed_da5b;

/// Demo analytics provider.
///
/// Implements [`SearchAnalyticsProvider`] over generated data.
#[derive(Debug, Clone)]
pub struct MockProvider {
    sign_in_latency: Duration,
    load_latency: Duration,
    seed: u64,
}

impl MockProvider {
    /// Create a mock provider with the default latencies and seed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sign_in_latency: Duration::from_millis(DEFAULT_SIGN_IN_LATENCY_MS),
            load_latency: Duration::from_millis(DEFAULT_LOAD_LATENCY_MS),
            seed: DEFAULT_SEED,
        }
    }

    /// Create a mock provider that answers immediately.
    #[must_use]
    pub const fn instant() -> Self {
        Self::new().with_latency(Duration::ZERO, Duration::ZERO)
    }

    /// Set the simulated sign-in and loading latencies.
    #[must_use]
    pub const fn with_latency(mut self, sign_in: Duration, load: Duration) -> Self {
        self.sign_in_latency = sign_in;
        self.load_latency = load;
        self
    }

    /// Set the generator seed.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generate the full weekly series.
    ///
    /// With `t` the elapsed fraction of the series span and `base` drawn from
    /// `400..600`, each point gets `clicks = base + 600 t + U(0, 100)`,
    /// `impressions = (base + 600 t) * 25 + U(0, 3000)`,
    /// `ctr = 3.5 + U(0, 1.5)` and `position = 9 - 4 t`.
    #[must_use]
    pub fn generate_series(&self) -> Vec<TimeSeriesPoint> {
        let (Some(start), Some(end)) = (ymd(SERIES_START), ymd(SERIES_END)) else {
            return Vec::new();
        };
        let span = (end - start).num_days() as f64;
        let mut rng = StdRng::seed_from_u64(self.seed);

        let mut points = Vec::new();
        let mut date = start;
        while date <= end {
            let t = (date - start).num_days() as f64 / span;
            let base = 400.0 + rng.gen_range(0.0..200.0);
            let trend = t * 600.0;

            points.push(TimeSeriesPoint::new(
                date,
                (base + trend + rng.gen_range(0.0..100.0)).round() as u64,
                ((base + trend) * 25.0 + rng.gen_range(0.0..3000.0)).round() as u64,
                3.5 + rng.gen_range(0.0..1.5),
                9.0 - t * 4.0,
            ));

            match date.checked_add_days(Days::new(SERIES_STEP_DAYS)) {
                Some(next) => date = next,
                None => break,
            }
        }

        points
    }

    /// Fixed breakdown tables served for every site.
    #[must_use]
    pub fn demo_breakdowns() -> Breakdowns {
        let country = |country: &str, clicks, impressions, ctr| CountryMetrics {
            country: country.to_string(),
            clicks,
            impressions,
            ctr,
        };
        let device = |device: &str, clicks, impressions| DeviceMetrics {
            device: device.to_string(),
            clicks,
            impressions,
        };
        let page = |page: &str, clicks, impressions, ctr, position| PageMetrics {
            page: page.to_string(),
            clicks,
            impressions,
            ctr,
            position,
        };
        let query = |query: &str, clicks, impressions, ctr, position| QueryMetrics {
            query: query.to_string(),
            clicks,
            impressions,
            ctr,
            position,
        };

        Breakdowns {
            countries: vec![
                country("Poland", 8500, 185_000, 4.59),
                country("USA", 1200, 32_000, 3.75),
                country("Germany", 950, 28_000, 3.39),
                country("UK", 720, 21_000, 3.43),
                country("France", 580, 18_500, 3.14),
            ],
            devices: vec![
                device("Mobile", 5800, 135_000),
                device("Desktop", 4200, 98_000),
                device("Tablet", 1000, 25_000),
            ],
            top_pages: vec![
                page("/blog/seo-tips-2025", 2100, 45_000, 4.67, 4.2),
                page("/products/category-a", 1850, 42_000, 4.40, 5.1),
                page("/", 1600, 38_000, 4.21, 3.8),
                page("/blog/marketing-content", 1320, 35_000, 3.77, 6.3),
                page("/services", 1100, 28_000, 3.93, 5.8),
                page("/blog/google-analytics", 980, 25_000, 3.92, 7.1),
                page("/contact", 850, 22_000, 3.86, 8.2),
                page("/about", 720, 19_000, 3.79, 6.9),
            ],
            top_queries: vec![
                query("seo optimization", 1250, 28_000, 4.46, 4.5),
                query("online marketing", 1120, 26_500, 4.23, 5.2),
                query("website positioning", 980, 24_000, 4.08, 6.1),
                query("content marketing", 850, 21_000, 4.05, 5.8),
                query("google analytics", 720, 19_000, 3.79, 6.5),
                query("social media marketing", 650, 17_500, 3.71, 7.2),
                query("seo strategy", 580, 15_800, 3.67, 7.8),
                query("google ads", 520, 14_200, 3.66, 8.1),
            ],
        }
    }

    fn demo_sites() -> Vec<Site> {
        DEMO_SITES.into_iter().map(Site::from).collect()
    }

    fn check_site(site: &Site) -> Result<()> {
        if DEMO_SITES.contains(&site.as_str()) {
            Ok(())
        } else {
            Err(DashboardError::SiteNotFound(site.to_string()))
        }
    }

    async fn simulate(latency: Duration) {
        if !latency.is_zero() {
            debug!("Simulating latency: {}ms", latency.as_millis());
            sleep(latency).await;
        }
    }
}

impl Default for MockProvider {
    fn default() -> Self {
        Self::new()
    }
}

fn ymd((y, m, d): (i32, u32, u32)) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(y, m, d)
}

#[async_trait]
impl SearchAnalyticsProvider for MockProvider {
    fn name(&self) -> &str {
        "Demo"
    }

    async fn authenticate(&self) -> Result<Vec<Site>> {
        Self::simulate(self.sign_in_latency).await;
        let sites = Self::demo_sites();
        debug!(count = sites.len(), "Signed in to demo account");
        Ok(sites)
    }

    async fn available_range(&self, site: &Site) -> Result<(NaiveDate, NaiveDate)> {
        Self::check_site(site)?;
        match (ymd(SERIES_START), ymd(SERIES_END)) {
            (Some(start), Some(end)) => Ok((start, end)),
            _ => Err(DashboardError::Other("invalid demo series bounds".to_string())),
        }
    }

    async fn fetch_performance(
        &self,
        site: &Site,
        start: NaiveDate,
        end: NaiveDate,
    ) -> Result<DataFrame> {
        if start > end {
            return Err(DashboardError::InvalidRange { start, end });
        }
        Self::check_site(site)?;
        Self::simulate(self.load_latency).await;

        let series: Vec<TimeSeriesPoint> = self
            .generate_series()
            .into_iter()
            .filter(|p| start <= p.date && p.date <= end)
            .collect();

        debug!(site = %site, rows = series.len(), "Generated performance series");
        series_to_frame(&series)
    }

    async fn fetch_breakdowns(&self, site: &Site) -> Result<Breakdowns> {
        Self::check_site(site)?;
        Self::simulate(self.load_latency).await;
        Ok(Self::demo_breakdowns())
    }
}
