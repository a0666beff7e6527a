//! Resolution of named periods into concrete date windows.
//!
//! A [`PeriodResolver`] is anchored at a "today" date. Dashboards normally
//! anchor at the wall clock via [`PeriodResolver::today`]; the default anchor
//! is the fixed reference date the demo data ends on, which keeps tests and
//! demos deterministic.

use chrono::{Local, Months, NaiveDate};

use crate::error::{DashboardError, Result};
use crate::granularity::{Granularity, Period};
use crate::types::PeriodWindow;

/// Year, month and day of the default anchor.
const REFERENCE_ANCHOR: (i32, u32, u32) = (2025, 9, 30);

/// Maps [`Period`]s onto inclusive windows ending at an anchor date.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PeriodResolver {
    anchor: NaiveDate,
}

impl PeriodResolver {
    /// Creates a resolver anchored at `anchor`.
    #[must_use]
    pub const fn new(anchor: NaiveDate) -> Self {
        Self { anchor }
    }

    /// Creates a resolver anchored at the local current date.
    #[must_use]
    pub fn today() -> Self {
        Self::new(Local::now().date_naive())
    }

    /// Returns the anchor date. Every named window ends on it.
    #[must_use]
    pub const fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    /// Resolves a named period.
    ///
    /// The start is the anchor moved back by the period's number of calendar
    /// months, clamped to the last day of the target month when the anchor's
    /// day does not exist there (2025-03-31 minus one month is 2025-02-28, not
    /// an overflow into March). [`Period::Custom`] has no implicit window and
    /// fails with [`DashboardError::InvalidPeriod`].
    pub fn resolve(&self, period: Period) -> Result<PeriodWindow> {
        let (Some(months), Some(granularity)) =
            (period.months_back(), period.default_granularity())
        else {
            return Err(DashboardError::InvalidPeriod(format!(
                "{period} requires an explicit start and end"
            )));
        };

        let start = self
            .anchor
            .checked_sub_months(Months::new(months))
            .ok_or_else(|| {
                DashboardError::Other(format!(
                    "cannot move {} back by {months} months",
                    self.anchor
                ))
            })?;

        PeriodWindow::new(start, self.anchor, granularity)
    }

    /// Parses a period token and resolves it.
    pub fn resolve_token(&self, token: &str) -> Result<PeriodWindow> {
        self.resolve(token.parse()?)
    }

    /// Builds a user-supplied window.
    pub fn custom(
        &self,
        start: NaiveDate,
        end: NaiveDate,
        granularity: Granularity,
    ) -> Result<PeriodWindow> {
        PeriodWindow::new(start, end, granularity)
    }
}

impl Default for PeriodResolver {
    fn default() -> Self {
        let (y, m, d) = REFERENCE_ANCHOR;
        Self::new(NaiveDate::from_ymd_opt(y, m, d).expect("reference anchor is a valid date"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_default_anchor() {
        assert_eq!(PeriodResolver::default().anchor(), date(2025, 9, 30));
    }

    #[test]
    fn test_three_months() {
        let resolver = PeriodResolver::new(date(2025, 9, 30));
        let window = resolver.resolve_token("3months").unwrap();

        assert_eq!(window.start, date(2025, 6, 30));
        assert_eq!(window.end, date(2025, 9, 30));
        assert_eq!(window.granularity, Granularity::Month);
    }

    #[test]
    fn test_named_periods() {
        let resolver = PeriodResolver::new(date(2025, 9, 30));

        let one = resolver.resolve(Period::OneMonth).unwrap();
        assert_eq!(one.start, date(2025, 8, 30));
        assert_eq!(one.granularity, Granularity::Day);

        let twelve = resolver.resolve(Period::TwelveMonths).unwrap();
        assert_eq!(twelve.start, date(2024, 9, 30));
        assert_eq!(twelve.granularity, Granularity::Month);

        let sixteen = resolver.resolve(Period::SixteenMonths).unwrap();
        assert_eq!(sixteen.start, date(2024, 5, 30));
        assert_eq!(sixteen.end, date(2025, 9, 30));
    }

    #[test]
    fn test_month_end_clamps() {
        let resolver = PeriodResolver::new(date(2025, 3, 31));
        let window = resolver.resolve(Period::OneMonth).unwrap();
        assert_eq!(window.start, date(2025, 2, 28));

        let resolver = PeriodResolver::new(date(2024, 5, 31));
        let window = resolver.resolve(Period::ThreeMonths).unwrap();
        assert_eq!(window.start, date(2024, 2, 29));
    }

    #[test]
    fn test_unknown_token() {
        let err = PeriodResolver::default().resolve_token("bogus").unwrap_err();
        assert!(matches!(err, DashboardError::InvalidPeriod(token) if token == "bogus"));
    }

    #[test]
    fn test_custom_needs_explicit_range() {
        let err = PeriodResolver::default().resolve(Period::Custom).unwrap_err();
        assert!(matches!(err, DashboardError::InvalidPeriod(_)));
    }

    #[test]
    fn test_custom_window() {
        let resolver = PeriodResolver::default();

        let window = resolver
            .custom(date(2025, 7, 1), date(2025, 9, 30), Granularity::Day)
            .unwrap();
        assert_eq!(window.start, date(2025, 7, 1));
        assert_eq!(window.granularity, Granularity::Day);

        let err = resolver
            .custom(date(2025, 9, 30), date(2025, 7, 1), Granularity::Day)
            .unwrap_err();
        assert!(matches!(err, DashboardError::InvalidRange { .. }));
    }
}
