//! Granularity and period token definitions.
//!
//! This module defines [`Granularity`] for choosing how a series is bucketed
//! for display and [`Period`] for the named date windows a dashboard offers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DashboardError;

/// Bucketing of a displayed series.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// Points are shown as supplied.
    Day,
    /// Points are collapsed into one record per calendar month.
    #[default]
    Month,
}

impl Granularity {
    /// Returns the selector token (`"day"` or `"month"`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
        }
    }
}

impl fmt::Display for Granularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Granularity {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "day" => Ok(Self::Day),
            "month" => Ok(Self::Month),
            other => Err(DashboardError::InvalidGranularity(other.to_string())),
        }
    }
}

/// Named reporting period.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    /// Last calendar month, shown daily.
    #[serde(rename = "1month")]
    OneMonth,
    /// Last three calendar months.
    #[serde(rename = "3months")]
    ThreeMonths,
    /// Last twelve calendar months.
    #[serde(rename = "12months")]
    TwelveMonths,
    /// Last sixteen calendar months.
    #[serde(rename = "16months")]
    SixteenMonths,
    /// A user-supplied window.
    #[default]
    #[serde(rename = "custom")]
    Custom,
}

impl Period {
    /// All periods in the order a period picker lists them.
    pub const ALL: [Self; 5] = [
        Self::OneMonth,
        Self::ThreeMonths,
        Self::TwelveMonths,
        Self::SixteenMonths,
        Self::Custom,
    ];

    /// Returns the period token.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::OneMonth => "1month",
            Self::ThreeMonths => "3months",
            Self::TwelveMonths => "12months",
            Self::SixteenMonths => "16months",
            Self::Custom => "custom",
        }
    }

    /// Number of calendar months the window reaches back from the anchor.
    ///
    /// `None` for [`Period::Custom`], whose bounds come from the user.
    #[must_use]
    pub const fn months_back(&self) -> Option<u32> {
        match self {
            Self::OneMonth => Some(1),
            Self::ThreeMonths => Some(3),
            Self::TwelveMonths => Some(12),
            Self::SixteenMonths => Some(16),
            Self::Custom => None,
        }
    }

    /// Granularity applied when this period is picked.
    ///
    /// `None` for [`Period::Custom`], which keeps whatever the user selected.
    #[must_use]
    pub const fn default_granularity(&self) -> Option<Granularity> {
        match self {
            Self::OneMonth => Some(Granularity::Day),
            Self::ThreeMonths | Self::TwelveMonths | Self::SixteenMonths => {
                Some(Granularity::Month)
            }
            Self::Custom => None,
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = DashboardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .ok_or_else(|| DashboardError::InvalidPeriod(s.to_string()))
    }
}
