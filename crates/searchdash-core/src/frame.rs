//! Conversion between point series and polars [`DataFrame`]s.
//!
//! Providers hand their raw series over as frames and renderers can take the
//! display series as one. The layout is:
//!
//! | column | dtype |
//! |---|---|
//! | `date` | `Date` |
//! | `clicks` | `UInt64` |
//! | `impressions` | `UInt64` |
//! | `ctr` | `Float64` |
//! | `position` | `Float64` |

use chrono::{Datelike, NaiveDate};
use polars::prelude::*;

use crate::error::{DashboardError, Result};
use crate::types::TimeSeriesPoint;

/// Days from 0001-01-01 to 1970-01-01; polars dates count days since the Unix epoch.
const UNIX_EPOCH_DAYS_FROM_CE: i32 = 719_163;

fn frame_err(e: PolarsError) -> DashboardError {
    DashboardError::Frame(e.to_string())
}

/// Builds a frame from a point series.
pub fn series_to_frame(points: &[TimeSeriesPoint]) -> Result<DataFrame> {
    let dates: Vec<i32> = points
        .iter()
        .map(|p| p.date.num_days_from_ce() - UNIX_EPOCH_DAYS_FROM_CE)
        .collect();
    let clicks: Vec<u64> = points.iter().map(|p| p.clicks).collect();
    let impressions: Vec<u64> = points.iter().map(|p| p.impressions).collect();
    let ctrs: Vec<f64> = points.iter().map(|p| p.ctr).collect();
    let positions: Vec<f64> = points.iter().map(|p| p.position).collect();

    let date_col = Column::new("date".into(), dates)
        .cast(&DataType::Date)
        .map_err(frame_err)?;

    DataFrame::new(vec![
        date_col,
        Column::new("clicks".into(), clicks),
        Column::new("impressions".into(), impressions),
        Column::new("ctr".into(), ctrs),
        Column::new("position".into(), positions),
    ])
    .map_err(frame_err)
}

/// Reads a point series out of a frame.
///
/// Numeric columns are cast to the expected dtypes first, so integer counts in
/// another width are accepted. Nulls are rejected. The result is sorted
/// ascending by date.
pub fn series_from_frame(df: &DataFrame) -> Result<Vec<TimeSeriesPoint>> {
    let date_col = cast_column(df, "date", &DataType::Date)?;
    let clicks_col = cast_column(df, "clicks", &DataType::UInt64)?;
    let impressions_col = cast_column(df, "impressions", &DataType::UInt64)?;
    let ctr_col = cast_column(df, "ctr", &DataType::Float64)?;
    let position_col = cast_column(df, "position", &DataType::Float64)?;

    let dates = date_col.date().map_err(frame_err)?;
    let clicks = clicks_col.u64().map_err(frame_err)?;
    let impressions = impressions_col.u64().map_err(frame_err)?;
    let ctrs = ctr_col.f64().map_err(frame_err)?;
    let positions = position_col.f64().map_err(frame_err)?;

    let mut points = Vec::with_capacity(df.height());
    let rows = (&dates.0)
        .into_iter()
        .zip(clicks)
        .zip(impressions)
        .zip(ctrs)
        .zip(positions);

    for (row, ((((date, clicks), impressions), ctr), position)) in rows.enumerate() {
        let (Some(days), Some(clicks), Some(impressions), Some(ctr), Some(position)) =
            (date, clicks, impressions, ctr, position)
        else {
            return Err(DashboardError::Frame(format!("null value in row {row}")));
        };
        let date = NaiveDate::from_num_days_from_ce_opt(days + UNIX_EPOCH_DAYS_FROM_CE)
            .ok_or_else(|| DashboardError::Frame(format!("date out of range in row {row}")))?;
        points.push(TimeSeriesPoint::new(date, clicks, impressions, ctr, position));
    }

    points.sort_by_key(|p| p.date);
    Ok(points)
}

fn cast_column(df: &DataFrame, name: &str, dtype: &DataType) -> Result<Column> {
    df.column(name)
        .map_err(frame_err)?
        .cast(dtype)
        .map_err(frame_err)
}
