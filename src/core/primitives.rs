use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use crate::core::types::{Point, Series, SeriesSet};
use crate::error::{PlotError, PlotResult};

pub fn decimal_to_f64(value: Decimal, field_name: &str) -> PlotResult<f64> {
    value.to_f64().ok_or_else(|| {
        PlotError::InvalidData(format!("{field_name} cannot be represented as f64"))
    })
}

#[must_use]
pub fn datetime_to_unix_seconds(time: DateTime<Utc>) -> f64 {
    time.timestamp_millis() as f64 / 1000.0
}

/// Rounds `value` to `digits` significant figures.
///
/// Values that do not fit a `Decimal` (or are not finite) are returned as-is.
#[must_use]
pub fn round_significant(value: f64, digits: u32) -> f64 {
    if !value.is_finite() || value == 0.0 || digits == 0 {
        return value;
    }
    Decimal::from_f64(value)
        .and_then(|decimal| decimal.round_sf(digits))
        .and_then(|rounded| rounded.to_f64())
        .unwrap_or(value)
}

/// Copies a series set with every coordinate rounded to `digits` significant
/// figures. Anything finer sits far below one output pixel.
#[must_use]
pub fn condition_series_set(series_set: &SeriesSet, digits: u32) -> SeriesSet {
    series_set
        .iter()
        .map(|series| {
            series
                .iter()
                .map(|point| {
                    Point::new(
                        round_significant(point.x, digits),
                        round_significant(point.y, digits),
                    )
                })
                .collect::<Series>()
        })
        .collect()
}
