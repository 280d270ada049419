use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64};
use crate::error::PlotResult;

/// One `(x, y)` sample. Points carry no identity beyond their value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn from_decimal(x: Decimal, y: Decimal) -> PlotResult<Self> {
        Ok(Self {
            x: decimal_to_f64(x, "x")?,
            y: decimal_to_f64(y, "y")?,
        })
    }

    /// Builds a time-series sample with `x` in unix seconds.
    pub fn from_time(time: DateTime<Utc>, value: Decimal) -> PlotResult<Self> {
        Ok(Self {
            x: datetime_to_unix_seconds(time),
            y: decimal_to_f64(value, "value")?,
        })
    }

    #[must_use]
    pub fn coordinate(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Axis selector used by the domain builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

/// Ordered samples of one plotted line. Order defines polyline connectivity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Series {
    points: Vec<Point>,
}

impl Series {
    #[must_use]
    pub fn new(points: Vec<Point>) -> Self {
        Self { points }
    }

    #[must_use]
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn push(&mut self, point: Point) {
        self.points.push(point);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Point> {
        self.points.iter()
    }
}

impl From<Vec<Point>> for Series {
    fn from(points: Vec<Point>) -> Self {
        Self::new(points)
    }
}

impl FromIterator<Point> for Series {
    fn from_iter<I: IntoIterator<Item = Point>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Ordered collection of series. Insertion order is draw order and palette
/// index order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SeriesSet {
    series: Vec<Series>,
}

impl SeriesSet {
    #[must_use]
    pub fn new(series: Vec<Series>) -> Self {
        Self { series }
    }

    #[must_use]
    pub fn single(series: Series) -> Self {
        Self::new(vec![series])
    }

    #[must_use]
    pub fn series(&self) -> &[Series] {
        &self.series
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.series.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    pub fn push(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Series> {
        self.series.iter()
    }

    /// Total number of points across every series.
    #[must_use]
    pub fn point_count(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }
}

impl From<Vec<Series>> for SeriesSet {
    fn from(series: Vec<Series>) -> Self {
        Self::new(series)
    }
}

impl FromIterator<Series> for SeriesSet {
    fn from_iter<I: IntoIterator<Item = Series>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
