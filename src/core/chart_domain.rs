use serde::{Deserialize, Serialize};

use crate::core::axis_domain::{AxisDomain, build_axis_domain};
use crate::core::types::{Axis, Point, SeriesSet};
use crate::error::PlotResult;

/// Per-axis build options for [`build_chart_domain_with`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartDomainOptions {
    pub x_display_size: f64,
    pub y_display_size: f64,
    #[serde(default)]
    pub expand_x: bool,
    #[serde(default)]
    pub expand_y: bool,
}

impl ChartDomainOptions {
    #[must_use]
    pub fn new(x_display_size: f64, y_display_size: f64) -> Self {
        Self {
            x_display_size,
            y_display_size,
            expand_x: false,
            expand_y: false,
        }
    }

    #[must_use]
    pub fn with_expansion(mut self, expand_x: bool, expand_y: bool) -> Self {
        self.expand_x = expand_x;
        self.expand_y = expand_y;
        self
    }
}

/// Both axis domains of one chart plus the composed point mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDomain {
    pub x: AxisDomain,
    pub y: AxisDomain,
}

impl ChartDomain {
    #[must_use]
    pub fn new(x: AxisDomain, y: AxisDomain) -> Self {
        Self { x, y }
    }

    /// Maps a data point into display space. Axes are independent.
    #[must_use]
    pub fn map(&self, point: Point) -> Point {
        Point::new(self.x.map(point.x), self.y.map(point.y))
    }

    #[must_use]
    pub fn invert(&self, pixel: Point) -> Point {
        Point::new(self.x.invert(pixel.x), self.y.invert(pixel.y))
    }

    #[must_use]
    pub fn axis(&self, axis: Axis) -> &AxisDomain {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }

    /// Display extent as `(width, height)`.
    #[must_use]
    pub fn display_size(&self) -> (f64, f64) {
        (self.x.display_size(), self.y.display_size())
    }
}

/// Builds both axes without range expansion.
pub fn build_chart_domain(
    series_set: &SeriesSet,
    x_display_size: f64,
    y_display_size: f64,
) -> PlotResult<ChartDomain> {
    build_chart_domain_with(
        series_set,
        ChartDomainOptions::new(x_display_size, y_display_size),
    )
}

pub fn build_chart_domain_with(
    series_set: &SeriesSet,
    options: ChartDomainOptions,
) -> PlotResult<ChartDomain> {
    let x = build_axis_domain(series_set, Axis::X, options.expand_x, options.x_display_size)?;
    let y = build_axis_domain(series_set, Axis::Y, options.expand_y, options.y_display_size)?;
    Ok(ChartDomain::new(x, y))
}
