use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use crate::core::label_format::format_tick_label;
use crate::core::tick_ladder::{coarser_tick_step, order_of_magnitude, select_tick_step};
use crate::core::types::{Axis, Series, SeriesSet};
use crate::error::{PlotError, PlotResult};

/// Fraction of the data range added on each side when expansion is requested.
pub const EXPAND_RANGE_RATIO: f64 = 0.01;

/// Upper bound on the number of ticks of one axis.
pub const MAX_TICK_COUNT: usize = 11;

// Enough to climb from a one-ulp step to any finite range.
const MAX_STEP_ESCALATIONS: usize = 700;

/// Tick values of one axis, at most [`MAX_TICK_COUNT`].
pub type Ticks = SmallVec<[f64; 12]>;

/// Readable bounds, ticks and label precision for one axis.
///
/// `min`/`max` are tick-aligned and `ticks` spans them inclusively.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisDomain {
    min: f64,
    max: f64,
    delta: f64,
    step: f64,
    order_of_magnitude: i32,
    precision: u8,
    display_size: f64,
    ticks: Ticks,
}

impl AxisDomain {
    /// Builds a domain from a raw `[min, max]` data extent.
    ///
    /// A zero-width extent is widened to `max = min + 1` instead of failing
    /// (or by one float spacing where `min + 1 == min`).
    ///
    /// When a step is too fine for the float spacing at the data's magnitude
    /// it is coarsened along the ladder until the ticks are strictly
    /// increasing and at most [`MAX_TICK_COUNT`] of them remain.
    pub fn from_extent(
        raw_min: f64,
        raw_max: f64,
        expand_range: bool,
        display_size: f64,
    ) -> PlotResult<Self> {
        validate_display_size(display_size)?;
        if !raw_min.is_finite() || !raw_max.is_finite() || raw_min > raw_max {
            return Err(PlotError::InvalidData(
                "axis extent must be finite with min <= max".to_owned(),
            ));
        }

        let mut min = raw_min;
        let mut max = raw_max;
        let mut widened_by_ulp = false;
        if max == min {
            max = min + 1.0;
            if max <= min {
                // A unit is below the float spacing here; widen by one ulp.
                max = next_float_up(min);
                widened_by_ulp = true;
            }
        }

        if expand_range {
            let pad = (max - min) * EXPAND_RANGE_RATIO;
            // Exact 0 (and 1 on the low side) are reference lines worth keeping.
            if max != 0.0 {
                max += pad;
            }
            if min != 0.0 && min != 1.0 {
                min -= pad;
            }
        }

        let mut tick_step = select_tick_step(max - min);
        let mut attempts = 0;
        let layout = loop {
            if let Some(layout) = TickLayout::new(min, max, tick_step.step) {
                // One float spacing always fits in a single interval.
                let max_ticks = if widened_by_ulp { 2 } else { MAX_TICK_COUNT };
                if layout.ticks.len() <= max_ticks {
                    break layout;
                }
            }
            attempts += 1;
            if attempts > MAX_STEP_ESCALATIONS {
                return Err(PlotError::InvalidData(format!(
                    "axis extent [{raw_min}, {raw_max}] has no representable domain"
                )));
            }
            tick_step = coarser_tick_step(tick_step);
        };
        if attempts > 0 {
            debug!(
                raw_min,
                raw_max,
                step = tick_step.step,
                attempts,
                "tick step coarsened to keep ticks distinct"
            );
        }
        let TickLayout {
            domain_min,
            domain_max,
            ticks,
        } = layout;
        let delta = domain_max - domain_min;
        let step = tick_step.step;

        Ok(Self {
            min: domain_min,
            max: domain_max,
            delta,
            step,
            order_of_magnitude: order_of_magnitude(domain_max),
            precision: tick_step.precision,
            display_size,
            ticks,
        })
    }

    #[must_use]
    pub fn min(&self) -> f64 {
        self.min
    }

    #[must_use]
    pub fn max(&self) -> f64 {
        self.max
    }

    #[must_use]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Step picked from the tick ladder before ticks were re-spaced.
    #[must_use]
    pub fn step(&self) -> f64 {
        self.step
    }

    #[must_use]
    pub fn order_of_magnitude(&self) -> i32 {
        self.order_of_magnitude
    }

    #[must_use]
    pub fn precision(&self) -> u8 {
        self.precision
    }

    #[must_use]
    pub fn display_size(&self) -> f64 {
        self.display_size
    }

    #[must_use]
    pub fn ticks(&self) -> &[f64] {
        &self.ticks
    }

    /// Maps a data value into `[0, display_size]`.
    ///
    /// `map(min) == 0` and `map(max) == display_size` hold exactly.
    #[must_use]
    pub fn map(&self, value: f64) -> f64 {
        (value - self.min) / self.delta * self.display_size
    }

    /// Inverse of [`AxisDomain::map`].
    #[must_use]
    pub fn invert(&self, pixel: f64) -> f64 {
        self.min + pixel / self.display_size * self.delta
    }

    #[must_use]
    pub fn tick_labels(&self) -> Vec<String> {
        self.ticks
            .iter()
            .map(|tick| format_tick_label(*tick, self.order_of_magnitude, self.precision))
            .collect()
    }
}

/// Builds the domain of one axis across every series of `series_set`.
pub fn build_axis_domain(
    series_set: &SeriesSet,
    axis: Axis,
    expand_range: bool,
    display_size: f64,
) -> PlotResult<AxisDomain> {
    let (raw_min, raw_max) = axis_extent(series_set, axis)?;
    let domain = AxisDomain::from_extent(raw_min, raw_max, expand_range, display_size)?;
    debug!(
        ?axis,
        raw_min,
        raw_max,
        min = domain.min,
        max = domain.max,
        step = domain.step,
        tick_count = domain.ticks.len(),
        "built axis domain"
    );
    Ok(domain)
}

/// Raw `(min, max)` of one coordinate across all series.
pub fn axis_extent(series_set: &SeriesSet, axis: Axis) -> PlotResult<(f64, f64)> {
    if series_set.is_empty() {
        return Err(PlotError::EmptyInput {
            reason: "series set contains no series",
        });
    }
    if series_set.iter().any(Series::is_empty) {
        return Err(PlotError::EmptyInput {
            reason: "series set contains an empty series",
        });
    }

    reduce_extent(series_set, axis)
}

#[cfg(not(feature = "parallel-domain"))]
fn reduce_extent(series_set: &SeriesSet, axis: Axis) -> PlotResult<(f64, f64)> {
    series_set
        .iter()
        .map(|series| series_extent(series, axis))
        .try_fold((f64::INFINITY, f64::NEG_INFINITY), |acc, extent| {
            extent.map(|extent| merge_extent(acc, extent))
        })
}

#[cfg(feature = "parallel-domain")]
fn reduce_extent(series_set: &SeriesSet, axis: Axis) -> PlotResult<(f64, f64)> {
    use rayon::prelude::*;

    series_set
        .series()
        .par_iter()
        .map(|series| series_extent(series, axis))
        .try_reduce(
            || (f64::INFINITY, f64::NEG_INFINITY),
            |left, right| Ok(merge_extent(left, right)),
        )
}

fn series_extent(series: &Series, axis: Axis) -> PlotResult<(f64, f64)> {
    series
        .iter()
        .try_fold((f64::INFINITY, f64::NEG_INFINITY), |(min, max), point| {
            let value = point.coordinate(axis);
            if !value.is_finite() {
                return Err(PlotError::InvalidData(format!(
                    "{axis:?} coordinate must be finite, got {value}"
                )));
            }
            Ok((min.min(value), max.max(value)))
        })
}

fn merge_extent(left: (f64, f64), right: (f64, f64)) -> (f64, f64) {
    (left.0.min(right.0), left.1.max(right.1))
}

/// Step-aligned bounds and evenly re-spaced ticks for one candidate step.
struct TickLayout {
    domain_min: f64,
    domain_max: f64,
    ticks: Ticks,
}

impl TickLayout {
    /// Returns `None` when the step cannot produce distinct, finite ticks
    /// enclosing `[min, max]`.
    fn new(min: f64, max: f64, step: f64) -> Option<Self> {
        let mut domain_min = (min / step).floor() * step;
        let mut domain_max = (max / step).ceil() * step;
        if domain_min > min {
            domain_min -= step;
        }
        if domain_max < max {
            domain_max += step;
        }
        let delta = domain_max - domain_min;
        if !domain_min.is_finite()
            || !domain_max.is_finite()
            || !(delta > 0.0)
            || domain_min > min
            || domain_max < max
        {
            return None;
        }

        let tick_count = ((delta / step).round() as usize).max(1);
        if tick_count >= MAX_TICK_COUNT {
            return None;
        }
        let increment = delta / tick_count as f64;
        let ticks: Ticks = (0..=tick_count)
            .map(|index| {
                if index == tick_count {
                    domain_max
                } else {
                    domain_min + index as f64 * increment
                }
            })
            .collect();
        if !ticks.windows(2).all(|pair| pair[0] < pair[1]) {
            return None;
        }

        Some(Self {
            domain_min,
            domain_max,
            ticks,
        })
    }
}

fn next_float_up(value: f64) -> f64 {
    let bits = value.to_bits();
    if value >= 0.0 {
        f64::from_bits(bits + 1)
    } else {
        f64::from_bits(bits - 1)
    }
}

pub(crate) fn validate_display_size(display_size: f64) -> PlotResult<()> {
    if !display_size.is_finite() || display_size <= 0.0 {
        return Err(PlotError::InvalidData(format!(
            "display size must be finite and > 0, got {display_size}"
        )));
    }
    Ok(())
}
