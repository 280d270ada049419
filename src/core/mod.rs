pub mod axis_domain;
pub mod chart_domain;
pub mod label_format;
pub mod primitives;
pub mod tick_ladder;
pub mod types;

pub use axis_domain::{
    AxisDomain, EXPAND_RANGE_RATIO, MAX_TICK_COUNT, Ticks, axis_extent, build_axis_domain,
};
pub use chart_domain::{
    ChartDomain, ChartDomainOptions, build_chart_domain, build_chart_domain_with,
};
pub use label_format::{DEFAULT_PLAIN_ORDER_LIMIT, format_tick_label, format_tick_label_with};
pub use primitives::{condition_series_set, round_significant};
pub use tick_ladder::{
    STEP_LADDER, TickStep, coarser_tick_step, order_of_magnitude, select_tick_step,
};
pub use types::{Axis, Point, Series, SeriesSet};
