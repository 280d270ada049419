//! plot-rs: nice axis domains and pan/zoom view transforms for 2-D plots.
//!
//! `core` turns raw series into axis domains with human-friendly bounds,
//! ticks and labels. `interaction` owns per-viewport pan/zoom state.
//! `api` ties both together behind [`PlotEngine`], which hands
//! backend-agnostic frames to a [`render::Renderer`].

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{PlotConfig, PlotEngine, PlotKind, PlotSnapshot};
pub use crate::core::{AxisDomain, ChartDomain, Point, Series, SeriesSet, build_chart_domain};
pub use error::{PlotError, PlotResult};
pub use interaction::{ViewTransform, ViewportId, ViewportRegistry};
