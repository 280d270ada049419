use tracing::{debug, warn};

use crate::core::{ChartDomain, Series, SeriesSet, build_chart_domain_with, condition_series_set};
use crate::error::{PlotError, PlotResult};
use crate::interaction::{PointerPosition, ViewTransform, ViewportEvent};
use crate::render::{RenderFrame, Renderer};

use super::render_frame_builder::build_render_frame;
use super::validation::validate_plot_config;
use super::{PlotConfig, PlotLayout, PlotSnapshot};

/// Main orchestration facade consumed by host applications.
///
/// `PlotEngine` owns the conditioned data, the chart domain derived from
/// it and the chart's pan/zoom state, and hands finished frames to the
/// renderer.
pub struct PlotEngine<R: Renderer> {
    renderer: R,
    config: PlotConfig,
    layout: PlotLayout,
    series: SeriesSet,
    domain: Option<ChartDomain>,
    view: Option<ViewTransform>,
}

impl<R: Renderer> PlotEngine<R> {
    pub fn new(renderer: R, config: PlotConfig) -> PlotResult<Self> {
        validate_plot_config(&config)?;
        let layout = PlotLayout::new(config.plot_width, config.plot_height)?;
        layout
            .pan_zoom_config(config.max_zoom, config.zoom_steps)
            .validate()?;

        Ok(Self {
            renderer,
            config,
            layout,
            series: SeriesSet::default(),
            domain: None,
            view: None,
        })
    }

    #[must_use]
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    #[must_use]
    pub fn layout(&self) -> PlotLayout {
        self.layout
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Conditioned data currently plotted.
    #[must_use]
    pub fn series(&self) -> &SeriesSet {
        &self.series
    }

    #[must_use]
    pub fn chart_domain(&self) -> Option<&ChartDomain> {
        self.domain.as_ref()
    }

    /// Replaces the plotted data and rebuilds the chart domain.
    ///
    /// On error the previous data and domain are kept.
    pub fn set_series(&mut self, series: SeriesSet) -> PlotResult<()> {
        let series = match self.config.condition_significant_digits {
            Some(digits) => condition_series_set(&series, digits),
            None => series,
        };
        let domain = build_chart_domain_with(&series, self.config.domain_options())?;

        debug!(
            series = series.len(),
            points = series.point_count(),
            x_min = domain.x.min(),
            x_max = domain.x.max(),
            y_min = domain.y.min(),
            y_max = domain.y.max(),
            "chart domain rebuilt"
        );
        self.series = series;
        self.domain = Some(domain);
        Ok(())
    }

    pub fn set_single_series(&mut self, series: Series) -> PlotResult<()> {
        self.set_series(SeriesSet::single(series))
    }

    pub fn build_frame(&self) -> PlotResult<RenderFrame> {
        let domain = self.domain.as_ref().ok_or(PlotError::EmptyInput {
            reason: "no series have been set",
        })?;
        build_render_frame(domain, &self.series, &self.config)
    }

    pub fn render(&mut self) -> PlotResult<()> {
        if self.domain.is_none() {
            warn!("render requested before any series was set");
        }
        let frame = self.build_frame()?;
        self.renderer.render(&frame)
    }

    /// Current transform, if any gesture has touched this chart yet.
    #[must_use]
    pub fn view_transform(&self) -> Option<&ViewTransform> {
        self.view.as_ref()
    }

    /// Returns the transform, creating an identity one on first use.
    pub fn view_transform_mut(&mut self) -> &mut ViewTransform {
        let config = self
            .layout
            .pan_zoom_config(self.config.max_zoom, self.config.zoom_steps);
        self.view.get_or_insert_with(|| {
            debug!(
                pan_scale = config.pan_scale,
                max_zoom = config.max_zoom,
                "creating chart view transform"
            );
            ViewTransform::from_validated(config)
        })
    }

    pub fn drag_start(&mut self, x: f64, y: f64) {
        self.view_transform_mut()
            .on_drag_start(PointerPosition::new(x, y));
    }

    pub fn drag_move(&mut self, x: f64, y: f64) -> bool {
        self.view_transform_mut()
            .on_drag_move(PointerPosition::new(x, y))
    }

    pub fn drag_end(&mut self) {
        self.view_transform_mut().on_drag_end();
    }

    /// Applies one wheel notch and returns the resulting scale.
    pub fn wheel(&mut self, x: f64, y: f64, delta_y: f64) -> f64 {
        self.view_transform_mut()
            .on_wheel(PointerPosition::new(x, y), delta_y)
    }

    pub fn reset_view(&mut self) {
        self.view_transform_mut().on_reset();
    }

    pub fn handle_event(&mut self, event: ViewportEvent) {
        self.view_transform_mut().apply_event(event);
    }

    #[must_use]
    pub fn snapshot(&self) -> PlotSnapshot {
        PlotSnapshot {
            plot_width: self.config.plot_width,
            plot_height: self.config.plot_height,
            kind: self.config.kind,
            series: self.series.clone(),
            x_tick_labels: self
                .domain
                .as_ref()
                .map(|domain| domain.x.tick_labels())
                .unwrap_or_default(),
            y_tick_labels: self
                .domain
                .as_ref()
                .map(|domain| domain.y.tick_labels())
                .unwrap_or_default(),
            domain: self.domain.clone(),
            view: self.view.as_ref().map(ViewTransform::state),
        }
    }

    pub fn snapshot_json_pretty(&self) -> PlotResult<String> {
        self.snapshot().to_json_contract_v1_pretty()
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
