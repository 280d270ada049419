use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};

/// Calibration of one interactive viewport.
///
/// `plot_width`/`plot_height` are the logical plot extents (`W`, `H`) used by
/// the pan clamp. `pan_scale` converts input pixels into view-box units and
/// `view_box_x`/`view_box_y` locate the view-box origin relative to the plot.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanZoomConfig {
    pub plot_width: f64,
    pub plot_height: f64,
    #[serde(default = "default_pan_scale")]
    pub pan_scale: f64,
    #[serde(default)]
    pub view_box_x: f64,
    #[serde(default)]
    pub view_box_y: f64,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: f64,
    #[serde(default = "default_zoom_steps")]
    pub zoom_steps: u32,
}

impl PanZoomConfig {
    /// Creates a config with unit pan scale, view box at the plot origin and
    /// the default zoom table (`4x` over `100` steps).
    #[must_use]
    pub fn new(plot_width: f64, plot_height: f64) -> Self {
        Self {
            plot_width,
            plot_height,
            pan_scale: default_pan_scale(),
            view_box_x: 0.0,
            view_box_y: 0.0,
            max_zoom: default_max_zoom(),
            zoom_steps: default_zoom_steps(),
        }
    }

    #[must_use]
    pub fn with_pan_scale(mut self, pan_scale: f64) -> Self {
        self.pan_scale = pan_scale;
        self
    }

    #[must_use]
    pub fn with_view_box_origin(mut self, x: f64, y: f64) -> Self {
        self.view_box_x = x;
        self.view_box_y = y;
        self
    }

    #[must_use]
    pub fn with_zoom(mut self, max_zoom: f64, zoom_steps: u32) -> Self {
        self.max_zoom = max_zoom;
        self.zoom_steps = zoom_steps;
        self
    }

    pub fn validate(&self) -> PlotResult<()> {
        if !self.plot_width.is_finite()
            || !self.plot_height.is_finite()
            || self.plot_width <= 0.0
            || self.plot_height <= 0.0
        {
            return Err(PlotError::InvalidViewport {
                width: self.plot_width,
                height: self.plot_height,
            });
        }
        if !self.pan_scale.is_finite() || self.pan_scale <= 0.0 {
            return Err(PlotError::InvalidData(
                "pan scale must be finite and > 0".to_owned(),
            ));
        }
        if !self.view_box_x.is_finite() || !self.view_box_y.is_finite() {
            return Err(PlotError::InvalidData(
                "view box origin must be finite".to_owned(),
            ));
        }
        if !self.max_zoom.is_finite() || self.max_zoom < 1.0 {
            return Err(PlotError::InvalidData(
                "max zoom must be finite and >= 1".to_owned(),
            ));
        }
        if self.zoom_steps == 0 {
            return Err(PlotError::InvalidData(
                "zoom steps must be >= 1".to_owned(),
            ));
        }
        Ok(())
    }
}

fn default_pan_scale() -> f64 {
    1.0
}

fn default_max_zoom() -> f64 {
    4.0
}

fn default_zoom_steps() -> u32 {
    100
}
