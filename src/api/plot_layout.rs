use serde::{Deserialize, Serialize};

use crate::error::{PlotError, PlotResult};
use crate::interaction::PanZoomConfig;

/// Margin around the plot, as a fraction of plot height.
pub const FRAME_BUFFER_RATIO: f64 = 0.15;

/// Outer view box enclosing the plot and its label margins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// Geometry of the frame around a `plot_width x plot_height` plot.
///
/// The left margin is wider than the right one to leave room for y-axis
/// labels. `pan_scale` is the number of view-box units per input pixel when
/// the frame is displayed `plot_width` pixels wide.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotLayout {
    pub plot_width: f64,
    pub plot_height: f64,
    pub buffer: f64,
    pub view_box: ViewBox,
    pub pan_scale: f64,
}

impl PlotLayout {
    pub fn new(plot_width: f64, plot_height: f64) -> PlotResult<Self> {
        if !plot_width.is_finite()
            || !plot_height.is_finite()
            || plot_width <= 0.0
            || plot_height <= 0.0
        {
            return Err(PlotError::InvalidViewport {
                width: plot_width,
                height: plot_height,
            });
        }

        let buffer = FRAME_BUFFER_RATIO * plot_height;
        let view_box = ViewBox {
            x: -1.75 * buffer,
            y: -buffer,
            width: plot_width + 3.0 * buffer,
            height: plot_height + 2.0 * buffer,
        };
        Ok(Self {
            plot_width,
            plot_height,
            buffer,
            view_box,
            pan_scale: view_box.width / plot_width,
        })
    }

    /// Pan/zoom calibration matching this frame.
    #[must_use]
    pub fn pan_zoom_config(&self, max_zoom: f64, zoom_steps: u32) -> PanZoomConfig {
        PanZoomConfig::new(self.plot_width, self.plot_height)
            .with_pan_scale(self.pan_scale)
            .with_view_box_origin(self.view_box.x, self.view_box.y)
            .with_zoom(max_zoom, zoom_steps)
    }
}
