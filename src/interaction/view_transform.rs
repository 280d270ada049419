use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::Point;
use crate::error::PlotResult;

use super::{
    InteractionMode, PanZoomConfig, PointerPosition, ViewportEvent, ZoomDirection, ZoomTable,
};

#[derive(Debug, Clone, Copy, PartialEq)]
struct DragState {
    start: PointerPosition,
    baseline_pan_x: f64,
    baseline_pan_y: f64,
}

/// Observable state of a [`ViewTransform`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewTransformState {
    pub pan_x: f64,
    pub pan_y: f64,
    pub scale: f64,
    pub zoom_step_index: usize,
    pub mode: InteractionMode,
}

/// Pan offset plus uniform scale layered over already-mapped plot geometry.
///
/// Plot space is y-up with the origin at the plot's bottom-left corner. A
/// content point `c` is displayed at `scale * (c + pan)`, so pan is expressed
/// in unscaled content units. After every mutation the pan is clamped into
/// `[-W, W / scale] x [-H, H / scale]`, which keeps part of the content inside
/// the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewTransform {
    config: PanZoomConfig,
    zoom_table: ZoomTable,
    pan_x: f64,
    pan_y: f64,
    zoom_index: usize,
    drag: Option<DragState>,
}

impl ViewTransform {
    pub fn new(config: PanZoomConfig) -> PlotResult<Self> {
        config.validate()?;
        Ok(Self::from_validated(config))
    }

    pub(crate) fn from_validated(config: PanZoomConfig) -> Self {
        Self {
            zoom_table: ZoomTable::new(config.max_zoom, config.zoom_steps),
            config,
            pan_x: 0.0,
            pan_y: 0.0,
            zoom_index: 0,
            drag: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> PanZoomConfig {
        self.config
    }

    #[must_use]
    pub fn zoom_table(&self) -> &ZoomTable {
        &self.zoom_table
    }

    #[must_use]
    pub fn pan_x(&self) -> f64 {
        self.pan_x
    }

    #[must_use]
    pub fn pan_y(&self) -> f64 {
        self.pan_y
    }

    #[must_use]
    pub fn scale(&self) -> f64 {
        self.zoom_table.scale_at(self.zoom_index)
    }

    #[must_use]
    pub fn zoom_step_index(&self) -> usize {
        self.zoom_index
    }

    #[must_use]
    pub fn mode(&self) -> InteractionMode {
        if self.drag.is_some() {
            InteractionMode::Dragging
        } else {
            InteractionMode::Idle
        }
    }

    #[must_use]
    pub fn state(&self) -> ViewTransformState {
        ViewTransformState {
            pan_x: self.pan_x,
            pan_y: self.pan_y,
            scale: self.scale(),
            zoom_step_index: self.zoom_index,
            mode: self.mode(),
        }
    }

    #[must_use]
    pub fn is_identity(&self) -> bool {
        self.pan_x == 0.0 && self.pan_y == 0.0 && self.zoom_index == 0
    }

    /// Starts a drag, remembering the pointer and the current pan.
    ///
    /// A second drag-start without a drag-end simply re-baselines.
    pub fn on_drag_start(&mut self, pointer: PointerPosition) {
        self.drag = Some(DragState {
            start: pointer,
            baseline_pan_x: self.pan_x,
            baseline_pan_y: self.pan_y,
        });
        trace!(x = pointer.x, y = pointer.y, "drag start");
    }

    /// Updates the pan from the pointer delta since drag-start.
    ///
    /// Pan speed is divided by the current scale so the content follows the
    /// pointer at any zoom level. Returns `false` when no drag is active.
    pub fn on_drag_move(&mut self, pointer: PointerPosition) -> bool {
        let Some(drag) = self.drag else {
            return false;
        };
        if !pointer.is_finite() {
            return false;
        }

        let factor = self.config.pan_scale / self.scale();
        self.pan_x = drag.baseline_pan_x + (pointer.x - drag.start.x) * factor;
        // Pointer y grows downward; plot space is y-up.
        self.pan_y = drag.baseline_pan_y - (pointer.y - drag.start.y) * factor;
        self.constrain();
        trace!(pan_x = self.pan_x, pan_y = self.pan_y, "drag move");
        true
    }

    pub fn on_drag_end(&mut self) {
        if self.drag.take().is_some() {
            trace!(pan_x = self.pan_x, pan_y = self.pan_y, "drag end");
        }
    }

    /// Moves one step along the zoom table and re-anchors the pan at the
    /// pointer.
    ///
    /// A positive `delta_y` zooms out, a negative one zooms in; zero or
    /// non-finite deltas are ignored. The pan after a step is derived from the
    /// anchor alone, never composed with the previous pan. Returns the
    /// resulting scale.
    pub fn on_wheel(&mut self, pointer: PointerPosition, delta_y: f64) -> f64 {
        let Some(direction) = ZoomDirection::from_wheel_delta(delta_y) else {
            return self.scale();
        };
        let (anchor_x, anchor_y) = self.normalized_anchor(pointer);

        self.zoom_index = self.zoom_table.step(self.zoom_index, direction);
        let scale = self.scale();
        let retained = (scale - 1.0) / scale;
        self.pan_x = -anchor_x * self.config.plot_width * retained;
        self.pan_y = -anchor_y * self.config.plot_height * retained;
        self.constrain();

        trace!(
            ?direction,
            zoom_step_index = self.zoom_index,
            scale,
            pan_x = self.pan_x,
            pan_y = self.pan_y,
            "wheel zoom"
        );
        scale
    }

    /// Returns to identity and abandons any drag in progress.
    pub fn on_reset(&mut self) {
        self.pan_x = 0.0;
        self.pan_y = 0.0;
        self.zoom_index = 0;
        self.drag = None;
        trace!("view reset");
    }

    /// Routes one host event to the matching gesture handler.
    pub fn apply_event(&mut self, event: ViewportEvent) {
        match event {
            ViewportEvent::DragStart(pointer) => self.on_drag_start(pointer),
            ViewportEvent::DragMove(pointer) => {
                self.on_drag_move(pointer);
            }
            ViewportEvent::DragEnd => self.on_drag_end(),
            ViewportEvent::Wheel { pointer, delta_y } => {
                self.on_wheel(pointer, delta_y);
            }
            ViewportEvent::Reset => self.on_reset(),
        }
    }

    /// Displays a plot-space point through the transform.
    #[must_use]
    pub fn apply(&self, point: Point) -> Point {
        let scale = self.scale();
        Point::new(scale * (point.x + self.pan_x), scale * (point.y + self.pan_y))
    }

    /// Inverse of [`ViewTransform::apply`].
    #[must_use]
    pub fn invert(&self, point: Point) -> Point {
        let scale = self.scale();
        Point::new(point.x / scale - self.pan_x, point.y / scale - self.pan_y)
    }

    /// Affine matrix `[a, b, c, d, e, f]` equivalent to [`ViewTransform::apply`].
    #[must_use]
    pub fn to_affine(&self) -> [f64; 6] {
        let scale = self.scale();
        [scale, 0.0, 0.0, scale, scale * self.pan_x, scale * self.pan_y]
    }

    /// Converts an input pointer into plot space (y-up).
    #[must_use]
    pub fn pointer_to_plot(&self, pointer: PointerPosition) -> Point {
        let view_x = pointer.x * self.config.pan_scale + self.config.view_box_x;
        let view_y = pointer.y * self.config.pan_scale + self.config.view_box_y;
        Point::new(view_x, self.config.plot_height - view_y)
    }

    /// Content position under the pointer, normalized into `[0, 1]^2`.
    fn normalized_anchor(&self, pointer: PointerPosition) -> (f64, f64) {
        if !pointer.is_finite() {
            return (0.0, 0.0);
        }
        let content = self.invert(self.pointer_to_plot(pointer));
        (
            (content.x / self.config.plot_width).clamp(0.0, 1.0),
            (content.y / self.config.plot_height).clamp(0.0, 1.0),
        )
    }

    fn constrain(&mut self) {
        let scale = self.scale();
        let width = self.config.plot_width;
        let height = self.config.plot_height;
        self.pan_x = self.pan_x.min(width / scale).max(-width);
        self.pan_y = self.pan_y.min(height / scale).max(-height);
    }
}
