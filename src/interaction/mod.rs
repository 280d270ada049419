//! Pan/zoom view transform driven by pointer gestures.
//!
//! Every viewport owns one [`ViewTransform`] (pan offset plus uniform scale)
//! and its own zoom table. Transforms only ever touch already-mapped plot
//! geometry; they never feed back into domain building.

mod pan_zoom_config;
mod view_transform;
mod viewport_registry;
mod zoom_table;

use serde::{Deserialize, Serialize};

pub use pan_zoom_config::PanZoomConfig;
pub use view_transform::{ViewTransform, ViewTransformState};
pub use viewport_registry::{ViewportEvent, ViewportId, ViewportRegistry};
pub use zoom_table::{ZoomDirection, ZoomTable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InteractionMode {
    Idle,
    Dragging,
}

/// Pointer location in input pixels, relative to the viewport's top-left
/// corner (y grows downward).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: f64,
    pub y: f64,
}

impl PointerPosition {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}
