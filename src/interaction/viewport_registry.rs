use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::PlotResult;

use super::{PanZoomConfig, PointerPosition, ViewTransform};

/// Identity of one interactive viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ViewportId(pub u64);

/// Discrete interaction event delivered to one viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ViewportEvent {
    DragStart(PointerPosition),
    DragMove(PointerPosition),
    DragEnd,
    Wheel {
        pointer: PointerPosition,
        delta_y: f64,
    },
    /// Double-activation.
    Reset,
}

/// Owns the view transform of every live viewport.
///
/// Transforms are created on first access and dropped with
/// [`ViewportRegistry::dispose`]. Nothing is shared between viewports.
#[derive(Debug, Clone)]
pub struct ViewportRegistry {
    default_config: PanZoomConfig,
    configs: IndexMap<ViewportId, PanZoomConfig>,
    transforms: IndexMap<ViewportId, ViewTransform>,
}

impl ViewportRegistry {
    pub fn new(default_config: PanZoomConfig) -> PlotResult<Self> {
        default_config.validate()?;
        Ok(Self {
            default_config,
            configs: IndexMap::new(),
            transforms: IndexMap::new(),
        })
    }

    #[must_use]
    pub fn default_config(&self) -> PanZoomConfig {
        self.default_config
    }

    /// Assigns a dedicated config to `id`, replacing any live transform.
    pub fn configure(&mut self, id: ViewportId, config: PanZoomConfig) -> PlotResult<()> {
        config.validate()?;
        self.configs.insert(id, config);
        self.transforms.shift_remove(&id);
        Ok(())
    }

    /// Returns the transform of `id`, creating an identity one if needed.
    pub fn transform_mut(&mut self, id: ViewportId) -> &mut ViewTransform {
        let config = self
            .configs
            .get(&id)
            .copied()
            .unwrap_or(self.default_config);
        self.transforms.entry(id).or_insert_with(|| {
            debug!(viewport = id.0, "creating view transform");
            ViewTransform::from_validated(config)
        })
    }

    #[must_use]
    pub fn get(&self, id: ViewportId) -> Option<&ViewTransform> {
        self.transforms.get(&id)
    }

    /// Applies one event to the viewport's transform.
    pub fn dispatch(&mut self, id: ViewportId, event: ViewportEvent) -> &ViewTransform {
        let transform = self.transform_mut(id);
        transform.apply_event(event);
        transform
    }

    /// Drops the transform and any dedicated config of `id`.
    pub fn dispose(&mut self, id: ViewportId) -> Option<ViewTransform> {
        self.configs.shift_remove(&id);
        let removed = self.transforms.shift_remove(&id);
        if removed.is_some() {
            debug!(viewport = id.0, "disposed view transform");
        }
        removed
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    pub fn viewport_ids(&self) -> impl Iterator<Item = ViewportId> + '_ {
        self.transforms.keys().copied()
    }
}
