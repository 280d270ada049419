use serde::{Deserialize, Serialize};

/// Direction of one wheel step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ZoomDirection {
    In,
    Out,
}

impl ZoomDirection {
    /// Positive wheel deltas scroll down (zoom out), negative ones scroll up.
    ///
    /// Returns `None` for a zero or non-finite delta.
    #[must_use]
    pub fn from_wheel_delta(delta_y: f64) -> Option<Self> {
        if delta_y > 0.0 {
            Some(Self::Out)
        } else if delta_y < 0.0 {
            Some(Self::In)
        } else {
            None
        }
    }
}

/// Precomputed quadratic easing of scale values, `steps + 1` entries from
/// `1.0` to `max_zoom`.
#[derive(Debug, Clone, PartialEq)]
pub struct ZoomTable {
    scales: Vec<f64>,
}

impl ZoomTable {
    #[must_use]
    pub fn new(max_zoom: f64, steps: u32) -> Self {
        let steps = steps.max(1);
        let range = max_zoom.max(1.0) - 1.0;
        let scales = (0..=steps)
            .map(|index| {
                let t = f64::from(index) / f64::from(steps);
                1.0 + t * t * range
            })
            .collect();
        Self { scales }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.scales.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    #[must_use]
    pub fn max_index(&self) -> usize {
        self.scales.len() - 1
    }

    /// Scale at `index`, clamped into the table.
    #[must_use]
    pub fn scale_at(&self, index: usize) -> f64 {
        self.scales[index.min(self.max_index())]
    }

    #[must_use]
    pub fn min_scale(&self) -> f64 {
        self.scales[0]
    }

    #[must_use]
    pub fn max_scale(&self) -> f64 {
        self.scales[self.max_index()]
    }

    /// Moves one step from `index`, saturating at both ends.
    #[must_use]
    pub fn step(&self, index: usize, direction: ZoomDirection) -> usize {
        match direction {
            ZoomDirection::In => (index + 1).min(self.max_index()),
            ZoomDirection::Out => index.saturating_sub(1),
        }
    }

    #[must_use]
    pub fn scales(&self) -> &[f64] {
        &self.scales
    }
}
