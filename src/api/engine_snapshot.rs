use serde::{Deserialize, Serialize};

use crate::core::{ChartDomain, SeriesSet};
use crate::error::{PlotError, PlotResult};
use crate::interaction::ViewTransformState;

use super::PlotKind;

pub const PLOT_SNAPSHOT_JSON_SCHEMA_V1: u32 = 1;

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSnapshot {
    pub plot_width: f64,
    pub plot_height: f64,
    pub kind: PlotKind,
    pub series: SeriesSet,
    pub domain: Option<ChartDomain>,
    pub x_tick_labels: Vec<String>,
    pub y_tick_labels: Vec<String>,
    /// `None` until the first gesture reaches the chart.
    pub view: Option<ViewTransformState>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotSnapshotJsonContractV1 {
    pub schema_version: u32,
    pub snapshot: PlotSnapshot,
}

impl PlotSnapshot {
    pub fn to_json_pretty(&self) -> PlotResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| PlotError::InvalidData(format!("failed to serialize snapshot json: {e}")))
    }

    pub fn to_json_contract_v1_pretty(&self) -> PlotResult<String> {
        let payload = PlotSnapshotJsonContractV1 {
            schema_version: PLOT_SNAPSHOT_JSON_SCHEMA_V1,
            snapshot: self.clone(),
        };
        serde_json::to_string_pretty(&payload).map_err(|e| {
            PlotError::InvalidData(format!("failed to serialize snapshot contract v1: {e}"))
        })
    }

    /// Parses either a bare snapshot or a versioned contract payload.
    pub fn from_json_compat_str(input: &str) -> PlotResult<Self> {
        if let Ok(snapshot) = serde_json::from_str::<PlotSnapshot>(input) {
            return Ok(snapshot);
        }
        let payload: PlotSnapshotJsonContractV1 = serde_json::from_str(input).map_err(|e| {
            PlotError::InvalidData(format!("failed to parse snapshot json payload: {e}"))
        })?;
        if payload.schema_version != PLOT_SNAPSHOT_JSON_SCHEMA_V1 {
            return Err(PlotError::InvalidData(format!(
                "unsupported snapshot schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload.snapshot)
    }
}
