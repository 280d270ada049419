mod engine;
mod engine_snapshot;
mod plot_config;
mod plot_layout;
mod render_frame_builder;
mod validation;

pub use engine::PlotEngine;
pub use engine_snapshot::{PLOT_SNAPSHOT_JSON_SCHEMA_V1, PlotSnapshot, PlotSnapshotJsonContractV1};
pub use plot_config::{PlotConfig, PlotKind};
pub use plot_layout::{FRAME_BUFFER_RATIO, PlotLayout, ViewBox};
pub use render_frame_builder::{
    TITLE_OFFSET, X_AXIS_TITLE_OFFSET, X_TICK_LABEL_OFFSET, Y_AXIS_TITLE_GAP, Y_TICK_LABEL_OFFSET,
    build_render_frame,
};
