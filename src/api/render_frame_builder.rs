use crate::core::{ChartDomain, SeriesSet};
use crate::error::PlotResult;
use crate::render::{
    LinePrimitive, MarkerPrimitive, PolylinePrimitive, RenderFrame, TextHAlign, TextPrimitive,
};

use super::{FRAME_BUFFER_RATIO, PlotConfig, PlotKind};

/// Gap between the plot bottom edge and x-axis tick labels.
pub const X_TICK_LABEL_OFFSET: f64 = 12.5;
/// Gap between the plot left edge and y-axis tick labels.
pub const Y_TICK_LABEL_OFFSET: f64 = 7.5;

/// Gap between the plot top edge and the chart title.
pub const TITLE_OFFSET: f64 = 30.0;
/// Gap between the plot bottom edge and the x-axis title.
pub const X_AXIS_TITLE_OFFSET: f64 = 37.5;
/// Extra gap beyond the frame buffer for the y-axis title.
pub const Y_AXIS_TITLE_GAP: f64 = 20.0;

const TICK_LINE_STROKE_WIDTH: f64 = 1.0;

/// Materializes grid lines, tick labels and series marks for one draw pass.
///
/// Primitives are emitted in paint order: vertical grid, horizontal grid,
/// titles, then series in input order, each series line before its markers.
pub fn build_render_frame(
    domain: &ChartDomain,
    series_set: &SeriesSet,
    config: &PlotConfig,
) -> PlotResult<RenderFrame> {
    let (width, height) = domain.display_size();
    let mut frame = RenderFrame::new(width, height);

    let x_labels = domain.x.tick_labels();
    for (tick, label) in domain.x.ticks().iter().zip(x_labels) {
        let x = domain.x.map(*tick);
        frame.lines.push(LinePrimitive::new(
            x,
            0.0,
            x,
            height,
            TICK_LINE_STROKE_WIDTH,
            config.tick_line_color,
        ));
        frame.texts.push(TextPrimitive::new(
            label,
            x,
            -X_TICK_LABEL_OFFSET,
            config.tick_label_font_size,
            config.tick_label_color,
            TextHAlign::Center,
        ));
    }

    let y_labels = domain.y.tick_labels();
    for (tick, label) in domain.y.ticks().iter().zip(y_labels) {
        let y = domain.y.map(*tick);
        frame.lines.push(LinePrimitive::new(
            0.0,
            y,
            width,
            y,
            TICK_LINE_STROKE_WIDTH,
            config.tick_line_color,
        ));
        frame.texts.push(TextPrimitive::new(
            label,
            -Y_TICK_LABEL_OFFSET,
            y,
            config.tick_label_font_size,
            config.tick_label_color,
            TextHAlign::Right,
        ));
    }

    push_titles(&mut frame, config);

    let (draw_lines, draw_points) = match config.kind {
        PlotKind::Line => (config.plot_lines, config.plot_points),
        PlotKind::Scatter => (false, true),
    };

    for (series_index, series) in series_set.iter().enumerate() {
        let color = config.series_color(series_index);

        if draw_lines && series.len() >= 2 {
            frame.polylines.push(PolylinePrimitive {
                points: series.iter().map(|point| domain.map(*point)).collect(),
                stroke_width: config.line_stroke_width,
                color,
                series_index,
            });
        }

        if draw_points {
            frame
                .markers
                .extend(series.iter().map(|point| MarkerPrimitive {
                    center: domain.map(*point),
                    radius: config.point_radius,
                    color,
                    series_index,
                    value: *point,
                }));
        }
    }

    frame.validate()?;
    Ok(frame)
}

// Optional chart and axis titles; the y title reads bottom to top.
fn push_titles(frame: &mut RenderFrame, config: &PlotConfig) {
    let (width, height) = (frame.width, frame.height);
    let buffer = FRAME_BUFFER_RATIO * height;

    if let Some(title) = &config.title {
        frame.texts.push(TextPrimitive::new(
            title.clone(),
            width / 2.0,
            height + TITLE_OFFSET,
            config.title_font_size,
            config.tick_label_color,
            TextHAlign::Center,
        ));
    }
    if let Some(title) = &config.x_axis_title {
        frame.texts.push(TextPrimitive::new(
            title.clone(),
            width / 2.0,
            -X_AXIS_TITLE_OFFSET,
            config.axis_title_font_size,
            config.tick_label_color,
            TextHAlign::Center,
        ));
    }
    if let Some(title) = &config.y_axis_title {
        frame.texts.push(
            TextPrimitive::new(
                title.clone(),
                -(buffer + Y_AXIS_TITLE_GAP),
                height / 2.0,
                config.axis_title_font_size,
                config.tick_label_color,
                TextHAlign::Center,
            )
            .with_rotation(90.0),
        );
    }
}
