use crate::error::{PlotError, PlotResult};

use super::PlotConfig;

pub(super) fn validate_plot_config(config: &PlotConfig) -> PlotResult<()> {
    if !config.plot_width.is_finite()
        || !config.plot_height.is_finite()
        || config.plot_width <= 0.0
        || config.plot_height <= 0.0
    {
        return Err(PlotError::InvalidViewport {
            width: config.plot_width,
            height: config.plot_height,
        });
    }

    if config.palette.is_empty() {
        return Err(PlotError::InvalidData(
            "palette must contain at least one color".to_owned(),
        ));
    }
    for color in &config.palette {
        color.validate()?;
    }
    config.tick_line_color.validate()?;
    config.tick_label_color.validate()?;

    for (name, value) in [
        ("point radius", config.point_radius),
        ("line stroke width", config.line_stroke_width),
        ("tick label font size", config.tick_label_font_size),
        ("title font size", config.title_font_size),
        ("axis title font size", config.axis_title_font_size),
    ] {
        if !value.is_finite() || value <= 0.0 {
            return Err(PlotError::InvalidData(format!(
                "{name} must be finite and > 0"
            )));
        }
    }

    for (name, title) in [
        ("title", &config.title),
        ("x axis title", &config.x_axis_title),
        ("y axis title", &config.y_axis_title),
    ] {
        if title.as_deref().is_some_and(str::is_empty) {
            return Err(PlotError::InvalidData(format!(
                "{name} must not be empty when set"
            )));
        }
    }

    if config.condition_significant_digits == Some(0) {
        return Err(PlotError::InvalidData(
            "significant digits must be >= 1 when conditioning is enabled".to_owned(),
        ));
    }

    Ok(())
}
