use serde::{Deserialize, Serialize};

use crate::core::ChartDomainOptions;
use crate::render::Color;

/// Which marks a chart draws for each series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlotKind {
    /// Polylines and/or point markers, per `plot_lines` / `plot_points`.
    Line,
    /// Point markers only; `plot_lines` / `plot_points` are ignored.
    Scatter,
}

/// Public chart configuration.
///
/// Palette and zoom settings are owned by each chart instance so two charts
/// never interfere with each other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    #[serde(default = "default_plot_width")]
    pub plot_width: f64,
    #[serde(default = "default_plot_height")]
    pub plot_height: f64,
    #[serde(default = "default_kind")]
    pub kind: PlotKind,
    #[serde(default = "default_true")]
    pub plot_lines: bool,
    #[serde(default = "default_true")]
    pub plot_points: bool,
    #[serde(default)]
    pub expand_x: bool,
    #[serde(default)]
    pub expand_y: bool,
    #[serde(default = "default_palette")]
    pub palette: Vec<Color>,
    #[serde(default = "default_point_radius")]
    pub point_radius: f64,
    #[serde(default = "default_line_stroke_width")]
    pub line_stroke_width: f64,
    #[serde(default = "default_tick_line_color")]
    pub tick_line_color: Color,
    #[serde(default = "default_tick_label_color")]
    pub tick_label_color: Color,
    #[serde(default = "default_tick_label_font_size")]
    pub tick_label_font_size: f64,
    /// Significant digits kept when conditioning input data; `None` keeps
    /// the raw values.
    #[serde(default = "default_condition_significant_digits")]
    pub condition_significant_digits: Option<u32>,
    /// Chart title drawn above the plot.
    #[serde(default)]
    pub title: Option<String>,
    /// Axis title drawn below the x tick labels.
    #[serde(default)]
    pub x_axis_title: Option<String>,
    /// Axis title drawn left of the y tick labels, rotated to read upward.
    #[serde(default)]
    pub y_axis_title: Option<String>,
    #[serde(default = "default_title_font_size")]
    pub title_font_size: f64,
    #[serde(default = "default_axis_title_font_size")]
    pub axis_title_font_size: f64,
    #[serde(default = "default_max_zoom")]
    pub max_zoom: f64,
    #[serde(default = "default_zoom_steps")]
    pub zoom_steps: u32,
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self::new(default_plot_width(), default_plot_height())
    }
}

impl PlotConfig {
    #[must_use]
    pub fn new(plot_width: f64, plot_height: f64) -> Self {
        Self {
            plot_width,
            plot_height,
            kind: default_kind(),
            plot_lines: true,
            plot_points: true,
            expand_x: false,
            expand_y: false,
            palette: default_palette(),
            point_radius: default_point_radius(),
            line_stroke_width: default_line_stroke_width(),
            tick_line_color: default_tick_line_color(),
            tick_label_color: default_tick_label_color(),
            tick_label_font_size: default_tick_label_font_size(),
            condition_significant_digits: default_condition_significant_digits(),
            title: None,
            x_axis_title: None,
            y_axis_title: None,
            title_font_size: default_title_font_size(),
            axis_title_font_size: default_axis_title_font_size(),
            max_zoom: default_max_zoom(),
            zoom_steps: default_zoom_steps(),
        }
    }

    #[must_use]
    pub fn with_kind(mut self, kind: PlotKind) -> Self {
        self.kind = kind;
        self
    }

    #[must_use]
    pub fn with_marks(mut self, plot_lines: bool, plot_points: bool) -> Self {
        self.plot_lines = plot_lines;
        self.plot_points = plot_points;
        self
    }

    #[must_use]
    pub fn with_expansion(mut self, expand_x: bool, expand_y: bool) -> Self {
        self.expand_x = expand_x;
        self.expand_y = expand_y;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: Vec<Color>) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_condition_significant_digits(mut self, digits: Option<u32>) -> Self {
        self.condition_significant_digits = digits;
        self
    }

    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    #[must_use]
    pub fn with_axis_titles(
        mut self,
        x_axis_title: impl Into<String>,
        y_axis_title: impl Into<String>,
    ) -> Self {
        self.x_axis_title = Some(x_axis_title.into());
        self.y_axis_title = Some(y_axis_title.into());
        self
    }

    #[must_use]
    pub fn with_zoom(mut self, max_zoom: f64, zoom_steps: u32) -> Self {
        self.max_zoom = max_zoom;
        self.zoom_steps = zoom_steps;
        self
    }

    #[must_use]
    pub fn domain_options(&self) -> ChartDomainOptions {
        ChartDomainOptions::new(self.plot_width, self.plot_height)
            .with_expansion(self.expand_x, self.expand_y)
    }

    /// Palette color of the series at `series_index`, cycling.
    #[must_use]
    pub fn series_color(&self, series_index: usize) -> Color {
        if self.palette.is_empty() {
            return default_tick_label_color();
        }
        self.palette[series_index % self.palette.len()]
    }
}

fn default_plot_width() -> f64 {
    600.0
}

fn default_plot_height() -> f64 {
    400.0
}

fn default_kind() -> PlotKind {
    PlotKind::Line
}

fn default_true() -> bool {
    true
}

fn default_palette() -> Vec<Color> {
    vec![
        Color::rgb8(114, 147, 203),
        Color::rgb8(225, 151, 76),
        Color::rgb8(132, 186, 91),
        Color::rgb8(211, 94, 96),
        Color::rgb8(144, 103, 167),
    ]
}

fn default_point_radius() -> f64 {
    4.0
}

fn default_line_stroke_width() -> f64 {
    2.0
}

fn default_tick_line_color() -> Color {
    Color::rgb8(224, 224, 224)
}

fn default_tick_label_color() -> Color {
    Color::rgb8(128, 128, 128)
}

fn default_tick_label_font_size() -> f64 {
    12.0
}

fn default_condition_significant_digits() -> Option<u32> {
    Some(5)
}

fn default_title_font_size() -> f64 {
    16.0
}

fn default_axis_title_font_size() -> f64 {
    13.0
}

fn default_max_zoom() -> f64 {
    4.0
}

fn default_zoom_steps() -> u32 {
    100
}
