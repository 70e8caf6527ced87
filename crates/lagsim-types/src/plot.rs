//! Plot specifications and style configuration.

use serde::{Deserialize, Serialize};

/// Line style for plot traces
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LineStyle {
    #[default]
    Solid,
    Dash,
    Dot,
    None,
}

/// Marker style for plot points
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerStyle {
    Circle,
    Square,
    Triangle,
    #[default]
    None,
}

/// Named trace colors
pub mod colors {
    pub const LIME: [u8; 3] = [0, 255, 0];
    pub const RED: [u8; 3] = [255, 0, 0];
    pub const BLUE: [u8; 3] = [0, 0, 255];
}

/// Style configuration for a single trace
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TraceStyle {
    pub color: [u8; 3],
    pub line_style: LineStyle,
    pub marker_style: MarkerStyle,
    pub width: f32,
}

impl Default for TraceStyle {
    fn default() -> Self {
        Self {
            color: colors::BLUE,
            line_style: LineStyle::Solid,
            marker_style: MarkerStyle::None,
            width: 2.0,
        }
    }
}

impl TraceStyle {
    pub fn line(color: [u8; 3], width: f32) -> Self {
        Self {
            color,
            width,
            ..Default::default()
        }
    }

    pub fn dotted(color: [u8; 3]) -> Self {
        Self {
            color,
            line_style: LineStyle::Dot,
            ..Default::default()
        }
    }

    /// Line with a marker on every sample ("lines+markers")
    pub fn line_with_markers(color: [u8; 3], width: f32) -> Self {
        Self {
            color,
            width,
            marker_style: MarkerStyle::Circle,
            ..Default::default()
        }
    }
}

/// One named trace of (x, y) points
#[derive(Clone, Debug, PartialEq)]
pub struct Series {
    pub label: String,
    pub points: Vec<[f64; 2]>,
    pub style: TraceStyle,
}

impl Series {
    pub fn new(label: impl Into<String>, points: Vec<[f64; 2]>, style: TraceStyle) -> Self {
        Self {
            label: label.into(),
            points,
            style,
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Everything a renderer needs to draw one chart
#[derive(Clone, Debug, PartialEq)]
pub struct PlotSpec {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// Logarithmic X axis
    pub x_log: bool,
    /// Logarithmic Y axis
    pub y_log: bool,
    /// Initial visible X range, None = auto
    pub x_range: Option<(f64, f64)>,
    pub series: Vec<Series>,
}

impl PlotSpec {
    pub fn new(
        title: impl Into<String>,
        x_label: impl Into<String>,
        y_label: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            x_label: x_label.into(),
            y_label: y_label.into(),
            x_log: false,
            y_log: false,
            x_range: None,
            series: Vec::new(),
        }
    }

    pub fn with_log_axes(mut self, x_log: bool, y_log: bool) -> Self {
        self.x_log = x_log;
        self.y_log = y_log;
        self
    }

    pub fn with_x_range(mut self, min: f64, max: f64) -> Self {
        self.x_range = Some((min, max));
        self
    }

    pub fn push(&mut self, series: Series) {
        self.series.push(series);
    }

    pub fn series(&self, label: &str) -> Option<&Series> {
        self.series.iter().find(|s| s.label == label)
    }
}

/// Global plot display settings
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlotSettings {
    /// Show legend
    #[serde(default = "default_true")]
    pub show_legend: bool,

    /// Show grid
    #[serde(default = "default_true")]
    pub show_grid: bool,

    /// Max points drawn per trace before min-max decimation kicks in
    #[serde(default = "default_max_points")]
    pub max_points: usize,
}

fn default_true() -> bool {
    true
}

fn default_max_points() -> usize {
    4_000
}

impl Default for PlotSettings {
    fn default() -> Self {
        Self {
            show_legend: true,
            show_grid: true,
            max_points: default_max_points(),
        }
    }
}
