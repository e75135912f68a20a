/// Chart layer: a framework-neutral figure value plus the builders that
/// produce it from a [`Table`](crate::data::model::Table).
///
/// The builders are pure: they take the table and selections, return a new
/// styled [`Chart`], and never touch shared state. Rendering (egui_plot) is
/// a separate concern in `ui::plot`.
pub mod harker;
pub mod scatter;
pub mod style;

use eframe::egui::Color32;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

/// Errors surfaced by the chart builders.
#[derive(Debug, Error)]
pub enum ChartError {
    /// The one explicit core validation: the Harker base axis is mandatory.
    #[error("Harker diagram requires column \"{0}\" in the dataset")]
    MissingRequiredColumn(String),

    /// A selected axis or grouping column does not exist in the table.
    #[error("Column \"{0}\" not found in the dataset")]
    UnknownColumn(String),
}

// ---------------------------------------------------------------------------
// Figure value
// ---------------------------------------------------------------------------

/// A renderable figure: styled layout plus point traces.
#[derive(Debug, Clone, PartialEq)]
pub struct Chart {
    pub layout: Layout,
    pub traces: Vec<Trace>,
}

impl Chart {
    /// A traceless chart carrying only a (possibly empty) title. Used for
    /// the "nothing selected yet" and error-banner states.
    pub fn empty(title: impl Into<String>) -> Self {
        let mut chart = Chart {
            layout: Layout::default(),
            traces: Vec::new(),
        };
        let title = title.into();
        style::apply_publication_style(&mut chart, "", "", &title);
        chart
    }
}

/// Figure-level styling and axis titles.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Layout {
    pub title: String,
    pub title_font_size: f32,
    pub font_family: String,
    pub base_font_size: f32,
    pub margin: Margin,
    pub legend: Legend,
    pub x_axis: AxisStyle,
    pub y_axis: AxisStyle,
}

/// Whitespace around the plot area, in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Margin {
    pub left: f32,
    pub right: f32,
    pub top: f32,
    pub bottom: f32,
}

/// Legend placement and typography.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Legend {
    pub horizontal: bool,
    pub above_plot: bool,
    pub right_aligned: bool,
    pub border_width: f32,
    pub font_size: f32,
}

/// Per-axis styling: bounding line, ticks, grid.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AxisStyle {
    pub title: String,
    pub show_line: bool,
    pub line_width: f32,
    pub line_color: Color32,
    /// Repeat the bounding line on the opposite side of the plot.
    pub mirror: bool,
    pub ticks_inward: bool,
    pub tick_width: f32,
    pub tick_length: f32,
    pub show_grid: bool,
    pub zero_line: bool,
}

/// Point marker styling shared by all points of a trace.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MarkerStyle {
    pub size: f32,
    pub opacity: f32,
    pub outline_width: f32,
    pub outline_color: Color32,
}

/// One named series of points (one group, or the whole dataset ungrouped).
#[derive(Debug, Clone, PartialEq)]
pub struct Trace {
    pub name: String,
    pub color: Option<Color32>,
    pub marker: MarkerStyle,
    pub points: Vec<TracePoint>,
}

/// A single placed point with its hover metadata (all source-row columns,
/// preformatted one per line).
#[derive(Debug, Clone, PartialEq)]
pub struct TracePoint {
    pub x: f64,
    pub y: f64,
    pub hover: String,
}
