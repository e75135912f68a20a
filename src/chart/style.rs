use eframe::egui::Color32;

use super::{AxisStyle, Chart, Legend, Margin, MarkerStyle};

// ---------------------------------------------------------------------------
// Publication style
// ---------------------------------------------------------------------------

const BASE_FONT_SIZE: f32 = 14.0;
const FONT_FAMILY: &str = "Helvetica, Arial, sans-serif";

const MARGIN: Margin = Margin {
    left: 70.0,
    right: 20.0,
    top: 40.0,
    bottom: 70.0,
};

const MARKER: MarkerStyle = MarkerStyle {
    size: 7.0,
    opacity: 0.85,
    outline_width: 0.6,
    outline_color: Color32::BLACK,
};

fn publication_axis(title: &str) -> AxisStyle {
    AxisStyle {
        title: title.to_string(),
        show_line: true,
        line_width: 1.5,
        line_color: Color32::BLACK,
        mirror: true,
        ticks_inward: true,
        tick_width: 1.0,
        tick_length: 6.0,
        show_grid: false,
        zero_line: false,
    }
}

/// Apply a consistent publication-style layout to a chart.
///
/// The goal is figures directly usable in publications: clean background,
/// clear bounding axes, legible fonts. The style is fully overwritten on
/// every call (last call wins), never merged with whatever the chart
/// carried before, so applying it twice is a no-op.
pub fn apply_publication_style(chart: &mut Chart, x_label: &str, y_label: &str, title: &str) {
    chart.layout.title = title.to_string();
    chart.layout.title_font_size = BASE_FONT_SIZE + 2.0;
    chart.layout.font_family = FONT_FAMILY.to_string();
    chart.layout.base_font_size = BASE_FONT_SIZE;
    chart.layout.margin = MARGIN;
    chart.layout.legend = Legend {
        horizontal: true,
        above_plot: true,
        right_aligned: true,
        border_width: 0.0,
        font_size: BASE_FONT_SIZE - 2.0,
    };
    chart.layout.x_axis = publication_axis(x_label);
    chart.layout.y_axis = publication_axis(y_label);

    for trace in &mut chart.traces {
        trace.marker = MARKER;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::{Layout, Trace, TracePoint};

    fn sample_chart() -> Chart {
        Chart {
            layout: Layout::default(),
            traces: vec![Trace {
                name: "basalt".into(),
                color: None,
                marker: MarkerStyle::default(),
                points: vec![TracePoint {
                    x: 50.1,
                    y: 7.1,
                    hover: String::new(),
                }],
            }],
        }
    }

    #[test]
    fn sets_the_publication_theme() {
        let mut chart = sample_chart();
        apply_publication_style(&mut chart, "SiO₂ (wt.%)", "MgO (wt.%)", "Harker");

        assert_eq!(chart.layout.title, "Harker");
        assert_eq!(chart.layout.base_font_size, 14.0);
        assert_eq!(chart.layout.title_font_size, 16.0);
        assert_eq!(chart.layout.legend.font_size, 12.0);
        assert_eq!(chart.layout.margin.left, 70.0);
        assert_eq!(chart.layout.margin.bottom, 70.0);
        assert!(chart.layout.legend.horizontal);
        assert!(chart.layout.x_axis.mirror);
        assert!(!chart.layout.y_axis.show_grid);
        assert!(!chart.layout.y_axis.zero_line);
        assert_eq!(chart.layout.x_axis.title, "SiO₂ (wt.%)");

        let marker = chart.traces[0].marker;
        assert_eq!(marker.size, 7.0);
        assert_eq!(marker.opacity, 0.85);
        assert_eq!(marker.outline_width, 0.6);
    }

    #[test]
    fn is_idempotent() {
        let mut once = sample_chart();
        apply_publication_style(&mut once, "x", "y", "t");

        let mut twice = once.clone();
        apply_publication_style(&mut twice, "x", "y", "t");

        assert_eq!(once, twice);
    }

    #[test]
    fn last_call_wins_over_previous_style() {
        let mut chart = sample_chart();
        apply_publication_style(&mut chart, "a", "b", "first");
        apply_publication_style(&mut chart, "c", "d", "second");

        assert_eq!(chart.layout.title, "second");
        assert_eq!(chart.layout.x_axis.title, "c");
        assert_eq!(chart.layout.y_axis.title, "d");
    }
}
