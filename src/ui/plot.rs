use eframe::egui::{self, Color32, RichText, Ui};
use egui_plot::{Legend, MarkerShape, Plot, PlotPoint, PlotPoints, Points};

use crate::chart::{Chart, Trace, TracePoint};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Chart rendering (central panel)
// ---------------------------------------------------------------------------

/// Render the current chart in the central panel.
pub fn chart_panel(ui: &mut Ui, state: &AppState) {
    if state.table.is_none() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open a dataset to build diagrams  (File → Open…)");
        });
        return;
    }

    let chart = &state.chart;

    // Error banners and the "nothing selected" state come through as a
    // traceless chart; show the title as a centered message.
    if chart.traces.is_empty() {
        ui.centered_and_justified(|ui: &mut Ui| {
            if chart.layout.title.is_empty() {
                ui.label("Select Y (and X for a custom diagram) to render.");
            } else {
                ui.heading(RichText::new(&chart.layout.title).color(Color32::DARK_RED));
            }
        });
        return;
    }

    ui.vertical_centered(|ui: &mut Ui| {
        ui.label(
            RichText::new(&chart.layout.title)
                .size(chart.layout.title_font_size)
                .strong(),
        );
    });

    let margin = chart.layout.margin;
    let mut plot = Plot::new("diagram_plot")
        .x_axis_label(chart.layout.x_axis.title.clone())
        .y_axis_label(chart.layout.y_axis.title.clone())
        .show_grid([chart.layout.x_axis.show_grid, chart.layout.y_axis.show_grid])
        .show_axes(true)
        // Plotly pixel margins translate to egui_plot only loosely; keep the
        // axis-title clearance they existed for.
        .set_margin_fraction(egui::Vec2::new(margin.left / 1000.0, margin.bottom / 1000.0))
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true);
    if chart.layout.legend.horizontal {
        plot = plot.legend(Legend::default().position(egui_plot::Corner::RightTop));
    }

    let response = plot.show(ui, |plot_ui| {
        for trace in &chart.traces {
            let coords: PlotPoints = trace.points.iter().map(|p| [p.x, p.y]).collect();

            let mut points = Points::new(coords)
                .shape(MarkerShape::Circle)
                .radius(trace.marker.size / 2.0)
                .filled(true);
            if let Some(color) = trace.color {
                let alpha = (trace.marker.opacity * 255.0) as u8;
                points = points.color(Color32::from_rgba_unmultiplied(
                    color.r(),
                    color.g(),
                    color.b(),
                    alpha,
                ));
            }
            if !trace.name.is_empty() {
                points = points.name(&trace.name);
            }
            plot_ui.points(points);
        }
    });

    // Nearest-point hover tooltip with the row's metadata.
    if let Some(pointer) = response.response.hover_pos() {
        let plot_pos = response.transform.value_from_position(pointer);
        if let Some((trace, point)) = nearest_point(chart, plot_pos) {
            egui::show_tooltip_at_pointer(
                ui.ctx(),
                ui.layer_id(),
                egui::Id::new("point_hover"),
                |ui: &mut Ui| {
                    if !trace.name.is_empty() {
                        ui.strong(&trace.name);
                    }
                    ui.label(&point.hover);
                },
            );
        }
    }
}

/// Find the trace point closest to the pointer, within a small tolerance
/// in plot coordinates.
fn nearest_point(chart: &Chart, pos: PlotPoint) -> Option<(&Trace, &TracePoint)> {
    let mut best: Option<(f64, &Trace, &TracePoint)> = None;
    for trace in &chart.traces {
        for point in &trace.points {
            let dx = point.x - pos.x;
            let dy = point.y - pos.y;
            let d2 = dx * dx + dy * dy;
            if best.as_ref().map_or(true, |(b, _, _)| d2 < *b) {
                best = Some((d2, trace, point));
            }
        }
    }
    let (d2, trace, point) = best?;
    // Tolerance: ~2% of the larger coordinate magnitude, so the tooltip only
    // fires near an actual point.
    let scale = point.x.abs().max(point.y.abs()).max(1.0);
    if d2.sqrt() <= scale * 0.02 {
        Some((trace, point))
    } else {
        None
    }
}
