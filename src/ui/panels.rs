use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use egui_extras::{Column as TableColumn, TableBuilder};

use crate::state::{AppState, DiagramKind};

/// Rows shown in the data preview table.
const PREVIEW_ROWS: usize = 10;

// ---------------------------------------------------------------------------
// Left side panel – data & plot settings
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Data & Plot Settings");
    ui.separator();

    ui.strong("1. Dataset");
    if ui.button("Open data file…").clicked() {
        open_file_dialog(state);
    }
    if let Some(msg) = &state.status_message {
        ui.label(RichText::new(msg).small().color(Color32::DARK_RED));
    }
    ui.separator();

    if state.table.is_none() {
        ui.label("No dataset loaded.");
        return;
    }

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            diagram_type_selector(ui, state);
            ui.separator();
            axis_selectors(ui, state);
            ui.separator();
            data_preview(ui, state);
        });
}

fn diagram_type_selector(ui: &mut Ui, state: &mut AppState) {
    ui.strong("2. Diagram type");
    let mut kind = state.diagram;
    ui.radio_value(&mut kind, DiagramKind::Custom, "Custom X-Y");
    ui.radio_value(&mut kind, DiagramKind::Harker, "Harker (SiO2 vs oxide)");
    state.set_diagram(kind);
}

fn axis_selectors(ui: &mut Ui, state: &mut AppState) {
    ui.strong("3. Select axes");

    // Dropdowns are fed from the classification, so only numeric columns are
    // offered as axes and only categorical columns as groups.
    let numeric = state.classes.numeric.clone();
    let categorical = state.classes.categorical.clone();

    ui.label("X-axis");
    let harker = state.diagram == DiagramKind::Harker;
    ui.add_enabled_ui(!harker, |ui: &mut Ui| {
        let current = if harker {
            state.effective_x().unwrap_or_default().to_string()
        } else {
            state.x_col.clone().unwrap_or_default()
        };
        egui::ComboBox::from_id_salt("x_column")
            .selected_text(current.clone())
            .show_ui(ui, |ui: &mut Ui| {
                for col in &numeric {
                    if ui.selectable_label(current == *col, col).clicked() {
                        state.set_x_column(col.clone());
                    }
                }
            });
    });

    ui.label("Y-axis");
    let current_y = state.y_col.clone().unwrap_or_default();
    egui::ComboBox::from_id_salt("y_column")
        .selected_text(current_y.clone())
        .show_ui(ui, |ui: &mut Ui| {
            for col in &numeric {
                if ui.selectable_label(current_y == *col, col).clicked() {
                    state.set_y_column(col.clone());
                }
            }
        });

    ui.label("Group (color by)");
    let current_group = state.group_col.clone().unwrap_or_default();
    egui::ComboBox::from_id_salt("group_column")
        .selected_text(if current_group.is_empty() {
            "(none)".to_string()
        } else {
            current_group.clone()
        })
        .show_ui(ui, |ui: &mut Ui| {
            if ui
                .selectable_label(current_group.is_empty(), "(none)")
                .clicked()
            {
                state.set_group_column(None);
            }
            for col in &categorical {
                if ui.selectable_label(current_group == *col, col).clicked() {
                    state.set_group_column(Some(col.clone()));
                }
            }
        });
}

/// First rows of the dataset, for a quick sanity check after loading.
fn data_preview(ui: &mut Ui, state: &AppState) {
    let Some(table) = &state.table else {
        return;
    };

    ui.strong("Preview");
    if table.is_empty() {
        ui.label("Dataset has no rows.");
        return;
    }
    let n_rows = table.row_count().min(PREVIEW_ROWS);
    let columns = table.columns();

    TableBuilder::new(ui)
        .striped(true)
        .columns(TableColumn::auto().resizable(true), columns.len())
        .header(18.0, |mut header| {
            for col in columns {
                header.col(|ui: &mut Ui| {
                    ui.strong(RichText::new(&col.name).small());
                });
            }
        })
        .body(|mut body| {
            for row in 0..n_rows {
                body.row(16.0, |mut table_row| {
                    for col in columns {
                        table_row.col(|ui: &mut Ui| {
                            ui.label(RichText::new(col.values[row].to_string()).small());
                        });
                    }
                });
            }
        });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(table) = &state.table {
            ui.label(format!(
                "{} rows, {} columns ({} numeric, {} categorical)",
                table.row_count(),
                table.columns().len(),
                state.classes.numeric.len(),
                state.classes.categorical.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open geochemical dataset")
        .add_filter("Supported files", &["csv", "json", "parquet", "pq"])
        .add_filter("CSV", &["csv"])
        .add_filter("JSON", &["json"])
        .add_filter("Parquet", &["parquet", "pq"])
        .pick_file();

    if let Some(path) = file {
        match crate::data::loader::load_file(&path) {
            Ok(table) => {
                log::info!(
                    "Loaded {} rows with columns {:?}",
                    table.row_count(),
                    table.column_names()
                );
                state.set_table(table);
            }
            Err(e) => {
                log::error!("Failed to load file: {e:#}");
                state.status_message = Some(format!("Error reading file: {e:#}"));
            }
        }
    }
}
