use crate::chart::Chart;
use crate::chart::harker::{DEFAULT_BASE_COLUMN, build_harker};
use crate::chart::scatter::build_scatter;
use crate::data::model::{ColumnClasses, Table, classify_columns};

// ---------------------------------------------------------------------------
// Diagram selection
// ---------------------------------------------------------------------------

/// Which diagram the user is building. In Harker mode the X selector is
/// ignored and the base column is forced to SiO2; in Custom mode X is
/// user-selected and required.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiagramKind {
    #[default]
    Custom,
    Harker,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until user loads a file).
    pub table: Option<Table>,

    /// Numeric/categorical split of the table's columns (cached, recomputed
    /// on every table change).
    pub classes: ColumnClasses,

    /// Selected diagram type.
    pub diagram: DiagramKind,

    /// Axis and grouping selections (column names).
    pub x_col: Option<String>,
    pub y_col: Option<String>,
    pub group_col: Option<String>,

    /// Chart built from the current selections (cached).
    pub chart: Chart,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            table: None,
            classes: ColumnClasses::default(),
            diagram: DiagramKind::default(),
            x_col: None,
            y_col: None,
            group_col: None,
            chart: Chart::empty(""),
            status_message: None,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded table: reclassify columns, reset selections.
    pub fn set_table(&mut self, table: Table) {
        self.classes = classify_columns(&table);
        self.x_col = None;
        self.y_col = None;
        self.group_col = None;
        self.table = Some(table);
        self.status_message = None;
        self.rebuild_chart();
    }

    /// Effective X column given the diagram kind.
    pub fn effective_x(&self) -> Option<&str> {
        match self.diagram {
            DiagramKind::Custom => self.x_col.as_deref(),
            DiagramKind::Harker => Some(DEFAULT_BASE_COLUMN),
        }
    }

    /// Rebuild the cached chart from the current selections.
    ///
    /// Missing selections are not an error: the builders are simply not
    /// invoked and an empty chart is shown. A builder error (missing Harker
    /// base column, stale column name) becomes an empty chart carrying the
    /// error message as its title, so the UI never crashes on partial input.
    pub fn rebuild_chart(&mut self) {
        let Some(table) = &self.table else {
            self.chart = Chart::empty("");
            return;
        };
        let Some(y_col) = self.y_col.as_deref() else {
            self.chart = Chart::empty("");
            return;
        };

        let group = self.group_col.as_deref();
        let result = match self.diagram {
            DiagramKind::Harker => build_harker(table, y_col, group, DEFAULT_BASE_COLUMN),
            DiagramKind::Custom => match self.x_col.as_deref() {
                Some(x_col) => build_scatter(table, x_col, y_col, group, None),
                None => {
                    self.chart = Chart::empty("");
                    return;
                }
            },
        };

        self.chart = match result {
            Ok(chart) => chart,
            Err(e) => Chart::empty(e.to_string()),
        };
    }

    /// Switch diagram type and rebuild.
    pub fn set_diagram(&mut self, kind: DiagramKind) {
        if self.diagram != kind {
            self.diagram = kind;
            self.rebuild_chart();
        }
    }

    pub fn set_x_column(&mut self, col: String) {
        self.x_col = Some(col);
        self.rebuild_chart();
    }

    pub fn set_y_column(&mut self, col: String) {
        self.y_col = Some(col);
        self.rebuild_chart();
    }

    /// `None` clears the grouping (single ungrouped trace).
    pub fn set_group_column(&mut self, col: Option<String>) {
        self.group_col = col;
        self.rebuild_chart();
    }
}
