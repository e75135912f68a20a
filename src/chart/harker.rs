use super::scatter::build_scatter;
use super::{Chart, ChartError};
use crate::data::model::Table;
use crate::labels::get_pretty_label;

/// Default base axis for Harker diagrams.
pub const DEFAULT_BASE_COLUMN: &str = "SiO2";

// ---------------------------------------------------------------------------
// Harker diagram builder
// ---------------------------------------------------------------------------

/// Build a Harker-style diagram: `base_col` (typically SiO2) on the X axis
/// against the chosen oxide on Y.
///
/// The base column is the one mandatory input the core validates itself:
/// if it is missing from the table this fails with
/// [`ChartError::MissingRequiredColumn`] naming the column. Everything else
/// delegates to [`build_scatter`] with the Harker title.
pub fn build_harker(
    table: &Table,
    y_col: &str,
    group_col: Option<&str>,
    base_col: &str,
) -> Result<Chart, ChartError> {
    if !table.has_column(base_col) {
        return Err(ChartError::MissingRequiredColumn(base_col.to_string()));
    }

    let title = format!(
        "Harker diagram: {} vs {}",
        get_pretty_label(y_col),
        get_pretty_label(base_col)
    );
    build_scatter(table, base_col, y_col, group_col, Some(&title))
}
