use std::collections::BTreeMap;
use std::fmt::Write as _;

use super::style::apply_publication_style;
use super::{Chart, ChartError, Layout, MarkerStyle, Trace, TracePoint};
use crate::color::ColorMap;
use crate::data::model::{CellValue, Column, Table};
use crate::labels::get_pretty_label;

// ---------------------------------------------------------------------------
// Generic X-Y scatter builder
// ---------------------------------------------------------------------------

/// Build a styled X vs Y scatter chart from the table.
///
/// Points are split into one trace per unique value of `group_col` (with a
/// stable colour per group) or a single trace when no grouping is chosen.
/// Every column of a point's source row is attached as hover metadata.
/// Rows whose x or y cell is not numeric are skipped. When `title` is not
/// supplied, "{pretty_y} vs {pretty_x}" is used.
pub fn build_scatter(
    table: &Table,
    x_col: &str,
    y_col: &str,
    group_col: Option<&str>,
    title: Option<&str>,
) -> Result<Chart, ChartError> {
    let x_column = lookup(table, x_col)?;
    let y_column = lookup(table, y_col)?;
    let group_column = match group_col {
        Some(name) => Some(lookup(table, name)?),
        None => None,
    };

    let x_label = get_pretty_label(x_col);
    let y_label = get_pretty_label(y_col);
    let title = match title {
        Some(t) => t.to_string(),
        None => format!("{y_label} vs {x_label}"),
    };

    // Group rows → traces, keeping groups in sorted value order so colours
    // and legend order are stable across rebuilds.
    let color_map = group_col.map(|name| ColorMap::new(&table.unique_values(name)));
    let mut grouped: BTreeMap<CellValue, Trace> = BTreeMap::new();

    for row in 0..table.row_count() {
        let (Some(x), Some(y)) = (
            x_column.values[row].as_f64(),
            y_column.values[row].as_f64(),
        ) else {
            continue;
        };

        let group_value = group_column
            .map(|c| c.values[row].clone())
            .unwrap_or(CellValue::Null);

        let trace = grouped.entry(group_value.clone()).or_insert_with(|| Trace {
            name: match group_column {
                Some(_) => group_value.to_string(),
                None => String::new(),
            },
            color: color_map.as_ref().map(|cm| cm.color_for(&group_value)),
            marker: MarkerStyle::default(),
            points: Vec::new(),
        });

        trace.points.push(TracePoint {
            x,
            y,
            hover: hover_text(table, row),
        });
    }

    let mut chart = Chart {
        layout: Layout::default(),
        traces: grouped.into_values().collect(),
    };
    apply_publication_style(&mut chart, &x_label, &y_label, &title);
    Ok(chart)
}

fn lookup<'a>(table: &'a Table, name: &str) -> Result<&'a Column, ChartError> {
    table
        .column(name)
        .ok_or_else(|| ChartError::UnknownColumn(name.to_string()))
}

/// Format every column of a row as "name: value" lines for the hover box.
fn hover_text(table: &Table, row: usize) -> String {
    let mut out = String::new();
    for col in table.columns() {
        if !out.is_empty() {
            out.push('\n');
        }
        let _ = write!(out, "{}: {}", col.name, col.values[row]);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Column;

    fn sample_table() -> Table {
        Table::from_columns(vec![
            Column::new(
                "SiO2",
                vec![CellValue::Float(50.1), CellValue::Float(52.3)],
            ),
            Column::new("MgO", vec![CellValue::Float(7.1), CellValue::Float(5.2)]),
            Column::new(
                "RockType",
                vec![
                    CellValue::String("basalt".into()),
                    CellValue::String("andesite".into()),
                ],
            ),
        ])
    }

    #[test]
    fn default_title_uses_pretty_labels() {
        let chart = build_scatter(&sample_table(), "SiO2", "MgO", None, None).unwrap();
        assert_eq!(chart.layout.title, "MgO (wt.%) vs SiO₂ (wt.%)");
        assert_eq!(chart.layout.x_axis.title, "SiO₂ (wt.%)");
        assert_eq!(chart.layout.y_axis.title, "MgO (wt.%)");
    }

    #[test]
    fn explicit_title_is_kept() {
        let chart =
            build_scatter(&sample_table(), "SiO2", "MgO", None, Some("my plot")).unwrap();
        assert_eq!(chart.layout.title, "my plot");
    }

    #[test]
    fn grouping_splits_traces_with_distinct_colors() {
        let chart =
            build_scatter(&sample_table(), "SiO2", "MgO", Some("RockType"), None).unwrap();
        assert_eq!(chart.traces.len(), 2);

        let names: Vec<&str> = chart.traces.iter().map(|t| t.name.as_str()).collect();
        assert_eq!(names, vec!["andesite", "basalt"]);
        assert_ne!(chart.traces[0].color, chart.traces[1].color);
        for trace in &chart.traces {
            assert_eq!(trace.points.len(), 1);
        }
    }

    #[test]
    fn no_grouping_yields_one_trace() {
        let chart = build_scatter(&sample_table(), "SiO2", "MgO", None, None).unwrap();
        assert_eq!(chart.traces.len(), 1);
        assert_eq!(chart.traces[0].points.len(), 2);
        assert!(chart.traces[0].color.is_none());
    }

    #[test]
    fn hover_carries_every_column() {
        let chart = build_scatter(&sample_table(), "SiO2", "MgO", None, None).unwrap();
        let hover = &chart.traces[0].points[0].hover;
        assert!(hover.contains("SiO2: 50.1"));
        assert!(hover.contains("MgO: 7.1"));
        assert!(hover.contains("RockType: basalt"));
    }

    #[test]
    fn unknown_column_surfaces_as_lookup_error() {
        let err = build_scatter(&sample_table(), "TiO2", "MgO", None, None).unwrap_err();
        assert!(matches!(err, ChartError::UnknownColumn(name) if name == "TiO2"));
    }

    #[test]
    fn non_numeric_rows_are_skipped() {
        let table = Table::from_columns(vec![
            Column::new(
                "SiO2",
                vec![
                    CellValue::Float(50.1),
                    CellValue::Null,
                    CellValue::Float(61.0),
                ],
            ),
            Column::new(
                "MgO",
                vec![
                    CellValue::Float(7.1),
                    CellValue::Float(5.2),
                    CellValue::String("n.d.".into()),
                ],
            ),
        ]);
        let chart = build_scatter(&table, "SiO2", "MgO", None, None).unwrap();
        assert_eq!(chart.traces[0].points.len(), 1);
    }

    #[test]
    fn markers_carry_the_publication_style() {
        let chart = build_scatter(&sample_table(), "SiO2", "MgO", None, None).unwrap();
        let marker = chart.traces[0].marker;
        assert_eq!(marker.size, 7.0);
        assert_eq!(marker.opacity, 0.85);
    }
}
