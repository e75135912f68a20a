use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use arrow::array::{
    Array, AsArray, BooleanArray, Float32Array, Float64Array, Int32Array, Int64Array, StringArray,
};
use arrow::datatypes::DataType;
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;
use serde_json::Value as JsonValue;

use super::model::{CellValue, Column, Table};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Load a tabular dataset from a file.  Dispatch by extension.
///
/// Supported formats:
/// * `.csv`     – header row of column names, one analysis per row
/// * `.json`    – records orientation: `[{ "SiO2": 50.1, ...}, ...]`
/// * `.parquet` – flat columnar file (string/int/float/bool columns)
pub fn load_file(path: &Path) -> Result<Table> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        "parquet" | "pq" => load_parquet(path),
        other => bail!("Unsupported file extension: .{other}"),
    }
}

// ---------------------------------------------------------------------------
// CSV loader
// ---------------------------------------------------------------------------

/// CSV layout: header row with column names, every following row one sample.
/// Cell types are inferred per cell (integer → float → bool → text; empty
/// cell → null), so an oxide column of plain numbers classifies as numeric
/// while anything with stray text degrades to categorical.
fn load_csv(path: &Path) -> Result<Table> {
    let mut reader = csv::Reader::from_path(path).context("opening CSV")?;
    let headers: Vec<String> = reader
        .headers()
        .context("reading CSV headers")?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut columns: Vec<Column> = headers
        .iter()
        .map(|h| Column::new(h.clone(), Vec::new()))
        .collect();

    for (row_no, result) in reader.records().enumerate() {
        let record = result.with_context(|| format!("CSV row {row_no}"))?;
        for (col_idx, col) in columns.iter_mut().enumerate() {
            let raw = record.get(col_idx).unwrap_or("");
            col.values.push(guess_cell_type(raw.trim()));
        }
    }

    Ok(Table::from_columns(columns))
}

fn guess_cell_type(s: &str) -> CellValue {
    if s.is_empty() {
        return CellValue::Null;
    }
    if let Ok(i) = s.parse::<i64>() {
        return CellValue::Integer(i);
    }
    if let Ok(f) = s.parse::<f64>() {
        return CellValue::Float(f);
    }
    if s == "true" || s == "false" {
        return CellValue::Bool(s == "true");
    }
    CellValue::String(s.to_string())
}

// ---------------------------------------------------------------------------
// JSON loader
// ---------------------------------------------------------------------------

/// Expected JSON schema (records-oriented, the default
/// `df.to_json(orient='records')`):
///
/// ```json
/// [
///   { "SiO2": 50.1, "MgO": 7.1, "RockType": "basalt" },
///   ...
/// ]
/// ```
///
/// Column order follows first appearance across the records; records missing
/// a key get a null cell for it.
fn load_json(path: &Path) -> Result<Table> {
    let text = std::fs::read_to_string(path).context("reading JSON file")?;
    let root: JsonValue = serde_json::from_str(&text).context("parsing JSON")?;

    let records = root.as_array().context("Expected top-level JSON array")?;

    let mut order: Vec<String> = Vec::new();
    let mut cells: BTreeMap<String, Vec<CellValue>> = BTreeMap::new();

    for (i, rec) in records.iter().enumerate() {
        let obj = rec
            .as_object()
            .with_context(|| format!("Row {i} is not a JSON object"))?;

        for (key, val) in obj {
            let col = cells.entry(key.clone()).or_insert_with(|| {
                order.push(key.clone());
                // Pad for the rows seen before this key first appeared.
                vec![CellValue::Null; i]
            });
            col.push(json_to_cell(val));
        }
        // Keys absent from this record get a null.
        for (_, col) in cells.iter_mut() {
            if col.len() < i + 1 {
                col.push(CellValue::Null);
            }
        }
    }

    let columns = order
        .into_iter()
        .map(|name| {
            let values = cells.remove(&name).unwrap_or_default();
            Column::new(name, values)
        })
        .collect();

    Ok(Table::from_columns(columns))
}

fn json_to_cell(val: &JsonValue) -> CellValue {
    match val {
        JsonValue::String(s) => CellValue::String(s.clone()),
        JsonValue::Number(n) => {
            if let Some(i) = n.as_i64() {
                CellValue::Integer(i)
            } else if let Some(f) = n.as_f64() {
                CellValue::Float(f)
            } else {
                CellValue::String(n.to_string())
            }
        }
        JsonValue::Bool(b) => CellValue::Bool(*b),
        JsonValue::Null => CellValue::Null,
        other => CellValue::String(other.to_string()),
    }
}

// ---------------------------------------------------------------------------
// Parquet loader
// ---------------------------------------------------------------------------

/// Load a flat Parquet file. Every column must be a scalar type
/// (Utf8, Int32/64, Float32/64, Boolean); anything else is stringified.
///
/// Works with files written by both **Pandas** (`df.to_parquet()`) and
/// **Polars** (`df.write_parquet()`).
fn load_parquet(path: &Path) -> Result<Table> {
    let file = std::fs::File::open(path).context("opening parquet file")?;
    let builder =
        ParquetRecordBatchReaderBuilder::try_new(file).context("reading parquet metadata")?;
    let reader = builder.build().context("building parquet reader")?;

    let mut columns: Vec<Column> = Vec::new();

    for batch_result in reader {
        let batch = batch_result.context("reading parquet record batch")?;
        let schema = batch.schema();

        if columns.is_empty() {
            columns = schema
                .fields()
                .iter()
                .map(|f| Column::new(f.name().clone(), Vec::new()))
                .collect();
        }

        for (col_idx, col) in columns.iter_mut().enumerate() {
            let array = batch.column(col_idx);
            for row in 0..batch.num_rows() {
                col.values.push(extract_cell(array, row));
            }
        }
    }

    Ok(Table::from_columns(columns))
}

/// Extract a single cell from an Arrow column at a given row.
fn extract_cell(col: &Arc<dyn Array>, row: usize) -> CellValue {
    if col.is_null(row) {
        return CellValue::Null;
    }
    match col.data_type() {
        DataType::Utf8 | DataType::LargeUtf8 => {
            if let Some(s) = col.as_any().downcast_ref::<StringArray>() {
                CellValue::String(s.value(row).to_string())
            } else {
                // LargeStringArray
                let s = col.as_string::<i64>();
                CellValue::String(s.value(row).to_string())
            }
        }
        DataType::Int32 => {
            let arr = col.as_any().downcast_ref::<Int32Array>().unwrap();
            CellValue::Integer(arr.value(row) as i64)
        }
        DataType::Int64 => {
            let arr = col.as_any().downcast_ref::<Int64Array>().unwrap();
            CellValue::Integer(arr.value(row))
        }
        DataType::Float32 => {
            let arr = col.as_any().downcast_ref::<Float32Array>().unwrap();
            CellValue::Float(arr.value(row) as f64)
        }
        DataType::Float64 => {
            let arr = col.as_any().downcast_ref::<Float64Array>().unwrap();
            CellValue::Float(arr.value(row))
        }
        DataType::Boolean => {
            let arr = col.as_any().downcast_ref::<BooleanArray>().unwrap();
            CellValue::Bool(arr.value(row))
        }
        _ => CellValue::String(format!("{:?}", col.data_type())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::classify_columns;
    use arrow::datatypes::{Field, Schema};
    use arrow::record_batch::RecordBatch;
    use parquet::arrow::ArrowWriter;
    use std::io::Write;

    #[test]
    fn csv_round_trip_with_type_inference() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rocks.csv");
        let mut f = std::fs::File::create(&path).unwrap();
        writeln!(f, "SiO2,MgO,RockType,altered").unwrap();
        writeln!(f, "50.1,7.1,basalt,true").unwrap();
        writeln!(f, "52.3,5.2,andesite,false").unwrap();
        writeln!(f, "61.0,,dacite,").unwrap();
        drop(f);

        let table = load_file(&path).unwrap();
        assert_eq!(table.row_count(), 3);
        assert_eq!(
            table.column_names(),
            vec!["SiO2", "MgO", "RockType", "altered"]
        );

        let classes = classify_columns(&table);
        assert_eq!(classes.numeric, vec!["SiO2", "MgO"]);
        assert_eq!(classes.categorical, vec!["RockType", "altered"]);

        assert!(table.column("MgO").unwrap().values[2].is_null());
    }

    #[test]
    fn json_records_preserve_column_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rocks.json");
        std::fs::write(
            &path,
            r#"[
                {"SiO2": 50.1, "MgO": 7.1, "RockType": "basalt"},
                {"SiO2": 52.3, "RockType": "andesite", "Sr": 420}
            ]"#,
        )
        .unwrap();

        let table = load_file(&path).unwrap();
        assert_eq!(table.row_count(), 2);
        assert!(table.has_column("Sr"));
        // Second record has no MgO, first has no Sr.
        assert!(table.column("MgO").unwrap().values[1].is_null());
        assert!(table.column("Sr").unwrap().values[0].is_null());
    }

    #[test]
    fn parquet_round_trip_with_flat_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("rocks.parquet");

        let schema = Arc::new(Schema::new(vec![
            Field::new("SiO2", DataType::Float64, false),
            Field::new("MgO", DataType::Float64, false),
            Field::new("RockType", DataType::Utf8, false),
        ]));
        let batch = RecordBatch::try_new(
            schema.clone(),
            vec![
                Arc::new(Float64Array::from(vec![50.1, 52.3])),
                Arc::new(Float64Array::from(vec![7.1, 5.2])),
                Arc::new(StringArray::from(vec!["basalt", "andesite"])),
            ],
        )
        .unwrap();

        let file = std::fs::File::create(&path).unwrap();
        let mut writer = ArrowWriter::try_new(file, schema, None).unwrap();
        writer.write(&batch).unwrap();
        writer.close().unwrap();

        let table = load_file(&path).unwrap();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_names(), vec!["SiO2", "MgO", "RockType"]);

        let classes = classify_columns(&table);
        assert_eq!(classes.numeric, vec!["SiO2", "MgO"]);
        assert_eq!(classes.categorical, vec!["RockType"]);

        assert_eq!(
            table.column("SiO2").unwrap().values[0],
            CellValue::Float(50.1)
        );
        assert_eq!(
            table.column("RockType").unwrap().values[1],
            CellValue::String("andesite".into())
        );
    }

    #[test]
    fn unsupported_extension_is_an_error() {
        let err = load_file(Path::new("data.xlsx")).unwrap_err();
        assert!(err.to_string().contains(".xlsx"));
    }

    #[test]
    fn malformed_json_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.json");
        std::fs::write(&path, "{\"not\": \"an array\"}").unwrap();
        assert!(load_file(&path).is_err());
    }
}
