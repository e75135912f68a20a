use std::collections::BTreeSet;
use std::fmt;

// ---------------------------------------------------------------------------
// CellValue – a single cell of the loaded table
// ---------------------------------------------------------------------------

/// A dynamically-typed table cell mirroring the value kinds a CSV / JSON /
/// Parquet column can carry. Using `BTreeSet` downstream for unique group
/// values, so `CellValue` must be `Ord`.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    String(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Null,
}

// -- Manual Eq/Ord so we can put CellValue in BTreeSet --

impl Eq for CellValue {}

impl PartialOrd for CellValue {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CellValue {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        use CellValue::*;
        fn discriminant(v: &CellValue) -> u8 {
            match v {
                Null => 0,
                Bool(_) => 1,
                Integer(_) => 2,
                Float(_) => 3,
                String(_) => 4,
            }
        }
        let da = discriminant(self);
        let db = discriminant(other);
        if da != db {
            return da.cmp(&db);
        }
        match (self, other) {
            (Null, Null) => std::cmp::Ordering::Equal,
            (Bool(a), Bool(b)) => a.cmp(b),
            (Integer(a), Integer(b)) => a.cmp(b),
            (Float(a), Float(b)) => a.total_cmp(b),
            (String(a), String(b)) => a.cmp(b),
            _ => std::cmp::Ordering::Equal,
        }
    }
}

impl std::hash::Hash for CellValue {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            CellValue::String(s) => s.hash(state),
            CellValue::Integer(i) => i.hash(state),
            CellValue::Float(f) => f.to_bits().hash(state),
            CellValue::Bool(b) => b.hash(state),
            CellValue::Null => {}
        }
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::String(s) => write!(f, "{s}"),
            CellValue::Integer(i) => write!(f, "{i}"),
            CellValue::Float(v) => write!(f, "{v}"),
            CellValue::Bool(b) => write!(f, "{b}"),
            CellValue::Null => write!(f, "<null>"),
        }
    }
}

impl CellValue {
    /// Try to interpret the value as an `f64` for plotting.
    /// Booleans and text deliberately do not count as numeric.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Float(v) => Some(*v),
            CellValue::Integer(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CellValue::Null)
    }
}

// ---------------------------------------------------------------------------
// Column – one named column of the table
// ---------------------------------------------------------------------------

/// Semantic kind of a column, inferred from its cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

/// A named column with its cells.
#[derive(Debug, Clone)]
pub struct Column {
    pub name: String,
    pub values: Vec<CellValue>,
}

impl Column {
    pub fn new(name: impl Into<String>, values: Vec<CellValue>) -> Self {
        Column {
            name: name.into(),
            values,
        }
    }

    /// A column is numeric when every non-null cell is an integer or float.
    /// An all-null (or empty) column carries no numeric evidence and is
    /// treated as categorical.
    pub fn kind(&self) -> ColumnKind {
        let mut saw_number = false;
        for v in &self.values {
            match v {
                CellValue::Integer(_) | CellValue::Float(_) => saw_number = true,
                CellValue::Null => {}
                _ => return ColumnKind::Categorical,
            }
        }
        if saw_number {
            ColumnKind::Numeric
        } else {
            ColumnKind::Categorical
        }
    }
}

// ---------------------------------------------------------------------------
// Table – the complete loaded dataset
// ---------------------------------------------------------------------------

/// An ordered set of equally-long, uniquely-named columns. Built once by the
/// loader and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct Table {
    columns: Vec<Column>,
}

impl Table {
    /// Build a table from columns. Later duplicates of a column name are
    /// dropped; columns are padded with nulls to the longest length so every
    /// column reports the same row count.
    pub fn from_columns(columns: Vec<Column>) -> Self {
        let mut seen: BTreeSet<String> = BTreeSet::new();
        let mut kept: Vec<Column> = Vec::with_capacity(columns.len());
        for col in columns {
            if seen.insert(col.name.clone()) {
                kept.push(col);
            }
        }
        let n_rows = kept.iter().map(|c| c.values.len()).max().unwrap_or(0);
        for col in &mut kept {
            col.values.resize(n_rows, CellValue::Null);
        }
        Table { columns: kept }
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<String> {
        self.columns.iter().map(|c| c.name.clone()).collect()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Number of rows (0 for a table with no columns).
    pub fn row_count(&self) -> usize {
        self.columns.first().map_or(0, |c| c.values.len())
    }

    pub fn is_empty(&self) -> bool {
        self.row_count() == 0
    }

    /// Sorted unique values of a column (empty when the column is unknown).
    pub fn unique_values(&self, name: &str) -> BTreeSet<CellValue> {
        self.column(name)
            .map(|c| c.values.iter().cloned().collect())
            .unwrap_or_default()
    }
}

// ---------------------------------------------------------------------------
// Column classification
// ---------------------------------------------------------------------------

/// Column names partitioned by kind, both lists in table column order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnClasses {
    pub numeric: Vec<String>,
    pub categorical: Vec<String>,
}

/// Split the table's columns into numeric and categorical name lists.
/// The lists are disjoint, cover every column, and preserve the table's
/// column order. An empty table yields two empty lists.
pub fn classify_columns(table: &Table) -> ColumnClasses {
    let mut classes = ColumnClasses::default();
    for col in table.columns() {
        match col.kind() {
            ColumnKind::Numeric => classes.numeric.push(col.name.clone()),
            ColumnKind::Categorical => classes.categorical.push(col.name.clone()),
        }
    }
    classes
}

#[cfg(test)]
mod tests {
    use super::*;

    fn num(vals: &[f64]) -> Vec<CellValue> {
        vals.iter().map(|&v| CellValue::Float(v)).collect()
    }

    fn text(vals: &[&str]) -> Vec<CellValue> {
        vals.iter().map(|s| CellValue::String(s.to_string())).collect()
    }

    #[test]
    fn classify_splits_numeric_and_categorical_in_order() {
        let table = Table::from_columns(vec![
            Column::new("SiO2", num(&[50.1, 52.3])),
            Column::new("MgO", num(&[7.1, 5.2])),
            Column::new("RockType", text(&["basalt", "andesite"])),
        ]);
        let classes = classify_columns(&table);
        assert_eq!(classes.numeric, vec!["SiO2", "MgO"]);
        assert_eq!(classes.categorical, vec!["RockType"]);
    }

    #[test]
    fn classify_is_disjoint_and_covering() {
        let table = Table::from_columns(vec![
            Column::new("a", num(&[1.0])),
            Column::new("b", text(&["x"])),
            Column::new("c", vec![CellValue::Integer(3)]),
            Column::new("d", vec![CellValue::Bool(true)]),
        ]);
        let classes = classify_columns(&table);
        for name in &classes.numeric {
            assert!(!classes.categorical.contains(name));
        }
        let mut all: Vec<String> = classes.numeric.clone();
        all.extend(classes.categorical.clone());
        all.sort();
        let mut expected = table.column_names();
        expected.sort();
        assert_eq!(all, expected);
    }

    #[test]
    fn empty_table_yields_empty_classes() {
        let classes = classify_columns(&Table::default());
        assert!(classes.numeric.is_empty());
        assert!(classes.categorical.is_empty());
    }

    #[test]
    fn is_empty_tracks_row_count() {
        assert!(Table::default().is_empty());

        let headers_only = Table::from_columns(vec![Column::new("SiO2", vec![])]);
        assert!(headers_only.is_empty());

        let table = Table::from_columns(vec![Column::new("SiO2", num(&[50.1]))]);
        assert!(!table.is_empty());
    }

    #[test]
    fn nulls_do_not_break_numeric_inference() {
        let col = Column::new(
            "LOI",
            vec![CellValue::Float(1.2), CellValue::Null, CellValue::Integer(2)],
        );
        assert_eq!(col.kind(), ColumnKind::Numeric);

        let all_null = Column::new("empty", vec![CellValue::Null, CellValue::Null]);
        assert_eq!(all_null.kind(), ColumnKind::Categorical);
    }

    #[test]
    fn mixed_text_column_is_categorical() {
        let col = Column::new(
            "date",
            vec![
                CellValue::String("2024-01-01".into()),
                CellValue::Float(3.0),
            ],
        );
        assert_eq!(col.kind(), ColumnKind::Categorical);
    }

    #[test]
    fn duplicate_column_names_are_dropped() {
        let table = Table::from_columns(vec![
            Column::new("SiO2", num(&[50.0])),
            Column::new("SiO2", num(&[60.0])),
        ]);
        assert_eq!(table.column_names(), vec!["SiO2"]);
        assert_eq!(
            table.column("SiO2").unwrap().values[0],
            CellValue::Float(50.0)
        );
    }

    #[test]
    fn ragged_columns_are_padded_with_nulls() {
        let table = Table::from_columns(vec![
            Column::new("a", num(&[1.0, 2.0, 3.0])),
            Column::new("b", text(&["x"])),
        ]);
        assert_eq!(table.row_count(), 3);
        assert!(table.column("b").unwrap().values[2].is_null());
    }
}
