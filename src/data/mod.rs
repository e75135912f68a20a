/// Data layer: core types, loading, and column classification.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → Table
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │   Table   │  ordered named columns, typed cells
///   └──────────┘
///        │
///        ▼
///   ┌──────────────────┐
///   │ classify_columns  │  numeric vs. categorical name lists
///   └──────────────────┘
/// ```
pub mod loader;
pub mod model;
