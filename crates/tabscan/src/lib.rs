//! Tabscan: ingestion and inspection pipeline for tabular time-series data.
//!
//! Tabscan loads a delimited file into a typed in-memory table, coercing a
//! designated temporal column to dates, and produces a structural quality
//! report: dimensions, per-column types, missing values, cardinality,
//! duplicate rows, and numeric summary statistics.
//!
//! # Example
//!
//! ```no_run
//! use tabscan::{Inspector, Loader};
//!
//! let table = Loader::new().load("prices.csv").unwrap();
//! let report = Inspector::new().inspect(&table).unwrap();
//!
//! println!("rows: {}", report.dimensions.rows);
//! println!("duplicates: {}", report.duplicates.count);
//! ```

pub mod error;
pub mod infer;
pub mod ingest;
pub mod inspect;
pub mod table;

pub use error::{Result, TabscanError};
pub use ingest::{Loader, LoaderConfig, SourceMetadata};
pub use inspect::{InspectionReport, Inspector, NumericSummary};
pub use table::{Column, ColumnType, ColumnValues, Table, Value};
