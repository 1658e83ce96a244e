//! Structured diagnostic report types.

use indexmap::IndexMap;
use serde::Serialize;

use crate::table::{ColumnType, Value};

/// Table dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Dimensions {
    /// Number of data rows.
    pub rows: usize,
    /// Number of columns.
    pub columns: usize,
}

/// Summary statistics for one numeric column, missing values excluded.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NumericSummary {
    /// Count of non-missing values.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Sample standard deviation; `null` when fewer than two values.
    pub std: Option<f64>,
    pub min: f64,
    /// 25th percentile (linear interpolation).
    pub q1: f64,
    /// 50th percentile.
    pub median: f64,
    /// 75th percentile.
    pub q3: f64,
    pub max: f64,
}

/// One duplicate occurrence: a row whose every cell equals an earlier row's.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DuplicateRow {
    /// Zero-based position in the original row order.
    pub index: usize,
    /// Full row content, in column order.
    pub values: Vec<Value>,
}

/// Duplicate-row findings: every occurrence beyond the first, original order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DuplicateReport {
    /// Number of duplicate occurrences.
    pub count: usize,
    /// The duplicate rows themselves.
    pub rows: Vec<DuplicateRow>,
}

/// A read-only diagnostic snapshot of one table at one point in time.
///
/// Maps are keyed by column name in original column order. The report is a
/// deterministic function of the table's contents; inspecting the same table
/// twice yields identical reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InspectionReport {
    /// Row and column counts.
    pub dimensions: Dimensions,
    /// Inferred type per column.
    pub column_types: IndexMap<String, ColumnType>,
    /// Missing/unparseable cell count per column.
    pub null_counts: IndexMap<String, usize>,
    /// Distinct non-missing value count per column.
    pub distinct_counts: IndexMap<String, usize>,
    /// Duplicate-row findings.
    pub duplicates: DuplicateReport,
    /// Summary statistics, numeric columns only.
    pub numeric_summaries: IndexMap<String, NumericSummary>,
}

impl InspectionReport {
    /// Total missing cells across all columns.
    pub fn total_missing(&self) -> usize {
        self.null_counts.values().sum()
    }

    /// Whether any column has missing values.
    pub fn has_missing(&self) -> bool {
        self.null_counts.values().any(|&n| n > 0)
    }
}
