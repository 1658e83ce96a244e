//! Table inspection: structural diagnostics over a loaded table.

mod report;
mod stats;

pub use report::{Dimensions, DuplicateReport, DuplicateRow, InspectionReport, NumericSummary};

use std::collections::HashSet;

use indexmap::IndexMap;
use tracing::{error, info, warn};

use crate::error::{Result, TabscanError};
use crate::table::{Table, ValueKey};

/// Produces an [`InspectionReport`] from a borrowed table.
///
/// Inspection never mutates the table and retains no reference to it after
/// the call returns; the report is the only output besides log events.
pub struct Inspector;

impl Inspector {
    /// Create a new inspector.
    pub fn new() -> Self {
        Self
    }

    /// Inspect a table for structure, completeness, duplication, and numeric
    /// distribution. Fails with `EmptyInput` before any other computation
    /// when the table has zero rows or zero columns.
    pub fn inspect(&self, table: &Table) -> Result<InspectionReport> {
        if table.row_count() == 0 || table.column_count() == 0 {
            error!(
                rows = table.row_count(),
                columns = table.column_count(),
                "table is empty, nothing to inspect"
            );
            return Err(TabscanError::EmptyInput(
                "table has no rows or no columns".to_string(),
            ));
        }

        let dimensions = Dimensions {
            rows: table.row_count(),
            columns: table.column_count(),
        };
        info!(rows = dimensions.rows, columns = dimensions.columns, "inspecting table");

        let column_types: IndexMap<String, _> = table
            .columns()
            .iter()
            .map(|c| (c.name.clone(), c.column_type()))
            .collect();

        let null_counts: IndexMap<String, usize> = table
            .columns()
            .iter()
            .map(|c| (c.name.clone(), c.values.missing_count()))
            .collect();

        for (name, &count) in &null_counts {
            if count > 0 {
                warn!(column = %name, missing = count, "missing values found");
            }
        }
        if null_counts.values().all(|&n| n == 0) {
            info!("no missing values detected");
        }

        let distinct_counts = distinct_counts(table);
        let duplicates = find_duplicates(table);

        if duplicates.count > 0 {
            warn!(duplicates = duplicates.count, "duplicate rows found");
        } else {
            info!("no duplicate rows found");
        }

        let numeric_summaries: IndexMap<String, NumericSummary> = table
            .columns()
            .iter()
            .filter(|c| c.column_type().is_numeric())
            .filter_map(|c| {
                stats::summarize(&c.values.numeric_values()).map(|s| (c.name.clone(), s))
            })
            .collect();

        info!("inspection completed");

        Ok(InspectionReport {
            dimensions,
            column_types,
            null_counts,
            distinct_counts,
            duplicates,
            numeric_summaries,
        })
    }
}

impl Default for Inspector {
    fn default() -> Self {
        Self::new()
    }
}

/// Distinct non-missing values per column, compared by typed equality.
fn distinct_counts(table: &Table) -> IndexMap<String, usize> {
    table
        .columns()
        .iter()
        .map(|c| {
            let mut seen: HashSet<ValueKey> = HashSet::new();
            for row in 0..table.row_count() {
                if let Some(value) = c.values.get(row) {
                    if !value.is_missing() {
                        seen.insert(value.key());
                    }
                }
            }
            (c.name.clone(), seen.len())
        })
        .collect()
}

/// Rows whose every cell exactly equals an earlier row's, in original order.
fn find_duplicates(table: &Table) -> DuplicateReport {
    let mut seen: HashSet<Vec<ValueKey>> = HashSet::new();
    let mut rows = Vec::new();

    for (index, row) in table.rows().enumerate() {
        let key: Vec<ValueKey> = row.iter().map(|v| v.key()).collect();
        if !seen.insert(key) {
            rows.push(DuplicateRow { index, values: row });
        }
    }

    DuplicateReport {
        count: rows.len(),
        rows,
    }
}
