//! In-memory table model: ordered, named, equal-length typed columns.

mod column;
mod value;

pub use column::{Column, ColumnType, ColumnValues};
pub use value::{is_missing_marker, Value, ValueKey};

/// An ordered set of named columns of equal row count.
///
/// Rows have no identity beyond positional order as loaded. The loader owns
/// construction; inspection borrows a table and never mutates it.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Create a table from columns. All columns must share a row count.
    pub fn new(columns: Vec<Column>) -> Self {
        let row_count = columns.first().map(|c| c.values.len()).unwrap_or(0);
        debug_assert!(
            columns.iter().all(|c| c.values.len() == row_count),
            "columns must have equal row counts"
        );
        Self { columns, row_count }
    }

    /// Number of data rows.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Number of columns.
    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// The columns, in original order.
    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    /// All column names, in original order.
    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    /// Get a column by name.
    pub fn column_by_name(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Get a specific cell value.
    pub fn get(&self, row: usize, col: usize) -> Option<Value> {
        self.columns.get(col).and_then(|c| c.values.get(row))
    }

    /// The full content of one row, in column order.
    pub fn row(&self, row: usize) -> Option<Vec<Value>> {
        if row >= self.row_count {
            return None;
        }
        Some(
            self.columns
                .iter()
                .map(|c| c.values.get(row).unwrap_or(Value::Missing))
                .collect(),
        )
    }

    /// Iterate over rows in original order.
    pub fn rows(&self) -> impl Iterator<Item = Vec<Value>> + '_ {
        (0..self.row_count).map(move |i| self.row(i).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sales_table() -> Table {
        Table::new(vec![
            Column::new(
                "Sales",
                ColumnValues::Numeric(vec![Some(100.0), Some(200.0)]),
            ),
            Column::new(
                "Region",
                ColumnValues::Text(vec![Some("north".to_string()), None]),
            ),
        ])
    }

    #[test]
    fn test_dimensions() {
        let table = sales_table();
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.column_count(), 2);
        assert_eq!(table.column_names(), vec!["Sales", "Region"]);
    }

    #[test]
    fn test_row_access() {
        let table = sales_table();
        assert_eq!(
            table.row(1),
            Some(vec![Value::Number(200.0), Value::Missing])
        );
        assert_eq!(table.row(2), None);
    }

    #[test]
    fn test_column_by_name() {
        let table = sales_table();
        assert_eq!(
            table.column_by_name("Sales").map(|c| c.column_type()),
            Some(ColumnType::Numeric)
        );
        assert!(table.column_by_name("missing").is_none());
    }
}
