//! Column storage and type tags.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::value::Value;

/// Semantic type of a column, decided once at load time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnType {
    /// Date values.
    Temporal,
    /// Integer or floating-point values.
    Numeric,
    /// True/false values.
    Boolean,
    /// Everything else.
    Text,
}

impl ColumnType {
    /// Returns true if this type is numeric.
    pub fn is_numeric(&self) -> bool {
        matches!(self, ColumnType::Numeric)
    }

    /// Returns true if this type is temporal.
    pub fn is_temporal(&self) -> bool {
        matches!(self, ColumnType::Temporal)
    }
}

/// Tagged-variant value storage for one column.
///
/// `None` entries are the missing marker; the variant is fixed when the
/// column is built and never re-inferred per access.
#[derive(Debug, Clone, PartialEq)]
pub enum ColumnValues {
    Temporal(Vec<Option<NaiveDate>>),
    Numeric(Vec<Option<f64>>),
    Boolean(Vec<Option<bool>>),
    Text(Vec<Option<String>>),
}

impl ColumnValues {
    /// Number of cells, including missing ones.
    pub fn len(&self) -> usize {
        match self {
            ColumnValues::Temporal(v) => v.len(),
            ColumnValues::Numeric(v) => v.len(),
            ColumnValues::Boolean(v) => v.len(),
            ColumnValues::Text(v) => v.len(),
        }
    }

    /// Whether the column has no cells.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// The type tag matching this storage variant.
    pub fn column_type(&self) -> ColumnType {
        match self {
            ColumnValues::Temporal(_) => ColumnType::Temporal,
            ColumnValues::Numeric(_) => ColumnType::Numeric,
            ColumnValues::Boolean(_) => ColumnType::Boolean,
            ColumnValues::Text(_) => ColumnType::Text,
        }
    }

    /// Cell at `row` as a typed [`Value`], or `None` past the end.
    pub fn get(&self, row: usize) -> Option<Value> {
        match self {
            ColumnValues::Temporal(v) => v
                .get(row)
                .map(|c| c.map(Value::Date).unwrap_or(Value::Missing)),
            ColumnValues::Numeric(v) => v
                .get(row)
                .map(|c| c.map(Value::Number).unwrap_or(Value::Missing)),
            ColumnValues::Boolean(v) => v
                .get(row)
                .map(|c| c.map(Value::Bool).unwrap_or(Value::Missing)),
            ColumnValues::Text(v) => v
                .get(row)
                .map(|c| c.clone().map(Value::Text).unwrap_or(Value::Missing)),
        }
    }

    /// Number of missing cells.
    pub fn missing_count(&self) -> usize {
        match self {
            ColumnValues::Temporal(v) => v.iter().filter(|c| c.is_none()).count(),
            ColumnValues::Numeric(v) => v.iter().filter(|c| c.is_none()).count(),
            ColumnValues::Boolean(v) => v.iter().filter(|c| c.is_none()).count(),
            ColumnValues::Text(v) => v.iter().filter(|c| c.is_none()).count(),
        }
    }

    /// Non-missing numeric values, in row order. Empty for non-numeric columns.
    pub fn numeric_values(&self) -> Vec<f64> {
        match self {
            ColumnValues::Numeric(v) => v.iter().flatten().copied().collect(),
            _ => Vec::new(),
        }
    }
}

/// A named column of a [`Table`](super::Table).
#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    /// Column name from the header row.
    pub name: String,
    /// Typed cell storage.
    pub values: ColumnValues,
}

impl Column {
    /// Create a new column.
    pub fn new(name: impl Into<String>, values: ColumnValues) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// The column's type tag.
    pub fn column_type(&self) -> ColumnType {
        self.values.column_type()
    }
}
