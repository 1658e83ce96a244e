//! Typed cell values and equality keys.

use chrono::NaiveDate;
use serde::ser::Serializer;
use serde::Serialize;

/// A single typed cell of a [`Table`](super::Table).
///
/// `Missing` is the explicit marker for absent or unparseable cells; a cell
/// never holds a raw sentinel string like "NA" after loading.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absent or unparseable cell.
    Missing,
    /// Boolean cell.
    Bool(bool),
    /// Numeric cell (integers and floats share one representation).
    Number(f64),
    /// Textual cell.
    Text(String),
    /// Temporal cell.
    Date(NaiveDate),
}

impl Value {
    /// Whether this cell is the missing marker.
    pub fn is_missing(&self) -> bool {
        matches!(self, Value::Missing)
    }

    /// Equality key used for distinct counts and duplicate-row detection.
    ///
    /// Numbers compare by numeric equality (-0.0 folds into 0.0, NaN into a
    /// single canonical NaN); missing markers compare equal to each other.
    pub fn key(&self) -> ValueKey {
        match self {
            Value::Missing => ValueKey::Missing,
            Value::Bool(b) => ValueKey::Bool(*b),
            Value::Number(n) => ValueKey::Number(canonical_bits(*n)),
            Value::Text(s) => ValueKey::Text(s.clone()),
            Value::Date(d) => ValueKey::Date(*d),
        }
    }

    /// Convert to a JSON value. Dates render as `YYYY-MM-DD`; integral
    /// numbers render without a fractional part.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Missing => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Number(n) => {
                if n.fract() == 0.0 && n.abs() < (i64::MAX as f64) {
                    serde_json::Value::from(*n as i64)
                } else {
                    serde_json::Number::from_f64(*n)
                        .map(serde_json::Value::Number)
                        .unwrap_or(serde_json::Value::Null)
                }
            }
            Value::Text(s) => serde_json::Value::String(s.clone()),
            Value::Date(d) => serde_json::Value::String(d.format("%Y-%m-%d").to_string()),
        }
    }
}

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.to_json().serialize(serializer)
    }
}

/// Hashable equality key for a [`Value`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ValueKey {
    Missing,
    Bool(bool),
    /// Canonicalized IEEE-754 bits.
    Number(u64),
    Text(String),
    Date(NaiveDate),
}

fn canonical_bits(n: f64) -> u64 {
    if n.is_nan() {
        f64::NAN.to_bits()
    } else if n == 0.0 {
        0.0_f64.to_bits()
    } else {
        n.to_bits()
    }
}

/// Check if a raw cell string represents a missing/null value.
pub fn is_missing_marker(value: &str) -> bool {
    let trimmed = value.trim();
    trimmed.is_empty()
        || trimmed.eq_ignore_ascii_case("na")
        || trimmed.eq_ignore_ascii_case("n/a")
        || trimmed.eq_ignore_ascii_case("nan")
        || trimmed.eq_ignore_ascii_case("null")
        || trimmed.eq_ignore_ascii_case("none")
        || trimmed.eq_ignore_ascii_case("nil")
        || trimmed == "."
        || trimmed == "-"
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_missing_marker() {
        assert!(is_missing_marker(""));
        assert!(is_missing_marker("NA"));
        assert!(is_missing_marker("na"));
        assert!(is_missing_marker("N/A"));
        assert!(is_missing_marker("null"));
        assert!(is_missing_marker("NULL"));
        assert!(is_missing_marker("NaN"));
        assert!(is_missing_marker("nan"));
        assert!(is_missing_marker("."));
        assert!(!is_missing_marker("value"));
        assert!(!is_missing_marker("0"));
    }

    #[test]
    fn test_numeric_key_equality() {
        assert_eq!(Value::Number(0.0).key(), Value::Number(-0.0).key());
        assert_eq!(Value::Number(100.0).key(), Value::Number(100.0).key());
        assert_ne!(Value::Number(100.0).key(), Value::Number(200.0).key());
    }

    #[test]
    fn test_missing_keys_compare_equal() {
        assert_eq!(Value::Missing.key(), Value::Missing.key());
    }

    #[test]
    fn test_integral_number_renders_without_fraction() {
        assert_eq!(Value::Number(100.0).to_json(), serde_json::json!(100));
        assert_eq!(Value::Number(1.5).to_json(), serde_json::json!(1.5));
    }
}
