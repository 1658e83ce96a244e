//! Content-based column type inference and temporal parsing.

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use crate::table::{is_missing_marker, ColumnType};

// Date patterns compiled once on first use. These are a cheap pre-filter;
// candidates still go through a real chrono parse.
static DATE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    vec![
        Regex::new(r"^\d{4}-\d{2}-\d{2}$").unwrap(), // ISO date
        Regex::new(r"^\d{4}/\d{2}/\d{2}$").unwrap(), // Alt ISO
        Regex::new(r"^\d{1,2}/\d{1,2}/\d{4}$").unwrap(), // Day-first slashed
        Regex::new(r"^\d{1,2}-\d{1,2}-\d{4}$").unwrap(), // Day-first dashed
        Regex::new(r"^\d{1,2}-[A-Za-z]{3}-\d{2}$").unwrap(), // e.g. 20-May-87
    ]
});

/// Formats tried when coercing a temporal cell, day-first variants before
/// ISO so that `03/04/2020` reads as the 3rd of April.
const DATE_FORMATS: &[&str] = &["%d/%m/%Y", "%d-%m-%Y", "%d-%b-%y", "%Y-%m-%d", "%Y/%m/%d"];

/// Parse a single date cell after stripping surrounding whitespace.
/// Returns `None` for missing markers and unparseable values, never errors.
pub fn parse_date(raw: &str) -> Option<NaiveDate> {
    let trimmed = raw.trim();
    if is_missing_marker(trimmed) {
        return None;
    }
    DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(trimmed, fmt).ok())
}

/// Parse a boolean word. Only clear boolean words count; "1"/"0" stay numeric.
pub fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "yes" => Some(true),
        "false" | "no" => Some(false),
        _ => None,
    }
}

/// Parse a numeric cell. Non-finite results are rejected so that values
/// like "inf" cannot poison summary statistics.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Whether a trimmed value looks like a date.
pub fn looks_like_date(value: &str) -> bool {
    DATE_PATTERNS.iter().any(|pattern| pattern.is_match(value))
}

/// Classify a column from its raw cell values.
///
/// A column is Numeric, Boolean, or Temporal only when every non-missing
/// value parses as that type; anything mixed is Text. An all-missing column
/// is Text. The decision is made once at load time.
pub fn infer_column_type(raw_values: &[&str]) -> ColumnType {
    let non_missing: Vec<&str> = raw_values
        .iter()
        .map(|v| v.trim())
        .filter(|v| !is_missing_marker(v))
        .collect();

    if non_missing.is_empty() {
        return ColumnType::Text;
    }

    if non_missing.iter().all(|v| parse_bool(v).is_some()) {
        return ColumnType::Boolean;
    }
    if non_missing.iter().all(|v| parse_number(v).is_some()) {
        return ColumnType::Numeric;
    }
    if non_missing
        .iter()
        .all(|v| looks_like_date(v) && parse_date(v).is_some())
    {
        return ColumnType::Temporal;
    }

    ColumnType::Text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_date_iso() {
        assert_eq!(
            parse_date("2021-01-02"),
            NaiveDate::from_ymd_opt(2021, 1, 2)
        );
    }

    #[test]
    fn test_parse_date_day_first() {
        assert_eq!(
            parse_date("03/04/2020"),
            NaiveDate::from_ymd_opt(2020, 4, 3)
        );
        assert_eq!(
            parse_date("20-May-87"),
            NaiveDate::from_ymd_opt(1987, 5, 20)
        );
    }

    #[test]
    fn test_parse_date_trims_whitespace() {
        assert_eq!(
            parse_date("  2021-01-02  "),
            NaiveDate::from_ymd_opt(2021, 1, 2)
        );
    }

    #[test]
    fn test_parse_date_invalid_becomes_none() {
        assert_eq!(parse_date("not a date"), None);
        assert_eq!(parse_date("2021-13-40"), None);
        assert_eq!(parse_date("NA"), None);
    }

    #[test]
    fn test_infer_numeric() {
        assert_eq!(
            infer_column_type(&["1", "2.5", "100", "NA"]),
            ColumnType::Numeric
        );
    }

    #[test]
    fn test_parse_number_rejects_non_finite() {
        assert_eq!(parse_number("inf"), None);
        assert_eq!(parse_number("-inf"), None);
        assert_eq!(parse_number("100"), Some(100.0));
    }

    #[test]
    fn test_nan_cell_is_missing_not_numeric() {
        // "NaN" is a missing marker, so the remaining values decide the type.
        assert_eq!(
            infer_column_type(&["100", "NaN", "200"]),
            ColumnType::Numeric
        );
    }

    #[test]
    fn test_infer_boolean() {
        assert_eq!(
            infer_column_type(&["true", "false", "yes"]),
            ColumnType::Boolean
        );
    }

    #[test]
    fn test_infer_temporal() {
        assert_eq!(
            infer_column_type(&["2021-01-01", "2021-01-02"]),
            ColumnType::Temporal
        );
    }

    #[test]
    fn test_mixed_column_is_text() {
        assert_eq!(infer_column_type(&["1", "abc", "3"]), ColumnType::Text);
    }

    #[test]
    fn test_all_missing_is_text() {
        assert_eq!(infer_column_type(&["", "NA", "null"]), ColumnType::Text);
    }
}
