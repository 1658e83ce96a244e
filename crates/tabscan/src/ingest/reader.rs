//! Loading delimited tabular files into typed tables.

use std::fs::File;
use std::io::{BufRead, BufReader, Read};
use std::path::Path;

use sha2::{Digest, Sha256};
use tracing::{error, info};

use crate::error::{Result, TabscanError};
use crate::infer;
use crate::table::{is_missing_marker, Column, ColumnType, ColumnValues, Table};

use super::source::SourceMetadata;

/// Delimiters to try when auto-detecting.
const DELIMITERS: &[u8] = &[b'\t', b',', b';', b'|'];

/// Loader configuration.
#[derive(Debug, Clone)]
pub struct LoaderConfig {
    /// Delimiter to use (None = auto-detect).
    pub delimiter: Option<u8>,
    /// Name of the column to coerce to dates, when present in the header.
    pub temporal_column: Option<String>,
    /// Quote character.
    pub quote: u8,
}

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            delimiter: None,
            temporal_column: Some("Date".to_string()),
            quote: b'"',
        }
    }
}

/// Loads delimited tabular files into fully-materialized [`Table`]s.
pub struct Loader {
    config: LoaderConfig,
}

impl Loader {
    /// Create a loader with default configuration (auto-detected delimiter,
    /// `Date` as the temporal column).
    pub fn new() -> Self {
        Self {
            config: LoaderConfig::default(),
        }
    }

    /// Create a loader with custom configuration.
    pub fn with_config(config: LoaderConfig) -> Self {
        Self { config }
    }

    /// Load a file into a table. Fails with `DataAccess` when the path is
    /// missing or unreadable and `MalformedInput` when the contents cannot
    /// be parsed as tabular data; never returns a partial table.
    pub fn load(&self, path: impl AsRef<Path>) -> Result<Table> {
        self.load_with_metadata(path).map(|(table, _)| table)
    }

    /// Load a file, also returning metadata about the source.
    pub fn load_with_metadata(&self, path: impl AsRef<Path>) -> Result<(Table, SourceMetadata)> {
        let path = path.as_ref();
        match self.load_inner(path) {
            Ok((table, source)) => {
                info!(
                    path = %path.display(),
                    rows = table.row_count(),
                    columns = table.column_count(),
                    "data loaded successfully"
                );
                Ok((table, source))
            }
            Err(e) => {
                error!(path = %path.display(), error = %e, "error loading data");
                Err(e)
            }
        }
    }

    fn load_inner(&self, path: &Path) -> Result<(Table, SourceMetadata)> {
        let mut file = File::open(path).map_err(|e| TabscanError::DataAccess {
            path: path.to_path_buf(),
            source: e,
        })?;

        let size_bytes = file
            .metadata()
            .map_err(|e| TabscanError::DataAccess {
                path: path.to_path_buf(),
                source: e,
            })?
            .len();

        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .map_err(|e| TabscanError::DataAccess {
                path: path.to_path_buf(),
                source: e,
            })?;

        // Compute content hash
        let mut hasher = Sha256::new();
        hasher.update(&contents);
        let hash = format!("sha256:{:x}", hasher.finalize());

        let delimiter = match self.config.delimiter {
            Some(d) => d,
            None => detect_delimiter(&contents)?,
        };

        let table = self.parse_bytes(&contents, delimiter)?;

        let format = match delimiter {
            b'\t' => "tsv",
            b',' => "csv",
            b';' => "csv-semicolon",
            b'|' => "psv",
            _ => "delimited",
        }
        .to_string();

        let source = SourceMetadata::new(
            path.to_path_buf(),
            hash,
            size_bytes,
            format,
            table.row_count(),
            table.column_count(),
        );

        Ok((table, source))
    }

    /// Parse bytes into a typed table.
    fn parse_bytes(&self, bytes: &[u8], delimiter: u8) -> Result<Table> {
        // Strict field counts: ragged rows are malformed input, not padded.
        let mut reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .has_headers(true)
            .quote(self.config.quote)
            .flexible(false)
            .from_reader(bytes);

        let headers: Vec<String> = reader.headers()?.iter().map(|s| s.to_string()).collect();
        if headers.is_empty() || headers.iter().all(|h| h.trim().is_empty()) {
            return Err(TabscanError::MalformedInput(
                "no header row found".to_string(),
            ));
        }

        let mut rows: Vec<Vec<String>> = Vec::new();
        for result in reader.records() {
            let record = result?;
            rows.push(record.iter().map(|s| s.to_string()).collect());
        }

        Ok(self.build_columns(headers, &rows))
    }

    /// Decide each column's type once and build tagged-variant storage.
    fn build_columns(&self, headers: Vec<String>, rows: &[Vec<String>]) -> Table {
        let columns = headers
            .into_iter()
            .enumerate()
            .map(|(idx, name)| {
                let raw: Vec<&str> = rows.iter().map(|r| r[idx].as_str()).collect();
                let coerce_temporal = self
                    .config
                    .temporal_column
                    .as_deref()
                    .is_some_and(|t| t == name);
                let values = if coerce_temporal {
                    // Per-cell coercion: unparseable dates become the missing
                    // marker rather than aborting the load.
                    ColumnValues::Temporal(raw.iter().map(|v| infer::parse_date(v)).collect())
                } else {
                    typed_values(&raw)
                };
                Column::new(name, values)
            })
            .collect();

        Table::new(columns)
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Build typed storage for a column from its raw strings.
fn typed_values(raw: &[&str]) -> ColumnValues {
    match infer::infer_column_type(raw) {
        ColumnType::Numeric => ColumnValues::Numeric(
            raw.iter().map(|v| infer::parse_number(v)).collect(),
        ),
        ColumnType::Boolean => {
            ColumnValues::Boolean(raw.iter().map(|v| infer::parse_bool(v)).collect())
        }
        ColumnType::Temporal => {
            ColumnValues::Temporal(raw.iter().map(|v| infer::parse_date(v)).collect())
        }
        ColumnType::Text => ColumnValues::Text(
            raw.iter()
                .map(|v| {
                    let trimmed = v.trim();
                    if is_missing_marker(trimmed) {
                        None
                    } else {
                        Some(trimmed.to_string())
                    }
                })
                .collect(),
        ),
    }
}

/// Detect the delimiter by analyzing the first few lines.
fn detect_delimiter(bytes: &[u8]) -> Result<u8> {
    let reader = BufReader::new(bytes);
    let lines: Vec<String> = reader
        .lines()
        .take(10)
        .filter_map(|l| l.ok())
        .filter(|l| !l.trim().is_empty())
        .collect();

    if lines.is_empty() {
        return Err(TabscanError::MalformedInput(
            "no lines to analyze".to_string(),
        ));
    }

    let mut best_delimiter = b',';
    let mut best_score = 0usize;

    for &delim in DELIMITERS {
        let counts: Vec<usize> = lines
            .iter()
            .map(|line| count_delimiter_in_line(line, delim))
            .collect();

        let first_count = counts[0];
        if first_count == 0 {
            continue;
        }

        // Consistent counts across lines beat raw frequency.
        let consistent = counts.iter().all(|&c| c == first_count);
        let score = if consistent {
            first_count * 1000
        } else {
            first_count
        };

        if score > best_score {
            best_score = score;
            best_delimiter = delim;
        }
    }

    Ok(best_delimiter)
}

/// Count delimiter occurrences in a line, respecting quotes.
fn count_delimiter_in_line(line: &str, delimiter: u8) -> usize {
    let delim_char = delimiter as char;
    let mut count = 0;
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c == delim_char && !in_quotes => count += 1,
            _ => {}
        }
    }

    count
}
