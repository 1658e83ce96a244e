//! Application state for the web server.

use std::sync::Arc;

use indexmap::IndexMap;
use tabscan::Table;

/// Shared application state.
///
/// The table is loaded once at startup and never mutated, so plain `Arc`
/// sharing is enough.
#[derive(Clone)]
pub struct AppState {
    /// The loaded dataset.
    pub table: Arc<Table>,
    /// Named numeric quality metrics served at /api/metrics.
    pub metrics: Arc<IndexMap<String, f64>>,
}

impl AppState {
    /// Create new application state.
    pub fn new(table: Table, metrics: IndexMap<String, f64>) -> Self {
        Self {
            table: Arc::new(table),
            metrics: Arc::new(metrics),
        }
    }
}
