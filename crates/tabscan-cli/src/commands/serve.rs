//! Serve command - host the dataset over HTTP.

use std::path::PathBuf;

use indexmap::IndexMap;

use crate::server::{run_server, AppState};

pub fn run(
    file: PathBuf,
    port: u16,
    date_column: String,
    metrics: Option<PathBuf>,
) -> Result<(), Box<dyn std::error::Error>> {
    let table = super::load_table(&file, date_column)?;
    let metrics = load_metrics(metrics.as_deref())?;

    let state = AppState::new(table, metrics);

    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(run_server(state, port))
}

/// Read the metrics map from a JSON file, or fall back to the built-in
/// placeholder values the pipeline will eventually populate.
fn load_metrics(
    path: Option<&std::path::Path>,
) -> Result<IndexMap<String, f64>, Box<dyn std::error::Error>> {
    match path {
        Some(p) => {
            let contents = std::fs::read_to_string(p)?;
            Ok(serde_json::from_str(&contents)?)
        }
        None => {
            let mut metrics = IndexMap::new();
            metrics.insert("RMSE".to_string(), 1.2);
            metrics.insert("MAE".to_string(), 1.0);
            Ok(metrics)
        }
    }
}
