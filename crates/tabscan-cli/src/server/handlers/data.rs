//! Dataset rows handler.

use axum::{extract::State, Json};
use indexmap::IndexMap;
use serde_json::Value;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Get the dataset as one JSON object per row, keys in original column
/// order, in original row order.
pub async fn get_data(
    State(state): State<AppState>,
) -> Result<Json<Vec<IndexMap<String, Value>>>, ApiError> {
    let table = &state.table;
    let names = table.column_names();

    let rows: Vec<IndexMap<String, Value>> = table
        .rows()
        .map(|row| {
            names
                .iter()
                .zip(row.iter())
                .map(|(name, cell)| (name.to_string(), cell.to_json()))
                .collect()
        })
        .collect();

    Ok(Json(rows))
}
