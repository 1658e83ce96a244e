//! Quality metrics handler.

use axum::{extract::State, Json};
use indexmap::IndexMap;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Get the configured model quality metrics (e.g. RMSE, MAE).
pub async fn get_metrics(
    State(state): State<AppState>,
) -> Result<Json<IndexMap<String, f64>>, ApiError> {
    Ok(Json(state.metrics.as_ref().clone()))
}
