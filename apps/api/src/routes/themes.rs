use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::state::AppState;
use crate::theme::ThemeDescriptor;

/// GET /api/v1/themes
/// Lists the currently discovered themes.
pub async fn list_themes(State(state): State<AppState>) -> Json<Vec<ThemeDescriptor>> {
    Json(state.themes.themes().as_ref().clone())
}

/// POST /api/v1/themes/refresh
/// Re-scans the themes directory and swaps in the new descriptor set.
pub async fn refresh_themes(State(state): State<AppState>) -> Json<Value> {
    let count = state.themes.refresh().await;
    tracing::info!("theme refresh complete: {count} themes");
    Json(json!({ "count": count }))
}
