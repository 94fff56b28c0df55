pub mod health;
pub mod render;
pub mod themes;

use axum::{
    routing::{get, post},
    Router,
};

use crate::errors::AppError;
use crate::state::AppState;

/// PDF output goes through the headless-browser page renderer, which is
/// not wired up yet.
async fn not_implemented() -> Result<(), AppError> {
    Err(AppError::NotImplemented)
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Theme API
        .route("/api/v1/themes", get(themes::list_themes))
        .route("/api/v1/themes/refresh", post(themes::refresh_themes))
        // Render API
        .route("/api/v1/render/html", post(render::render_html))
        .route("/api/v1/render/docx", post(render::render_docx))
        .route("/api/v1/render/pdf", post(not_implemented))
        .with_state(state)
}
