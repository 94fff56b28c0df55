use std::sync::Arc;

use crate::config::Config;
use crate::theme::ThemeRegistry;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Discovered-theme registry. Snapshot-swapped on refresh, so clones
    /// of this handle always observe a consistent descriptor set.
    pub themes: Arc<ThemeRegistry>,
}
