use std::sync::Arc;

use crate::config::AppPaths;
use crate::predictor::SuccessRatePredictor;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup and never mutated. `None` when loading failed;
    /// every prediction is then rejected until restart.
    pub model: Option<Arc<dyn SuccessRatePredictor>>,
    pub paths: AppPaths,
}

impl AppState {
    pub fn model_loaded(&self) -> bool {
        self.model.is_some()
    }
}
