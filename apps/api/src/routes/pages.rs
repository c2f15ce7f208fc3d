use axum::{extract::State, response::Html};

use crate::errors::AppError;
use crate::state::AppState;

/// Reads a page document from the template directory as-is.
async fn render_page(state: &AppState, file: &str) -> Result<Html<String>, AppError> {
    let path = state.paths.template_dir.join(file);
    match tokio::fs::read_to_string(&path).await {
        Ok(doc) => Ok(Html(doc)),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(AppError::PageNotFound(file.to_string()))
        }
        Err(e) => Err(AppError::Server(format!(
            "failed to read {}: {e}",
            path.display()
        ))),
    }
}

/// GET /
pub async fn handle_home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_page(&state, "index.html").await
}

/// GET /results
pub async fn handle_results(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_page(&state, "results.html").await
}

/// GET /Activities
pub async fn handle_activities(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_page(&state, "Activities.html").await
}

/// GET /About
pub async fn handle_about(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_page(&state, "About.html").await
}
