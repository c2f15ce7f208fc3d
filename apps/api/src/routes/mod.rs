pub mod health;
pub mod pages;

use std::any::Any;

use axum::{
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use tower_http::{catch_panic::CatchPanicLayer, services::ServeDir};

use crate::errors::AppError;
use crate::prediction::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let static_files = ServeDir::new(&state.paths.static_dir);

    Router::new()
        .route("/health", get(health::health_handler))
        // Pages
        .route("/", get(pages::handle_home))
        .route("/results", get(pages::handle_results))
        .route("/Activities", get(pages::handle_activities))
        .route("/About", get(pages::handle_about))
        // Prediction API
        .route("/predict", post(handlers::handle_predict))
        .nest_service("/static", static_files)
        .layer(CatchPanicLayer::custom(panic_response))
        .with_state(state)
}

/// Turns a handler panic into the same 500 payload as any other server error.
fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = panic.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = panic.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };
    AppError::Server(message).into_response()
}
