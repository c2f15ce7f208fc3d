use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
///
/// Every variant renders as a flat `{"error": "<message>"}` body.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Model not loaded")]
    ModelNotLoaded,

    #[error("No data provided")]
    NoData,

    /// The detail is for logs only; clients see a single fixed message.
    #[error("Invalid or missing input data")]
    InvalidInput(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("Page not found: {0}")]
    PageNotFound(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::ModelNotLoaded | AppError::Server(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::NoData | AppError::InvalidInput(_) => StatusCode::BAD_REQUEST,
            AppError::PageNotFound(_) => StatusCode::NOT_FOUND,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match &self {
            AppError::ModelNotLoaded => tracing::error!("Prediction failed: model not loaded"),
            AppError::NoData => tracing::warn!("No data provided in request"),
            AppError::InvalidInput(detail) => tracing::warn!("Invalid input data: {detail}"),
            AppError::Server(msg) => tracing::error!("Prediction error: {msg}"),
            AppError::PageNotFound(name) => tracing::warn!("Page template missing: {name}"),
        }

        let body = Json(json!({ "error": self.to_string() }));
        (self.status(), body).into_response()
    }
}
