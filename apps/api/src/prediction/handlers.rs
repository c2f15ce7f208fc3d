use axum::{extract::State, Json};
use bytes::Bytes;
use tracing::{debug, info};

use crate::errors::AppError;
use crate::models::features::FeatureVector;
use crate::models::prediction::PredictionResponse;
use crate::predictor::SuccessRatePredictor;
use crate::prediction::tiers::Tier;
use crate::state::AppState;

/// POST /predict
///
/// The body is taken raw so that malformed JSON maps onto our own error
/// payloads instead of Axum's default rejection.
pub async fn handle_predict(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PredictionResponse>, AppError> {
    let model = state.model.as_deref().ok_or(AppError::ModelNotLoaded)?;

    let features = FeatureVector::from_json_body(&body)?;
    debug!("Received features: {features}");

    let response = score(model, &features)?;
    info!(
        "Prediction successful: SuccessRate={:.2}",
        response.success_rate
    );
    Ok(Json(response))
}

/// Runs the model and attaches the suggestions for the resulting tier.
pub fn score(
    model: &dyn SuccessRatePredictor,
    features: &FeatureVector,
) -> Result<PredictionResponse, AppError> {
    let success_rate = model
        .predict(features)
        .map_err(|e| AppError::Server(e.to_string()))?;

    let suggestions = Tier::for_success_rate(success_rate)
        .suggestions()
        .iter()
        .map(|s| s.to_string())
        .collect();

    Ok(PredictionResponse {
        success_rate,
        suggestions,
    })
}
