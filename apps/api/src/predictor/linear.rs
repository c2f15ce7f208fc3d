use serde::Deserialize;

use crate::models::features::{FeatureVector, FEATURE_COUNT};

use super::{ensure_finite, ModelLoadError, PredictError, SuccessRatePredictor};

/// `intercept + Σ weightᵢ · xᵢ`
#[derive(Debug, Clone, Deserialize)]
pub struct LinearModel {
    pub weights: [f64; FEATURE_COUNT],
    pub intercept: f64,
}

impl LinearModel {
    pub(super) fn validate(&self) -> Result<(), ModelLoadError> {
        if self.weights.iter().chain([&self.intercept]).all(|w| w.is_finite()) {
            Ok(())
        } else {
            Err(ModelLoadError::Invalid(
                "linear coefficients must be finite".to_string(),
            ))
        }
    }
}

impl SuccessRatePredictor for LinearModel {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictError> {
        let dot: f64 = self
            .weights
            .iter()
            .zip(features.values())
            .map(|(w, x)| w * x)
            .sum();
        ensure_finite(self.intercept + dot)
    }
}
