//! Model artifact — the pre-trained success-rate regressor.
//!
//! Handlers only see `SuccessRatePredictor`; the on-disk format and the model
//! family behind it stay swappable. `AppState` holds an
//! `Option<Arc<dyn SuccessRatePredictor>>`, `None` meaning the load failed.

pub mod forest;
pub mod linear;

use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

use crate::models::features::FeatureVector;

pub use forest::ForestModel;
pub use linear::LinearModel;

#[derive(Debug, Error)]
pub enum ModelLoadError {
    #[error("Model file {0} not found")]
    NotFound(String),

    #[error("Failed to read model file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to decode model file: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("Invalid model: {0}")]
    Invalid(String),
}

#[derive(Debug, Error)]
pub enum PredictError {
    #[error("model produced a non-finite success rate ({0})")]
    NonFinite(f64),

    #[error("{0}")]
    Model(String),
}

/// One capability: six readings in, one success rate out.
pub trait SuccessRatePredictor: Send + Sync {
    fn predict(&self, features: &FeatureVector) -> Result<f64, PredictError>;
}

/// Serialized model, tagged by model family.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ModelArtifact {
    Linear(LinearModel),
    Forest(ForestModel),
}

impl ModelArtifact {
    pub fn from_json(raw: &str) -> Result<Self, ModelLoadError> {
        let artifact: ModelArtifact = serde_json::from_str(raw)?;
        artifact.validate()?;
        Ok(artifact)
    }

    fn validate(&self) -> Result<(), ModelLoadError> {
        match self {
            ModelArtifact::Linear(m) => m.validate(),
            ModelArtifact::Forest(m) => m.validate(),
        }
    }

    pub fn into_predictor(self) -> Arc<dyn SuccessRatePredictor> {
        match self {
            ModelArtifact::Linear(m) => Arc::new(m),
            ModelArtifact::Forest(m) => Arc::new(m),
        }
    }
}

/// Reads and validates the artifact at `path`.
pub async fn load_model(path: &Path) -> Result<Arc<dyn SuccessRatePredictor>, ModelLoadError> {
    debug!("Resolved model path: {}", path.display());

    let raw = match tokio::fs::read_to_string(path).await {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(ModelLoadError::NotFound(path.display().to_string()));
        }
        Err(e) => return Err(e.into()),
    };

    let artifact = ModelArtifact::from_json(&raw)?;
    match &artifact {
        ModelArtifact::Linear(_) => info!("Loaded linear model"),
        ModelArtifact::Forest(m) => info!("Loaded forest model ({} trees)", m.trees.len()),
    }
    Ok(artifact.into_predictor())
}

pub(crate) fn ensure_finite(rate: f64) -> Result<f64, PredictError> {
    if rate.is_finite() {
        Ok(rate)
    } else {
        Err(PredictError::NonFinite(rate))
    }
}
