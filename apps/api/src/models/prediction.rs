use serde::{Deserialize, Serialize};

/// Successful `/predict` response body.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResponse {
    #[serde(rename = "SuccessRate")]
    pub success_rate: f64,
    #[serde(rename = "Suggestions")]
    pub suggestions: Vec<String>,
}
