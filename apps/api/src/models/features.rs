use std::fmt;

use serde::Deserialize;
use serde_json::Value;

use crate::errors::AppError;

/// Number of readings the model consumes.
pub const FEATURE_COUNT: usize = 6;

/// Wire names of the readings, in the positional order the model expects.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Heart_Rate",
    "Eye_Tracking",
    "Reaction_Time",
    "Flight_Precision",
    "Decision_Speed",
    "Error_Rate",
];

/// Request contract for `POST /predict`.
///
/// Every field is a required JSON number. serde rejects absent keys, `null`,
/// booleans, strings and containers, so a successful decode is a valid request.
/// Unknown keys are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct PredictRequest {
    #[serde(rename = "Heart_Rate")]
    pub heart_rate: f64,
    #[serde(rename = "Eye_Tracking")]
    pub eye_tracking: f64,
    #[serde(rename = "Reaction_Time")]
    pub reaction_time: f64,
    #[serde(rename = "Flight_Precision")]
    pub flight_precision: f64,
    #[serde(rename = "Decision_Speed")]
    pub decision_speed: f64,
    #[serde(rename = "Error_Rate")]
    pub error_rate: f64,
}

/// The six readings in model order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn new(values: [f64; FEATURE_COUNT]) -> Self {
        FeatureVector(values)
    }

    pub fn values(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    /// Decodes a raw request body.
    ///
    /// Anything that is not a non-empty JSON object counts as "no data";
    /// an object that fails the schema is invalid input.
    pub fn from_json_body(body: &[u8]) -> Result<Self, AppError> {
        let value: Value = serde_json::from_slice(body).map_err(|_| AppError::NoData)?;
        let object = match value {
            Value::Object(map) if !map.is_empty() => Value::Object(map),
            _ => return Err(AppError::NoData),
        };

        let request: PredictRequest =
            serde_json::from_value(object).map_err(|e| AppError::InvalidInput(e.to_string()))?;
        Ok(FeatureVector::from(request))
    }
}

impl From<PredictRequest> for FeatureVector {
    fn from(req: PredictRequest) -> Self {
        FeatureVector([
            req.heart_rate,
            req.eye_tracking,
            req.reaction_time,
            req.flight_precision,
            req.decision_speed,
            req.error_rate,
        ])
    }
}

impl fmt::Display for FeatureVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for (name, value) in FEATURE_NAMES.iter().zip(self.0.iter()) {
            if !first {
                f.write_str(", ")?;
            }
            write!(f, "{name}={value}")?;
            first = false;
        }
        Ok(())
    }
}
