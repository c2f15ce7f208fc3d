// Prediction endpoint: schema check, model call, tier mapping.
// The model is reached only through `SuccessRatePredictor` on `AppState`.

pub mod handlers;
pub mod tiers;
