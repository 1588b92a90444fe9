/// Errors raised by the external footprint predictor or its feature scaler.
#[derive(Debug, thiserror::Error)]
pub enum PredictionError {
    #[error("feature scaler failed: {reason}")]
    ScalerFailed { reason: String },

    #[error("inference failed: {reason}")]
    InferenceFailed { reason: String },

    #[error("feature width mismatch: expected {expected}, got {actual}")]
    FeatureWidthMismatch { expected: usize, actual: usize },

    #[error("predictor returned non-finite output: {value}")]
    NonFiniteOutput { value: f64 },
}
