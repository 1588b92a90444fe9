use super::{ConfigError, PredictionError};

/// Result alias used throughout the workspace.
pub type EcoResult<T> = Result<T, EcoError>;

/// Top-level error for the EcoTrack engine.
#[derive(Debug, thiserror::Error)]
pub enum EcoError {
    #[error("configuration error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("prediction error: {0}")]
    PredictionError(#[from] PredictionError),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}
