use crate::errors::EcoResult;
use crate::models::FeatureVector;

/// Companion input scaler fitted alongside the footprint model.
pub trait IFeatureScaler: Send + Sync {
    /// Normalize raw features into the space the model was trained on.
    fn transform(&self, features: &FeatureVector) -> EcoResult<Vec<f64>>;
}
