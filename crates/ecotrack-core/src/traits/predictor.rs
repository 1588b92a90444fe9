use crate::errors::EcoResult;

/// Pre-trained footprint model. Opaque to the engine.
pub trait IFootprintPredictor: Send + Sync {
    /// Predict kg CO₂/month from scaled features in `FEATURE_NAMES` order.
    fn predict(&self, scaled_features: &[f64]) -> EcoResult<f64>;

    /// Human-readable model name.
    fn name(&self) -> &str;
}
