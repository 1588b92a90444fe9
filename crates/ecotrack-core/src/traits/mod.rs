mod predictor;
mod scaler;
mod scoring_engine;

pub use predictor::IFootprintPredictor;
pub use scaler::IFeatureScaler;
pub use scoring_engine::IScoringEngine;
