//! Glue between the engine and the external footprint model.

use ecotrack_core::constants::FEATURE_COUNT;
use ecotrack_core::errors::{ConfigError, EcoResult, PredictionError};
use ecotrack_core::models::{FeatureVector, LifestyleInput};
use ecotrack_core::traits::{IFeatureScaler, IFootprintPredictor};
use ecotrack_observability::prediction_span;
use ecotrack_observability::tracing_setup::events;

/// Scaler → model, with output checks.
pub struct PredictionPipeline<S: IFeatureScaler, P: IFootprintPredictor> {
    scaler: S,
    model: P,
}

impl<S: IFeatureScaler, P: IFootprintPredictor> PredictionPipeline<S, P> {
    pub fn new(scaler: S, model: P) -> Self {
        Self { scaler, model }
    }

    pub fn model_name(&self) -> &str {
        self.model.name()
    }

    /// Predicted kg CO₂/month for one household.
    pub fn predict(&self, input: &LifestyleInput) -> EcoResult<f64> {
        let span = prediction_span!(self.model.name());
        let _guard = span.enter();

        let result = self.run(&input.features());
        match &result {
            Ok(predicted) => events::prediction_completed(self.model.name(), *predicted),
            Err(e) => events::prediction_failed(self.model.name(), &e.to_string()),
        }
        result
    }

    fn run(&self, features: &FeatureVector) -> EcoResult<f64> {
        let scaled = self.scaler.transform(features)?;
        if scaled.len() != FEATURE_COUNT {
            return Err(PredictionError::FeatureWidthMismatch {
                expected: FEATURE_COUNT,
                actual: scaled.len(),
            }
            .into());
        }

        let predicted = self.model.predict(&scaled)?;
        if !predicted.is_finite() {
            return Err(PredictionError::NonFiniteOutput { value: predicted }.into());
        }
        Ok(predicted)
    }
}

/// Passes raw features through unchanged, for models trained on unscaled input.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityScaler;

impl IFeatureScaler for IdentityScaler {
    fn transform(&self, features: &FeatureVector) -> EcoResult<Vec<f64>> {
        Ok(features.as_slice().to_vec())
    }
}

/// Per-feature standardization: `(x - mean) / scale`.
#[derive(Debug, Clone, PartialEq)]
pub struct StandardScaler {
    mean: [f64; FEATURE_COUNT],
    scale: [f64; FEATURE_COUNT],
}

impl StandardScaler {
    /// Fails if any scale is zero or any parameter is non-finite.
    pub fn new(
        mean: [f64; FEATURE_COUNT],
        scale: [f64; FEATURE_COUNT],
    ) -> Result<Self, ConfigError> {
        for (i, (m, s)) in mean.iter().zip(scale.iter()).enumerate() {
            let context = ecotrack_core::models::FEATURE_NAMES[i];
            if !m.is_finite() {
                return Err(ConfigError::NonFinite {
                    context: format!("scaler mean for {context}"),
                    value: *m,
                });
            }
            if !s.is_finite() {
                return Err(ConfigError::NonFinite {
                    context: format!("scaler scale for {context}"),
                    value: *s,
                });
            }
            if *s == 0.0 {
                return Err(ConfigError::ZeroDivisor {
                    context: format!("scaler scale for {context}"),
                });
            }
        }
        Ok(Self { mean, scale })
    }
}

impl IFeatureScaler for StandardScaler {
    fn transform(&self, features: &FeatureVector) -> EcoResult<Vec<f64>> {
        Ok(features
            .as_array()
            .iter()
            .zip(self.mean.iter().zip(self.scale.iter()))
            .map(|(x, (mean, scale))| (x - mean) / scale)
            .collect())
    }
}
