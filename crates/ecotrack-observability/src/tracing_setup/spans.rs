//! Span definitions per operation: assessment, planning, prediction.

/// Create an assessment span.
#[macro_export]
macro_rules! assessment_span {
    ($top_factors:expr) => {
        tracing::info_span!("ecotrack.assessment", top_factors = $top_factors)
    };
}

/// Create a planning span.
#[macro_export]
macro_rules! planning_span {
    ($factor_count:expr) => {
        tracing::debug_span!("ecotrack.planning", factor_count = $factor_count)
    };
}

/// Create a prediction span.
#[macro_export]
macro_rules! prediction_span {
    ($model:expr) => {
        tracing::info_span!("ecotrack.prediction", model = %$model)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const ASSESSMENT: &str = "ecotrack.assessment";
    pub const PLANNING: &str = "ecotrack.planning";
    pub const PREDICTION: &str = "ecotrack.prediction";
}
