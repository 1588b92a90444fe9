//! Structured log events for key engine operations.
//!
//! Each function emits a `tracing` event with structured fields.

/// Log a completed assessment.
pub fn assessment_completed(stress_index: f64, grade: &str, primary_factor: &str) {
    tracing::info!(
        event = "assessment_completed",
        stress_index = stress_index,
        grade = %grade,
        primary_factor = %primary_factor,
        "assessment completed"
    );
}

/// Log a generated plan item.
pub fn plan_item_generated(factor: &str, monthly_reduction: f64, saving_kg: f64) {
    tracing::debug!(
        event = "plan_item_generated",
        factor = %factor,
        monthly_reduction = monthly_reduction,
        saving_kg = saving_kg,
        "plan item generated"
    );
}

/// Log a rejected configuration.
pub fn config_rejected(reason: &str) {
    tracing::error!(
        event = "config_rejected",
        reason = %reason,
        "configuration rejected"
    );
}

/// Log a footprint prediction.
pub fn prediction_completed(model: &str, predicted_kg: f64) {
    tracing::info!(
        event = "prediction_completed",
        model = %model,
        predicted_kg = predicted_kg,
        "footprint predicted"
    );
}

/// Log a failed footprint prediction.
pub fn prediction_failed(model: &str, error: &str) {
    tracing::warn!(
        event = "prediction_failed",
        model = %model,
        error = %error,
        "footprint prediction failed"
    );
}
