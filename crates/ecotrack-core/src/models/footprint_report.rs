use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Factor, FactorImpact, Grade, JourneyStage, ReductionPlanItem, StressIndex};

/// Everything the presentation layer shows for one assessment.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FootprintReport {
    /// Model-predicted footprint (kg CO₂/month), when a predictor was supplied.
    pub predicted_kg_co2: Option<f64>,
    /// Monthly carbon budget the prediction is compared against.
    pub monthly_budget_kg: f64,
    pub stress_index: StressIndex,
    pub stress_percent: i64,
    pub grade: Grade,
    pub journey_stage: JourneyStage,
    /// Per-factor impacts in canonical order.
    pub impacts: Vec<FactorImpact>,
    /// Highest-impact factors, most impactful first.
    pub top_factors: Vec<Factor>,
    pub plan: Vec<ReductionPlanItem>,
    pub key_insight: String,
    /// Sum of the plan's estimated savings (kg CO₂/month).
    pub total_estimated_saving_kg: f64,
    pub generated_at: DateTime<Utc>,
}

impl FootprintReport {
    /// The single highest-impact factor.
    pub fn primary_factor(&self) -> Option<Factor> {
        self.top_factors.first().copied()
    }

    /// Whether the prediction exceeds the monthly budget.
    pub fn over_budget(&self) -> Option<bool> {
        self.predicted_kg_co2
            .map(|predicted| predicted > self.monthly_budget_kg)
    }

    /// Predicted footprint minus budget (positive when over).
    pub fn budget_gap_kg(&self) -> Option<f64> {
        self.predicted_kg_co2
            .map(|predicted| predicted - self.monthly_budget_kg)
    }

    pub fn to_json(&self) -> crate::errors::EcoResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}
