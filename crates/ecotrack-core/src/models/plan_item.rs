use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Factor, UnitPrecision};

/// One recommended change for a top-ranked factor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ReductionPlanItem {
    pub factor: Factor,
    /// Reduction target in the household's reporting unit, rounded to `precision`.
    pub target_reduction: f64,
    /// Unrounded reduction target in the reporting unit.
    pub exact_reduction: f64,
    /// Reduction target as a monthly quantity.
    pub monthly_reduction: f64,
    pub unit: String,
    pub precision: UnitPrecision,
    /// Estimated saving in kg CO₂/month, rounded to two decimals.
    pub estimated_saving_kg: f64,
}

impl ReductionPlanItem {
    /// A zero reduction: the factor is already at zero, nothing to cut.
    pub fn is_no_action(&self) -> bool {
        self.monthly_reduction == 0.0
    }

    pub fn action_text(&self) -> String {
        format!(
            "Reduce {} by ~{} {}",
            self.factor.name().to_lowercase(),
            self.precision.format(self.target_reduction),
            self.unit
        )
    }

    pub fn impact_text(&self) -> String {
        format!("Save ~{:.2} kg CO₂/month", self.estimated_saving_kg)
    }
}
