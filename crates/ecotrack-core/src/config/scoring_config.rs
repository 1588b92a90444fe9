use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::{FACTOR_COUNT, MONTHS_PER_YEAR};
use crate::errors::ConfigError;
use crate::models::{Factor, ReportingPeriod};

/// Scoring and planning configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    /// Number of top factors that receive a plan item.
    pub top_factors: usize,
    /// Monthly carbon budget (kg CO₂) shown next to the prediction.
    pub monthly_budget_kg: f64,
    /// Weekly → monthly multiplier.
    pub weeks_per_month: f64,
    /// Daily → monthly multiplier.
    pub days_per_month: f64,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            top_factors: defaults::DEFAULT_TOP_FACTORS,
            monthly_budget_kg: defaults::DEFAULT_MONTHLY_BUDGET_KG,
            weeks_per_month: defaults::DEFAULT_WEEKS_PER_MONTH,
            days_per_month: defaults::DEFAULT_DAYS_PER_MONTH,
        }
    }
}

impl ScoringConfig {
    pub fn conversion(&self) -> MonthlyConversion {
        MonthlyConversion {
            weeks_per_month: self.weeks_per_month,
            days_per_month: self.days_per_month,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=FACTOR_COUNT).contains(&self.top_factors) {
            return Err(ConfigError::OutOfRange {
                field: "scoring.top_factors".to_string(),
                value: self.top_factors as f64,
                min: 1.0,
                max: FACTOR_COUNT as f64,
            });
        }
        if !self.monthly_budget_kg.is_finite() {
            return Err(ConfigError::NonFinite {
                context: "scoring.monthly_budget_kg".to_string(),
                value: self.monthly_budget_kg,
            });
        }
        self.conversion().validate()
    }
}

/// Multipliers that turn a reporting period into a monthly quantity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MonthlyConversion {
    pub weeks_per_month: f64,
    pub days_per_month: f64,
}

impl Default for MonthlyConversion {
    fn default() -> Self {
        ScoringConfig::default().conversion()
    }
}

impl MonthlyConversion {
    /// Monthly units per reporting unit: weekly ×4, daily ×30, monthly ×1, yearly ÷12.
    pub fn factor(&self, period: ReportingPeriod) -> f64 {
        match period {
            ReportingPeriod::Daily => self.days_per_month,
            ReportingPeriod::Weekly => self.weeks_per_month,
            ReportingPeriod::Monthly => 1.0,
            ReportingPeriod::Yearly => 1.0 / MONTHS_PER_YEAR,
        }
    }

    /// The display-unit divisor for a factor, rejecting zero and non-finite values.
    pub fn unit_factor(&self, factor: Factor) -> Result<f64, ConfigError> {
        let value = self.factor(factor.reporting_period());
        if !value.is_finite() {
            return Err(ConfigError::NonFinite {
                context: format!("unit factor for {factor}"),
                value,
            });
        }
        if value == 0.0 {
            return Err(ConfigError::ZeroDivisor {
                context: format!("unit factor for {factor}"),
            });
        }
        Ok(value)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        for factor in Factor::ALL {
            self.unit_factor(factor)?;
        }
        Ok(())
    }
}
