use serde::{Deserialize, Serialize};

use super::defaults;
use crate::constants::WEIGHT_SUM_TOLERANCE;
use crate::errors::ConfigError;
use crate::models::{Factor, FactorTable};

/// Fixed per-factor lookup tables used by scoring and planning.
///
/// Every table is a [`FactorTable`], so each one covers all six factors by
/// construction. `validate` checks the values themselves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FactorTables {
    /// Stress index weight per factor.
    pub weights: FactorTable,
    /// Reference maximum per factor. Transport holds the personal-vehicle maximum.
    pub denominators: FactorTable,
    /// Reference maximum for public transport, the second term of composite Transport.
    pub public_transport_denominator: f64,
    /// kg CO₂ per monthly unit.
    pub emission_factors: FactorTable,
    /// Fraction of the current monthly quantity a plan item targets.
    pub reduction_percents: FactorTable,
}

impl Default for FactorTables {
    fn default() -> Self {
        use defaults::*;
        Self {
            weights: FactorTable::from_fn(|f| match f {
                Factor::Transport => WEIGHT_TRANSPORT,
                Factor::Electricity => WEIGHT_ELECTRICITY,
                Factor::Water => WEIGHT_WATER,
                Factor::Diet => WEIGHT_DIET,
                Factor::Waste => WEIGHT_WASTE,
                Factor::Flights => WEIGHT_FLIGHTS,
            }),
            denominators: FactorTable::from_fn(|f| match f {
                Factor::Transport => MAX_PERSONAL_VEHICLE_KM_PER_WEEK,
                Factor::Electricity => MAX_ELECTRICITY_KWH_PER_MONTH,
                Factor::Water => MAX_WATER_LITERS_PER_DAY,
                Factor::Diet => MAX_DIET_ORDINAL,
                Factor::Waste => MAX_WASTE_KG_PER_WEEK,
                Factor::Flights => MAX_PLANE_JOURNEYS_PER_YEAR,
            }),
            public_transport_denominator: MAX_PUBLIC_VEHICLE_KM_PER_WEEK,
            emission_factors: FactorTable::from_fn(|f| match f {
                Factor::Transport => EMISSION_TRANSPORT,
                Factor::Electricity => EMISSION_ELECTRICITY,
                Factor::Water => EMISSION_WATER,
                Factor::Diet => EMISSION_DIET,
                Factor::Waste => EMISSION_WASTE,
                Factor::Flights => EMISSION_FLIGHTS,
            }),
            reduction_percents: FactorTable::from_fn(|f| match f {
                Factor::Transport => REDUCTION_TRANSPORT,
                Factor::Electricity => REDUCTION_ELECTRICITY,
                Factor::Water => REDUCTION_WATER,
                Factor::Diet => REDUCTION_DIET,
                Factor::Waste => REDUCTION_WASTE,
                Factor::Flights => REDUCTION_FLIGHTS,
            }),
        }
    }
}

impl FactorTables {
    /// Check every value. Runs once, before the tables are handed to an engine.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (name, table) in [
            ("weights", &self.weights),
            ("denominators", &self.denominators),
            ("emission_factors", &self.emission_factors),
            ("reduction_percents", &self.reduction_percents),
        ] {
            for (factor, value) in table.iter() {
                if !value.is_finite() {
                    return Err(ConfigError::NonFinite {
                        context: format!("{name}.{factor}"),
                        value,
                    });
                }
            }
        }

        for (factor, value) in self.denominators.iter() {
            if value == 0.0 {
                return Err(ConfigError::ZeroDivisor {
                    context: format!("denominators.{factor}"),
                });
            }
        }
        if !self.public_transport_denominator.is_finite() {
            return Err(ConfigError::NonFinite {
                context: "public_transport_denominator".to_string(),
                value: self.public_transport_denominator,
            });
        }
        if self.public_transport_denominator == 0.0 {
            return Err(ConfigError::ZeroDivisor {
                context: "public_transport_denominator".to_string(),
            });
        }

        for (factor, value) in self.weights.iter() {
            if value < 0.0 {
                return Err(out_of_range(format!("weights.{factor}"), value, 0.0, 1.0));
            }
        }
        let sum = self.weights.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            return Err(ConfigError::WeightSum { sum });
        }

        for (factor, value) in self.reduction_percents.iter() {
            if !(0.0..=1.0).contains(&value) {
                return Err(out_of_range(
                    format!("reduction_percents.{factor}"),
                    value,
                    0.0,
                    1.0,
                ));
            }
        }
        for (factor, value) in self.emission_factors.iter() {
            if value < 0.0 {
                return Err(out_of_range(
                    format!("emission_factors.{factor}"),
                    value,
                    0.0,
                    f64::MAX,
                ));
            }
        }
        Ok(())
    }
}

fn out_of_range(field: String, value: f64, min: f64, max: f64) -> ConfigError {
    ConfigError::OutOfRange {
        field,
        value,
        min,
        max,
    }
}
