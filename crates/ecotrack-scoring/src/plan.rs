//! 30-day reduction plan generator.

use ecotrack_core::config::{FactorTables, MonthlyConversion};
use ecotrack_core::errors::ConfigError;
use ecotrack_core::models::{Factor, ReductionPlanItem};
use ecotrack_observability::tracing_setup::events;

use crate::normalizer::ImpactProfile;

/// Build one plan item per factor in `top`, in the given order.
///
/// For each factor:
///
/// ```text
/// monthly_reduction = monthly_quantity × reduction_percent
/// exact_reduction   = monthly_reduction / unit_factor
/// saving_kg         = monthly_reduction × emission_factor
/// ```
///
/// Every unit factor is checked before any item is built, so a bad divisor
/// yields an error and never a partial plan. A factor already at zero still
/// gets an item with zero reduction and zero saving.
pub fn generate(
    top: &[Factor],
    profile: &ImpactProfile,
    tables: &FactorTables,
    conversion: &MonthlyConversion,
) -> Result<Vec<ReductionPlanItem>, ConfigError> {
    let unit_factors = top
        .iter()
        .map(|factor| conversion.unit_factor(*factor).map(|unit| (*factor, unit)))
        .collect::<Result<Vec<_>, _>>()?;

    let items = unit_factors
        .into_iter()
        .map(|(factor, unit_factor)| {
            let monthly_reduction =
                profile.monthly_quantities[factor] * tables.reduction_percents[factor];
            let exact_reduction = monthly_reduction / unit_factor;
            let estimated_saving_kg =
                round_to_cents(monthly_reduction * tables.emission_factors[factor]);
            let precision = factor.precision();

            events::plan_item_generated(factor.name(), monthly_reduction, estimated_saving_kg);

            ReductionPlanItem {
                factor,
                target_reduction: precision.round(exact_reduction),
                exact_reduction,
                monthly_reduction,
                unit: factor.unit_label().to_string(),
                precision,
                estimated_saving_kg,
            }
        })
        .collect();

    Ok(items)
}

/// Sum of estimated savings across a plan, rounded to two decimals.
pub fn total_saving(plan: &[ReductionPlanItem]) -> f64 {
    round_to_cents(plan.iter().map(|item| item.estimated_saving_kg).sum())
}

pub(crate) fn round_to_cents(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cents_rounding() {
        assert_eq!(round_to_cents(245.99999999999997), 246.0);
        assert_eq!(round_to_cents(1.005_000_1), 1.01);
        assert_eq!(round_to_cents(0.0), 0.0);
    }
}
