//! Impact normalizer: raw lifestyle inputs → per-factor impact ratios
//! and monthly quantities.

use ecotrack_core::config::{FactorTables, MonthlyConversion};
use ecotrack_core::models::{Factor, FactorImpact, FactorTable, LifestyleInput};

/// Normalized view of one household's inputs.
#[derive(Debug, Clone, PartialEq)]
pub struct ImpactProfile {
    /// Impact ratio per factor. Transport holds the composite ratio.
    pub ratios: FactorTable,
    /// `personal/500 + public/300`, used for ranking and breakdown.
    pub transport_ratio_composite: f64,
    /// `personal/500` alone, used for the stress index.
    pub transport_ratio_primary: f64,
    /// Each factor's plan quantity converted to a monthly amount.
    pub monthly_quantities: FactorTable,
}

impl ImpactProfile {
    /// Impacts in canonical factor order.
    pub fn impacts(&self) -> Vec<FactorImpact> {
        self.ratios
            .iter()
            .map(|(factor, impact)| FactorImpact::new(factor, impact))
            .collect()
    }

    /// The ratio the stress index weighs for `factor`.
    pub fn stress_ratio(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Transport => self.transport_ratio_primary,
            other => self.ratios[other],
        }
    }
}

/// Normalize `input` against the reference maxima in `tables`.
///
/// Ratios are not clamped; values above 1.0 or below 0.0 pass through.
pub fn normalize(
    input: &LifestyleInput,
    tables: &FactorTables,
    conversion: &MonthlyConversion,
) -> ImpactProfile {
    let den = &tables.denominators;
    let transport_ratio_primary = input.personal_vehicle_km / den[Factor::Transport];
    let transport_ratio_composite =
        transport_ratio_primary + input.public_vehicle_km / tables.public_transport_denominator;

    let ratios = FactorTable::from_fn(|factor| match factor {
        Factor::Transport => transport_ratio_composite,
        Factor::Electricity => input.electricity_kwh / den[factor],
        Factor::Water => input.water_liters / den[factor],
        Factor::Diet => input.diet_type().ordinal() / den[factor],
        Factor::Waste => input.waste_kg / den[factor],
        Factor::Flights => input.plane_journeys / den[factor],
    });

    ImpactProfile {
        ratios,
        transport_ratio_composite,
        transport_ratio_primary,
        monthly_quantities: monthly_quantities(input, conversion),
    }
}

/// Convert each factor's plan quantity into a monthly amount:
/// weekly ×weeks_per_month, daily ×days_per_month, monthly ×1, yearly ÷12.
pub fn monthly_quantities(input: &LifestyleInput, conversion: &MonthlyConversion) -> FactorTable {
    FactorTable::from_fn(|factor| {
        input.plan_quantity(factor) * conversion.factor(factor.reporting_period())
    })
}
