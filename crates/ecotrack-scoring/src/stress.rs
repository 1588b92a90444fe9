use ecotrack_core::config::FactorTables;
use ecotrack_core::models::{Factor, FactorTable, StressIndex};

use crate::normalizer::ImpactProfile;

/// Order in which weighted terms are summed: personal vehicle, electricity,
/// flights, diet, water, waste.
pub const STRESS_TERM_ORDER: [Factor; 6] = [
    Factor::Transport,
    Factor::Electricity,
    Factor::Flights,
    Factor::Diet,
    Factor::Water,
    Factor::Waste,
];

/// Lifestyle Stress Index.
///
/// ```text
/// lsi = 0.25 × pv/500 + 0.25 × elec/2000 + 0.20 × plane/50
///     + 0.15 × diet/3 + 0.10 × water/10000 + 0.05 × waste/20
/// ```
///
/// Transport contributes only its personal-vehicle term. Result is clamped
/// to at most 1.0.
pub fn compute(profile: &ImpactProfile, tables: &FactorTables) -> StressIndex {
    compute_breakdown(profile, tables).stress_index
}

/// Each weighted term, for debugging/observability.
#[derive(Debug, Clone, PartialEq)]
pub struct StressBreakdown {
    /// `weight × ratio` per factor.
    pub contributions: FactorTable,
    /// Sum before clamping.
    pub raw_sum: f64,
    pub stress_index: StressIndex,
}

impl StressBreakdown {
    /// Whether the clamp at 1.0 changed the result.
    pub fn is_clamped(&self) -> bool {
        self.raw_sum > self.stress_index.value()
    }
}

/// Compute the stress index with a full breakdown of each term.
pub fn compute_breakdown(profile: &ImpactProfile, tables: &FactorTables) -> StressBreakdown {
    let contributions =
        FactorTable::from_fn(|factor| tables.weights[factor] * profile.stress_ratio(factor));
    let raw_sum = STRESS_TERM_ORDER
        .iter()
        .fold(0.0, |acc, factor| acc + contributions[*factor]);

    StressBreakdown {
        contributions,
        raw_sum,
        stress_index: StressIndex::new(raw_sum),
    }
}
