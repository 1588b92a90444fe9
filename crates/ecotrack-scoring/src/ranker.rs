use ecotrack_core::models::{Factor, FactorImpact};

/// Sort impacts descending. Equal impacts keep canonical factor order
/// (Transport, Electricity, Water, Diet, Waste, Flights).
pub fn rank(impacts: &[FactorImpact]) -> Vec<FactorImpact> {
    let mut ranked = impacts.to_vec();
    ranked.sort_by(|a, b| {
        ranking_key(b.impact)
            .total_cmp(&ranking_key(a.impact))
            .then(a.factor.cmp(&b.factor))
    });
    ranked
}

/// The `n` highest-impact factors. `n` larger than the factor count returns all.
pub fn top(impacts: &[FactorImpact], n: usize) -> Vec<Factor> {
    rank(impacts)
        .into_iter()
        .take(n)
        .map(|impact| impact.factor)
        .collect()
}

// -0.0 and 0.0 must tie.
fn ranking_key(impact: f64) -> f64 {
    if impact == 0.0 {
        0.0
    } else {
        impact
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn negative_zero_ties_with_zero() {
        let impacts = [
            FactorImpact::new(Factor::Diet, 0.0),
            FactorImpact::new(Factor::Water, -0.0),
        ];
        assert_eq!(top(&impacts, 2), vec![Factor::Water, Factor::Diet]);
    }
}
