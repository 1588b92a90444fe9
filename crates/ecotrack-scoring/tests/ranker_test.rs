use ecotrack_core::models::{Factor, FactorImpact};
use ecotrack_scoring::ranker;

fn impacts(values: [f64; 6]) -> Vec<FactorImpact> {
    Factor::ALL
        .iter()
        .zip(values)
        .map(|(f, v)| FactorImpact::new(*f, v))
        .collect()
}

#[test]
fn ranks_descending_by_impact() {
    let ranked = ranker::rank(&impacts([0.1, 0.5, 0.3, 0.9, 0.0, 0.2]));
    let order: Vec<Factor> = ranked.iter().map(|i| i.factor).collect();
    assert_eq!(
        order,
        vec![
            Factor::Diet,
            Factor::Electricity,
            Factor::Water,
            Factor::Flights,
            Factor::Transport,
            Factor::Waste,
        ]
    );
}

#[test]
fn ties_keep_canonical_order() {
    // Electricity and Waste tie; Electricity is listed first.
    let top = ranker::top(&impacts([0.1, 0.3, 0.0, 0.0, 0.3, 0.0]), 2);
    assert_eq!(top, vec![Factor::Electricity, Factor::Waste]);

    // Reversed input order must not change the outcome.
    let mut reversed = impacts([0.1, 0.3, 0.0, 0.0, 0.3, 0.0]);
    reversed.reverse();
    assert_eq!(ranker::top(&reversed, 2), top);
}

#[test]
fn all_equal_returns_canonical_order() {
    let ranked = ranker::top(&impacts([0.5; 6]), 6);
    assert_eq!(ranked, Factor::ALL.to_vec());
}

#[test]
fn top_n_is_configurable() {
    let values = impacts([0.6, 0.5, 0.4, 0.3, 0.2, 0.1]);
    for n in 1..=6 {
        let top = ranker::top(&values, n);
        assert_eq!(top.len(), n);
        assert_eq!(top, Factor::ALL[..n].to_vec());
    }
    assert_eq!(ranker::top(&values, 10).len(), 6);
    assert!(ranker::top(&values, 0).is_empty());
}

#[test]
fn negative_impacts_rank_last() {
    let top = ranker::top(&impacts([-0.5, 0.0, 0.0, 0.0, 0.0, 0.0]), 6);
    assert_eq!(top.last(), Some(&Factor::Transport));
}
