use ecotrack_core::config::MonthlyConversion;
use ecotrack_core::models::{DietType, Factor, LifestyleInput};
use ecotrack_core::traits::IScoringEngine;
use ecotrack_scoring::{grade, ScoringEngine};
use proptest::prelude::*;

fn arb_input() -> impl Strategy<Value = LifestyleInput> {
    (
        0.0f64..500.0,
        0.0f64..300.0,
        0.0f64..50.0,
        0.0f64..50.0,
        0.0f64..2000.0,
        0.0f64..10_000.0,
        0u32..=21,
        0.0f64..20.0,
    )
        .prop_map(|(pv, public, plane, train, elec, water, meals, waste)| LifestyleInput {
            personal_vehicle_km: pv,
            public_vehicle_km: public,
            plane_journeys: plane,
            train_journeys: train,
            electricity_kwh: elec,
            water_liters: water,
            non_veg_meals: meals as f64,
            waste_kg: waste,
        })
}

// ── Stress index bounds ──────────────────────────────────────────────────

proptest! {
    #[test]
    fn stress_index_within_unit_interval(input in arb_input()) {
        let engine = ScoringEngine::new();
        let lsi = engine.stress_index(&input).value();
        prop_assert!((0.0..=1.0).contains(&lsi), "lsi = {}", lsi);
    }

    #[test]
    fn stress_index_never_exceeds_one(
        input in arb_input(),
        scale in 1.0f64..100.0,
    ) {
        let scaled = LifestyleInput {
            personal_vehicle_km: input.personal_vehicle_km * scale,
            electricity_kwh: input.electricity_kwh * scale,
            water_liters: input.water_liters * scale,
            ..input
        };
        let lsi = ScoringEngine::new().stress_index(&scaled).value();
        prop_assert!(lsi <= 1.0);
    }
}

// ── Monotonicity ─────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn more_electricity_never_lowers_stress(
        input in arb_input(),
        extra in 0.0f64..1000.0,
    ) {
        let engine = ScoringEngine::new();
        let more = LifestyleInput {
            electricity_kwh: input.electricity_kwh + extra,
            ..input
        };
        prop_assert!(engine.stress_index(&more) >= engine.stress_index(&input));
    }

    #[test]
    fn grade_never_improves_as_stress_rises(a in -0.5f64..1.0, b in -0.5f64..1.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(grade::classify(low) <= grade::classify(high));
    }
}

// ── Diet bands ───────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn diet_ordinal_is_monotone_in_meals(a in 0u32..=30, b in 0u32..=30) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(
            DietType::from_meals(low as f64).ordinal() <= DietType::from_meals(high as f64).ordinal()
        );
    }
}

// ── Plan ─────────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn plan_round_trips_through_unit_factor(input in arb_input(), n in 1usize..=6) {
        let engine = ScoringEngine::new();
        let conversion = MonthlyConversion::default();
        let plan = engine.plan_top(&input, n).unwrap();
        prop_assert_eq!(plan.len(), n);
        for item in plan {
            let unit = conversion.unit_factor(item.factor).unwrap();
            let back = item.exact_reduction * unit;
            prop_assert!((back - item.monthly_reduction).abs() <= 1e-9 * item.monthly_reduction.abs().max(1.0));
            prop_assert!(item.estimated_saving_kg >= 0.0);
        }
    }

    #[test]
    fn plan_factors_are_distinct_and_ranked(input in arb_input()) {
        let engine = ScoringEngine::new();
        let ranked = engine.ranked_impacts(&input);
        let plan = engine.plan_top(&input, 6).unwrap();
        let plan_factors: Vec<Factor> = plan.iter().map(|i| i.factor).collect();
        let ranked_factors: Vec<Factor> = ranked.iter().map(|i| i.factor).collect();
        prop_assert_eq!(plan_factors, ranked_factors);
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].impact >= pair[1].impact);
        }
    }
}
