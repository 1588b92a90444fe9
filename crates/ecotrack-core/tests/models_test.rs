use ecotrack_core::models::*;

#[test]
fn stress_index_clamps_above_only() {
    assert_eq!(StressIndex::new(1.7).value(), 1.0);
    assert_eq!(StressIndex::new(0.42).value(), 0.42);
    assert_eq!(StressIndex::new(-0.1).value(), -0.1);
}

#[test]
fn stress_percent_truncates() {
    assert_eq!(StressIndex::new(0.302).as_percent(), 30);
    assert_eq!(StressIndex::new(0.999).as_percent(), 99);
    assert_eq!(StressIndex::new(1.0).as_percent(), 100);
}

#[test]
fn sustainability_progress_is_bounded() {
    assert_eq!(StressIndex::new(1.0).sustainability_progress(), 0.0);
    assert_eq!(StressIndex::new(0.0).sustainability_progress(), 1.0);
    assert_eq!(StressIndex::new(-0.5).sustainability_progress(), 1.0);
}

#[test]
fn grades_are_ordered_best_to_worst() {
    for pair in Grade::ALL.windows(2) {
        assert!(pair[0] < pair[1]);
    }
    assert_eq!(Grade::APlus.label(), "A+");
    assert_eq!(Grade::D.badge(), "D 🔴");
}

#[test]
fn grade_maps_to_journey_stage() {
    assert_eq!(Grade::APlus.journey_stage(), JourneyStage::ClimatePositive);
    assert_eq!(Grade::A.journey_stage(), JourneyStage::Sustainable);
    assert_eq!(Grade::B.journey_stage(), JourneyStage::Balanced);
    assert_eq!(Grade::C.journey_stage(), JourneyStage::Improving);
    assert_eq!(Grade::D.journey_stage(), JourneyStage::Unsustainable);
    assert_eq!(JourneyStage::ClimatePositive.to_string(), "Climate Positive");
}

#[test]
fn grade_serializes_with_plus_sign() {
    assert_eq!(serde_json::to_string(&Grade::APlus).unwrap(), "\"A+\"");
    let parsed: Grade = serde_json::from_str("\"A+\"").unwrap();
    assert_eq!(parsed, Grade::APlus);
}

#[test]
fn factor_metadata() {
    assert_eq!(Factor::Water.unit_label(), "liters/day");
    assert_eq!(Factor::Water.reporting_period(), ReportingPeriod::Daily);
    assert_eq!(Factor::Flights.reporting_period(), ReportingPeriod::Yearly);
    assert_eq!(Factor::Electricity.reporting_period(), ReportingPeriod::Monthly);
    assert_eq!(Factor::Waste.precision(), UnitPrecision::Tenths);
    assert_eq!(Factor::Diet.precision(), UnitPrecision::Whole);
}

#[test]
fn factor_table_serializes_by_name() {
    let table = FactorTable::from_fn(|f| f.index() as f64);
    let json = serde_json::to_value(table).unwrap();
    assert_eq!(json["Transport"], 0.0);
    assert_eq!(json["Flights"], 5.0);
    let back: FactorTable = serde_json::from_value(json).unwrap();
    assert_eq!(back, table);
}

#[test]
fn lifestyle_input_from_json() {
    let json = r#"{
        "personal_vehicle_km": 10, "public_vehicle_km": 0, "plane_journeys": 0,
        "train_journeys": 0, "electricity_kwh": 50, "water_liters": 100,
        "non_veg_meals": 15, "waste_kg": 1.5
    }"#;
    let input: LifestyleInput = serde_json::from_str(json).unwrap();
    assert_eq!(input.diet_type(), DietType::Heavy);
    assert_eq!(input.features().as_array().len(), FEATURE_NAMES.len());
}

#[test]
fn plan_item_texts() {
    let item = ReductionPlanItem {
        factor: Factor::Waste,
        target_reduction: 1.5,
        exact_reduction: 1.5,
        monthly_reduction: 6.0,
        unit: Factor::Waste.unit_label().to_string(),
        precision: UnitPrecision::Tenths,
        estimated_saving_kg: 2.7,
    };
    assert_eq!(item.action_text(), "Reduce waste by ~1.5 kg/week");
    assert_eq!(item.impact_text(), "Save ~2.70 kg CO₂/month");
    assert!(!item.is_no_action());
}

#[test]
fn grade_descriptions_are_distinct() {
    let descriptions: std::collections::HashSet<_> =
        Grade::ALL.iter().map(|g| g.description()).collect();
    assert_eq!(descriptions.len(), Grade::ALL.len());
    assert_eq!(Grade::B.description(), "Moderate lifestyle stress");
}

#[test]
fn feature_vector_pairs_names_with_values() {
    let features = LifestyleInput::reference_household().features();
    let named: Vec<_> = features.named().collect();
    assert_eq!(named.len(), FEATURE_NAMES.len());
    assert_eq!(named[0], ("Personal_Vehicle_Km", 120.0));
    assert_eq!(named[6], ("Diet_Type", 2.0));
    for (name, value) in named {
        assert_eq!(features.get(name), Some(value));
    }
}

#[test]
fn diet_denominator_matches_heaviest_ordinal() {
    use ecotrack_core::config::{defaults, FactorTables};
    assert_eq!(DietType::Heavy.ordinal(), DietType::MAX_ORDINAL);
    assert_eq!(defaults::MAX_DIET_ORDINAL, DietType::MAX_ORDINAL);
    assert_eq!(
        FactorTables::default().denominators[Factor::Diet],
        DietType::MAX_ORDINAL
    );
}

#[test]
fn deserialized_stress_index_is_clamped() {
    let stress: StressIndex = serde_json::from_str("1.8").unwrap();
    assert_eq!(stress.value(), 1.0);
    let stress: StressIndex = serde_json::from_str("-0.25").unwrap();
    assert_eq!(stress.value(), -0.25);
    assert_eq!(serde_json::to_string(&StressIndex::new(0.5)).unwrap(), "0.5");
}

#[test]
fn deserialized_report_cannot_carry_index_above_one() {
    let json = r#"{
        "predicted_kg_co2": null,
        "monthly_budget_kg": 50.0,
        "stress_index": 3.5,
        "stress_percent": 350,
        "grade": "D",
        "journey_stage": "unsustainable",
        "impacts": [],
        "top_factors": [],
        "plan": [],
        "key_insight": "",
        "total_estimated_saving_kg": 0.0,
        "generated_at": "2026-01-01T00:00:00Z"
    }"#;
    let report: FootprintReport = serde_json::from_str(json).unwrap();
    assert_eq!(report.stress_index.value(), 1.0);
}
