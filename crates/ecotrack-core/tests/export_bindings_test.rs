//! Test that generates TypeScript bindings from Rust types via ts-rs.
//!
//! Run with: cargo test -p ecotrack-core export_bindings
//! Generated files appear in ecotrack-core/bindings/*.ts

#[test]
fn export_bindings() {
    // ts-rs writes one .ts file per #[ts(export)] type when `cargo test` runs.
    // This test validates all presentation types are importable and TS-derivable.
    use ecotrack_core::models::{
        DietType, Factor, FactorImpact, FootprintReport, Grade, JourneyStage, LifestyleInput,
        ReductionPlanItem, ReportingPeriod, StressIndex, UnitPrecision,
    };

    let _ = std::any::type_name::<Factor>();
    let _ = std::any::type_name::<ReportingPeriod>();
    let _ = std::any::type_name::<UnitPrecision>();
    let _ = std::any::type_name::<FactorImpact>();
    let _ = std::any::type_name::<LifestyleInput>();
    let _ = std::any::type_name::<DietType>();
    let _ = std::any::type_name::<StressIndex>();
    let _ = std::any::type_name::<Grade>();
    let _ = std::any::type_name::<JourneyStage>();
    let _ = std::any::type_name::<ReductionPlanItem>();
    let _ = std::any::type_name::<FootprintReport>();
}
