mod factor;
mod factor_impact;
mod factor_table;
mod feature_vector;
mod footprint_report;
mod grade;
mod lifestyle_input;
mod plan_item;
mod stress_index;

pub use factor::{Factor, ReportingPeriod, UnitPrecision};
pub use factor_impact::FactorImpact;
pub use factor_table::FactorTable;
pub use feature_vector::{FeatureVector, FEATURE_NAMES};
pub use footprint_report::FootprintReport;
pub use grade::{Grade, JourneyStage};
pub use lifestyle_input::{DietType, LifestyleInput};
pub use plan_item::ReductionPlanItem;
pub use stress_index::StressIndex;
