//! # ecotrack-core
//!
//! Foundation crate for the EcoTrack footprint scoring engine.
//! Defines the factor enumeration, lookup tables, models, traits, errors,
//! config, and constants. Every other crate in the workspace depends on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod models;
pub mod traits;

// Re-export the most commonly used types at the crate root.
pub use config::{EcoConfig, FactorTable, FactorTables};
pub use errors::{EcoError, EcoResult};
pub use models::{
    DietType, Factor, FactorImpact, FootprintReport, Grade, LifestyleInput, ReductionPlanItem,
    StressIndex,
};
