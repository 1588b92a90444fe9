//! # ecotrack-scoring
//!
//! Rule-based scoring on top of the footprint prediction.
//! Normalizes lifestyle inputs into per-factor impacts, combines them into
//! the Lifestyle Stress Index, grades it, ranks factors, and turns the top
//! factors into a 30-day reduction plan.

pub mod engine;
pub mod grade;
pub mod insight;
pub mod normalizer;
pub mod plan;
pub mod prediction;
pub mod ranker;
pub mod stress;

pub use engine::ScoringEngine;
pub use normalizer::ImpactProfile;
pub use prediction::{IdentityScaler, PredictionPipeline, StandardScaler};
pub use stress::StressBreakdown;
