use crate::errors::EcoResult;
use crate::models::{FootprintReport, Grade, LifestyleInput, StressIndex};

/// Rule-based scoring layered on top of the footprint prediction.
pub trait IScoringEngine: Send + Sync {
    /// Lifestyle stress index for one household.
    fn stress_index(&self, input: &LifestyleInput) -> StressIndex;

    /// Grade for a stress index.
    fn grade(&self, stress: StressIndex) -> Grade;

    /// Full assessment without a model prediction.
    fn assess(&self, input: &LifestyleInput) -> EcoResult<FootprintReport>;
}
