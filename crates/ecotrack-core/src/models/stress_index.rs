use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::constants::MAX_STRESS_INDEX;

/// Lifestyle Stress Index: weighted composite of the factor ratios.
///
/// Clamped above at 1.0. Negative values are not clamped; they mean the
/// household sits below every reference baseline.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize, TS)]
#[serde(from = "f64")]
#[ts(export)]
pub struct StressIndex(f64);

impl StressIndex {
    /// Create a new StressIndex, clamping to at most 1.0.
    pub fn new(value: f64) -> Self {
        Self(value.min(MAX_STRESS_INDEX))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Whole percentage as shown to the household (truncated).
    pub fn as_percent(self) -> i64 {
        (self.0 * 100.0).trunc() as i64
    }

    /// Progress towards a sustainable lifestyle, `1 - lsi`, bounded to [0, 1].
    pub fn sustainability_progress(self) -> f64 {
        (1.0 - self.0).clamp(0.0, 1.0)
    }
}

impl fmt::Display for StressIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.3}", self.0)
    }
}

impl From<f64> for StressIndex {
    fn from(value: f64) -> Self {
        Self::new(value)
    }
}

impl From<StressIndex> for f64 {
    fn from(s: StressIndex) -> Self {
        s.0
    }
}
