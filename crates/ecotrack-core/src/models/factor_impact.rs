use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::Factor;

/// A factor paired with its normalized impact ratio.
///
/// The ratio is not bounded per factor: extreme inputs push it above 1.0 and
/// negative inputs below 0.0. Only the aggregate stress index is clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct FactorImpact {
    pub factor: Factor,
    pub impact: f64,
}

impl FactorImpact {
    pub fn new(factor: Factor, impact: f64) -> Self {
        Self { factor, impact }
    }
}
