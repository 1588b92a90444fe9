use serde::{Deserialize, Serialize};

use crate::constants::FEATURE_COUNT;

/// Column names the footprint predictor was trained on, in input order.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = [
    "Personal_Vehicle_Km",
    "Public_Vehicle_Km",
    "Plane_Journey_Count",
    "Train_Journey_Count",
    "Electricity_Kwh",
    "Water_Usage_Liters",
    "Diet_Type",
    "Waste_Kg",
];

/// The eight predictor features in the fixed order of [`FEATURE_NAMES`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FeatureVector([f64; FEATURE_COUNT]);

impl FeatureVector {
    pub fn from_array(values: [f64; FEATURE_COUNT]) -> Self {
        Self(values)
    }

    pub fn as_array(&self) -> &[f64; FEATURE_COUNT] {
        &self.0
    }

    pub fn as_slice(&self) -> &[f64] {
        &self.0
    }

    /// Look up a feature by its column name.
    pub fn get(&self, name: &str) -> Option<f64> {
        FEATURE_NAMES
            .iter()
            .position(|n| *n == name)
            .map(|i| self.0[i])
    }

    /// Column name and value pairs, in order.
    pub fn named(&self) -> impl Iterator<Item = (&'static str, f64)> + '_ {
        FEATURE_NAMES.iter().copied().zip(self.0.iter().copied())
    }
}
