//! Test fixture loader for EcoTrack golden scenarios.
//!
//! Provides typed deserialization of the fixture JSON files and helper
//! functions for loading them in tests across crates.

use ecotrack_core::models::{Factor, Grade, LifestyleInput};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::path::PathBuf;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> PathBuf {
    // Works from any crate in the workspace: walk up to find test-fixtures/scenarios.
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").unwrap_or_else(|_| ".".to_string());
    let mut path = PathBuf::from(&manifest_dir);

    while !path.join("test-fixtures").join("scenarios").exists() {
        if !path.pop() {
            panic!(
                "Could not find test-fixtures directory from CARGO_MANIFEST_DIR={}",
                manifest_dir
            );
        }
    }
    path.join("test-fixtures")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// A golden household scenario with its expected assessment.
#[derive(Debug, Clone, Deserialize)]
pub struct Scenario {
    pub name: String,
    pub description: String,
    pub input: LifestyleInput,
    pub expected: ExpectedAssessment,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedAssessment {
    pub stress_index: f64,
    pub grade: Grade,
    pub top_factors: Vec<Factor>,
    pub plan: Vec<ExpectedPlanItem>,
    pub total_estimated_saving_kg: f64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ExpectedPlanItem {
    pub factor: Factor,
    pub target_reduction: f64,
    pub unit: String,
    pub estimated_saving_kg: f64,
}

/// All golden scenarios.
pub fn golden_scenarios() -> Vec<Scenario> {
    load_fixture("scenarios/golden.json")
}

/// A single golden scenario by name.
///
/// # Panics
/// Panics if no scenario has that name.
pub fn scenario(name: &str) -> Scenario {
    golden_scenarios()
        .into_iter()
        .find(|s| s.name == name)
        .unwrap_or_else(|| panic!("no golden scenario named {name}"))
}
