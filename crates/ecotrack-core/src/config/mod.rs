pub mod defaults;
mod observability_config;
mod scoring_config;
mod tables;

pub use observability_config::ObservabilityConfig;
pub use scoring_config::{MonthlyConversion, ScoringConfig};
pub use tables::FactorTables;

pub use crate::models::FactorTable;

use serde::{Deserialize, Serialize};

use crate::errors::ConfigError;

/// Top-level engine configuration. Every section falls back to its defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EcoConfig {
    pub scoring: ScoringConfig,
    pub tables: FactorTables,
    pub observability: ObservabilityConfig,
}

impl EcoConfig {
    /// Parse from a TOML string. Missing sections and keys take their defaults;
    /// a present factor table must still name all six factors.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse {
            reason: e.to_string(),
        })
    }

    /// Parse and validate in one step.
    pub fn load(toml_str: &str) -> Result<Self, ConfigError> {
        let config = Self::from_toml(toml_str)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.validate()?;
        self.tables.validate()
    }
}
