use std::collections::{BTreeMap, HashMap};
use std::ops::Index;

use serde::{Deserialize, Serialize};

use super::Factor;
use crate::constants::FACTOR_COUNT;
use crate::errors::ConfigError;

/// A total map from every [`Factor`] to an `f64`.
///
/// Backed by a fixed array indexed by `Factor::index`, so a lookup can never
/// miss. Building one from a partial mapping fails with
/// [`ConfigError::MissingFactor`] instead of defaulting the gap.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<String, f64>", into = "BTreeMap<String, f64>")]
pub struct FactorTable([f64; FACTOR_COUNT]);

impl FactorTable {
    /// Build a table by evaluating `f` for every factor.
    pub fn from_fn(mut f: impl FnMut(Factor) -> f64) -> Self {
        let mut values = [0.0; FACTOR_COUNT];
        for factor in Factor::ALL {
            values[factor.index()] = f(factor);
        }
        Self(values)
    }

    /// Build a table from a mapping that must name every factor.
    pub fn try_from_map(table: &str, map: &HashMap<Factor, f64>) -> Result<Self, ConfigError> {
        let mut values = [0.0; FACTOR_COUNT];
        for factor in Factor::ALL {
            let value = map.get(&factor).ok_or_else(|| ConfigError::MissingFactor {
                table: table.to_string(),
                factor,
            })?;
            values[factor.index()] = *value;
        }
        Ok(Self(values))
    }

    pub fn get(&self, factor: Factor) -> f64 {
        self.0[factor.index()]
    }

    pub fn set(&mut self, factor: Factor, value: f64) {
        self.0[factor.index()] = value;
    }

    /// Entries in canonical factor order.
    pub fn iter(&self) -> impl Iterator<Item = (Factor, f64)> + '_ {
        Factor::ALL.into_iter().map(move |f| (f, self.0[f.index()]))
    }

    pub fn sum(&self) -> f64 {
        self.0.iter().sum()
    }
}

impl Index<Factor> for FactorTable {
    type Output = f64;

    fn index(&self, factor: Factor) -> &f64 {
        &self.0[factor.index()]
    }
}

impl TryFrom<BTreeMap<String, f64>> for FactorTable {
    type Error = ConfigError;

    fn try_from(raw: BTreeMap<String, f64>) -> Result<Self, Self::Error> {
        let mut map = HashMap::with_capacity(raw.len());
        for (name, value) in raw {
            let factor: Factor = name.parse()?;
            if map.insert(factor, value).is_some() {
                return Err(ConfigError::Parse {
                    reason: format!("factor {factor} listed more than once"),
                });
            }
        }
        Self::try_from_map("factor table", &map)
    }
}

impl From<FactorTable> for BTreeMap<String, f64> {
    fn from(table: FactorTable) -> Self {
        table
            .iter()
            .map(|(factor, value)| (factor.name().to_string(), value))
            .collect()
    }
}
