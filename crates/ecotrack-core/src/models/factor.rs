use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::constants::FACTOR_COUNT;
use crate::errors::ConfigError;

/// The six lifestyle categories scored for every household.
///
/// Declaration order is the canonical order: display order for impact
/// breakdowns and the tie-break key when ranking.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum Factor {
    Transport,
    Electricity,
    Water,
    Diet,
    Waste,
    Flights,
}

impl Factor {
    /// All factors in canonical order.
    pub const ALL: [Factor; FACTOR_COUNT] = [
        Factor::Transport,
        Factor::Electricity,
        Factor::Water,
        Factor::Diet,
        Factor::Waste,
        Factor::Flights,
    ];

    /// Position in `Factor::ALL`.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Transport => "Transport",
            Self::Electricity => "Electricity",
            Self::Water => "Water",
            Self::Diet => "Diet",
            Self::Waste => "Waste",
            Self::Flights => "Flights",
        }
    }

    /// The period over which the household reports this factor.
    pub fn reporting_period(self) -> ReportingPeriod {
        match self {
            Self::Transport | Self::Diet | Self::Waste => ReportingPeriod::Weekly,
            Self::Electricity => ReportingPeriod::Monthly,
            Self::Water => ReportingPeriod::Daily,
            Self::Flights => ReportingPeriod::Yearly,
        }
    }

    /// User-facing unit label, in the household's reporting period.
    pub fn unit_label(self) -> &'static str {
        match self {
            Self::Transport => "km/week",
            Self::Electricity => "kWh/month",
            Self::Water => "liters/day",
            Self::Diet => "meals/week",
            Self::Waste => "kg/week",
            Self::Flights => "flights/year",
        }
    }

    /// Counts and volumes display as whole numbers; masses and flights keep a decimal.
    pub fn precision(self) -> UnitPrecision {
        match self {
            Self::Transport | Self::Electricity | Self::Water | Self::Diet => UnitPrecision::Whole,
            Self::Waste | Self::Flights => UnitPrecision::Tenths,
        }
    }
}

impl fmt::Display for Factor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Factor {
    type Err = ConfigError;

    /// Case-insensitive parse from the factor name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Factor::ALL
            .into_iter()
            .find(|factor| factor.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ConfigError::UnknownFactor {
                name: s.to_string(),
            })
    }
}

/// Period over which a raw lifestyle quantity is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ReportingPeriod {
    Daily,
    Weekly,
    Monthly,
    Yearly,
}

/// Rounding applied to a reduction target before it is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum UnitPrecision {
    Whole,
    Tenths,
}

impl UnitPrecision {
    /// Round half away from zero to this precision.
    pub fn round(self, value: f64) -> f64 {
        match self {
            Self::Whole => value.round(),
            Self::Tenths => (value * 10.0).round() / 10.0,
        }
    }

    /// Format an already rounded value with the matching number of decimals.
    pub fn format(self, value: f64) -> String {
        match self {
            Self::Whole => format!("{value:.0}"),
            Self::Tenths => format!("{value:.1}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_order_matches_index() {
        for (i, factor) in Factor::ALL.iter().enumerate() {
            assert_eq!(factor.index(), i);
        }
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("electricity".parse::<Factor>().unwrap(), Factor::Electricity);
        assert_eq!(" FLIGHTS ".parse::<Factor>().unwrap(), Factor::Flights);
        assert!("Heating".parse::<Factor>().is_err());
    }

    #[test]
    fn tenths_precision_keeps_one_decimal() {
        assert_eq!(UnitPrecision::Tenths.round(1.26), 1.3);
        assert_eq!(UnitPrecision::Whole.round(299.5), 300.0);
        assert_eq!(UnitPrecision::Tenths.format(1.5), "1.5");
        assert_eq!(UnitPrecision::Whole.format(300.0), "300");
    }
}
