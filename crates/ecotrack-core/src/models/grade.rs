use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

/// Sustainability grade, best to worst.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Grade {
    #[serde(rename = "A+")]
    APlus,
    A,
    B,
    C,
    D,
}

impl Grade {
    /// All grades from best to worst.
    pub const ALL: [Grade; 5] = [Grade::APlus, Grade::A, Grade::B, Grade::C, Grade::D];

    pub fn label(self) -> &'static str {
        match self {
            Self::APlus => "A+",
            Self::A => "A",
            Self::B => "B",
            Self::C => "C",
            Self::D => "D",
        }
    }

    /// Label with the badge glyph used on the score card.
    pub fn badge(self) -> String {
        let glyph = match self {
            Self::APlus => "🌟",
            Self::A => "🌱",
            Self::B => "👍",
            Self::C => "⚠️",
            Self::D => "🔴",
        };
        format!("{} {}", self.label(), glyph)
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::APlus => "Exceptionally low lifestyle stress",
            Self::A => "Low lifestyle stress",
            Self::B => "Moderate lifestyle stress",
            Self::C => "High lifestyle stress",
            Self::D => "Severe lifestyle stress",
        }
    }

    pub fn journey_stage(self) -> JourneyStage {
        match self {
            Self::APlus => JourneyStage::ClimatePositive,
            Self::A => JourneyStage::Sustainable,
            Self::B => JourneyStage::Balanced,
            Self::C => JourneyStage::Improving,
            Self::D => JourneyStage::Unsustainable,
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Position on the sustainability journey, from worst to best.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum JourneyStage {
    Unsustainable,
    Improving,
    Balanced,
    Sustainable,
    ClimatePositive,
}

impl JourneyStage {
    pub fn label(self) -> &'static str {
        match self {
            Self::Unsustainable => "Unsustainable",
            Self::Improving => "Improving",
            Self::Balanced => "Balanced",
            Self::Sustainable => "Sustainable",
            Self::ClimatePositive => "Climate Positive",
        }
    }
}

impl fmt::Display for JourneyStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
