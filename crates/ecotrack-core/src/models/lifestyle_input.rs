use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::{Factor, FeatureVector};

/// Self-reported lifestyle inputs for one household, one request.
///
/// Ranges are enforced by the input form, not here. Every computation in the
/// engine accepts any float, including negative values.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct LifestyleInput {
    /// Personal vehicle distance (km/week).
    pub personal_vehicle_km: f64,
    /// Public transport distance (km/week).
    pub public_vehicle_km: f64,
    /// Plane journeys per year.
    pub plane_journeys: f64,
    /// Train journeys per year.
    pub train_journeys: f64,
    /// Electricity consumption (kWh/month).
    pub electricity_kwh: f64,
    /// Water usage (liters/day).
    pub water_liters: f64,
    /// Non-vegetarian meals per week.
    pub non_veg_meals: f64,
    /// Waste generated (kg/week).
    pub waste_kg: f64,
}

impl LifestyleInput {
    /// The starting values offered by the input form.
    pub fn reference_household() -> Self {
        Self {
            personal_vehicle_km: 120.0,
            public_vehicle_km: 80.0,
            plane_journeys: 3.0,
            train_journeys: 4.0,
            electricity_kwh: 600.0,
            water_liters: 4000.0,
            non_veg_meals: 10.0,
            waste_kg: 6.0,
        }
    }

    pub fn diet_type(&self) -> DietType {
        DietType::from_meals(self.non_veg_meals)
    }

    /// The raw quantity a reduction plan acts on, in the factor's reporting unit.
    ///
    /// Transport plans act on the personal vehicle only; Diet on the meal count,
    /// not the ordinal.
    pub fn plan_quantity(&self, factor: Factor) -> f64 {
        match factor {
            Factor::Transport => self.personal_vehicle_km,
            Factor::Electricity => self.electricity_kwh,
            Factor::Water => self.water_liters,
            Factor::Diet => self.non_veg_meals,
            Factor::Waste => self.waste_kg,
            Factor::Flights => self.plane_journeys,
        }
    }

    /// Predictor features in the model's fixed column order.
    pub fn features(&self) -> FeatureVector {
        FeatureVector::from_array([
            self.personal_vehicle_km,
            self.public_vehicle_km,
            self.plane_journeys,
            self.train_journeys,
            self.electricity_kwh,
            self.water_liters,
            self.diet_type().ordinal(),
            self.waste_kg,
        ])
    }
}

/// Ordinal diet intensity derived from the weekly non-veg meal count.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DietType {
    /// 0 meals/week.
    Vegetarian,
    /// 1–7 meals/week.
    Occasional,
    /// 8–14 meals/week.
    Regular,
    /// 15+ meals/week.
    Heavy,
}

impl DietType {
    /// Ordinal of the heaviest band.
    pub const MAX_ORDINAL: f64 = 3.0;

    /// Map a weekly meal count to its diet band.
    ///
    /// Only an exact zero is vegetarian; anything else up to 7 (including
    /// fractional and negative counts) is occasional.
    pub fn from_meals(meals: f64) -> Self {
        if meals == 0.0 {
            Self::Vegetarian
        } else if meals <= 7.0 {
            Self::Occasional
        } else if meals <= 14.0 {
            Self::Regular
        } else {
            Self::Heavy
        }
    }

    pub fn ordinal(self) -> f64 {
        match self {
            Self::Vegetarian => 0.0,
            Self::Occasional => 1.0,
            Self::Regular => 2.0,
            Self::Heavy => Self::MAX_ORDINAL,
        }
    }
}
