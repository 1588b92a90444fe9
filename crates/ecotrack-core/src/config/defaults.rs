// Single source of truth for all default values.

use crate::constants::FLIGHT_EMISSION_KG_PER_MONTH;
use crate::models::DietType;

// --- Scoring ---
pub const DEFAULT_TOP_FACTORS: usize = 3;
pub const DEFAULT_MONTHLY_BUDGET_KG: f64 = 50.0;
pub const DEFAULT_WEEKS_PER_MONTH: f64 = 4.0; // parity with the reference planner; 4.345 is calendar-accurate
pub const DEFAULT_DAYS_PER_MONTH: f64 = 30.0;

// --- Stress weights (sum to 1.0) ---
pub const WEIGHT_TRANSPORT: f64 = 0.25;
pub const WEIGHT_ELECTRICITY: f64 = 0.25;
pub const WEIGHT_FLIGHTS: f64 = 0.20;
pub const WEIGHT_DIET: f64 = 0.15;
pub const WEIGHT_WATER: f64 = 0.10;
pub const WEIGHT_WASTE: f64 = 0.05;

// --- Reference maxima (normalization denominators) ---
pub const MAX_PERSONAL_VEHICLE_KM_PER_WEEK: f64 = 500.0;
pub const MAX_PUBLIC_VEHICLE_KM_PER_WEEK: f64 = 300.0;
pub const MAX_ELECTRICITY_KWH_PER_MONTH: f64 = 2000.0;
pub const MAX_PLANE_JOURNEYS_PER_YEAR: f64 = 50.0;
pub const MAX_DIET_ORDINAL: f64 = DietType::MAX_ORDINAL;
pub const MAX_WATER_LITERS_PER_DAY: f64 = 10_000.0;
pub const MAX_WASTE_KG_PER_WEEK: f64 = 20.0;

// --- Emission factors (kg CO₂ per monthly unit) ---
pub const EMISSION_TRANSPORT: f64 = 0.21;
pub const EMISSION_ELECTRICITY: f64 = 0.82;
pub const EMISSION_WATER: f64 = 0.0003;
pub const EMISSION_DIET: f64 = 0.5;
pub const EMISSION_WASTE: f64 = 0.45;
pub const EMISSION_FLIGHTS: f64 = FLIGHT_EMISSION_KG_PER_MONTH;

// --- Reduction percentages ---
pub const REDUCTION_TRANSPORT: f64 = 0.25;
pub const REDUCTION_ELECTRICITY: f64 = 0.15;
pub const REDUCTION_WATER: f64 = 0.20;
pub const REDUCTION_DIET: f64 = 0.30;
pub const REDUCTION_WASTE: f64 = 0.25;
pub const REDUCTION_FLIGHTS: f64 = 0.50;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = true;
