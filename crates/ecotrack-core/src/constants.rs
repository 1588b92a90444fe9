/// Number of factors scored for every household.
pub const FACTOR_COUNT: usize = 6;

/// Number of features consumed by the footprint predictor.
pub const FEATURE_COUNT: usize = 8;

/// Upper bound of the lifestyle stress index.
pub const MAX_STRESS_INDEX: f64 = 1.0;

/// Annual flight emissions per yearly journey (kg CO₂).
pub const ANNUAL_FLIGHT_EMISSION_KG: f64 = 90.0;

/// Months per year.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Flight emission factor as a monthly average: 90 kg / 12 months.
pub const FLIGHT_EMISSION_KG_PER_MONTH: f64 = ANNUAL_FLIGHT_EMISSION_KG / MONTHS_PER_YEAR;

/// Calendar-accurate weeks per month. Not the default; see `DEFAULT_WEEKS_PER_MONTH`.
pub const CALENDAR_WEEKS_PER_MONTH: f64 = 4.345;

/// Tolerance used when checking that the stress weights sum to one.
pub const WEIGHT_SUM_TOLERANCE: f64 = 1e-9;
