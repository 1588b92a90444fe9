use ecotrack_core::models::{Grade, StressIndex};

/// Exclusive upper bound of each grade band, ascending. Anything at or above
/// the last bound is `Grade::D`.
pub const GRADE_UPPER_BOUNDS: [(f64, Grade); 4] = [
    (0.15, Grade::APlus),
    (0.30, Grade::A),
    (0.45, Grade::B),
    (0.65, Grade::C),
];

/// Map a stress index value to its grade.
///
/// Bands are right-open: exactly 0.15 is `A`, exactly 0.65 is `D`.
pub fn classify(lsi: f64) -> Grade {
    GRADE_UPPER_BOUNDS
        .iter()
        .find(|(upper, _)| lsi < *upper)
        .map(|(_, grade)| *grade)
        .unwrap_or(Grade::D)
}

pub fn classify_index(stress: StressIndex) -> Grade {
    classify(stress.value())
}
