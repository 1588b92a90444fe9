use crate::models::Factor;

/// Configuration and lookup-table errors. All of these are raised at
/// construction time, before any plan is produced.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{table} is missing factor {factor}")]
    MissingFactor { table: String, factor: Factor },

    #[error("unknown factor name: {name}")]
    UnknownFactor { name: String },

    #[error("zero divisor in {context}")]
    ZeroDivisor { context: String },

    #[error("non-finite value {value} in {context}")]
    NonFinite { context: String, value: f64 },

    #[error("stress weights must sum to 1.0, got {sum}")]
    WeightSum { sum: f64 },

    #[error("{field} = {value} is outside {min}..={max}")]
    OutOfRange {
        field: String,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("failed to parse config: {reason}")]
    Parse { reason: String },
}
