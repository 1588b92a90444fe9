mod config_error;
mod eco_error;
mod prediction_error;

pub use config_error::ConfigError;
pub use eco_error::{EcoError, EcoResult};
pub use prediction_error::PredictionError;
