//! Core data types: `Domain`, `Series`, and the configuration error.

mod domain;
mod error;
mod series;

pub use domain::Domain;
pub use error::ConfigError;
pub use series::Series;
