//! Error types for generator configuration.

use thiserror::Error;

/// Configuration error raised at construction time.
///
/// This is the single error kind of the library: every invalid input or
/// invalid derived state surfaces as a `ConfigError`, synchronously, at
/// the point of construction. Missing summary statistics and unsupported
/// sampling are not errors; those return `None` instead.
///
/// # Examples
/// ```
/// use synth_core::types::ConfigError;
///
/// let err = ConfigError::InvalidSampleCount(0);
/// assert_eq!(format!("{}", err), "Invalid sample count 0: must be at least 1");
/// ```
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ConfigError {
    /// Sample count outside the valid range (must be at least 1).
    #[error("Invalid sample count {0}: must be at least 1")]
    InvalidSampleCount(usize),

    /// Domain bounds non-finite or inverted.
    #[error("Invalid domain: min = {min}, max = {max}")]
    InvalidDomain {
        /// Lower bound as supplied or derived.
        min: f64,
        /// Upper bound as supplied or derived.
        max: f64,
    },

    /// Noise amplitude negative or non-finite.
    #[error("Invalid noise amplitude: {0}")]
    InvalidNoiseAmplitude(f64),

    /// A supplied formula parameter was not a finite number.
    #[error("Invalid parameter '{name}': {value}")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// The offending value.
        value: f64,
    },

    /// Paired sequences of unequal length.
    #[error("Mismatched series lengths: x has {x_len}, y has {y_len}")]
    MismatchedLengths {
        /// Length of the x sequence.
        x_len: usize,
        /// Length of the y sequence.
        y_len: usize,
    },
}
