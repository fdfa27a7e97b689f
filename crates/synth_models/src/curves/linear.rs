//! Straight line family.
//!
//! Generated function:
//! ```text
//! y = slope * x + intercept
//! ```

use synth_core::rng::SynthRng;
use synth_core::traits::{resolve_param, CurveFamily};
use synth_core::types::ConfigError;

/// Straight line, `y = slope * x + intercept`.
///
/// # Examples
/// ```
/// use synth_core::traits::CurveFamily;
/// use synth_models::{Linear, LinearParams};
///
/// let line = Linear::builder()
///     .params(LinearParams {
///         slope: Some(2.0),
///         intercept: Some(-1.0),
///     })
///     .seed(1)
///     .build()
///     .unwrap();
///
/// assert_eq!(line.family().slope(), 2.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct Linear {
    slope: f64,
    intercept: f64,
}

/// Optional parameters for [`Linear`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LinearParams {
    /// Gradient. Unset: uniform in `[1, 3)`.
    pub slope: Option<f64>,
    /// y-intercept. Unset: uniform in `[-5, 5)`.
    pub intercept: Option<f64>,
}

impl Linear {
    /// Gradient of the line.
    #[inline]
    pub fn slope(&self) -> f64 {
        self.slope
    }

    /// y-intercept of the line.
    #[inline]
    pub fn intercept(&self) -> f64 {
        self.intercept
    }
}

impl CurveFamily for Linear {
    type Params = LinearParams;

    fn family_name() -> &'static str {
        "Linear"
    }

    fn resolve(params: Self::Params, rng: &mut SynthRng) -> Result<Self, ConfigError> {
        Ok(Self {
            slope: resolve_param("slope", params.slope, rng, |r| (r.gen_uniform() + 0.5) * 2.0)?,
            intercept: resolve_param("intercept", params.intercept, rng, |r| {
                (r.gen_uniform() - 0.5) * 10.0
            })?,
        })
    }

    fn default_domain(&self, _rng: &mut SynthRng) -> (f64, f64) {
        (0.0, 10.0)
    }

    fn default_noise_amplitude() -> Option<f64> {
        Some(0.5)
    }

    fn evaluate(&self, x: &[f64]) -> Vec<f64> {
        x.iter().map(|&v| self.slope * v + self.intercept).collect()
    }

    fn parameters(&self) -> Vec<(String, f64)> {
        vec![
            ("slope".to_string(), self.slope),
            ("intercept".to_string(), self.intercept),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_exact_values() {
        let line = Linear::builder()
            .samples(6)
            .domain(0.0, 5.0)
            .no_noise()
            .params(LinearParams {
                slope: Some(2.5),
                intercept: Some(0.0),
            })
            .build()
            .unwrap();

        let series = line.data();
        assert_eq!(series.x(), &[0.0, 1.0, 2.0, 3.0, 4.0, 5.0]);
        assert_eq!(series.y(), &[0.0, 2.5, 5.0, 7.5, 10.0, 12.5]);
    }

    #[test]
    fn test_linear_seeding() {
        let a = Linear::builder().seed(123_456_789).build().unwrap();
        let b = Linear::builder().seed(123_456_789).build().unwrap();

        assert_eq!(a.family().slope(), b.family().slope());
        assert_eq!(a.family().intercept(), b.family().intercept());
        assert_eq!(a.data(), b.data());
    }

    #[test]
    fn test_linear_default_ranges() {
        let line = Linear::builder().seed(7).build().unwrap();
        let slope = line.family().slope();
        let intercept = line.family().intercept();
        assert!((1.0..3.0).contains(&slope));
        assert!((-5.0..5.0).contains(&intercept));
    }

    #[test]
    fn test_linear_rejects_nan_slope() {
        let result = Linear::builder()
            .params(LinearParams {
                slope: Some(f64::NAN),
                intercept: None,
            })
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { name: "slope", .. })
        ));
    }
}
