//! Gamma distribution.
//!
//! Density (shape/scale parameterisation):
//! ```text
//! y = x^(shape-1) * exp(-x / scale) / (GammaFn(shape) * scale^shape)
//! ```
//! Zero for x < 0. Continuous with non-negative support, so composed
//! `y` is clamped at zero but `x` stays off the integer lattice.

use rand_distr::{Distribution as _, Gamma as GammaSampler};
use synth_core::math::special::ln_gamma;
use synth_core::rng::SynthRng;
use synth_core::traits::{resolve_param, CurveFamily, DistributionFamily, Support};
use synth_core::types::ConfigError;

/// Gamma distribution with shape and scale.
#[derive(Clone, Debug, PartialEq)]
pub struct Gamma {
    shape: f64,
    scale: f64,
}

/// Optional parameters for [`Gamma`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GammaParams {
    /// Shape `k`, strictly positive. Unset: uniform in `[1, 10)`.
    pub shape: Option<f64>,
    /// Scale `theta`, strictly positive. Unset: uniform in `[0.2, 2)`.
    pub scale: Option<f64>,
}

impl Gamma {
    /// Shape parameter.
    #[inline]
    pub fn shape(&self) -> f64 {
        self.shape
    }

    /// Scale parameter.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    fn pdf(&self, x: f64) -> f64 {
        if x < 0.0 {
            return 0.0;
        }
        if x == 0.0 {
            // Finite only for shape >= 1; the shape == 1 case is the
            // exponential density at its origin
            return if self.shape == 1.0 { 1.0 / self.scale } else { 0.0 };
        }
        ((self.shape - 1.0) * x.ln() - x / self.scale
            - ln_gamma(self.shape)
            - self.shape * self.scale.ln())
        .exp()
    }
}

impl CurveFamily for Gamma {
    type Params = GammaParams;

    fn family_name() -> &'static str {
        "Gamma"
    }

    fn resolve(params: Self::Params, rng: &mut SynthRng) -> Result<Self, ConfigError> {
        let shape = resolve_param("shape", params.shape, rng, |r| 1.0 + r.gen_uniform() * 9.0)?;
        let scale = resolve_param("scale", params.scale, rng, |r| r.uniform_in(0.2, 2.0))?;

        if shape <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "shape",
                value: shape,
            });
        }
        if scale <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "scale",
                value: scale,
            });
        }

        Ok(Self { shape, scale })
    }

    fn default_domain(&self, rng: &mut SynthRng) -> (f64, f64) {
        (0.0, 30.0 + (rng.gen_uniform() - 0.5) * 10.0)
    }

    fn default_noise_amplitude() -> Option<f64> {
        Some(0.01)
    }

    fn support(&self) -> Support {
        Support::NonNegativeReal
    }

    fn evaluate(&self, x: &[f64]) -> Vec<f64> {
        x.iter().map(|&v| self.pdf(v)).collect()
    }

    fn parameters(&self) -> Vec<(String, f64)> {
        vec![
            ("shape".to_string(), self.shape),
            ("scale".to_string(), self.scale),
        ]
    }
}

impl DistributionFamily for Gamma {
    fn mean(&self) -> Option<f64> {
        Some(self.shape * self.scale)
    }

    // No closed-form median is adopted for this family.

    fn mode(&self) -> Option<f64> {
        if self.shape >= 1.0 {
            Some((self.shape - 1.0) * self.scale)
        } else {
            None
        }
    }

    fn variance(&self) -> Option<f64> {
        Some(self.shape * self.scale * self.scale)
    }

    fn skewness(&self) -> Option<f64> {
        Some(2.0 / self.shape.sqrt())
    }

    fn draw(&self, rng: &mut SynthRng, count: usize) -> Option<Vec<f64>> {
        let sampler = GammaSampler::new(self.shape, self.scale).ok()?;
        Some((0..count).map(|_| sampler.sample(rng)).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_gamma_shape_one_is_exponential() {
        // shape = 1, scale = 2: pdf(x) = exp(-x/2) / 2
        let gamma = Gamma::builder()
            .params(GammaParams {
                shape: Some(1.0),
                scale: Some(2.0),
            })
            .seed(1)
            .build()
            .unwrap();

        let family = gamma.family();
        assert_relative_eq!(family.pdf(0.0), 0.5);
        assert_relative_eq!(family.pdf(2.0), 0.5 * (-1.0_f64).exp(), epsilon = 1e-12);
        assert_eq!(family.pdf(-1.0), 0.0);
    }

    #[test]
    fn test_gamma_statistics() {
        let gamma = Gamma::builder()
            .params(GammaParams {
                shape: Some(4.0),
                scale: Some(0.5),
            })
            .seed(1)
            .build()
            .unwrap();

        assert_eq!(gamma.mean(), Some(2.0));
        assert_eq!(gamma.variance(), Some(1.0));
        assert_eq!(gamma.mode(), Some(1.5));
        assert_eq!(gamma.skewness(), Some(1.0));
        assert_eq!(gamma.median(), None);
    }

    #[test]
    fn test_gamma_mode_unsupported_below_shape_one() {
        let gamma = Gamma::builder()
            .params(GammaParams {
                shape: Some(0.5),
                scale: Some(1.0),
            })
            .seed(1)
            .build()
            .unwrap();

        assert_eq!(gamma.mode(), None);
    }

    #[test]
    fn test_gamma_rejects_non_positive_shape() {
        let result = Gamma::builder()
            .params(GammaParams {
                shape: Some(-2.0),
                scale: Some(1.0),
            })
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter { name: "shape", .. })
        ));
    }

    #[test]
    fn test_gamma_continuous_x_off_lattice() {
        // Non-negative real support keeps x evenly spaced, not floored
        let gamma = Gamma::builder()
            .samples(7)
            .domain(0.0, 1.0)
            .no_noise()
            .params(GammaParams {
                shape: Some(2.0),
                scale: Some(1.0),
            })
            .seed(1)
            .build()
            .unwrap();

        assert_eq!(gamma.samples(), 7);
        assert!(gamma.x().iter().skip(1).any(|v| v.fract() != 0.0));
    }

    #[test]
    fn test_gamma_samples_positive() {
        let gamma = Gamma::builder()
            .params(GammaParams {
                shape: Some(3.0),
                scale: Some(1.5),
            })
            .seed(4)
            .build()
            .unwrap();

        let draws = gamma.sample(200).unwrap();
        assert!(draws.iter().all(|&v| v > 0.0));
    }
}
