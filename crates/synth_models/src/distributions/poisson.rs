//! Poisson distribution.
//!
//! Mass function:
//! ```text
//! y = lambda^k * exp(-lambda) / k!
//! ```
//!
//! Discrete support: x can take only non-negative integer values, so the
//! generator samples the integer lattice and shrinks the sample count to
//! the distinct points available.

use rand_distr::{Distribution as _, Poisson as PoissonSampler};
use synth_core::math::special::ln_factorial;
use synth_core::rng::SynthRng;
use synth_core::traits::{resolve_param, CurveFamily, DistributionFamily, Support};
use synth_core::types::ConfigError;

/// Poisson distribution with rate `lambda`.
#[derive(Clone, Debug, PartialEq)]
pub struct Poisson {
    lambda: f64,
}

/// Optional parameters for [`Poisson`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PoissonParams {
    /// Expected events per interval, strictly positive. Unset: uniform
    /// in `[0, 30)`.
    pub lambda: Option<f64>,
}

impl Poisson {
    /// Rate parameter.
    #[inline]
    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    fn pmf(&self, k: f64) -> f64 {
        if k < 0.0 {
            return 0.0;
        }
        (k * self.lambda.ln() - self.lambda - ln_factorial(k)).exp()
    }
}

impl CurveFamily for Poisson {
    type Params = PoissonParams;

    fn family_name() -> &'static str {
        "Poisson"
    }

    fn resolve(params: Self::Params, rng: &mut SynthRng) -> Result<Self, ConfigError> {
        let lambda = resolve_param("lambda", params.lambda, rng, |r| r.gen_uniform() * 30.0)?;

        if lambda <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "lambda",
                value: lambda,
            });
        }

        Ok(Self { lambda })
    }

    fn default_domain(&self, _rng: &mut SynthRng) -> (f64, f64) {
        (0.0, 3.0 * self.lambda)
    }

    fn default_noise_amplitude() -> Option<f64> {
        Some(0.01)
    }

    fn support(&self) -> Support {
        Support::NonNegativeInteger
    }

    fn evaluate(&self, x: &[f64]) -> Vec<f64> {
        x.iter().map(|&v| self.pmf(v)).collect()
    }

    fn parameters(&self) -> Vec<(String, f64)> {
        vec![("lambda".to_string(), self.lambda)]
    }
}

impl DistributionFamily for Poisson {
    fn mean(&self) -> Option<f64> {
        Some(self.lambda)
    }

    fn median(&self) -> Option<f64> {
        // Standard approximation, exact for all practical rates
        Some((self.lambda + 1.0 / 3.0 - 0.02 / self.lambda).floor())
    }

    fn mode(&self) -> Option<f64> {
        Some(self.lambda.floor())
    }

    fn variance(&self) -> Option<f64> {
        Some(self.lambda)
    }

    fn skewness(&self) -> Option<f64> {
        Some(1.0 / self.lambda.sqrt())
    }

    fn draw(&self, rng: &mut SynthRng, count: usize) -> Option<Vec<f64>> {
        let sampler = PoissonSampler::new(self.lambda).ok()?;
        Some((0..count).map(|_| sampler.sample(rng)).collect())
    }
}
