//! Geometric distribution.
//!
//! Mass function (trials convention, support k >= 1):
//! ```text
//! y = p * (1-p)^(k-1)
//! ```
//! k counts the trial on which the first success lands.

use rand_distr::{Distribution as _, Geometric as GeometricSampler};
use synth_core::rng::SynthRng;
use synth_core::traits::{resolve_param, CurveFamily, DistributionFamily, Support};
use synth_core::types::ConfigError;

/// Geometric distribution with per-trial success probability.
#[derive(Clone, Debug, PartialEq)]
pub struct Geometric {
    success_prob: f64,
}

/// Optional parameters for [`Geometric`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GeometricParams {
    /// Per-trial success probability `p` in `(0, 1]`. Unset: uniform
    /// in `[0.1, 0.9)`.
    pub success_prob: Option<f64>,
}

impl Geometric {
    /// Per-trial success probability.
    #[inline]
    pub fn success_prob(&self) -> f64 {
        self.success_prob
    }

    fn pmf(&self, k: f64) -> f64 {
        if k < 1.0 {
            return 0.0;
        }
        self.success_prob * (1.0 - self.success_prob).powf(k - 1.0)
    }
}

impl CurveFamily for Geometric {
    type Params = GeometricParams;

    fn family_name() -> &'static str {
        "Geometric"
    }

    fn resolve(params: Self::Params, rng: &mut SynthRng) -> Result<Self, ConfigError> {
        let success_prob = resolve_param("success_prob", params.success_prob, rng, |r| {
            r.uniform_in(0.1, 0.9)
        })?;

        if success_prob <= 0.0 || success_prob > 1.0 {
            return Err(ConfigError::InvalidParameter {
                name: "success_prob",
                value: success_prob,
            });
        }

        Ok(Self { success_prob })
    }

    fn default_domain(&self, _rng: &mut SynthRng) -> (f64, f64) {
        (0.0, (5.0 / self.success_prob).ceil())
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
        vec![("success_prob".to_string(), self.success_prob)]
    }
}

impl DistributionFamily for Geometric {
    fn mean(&self) -> Option<f64> {
        Some(1.0 / self.success_prob)
    }

    fn median(&self) -> Option<f64> {
        if self.success_prob >= 1.0 {
            return Some(1.0);
        }
        Some((-1.0 / (1.0 - self.success_prob).log2()).ceil())
    }

    fn mode(&self) -> Option<f64> {
        Some(1.0)
    }

    fn variance(&self) -> Option<f64> {
        let p = self.success_prob;
        Some((1.0 - p) / (p * p))
    }

    fn skewness(&self) -> Option<f64> {
        let p = self.success_prob;
        Some((2.0 - p) / (1.0 - p).sqrt())
    }

    fn draw(&self, rng: &mut SynthRng, count: usize) -> Option<Vec<f64>> {
        // The sampler counts failures before the first success; shift
        // by one for the trials convention
        let sampler = GeometricSampler::new(self.success_prob).ok()?;
        Some((0..count).map(|_| sampler.sample(rng) as f64 + 1.0).collect())
    }
}
