//! Negative binomial distribution.
//!
//! Mass function (failures convention, support k >= 0):
//! ```text
//! y = C(k + r - 1, k) * p^r * (1-p)^k
//! ```
//! k counts failures observed before the `r`-th success.

use rand_distr::{Distribution as _, Gamma as GammaSampler, Poisson as PoissonSampler};
use synth_core::math::special::ln_choose;
use synth_core::rng::SynthRng;
use synth_core::traits::{
    resolve_int_param, resolve_param, CurveFamily, DistributionFamily, Support,
};
use synth_core::types::ConfigError;

/// Negative binomial distribution: failures before the `successes`-th
/// success.
#[derive(Clone, Debug, PartialEq)]
pub struct NegativeBinomial {
    successes: u64,
    success_prob: f64,
}

/// Optional parameters for [`NegativeBinomial`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NegativeBinomialParams {
    /// Required success count `r >= 1`. Unset: uniform integer in
    /// `[1, 8]`.
    pub successes: Option<u64>,
    /// Per-trial success probability `p` in `(0, 1)`. Unset: uniform
    /// in `[0.1, 0.9)`.
    pub success_prob: Option<f64>,
}

impl NegativeBinomial {
    /// Required success count.
    #[inline]
    pub fn successes(&self) -> u64 {
        self.successes
    }

    /// Per-trial success probability.
    #[inline]
    pub fn success_prob(&self) -> f64 {
        self.success_prob
    }

    fn pmf(&self, k: f64) -> f64 {
        if k < 0.0 {
            return 0.0;
        }
        let r = self.successes as f64;
        let p = self.success_prob;
        (ln_choose(k + r - 1.0, k) + r * p.ln() + k * (1.0 - p).ln()).exp()
    }
}

impl CurveFamily for NegativeBinomial {
    type Params = NegativeBinomialParams;

    fn family_name() -> &'static str {
        "NegativeBinomial"
    }

    fn resolve(params: Self::Params, rng: &mut SynthRng) -> Result<Self, ConfigError> {
        let successes = resolve_int_param(params.successes, rng, |r| r.gen_int_range(1..=8));
        let success_prob = resolve_param("success_prob", params.success_prob, rng, |r| {
            r.uniform_in(0.1, 0.9)
        })?;

        if successes == 0 {
            return Err(ConfigError::InvalidParameter {
                name: "successes",
                value: 0.0,
            });
        }
        if success_prob <= 0.0 || success_prob >= 1.0 {
            return Err(ConfigError::InvalidParameter {
                name: "success_prob",
                value: success_prob,
            });
        }

        Ok(Self {
            successes,
            success_prob,
        })
    }

    fn default_domain(&self, _rng: &mut SynthRng) -> (f64, f64) {
        (0.0, 30.0)
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
        vec![
            ("successes".to_string(), self.successes as f64),
            ("success_prob".to_string(), self.success_prob),
        ]
    }
}

impl DistributionFamily for NegativeBinomial {
    fn mean(&self) -> Option<f64> {
        let r = self.successes as f64;
        let p = self.success_prob;
        Some(r * (1.0 - p) / p)
    }

    // No closed-form median is adopted for this family.

    fn mode(&self) -> Option<f64> {
        let r = self.successes as f64;
        let p = self.success_prob;
        if r > 1.0 {
            Some(((r - 1.0) * (1.0 - p) / p).floor())
        } else {
            Some(0.0)
        }
    }

    fn variance(&self) -> Option<f64> {
        let r = self.successes as f64;
        let p = self.success_prob;
        Some(r * (1.0 - p) / (p * p))
    }

    fn skewness(&self) -> Option<f64> {
        let r = self.successes as f64;
        let p = self.success_prob;
        Some((2.0 - p) / (r * (1.0 - p)).sqrt())
    }

    fn draw(&self, rng: &mut SynthRng, count: usize) -> Option<Vec<f64>> {
        // Gamma-Poisson mixture: lambda ~ Gamma(r, (1-p)/p), then
        // k ~ Poisson(lambda)
        let p = self.success_prob;
        let mixing = GammaSampler::new(self.successes as f64, (1.0 - p) / p).ok()?;

        let mut draws = Vec::with_capacity(count);
        for _ in 0..count {
            let lambda: f64 = mixing.sample(rng);
            if lambda > 0.0 {
                let sampler = PoissonSampler::new(lambda).ok()?;
                draws.push(sampler.sample(rng));
            } else {
                draws.push(0.0);
            }
        }
        Some(draws)
    }
}
