//! Binomial distribution.
//!
//! Mass function:
//! ```text
//! y = C(n, k) * p^k * (1-p)^(n-k)
//! ```

use rand_distr::{Binomial as BinomialSampler, Distribution as _};
use synth_core::math::special::ln_choose;
use synth_core::rng::SynthRng;
use synth_core::traits::{
    resolve_int_param, resolve_param, CurveFamily, DistributionFamily, Support,
};
use synth_core::types::ConfigError;

/// Binomial distribution: `trials` Bernoulli trials of probability
/// `success_prob`.
#[derive(Clone, Debug, PartialEq)]
pub struct Binomial {
    trials: u64,
    success_prob: f64,
}

/// Optional parameters for [`Binomial`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BinomialParams {
    /// Number of trials `n`. Unset: uniform integer in `[10, 50]`.
    pub trials: Option<u64>,
    /// Per-trial success probability `p` in `[0, 1]`. Unset: uniform
    /// in `[0.4, 0.9)`.
    pub success_prob: Option<f64>,
}

impl Binomial {
    /// Number of trials.
    #[inline]
    pub fn trials(&self) -> u64 {
        self.trials
    }

    /// Per-trial success probability.
    #[inline]
    pub fn success_prob(&self) -> f64 {
        self.success_prob
    }

    fn pmf(&self, k: f64) -> f64 {
        let n = self.trials as f64;
        let p = self.success_prob;

        if k < 0.0 || k > n {
            return 0.0;
        }
        // Degenerate probabilities concentrate all mass at one point
        if p == 0.0 {
            return if k == 0.0 { 1.0 } else { 0.0 };
        }
        if p == 1.0 {
            return if k == n { 1.0 } else { 0.0 };
        }

        (ln_choose(n, k) + k * p.ln() + (n - k) * (1.0 - p).ln()).exp()
    }
}

impl CurveFamily for Binomial {
    type Params = BinomialParams;

    fn family_name() -> &'static str {
        "Binomial"
    }

    fn resolve(params: Self::Params, rng: &mut SynthRng) -> Result<Self, ConfigError> {
        let trials = resolve_int_param(params.trials, rng, |r| r.gen_int_range(10..=50));
        let success_prob = resolve_param("success_prob", params.success_prob, rng, |r| {
            (r.gen_uniform() + 0.8) / 2.0
        })?;

        if !(0.0..=1.0).contains(&success_prob) {
            return Err(ConfigError::InvalidParameter {
                name: "success_prob",
                value: success_prob,
            });
        }

        Ok(Self {
            trials,
            success_prob,
        })
    }

    fn default_domain(&self, _rng: &mut SynthRng) -> (f64, f64) {
        (0.0, self.trials as f64)
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
            ("trials".to_string(), self.trials as f64),
            ("success_prob".to_string(), self.success_prob),
        ]
    }
}

impl DistributionFamily for Binomial {
    fn mean(&self) -> Option<f64> {
        Some(self.trials as f64 * self.success_prob)
    }

    fn median(&self) -> Option<f64> {
        Some((self.trials as f64 * self.success_prob).floor())
    }

    fn mode(&self) -> Option<f64> {
        Some(((self.trials as f64 + 1.0) * self.success_prob).floor())
    }

    fn variance(&self) -> Option<f64> {
        let n = self.trials as f64;
        let p = self.success_prob;
        Some(n * p * (1.0 - p))
    }

    fn skewness(&self) -> Option<f64> {
        let n = self.trials as f64;
        let p = self.success_prob;
        Some((1.0 - 2.0 * p) / (n * p * (1.0 - p)).sqrt())
    }

    fn draw(&self, rng: &mut SynthRng, count: usize) -> Option<Vec<f64>> {
        let sampler = BinomialSampler::new(self.trials, self.success_prob).ok()?;
        Some((0..count).map(|_| sampler.sample(rng) as f64).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_binomial_pmf_fair_coin() {
        let binomial = Binomial::builder()
            .params(BinomialParams {
                trials: Some(4),
                success_prob: Some(0.5),
            })
            .seed(1)
            .build()
            .unwrap();

        // C(4, 2) / 16 = 6/16
        let family = binomial.family();
        assert_relative_eq!(family.pmf(2.0), 0.375, epsilon = 1e-12);
        assert_relative_eq!(family.pmf(0.0), 0.0625, epsilon = 1e-12);
        assert_eq!(family.pmf(5.0), 0.0);
    }

    #[test]
    fn test_binomial_pmf_degenerate_p() {
        let certain = Binomial::builder()
            .params(BinomialParams {
                trials: Some(3),
                success_prob: Some(1.0),
            })
            .seed(1)
            .build()
            .unwrap();

        assert_eq!(certain.family().pmf(3.0), 1.0);
        assert_eq!(certain.family().pmf(2.0), 0.0);
    }

    #[test]
    fn test_binomial_mass_sums_to_one() {
        let binomial = Binomial::builder()
            .samples(100)
            .params(BinomialParams {
                trials: Some(12),
                success_prob: Some(0.3),
            })
            .no_noise()
            .seed(1)
            .build()
            .unwrap();

        let total: f64 = (0..=12).map(|k| binomial.family().pmf(k as f64)).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_binomial_statistics() {
        let binomial = Binomial::builder()
            .params(BinomialParams {
                trials: Some(20),
                success_prob: Some(0.25),
            })
            .seed(1)
            .build()
            .unwrap();

        assert_eq!(binomial.mean(), Some(5.0));
        assert_eq!(binomial.median(), Some(5.0));
        assert_eq!(binomial.mode(), Some(5.0));
        assert_eq!(binomial.variance(), Some(3.75));
    }

    #[test]
    fn test_binomial_rejects_probability_above_one() {
        let result = Binomial::builder()
            .params(BinomialParams {
                trials: Some(10),
                success_prob: Some(1.5),
            })
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "success_prob",
                ..
            })
        ));
    }

    #[test]
    fn test_binomial_samples_within_trials() {
        let binomial = Binomial::builder()
            .params(BinomialParams {
                trials: Some(10),
                success_prob: Some(0.5),
            })
            .seed(5)
            .build()
            .unwrap();

        let draws = binomial.sample(100).unwrap();
        assert!(draws.iter().all(|&v| (0.0..=10.0).contains(&v)));
    }
}
