//! Hypergeometric distribution.
//!
//! Mass function:
//! ```text
//! y = C(K, k) * C(M-K, n-k) / C(M, n)
//! ```
//! for a population of `M` with `K` success states and `n` draws
//! without replacement.

use rand_distr::{Distribution as _, Hypergeometric as HypergeometricSampler};
use synth_core::math::special::ln_choose;
use synth_core::rng::SynthRng;
use synth_core::traits::{resolve_int_param, CurveFamily, DistributionFamily, Support};
use synth_core::types::ConfigError;

/// Hypergeometric distribution over draws without replacement.
#[derive(Clone, Debug, PartialEq)]
pub struct Hypergeometric {
    population: u64,
    successes: u64,
    draws: u64,
}

/// Optional parameters for [`Hypergeometric`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HypergeometricParams {
    /// Population size `M`. Unset: uniform integer in `[20, 40]`.
    pub population: Option<u64>,
    /// Success states in the population `K <= M`. Unset: uniform
    /// integer in `[10, 19]`.
    pub successes: Option<u64>,
    /// Number of draws `n <= M`. Unset: uniform integer in `[5, 15]`.
    pub draws: Option<u64>,
}

impl Hypergeometric {
    /// Population size.
    #[inline]
    pub fn population(&self) -> u64 {
        self.population
    }

    /// Success states in the population.
    #[inline]
    pub fn successes(&self) -> u64 {
        self.successes
    }

    /// Number of draws.
    #[inline]
    pub fn draws(&self) -> u64 {
        self.draws
    }

    fn pmf(&self, k: f64) -> f64 {
        let m = self.population as f64;
        let big_k = self.successes as f64;
        let n = self.draws as f64;

        // ln_choose yields -inf outside the feasible range, which
        // exponentiates to the required zero mass
        (ln_choose(big_k, k) + ln_choose(m - big_k, n - k) - ln_choose(m, n)).exp()
    }
}

impl CurveFamily for Hypergeometric {
    type Params = HypergeometricParams;

    fn family_name() -> &'static str {
        "Hypergeometric"
    }

    fn resolve(params: Self::Params, rng: &mut SynthRng) -> Result<Self, ConfigError> {
        let population = resolve_int_param(params.population, rng, |r| r.gen_int_range(20..=40));
        let successes = resolve_int_param(params.successes, rng, |r| r.gen_int_range(10..=19));
        let draws = resolve_int_param(params.draws, rng, |r| r.gen_int_range(5..=15));

        if successes > population {
            return Err(ConfigError::InvalidParameter {
                name: "successes",
                value: successes as f64,
            });
        }
        if draws > population {
            return Err(ConfigError::InvalidParameter {
                name: "draws",
                value: draws as f64,
            });
        }

        Ok(Self {
            population,
            successes,
            draws,
        })
    }

    fn default_domain(&self, _rng: &mut SynthRng) -> (f64, f64) {
        (0.0, self.draws as f64)
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
            ("population".to_string(), self.population as f64),
            ("successes".to_string(), self.successes as f64),
            ("draws".to_string(), self.draws as f64),
        ]
    }
}

impl DistributionFamily for Hypergeometric {
    fn mean(&self) -> Option<f64> {
        let m = self.population as f64;
        Some(self.draws as f64 * self.successes as f64 / m)
    }

    // No closed-form median is adopted for this family.

    fn mode(&self) -> Option<f64> {
        let m = self.population as f64;
        let k = self.successes as f64;
        let n = self.draws as f64;
        Some(((n + 1.0) * (k + 1.0) / (m + 2.0)).floor())
    }

    fn variance(&self) -> Option<f64> {
        let m = self.population as f64;
        let k = self.successes as f64;
        let n = self.draws as f64;
        Some(n * (k / m) * (1.0 - k / m) * (m - n) / (m - 1.0))
    }

    fn skewness(&self) -> Option<f64> {
        let m = self.population as f64;
        let k = self.successes as f64;
        let n = self.draws as f64;
        let numerator = (m - 2.0 * k) * (m - 1.0).sqrt() * (m - 2.0 * n);
        let denominator = (n * k * (m - k) * (m - n)).sqrt() * (m - 2.0);
        Some(numerator / denominator)
    }

    fn draw(&self, rng: &mut SynthRng, count: usize) -> Option<Vec<f64>> {
        let sampler =
            HypergeometricSampler::new(self.population, self.successes, self.draws).ok()?;
        Some((0..count).map(|_| sampler.sample(rng) as f64).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_hypergeometric_pmf_urn() {
        // 10 marbles, 4 white, draw 3: P(2 white) = C(4,2)C(6,1)/C(10,3)
        let urn = Hypergeometric::builder()
            .params(HypergeometricParams {
                population: Some(10),
                successes: Some(4),
                draws: Some(3),
            })
            .seed(1)
            .build()
            .unwrap();

        let family = urn.family();
        assert_relative_eq!(family.pmf(2.0), 36.0 / 120.0, epsilon = 1e-12);
        // Infeasible counts carry zero mass
        assert_eq!(family.pmf(5.0), 0.0);
        assert_eq!(family.pmf(-1.0), 0.0);
    }

    #[test]
    fn test_hypergeometric_mass_sums_to_one() {
        let urn = Hypergeometric::builder()
            .params(HypergeometricParams {
                population: Some(30),
                successes: Some(12),
                draws: Some(8),
            })
            .seed(1)
            .build()
            .unwrap();

        let total: f64 = (0..=8).map(|k| urn.family().pmf(k as f64)).sum();
        assert_relative_eq!(total, 1.0, epsilon = 1e-10);
    }

    #[test]
    fn test_hypergeometric_median_unsupported() {
        let urn = Hypergeometric::builder().seed(1).build().unwrap();
        assert_eq!(urn.median(), None);
        assert!(urn.mean().is_some());
        assert!(urn.mode().is_some());
    }

    #[test]
    fn test_hypergeometric_rejects_successes_above_population() {
        let result = Hypergeometric::builder()
            .params(HypergeometricParams {
                population: Some(10),
                successes: Some(11),
                draws: Some(3),
            })
            .build();
        assert!(matches!(
            result,
            Err(ConfigError::InvalidParameter {
                name: "successes",
                ..
            })
        ));
    }

    #[test]
    fn test_hypergeometric_samples_bounded_by_draws() {
        let urn = Hypergeometric::builder()
            .params(HypergeometricParams {
                population: Some(30),
                successes: Some(12),
                draws: Some(8),
            })
            .seed(6)
            .build()
            .unwrap();

        let draws = urn.sample(100).unwrap();
        assert!(draws.iter().all(|&v| (0.0..=8.0).contains(&v)));
    }
}
