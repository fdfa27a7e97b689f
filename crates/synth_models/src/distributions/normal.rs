//! Normal (Gaussian) distribution.
//!
//! Density:
//! ```text
//! y = exp(-(x - mean)^2 / (2 * std_dev^2)) / (std_dev * sqrt(2*pi))
//! ```

use rand_distr::{Distribution as _, Normal as NormalSampler};
use synth_core::rng::SynthRng;
use synth_core::traits::{resolve_param, CurveFamily, DistributionFamily};
use synth_core::types::ConfigError;

/// 1 / sqrt(2 * pi)
const FRAC_1_SQRT_2PI: f64 = 0.398_942_280_401_432_7;

/// Normal distribution with mean and standard deviation.
///
/// Support is the whole real line, so no clamping applies: the density
/// is non-negative by construction, and perturbation is allowed to dip
/// below zero exactly as for any real-valued curve.
#[derive(Clone, Debug, PartialEq)]
pub struct Normal {
    mean: f64,
    std_dev: f64,
}

/// Optional parameters for [`Normal`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NormalParams {
    /// Mean. Unset: randomised around 0.
    pub mean: Option<f64>,
    /// Standard deviation, strictly positive. Unset: uniform in
    /// `[0.25, 0.75)`.
    pub std_dev: Option<f64>,
}

impl Normal {
    /// Mean of the distribution.
    #[inline]
    pub fn mean_value(&self) -> f64 {
        self.mean
    }

    /// Standard deviation.
    #[inline]
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }
}

impl CurveFamily for Normal {
    type Params = NormalParams;

    fn family_name() -> &'static str {
        "Normal"
    }

    fn resolve(params: Self::Params, rng: &mut SynthRng) -> Result<Self, ConfigError> {
        let mean = resolve_param("mean", params.mean, rng, |r| (r.gen_uniform() - 0.5) * 0.5)?;
        let std_dev = resolve_param("std_dev", params.std_dev, rng, |r| {
            0.25 + r.gen_uniform() * 0.5
        })?;

        if std_dev <= 0.0 {
            return Err(ConfigError::InvalidParameter {
                name: "std_dev",
                value: std_dev,
            });
        }

        Ok(Self { mean, std_dev })
    }

    fn default_domain(&self, _rng: &mut SynthRng) -> (f64, f64) {
        let span = 5.0 * self.std_dev;
        (self.mean - span, self.mean + span)
    }

    fn default_noise_amplitude() -> Option<f64> {
        Some(0.02)
    }

    fn evaluate(&self, x: &[f64]) -> Vec<f64> {
        let norm = FRAC_1_SQRT_2PI / self.std_dev;
        let two_var = 2.0 * self.std_dev * self.std_dev;
        x.iter()
            .map(|&v| {
                let d = v - self.mean;
                norm * (-d * d / two_var).exp()
            })
            .collect()
    }

    fn parameters(&self) -> Vec<(String, f64)> {
        vec![
            ("mean".to_string(), self.mean),
            ("std_dev".to_string(), self.std_dev),
        ]
    }
}

impl DistributionFamily for Normal {
    fn mean(&self) -> Option<f64> {
        Some(self.mean)
    }

    fn median(&self) -> Option<f64> {
        Some(self.mean)
    }

    fn mode(&self) -> Option<f64> {
        Some(self.mean)
    }

    fn variance(&self) -> Option<f64> {
        Some(self.std_dev * self.std_dev)
    }

    fn skewness(&self) -> Option<f64> {
        Some(0.0)
    }

    fn draw(&self, rng: &mut SynthRng, count: usize) -> Option<Vec<f64>> {
        let sampler = NormalSampler::new(self.mean, self.std_dev).ok()?;
        Some((0..count).map(|_| sampler.sample(rng)).collect())
    }
}
