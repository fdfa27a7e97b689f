//! Exponential family.
//!
//! Generated function:
//! ```text
//! y = amplitude * base^(rate * x + shift) + offset
//! ```
//!
//! The amplitude sits outside the power and the affine argument sits
//! inside it; the base defaults to e.

use synth_core::rng::SynthRng;
use synth_core::traits::{resolve_param, CurveFamily};
use synth_core::types::ConfigError;

/// Exponential curve, `y = a * base^(b*x + c) + d`.
#[derive(Clone, Debug, PartialEq)]
pub struct Exponential {
    base: f64,
    amplitude: f64,
    rate: f64,
    shift: f64,
    offset: f64,
}

/// Optional parameters for [`Exponential`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ExponentialParams {
    /// Base of the power. Unset: e.
    pub base: Option<f64>,
    /// Amplitude `a`. Unset: randomised around 1.
    pub amplitude: Option<f64>,
    /// Exponent gradient `b`. Unset: randomised around 0.
    pub rate: Option<f64>,
    /// Exponent constant `c`. Unset: randomised around 0.
    pub shift: Option<f64>,
    /// Vertical offset `d`. Unset: uniform in `[-0.5, 0.5)`.
    pub offset: Option<f64>,
}

impl Exponential {
    /// Base of the power.
    #[inline]
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Amplitude `a`.
    #[inline]
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Exponent gradient `b`.
    #[inline]
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Exponent constant `c`.
    #[inline]
    pub fn shift(&self) -> f64 {
        self.shift
    }

    /// Vertical offset `d`.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }
}

impl CurveFamily for Exponential {
    type Params = ExponentialParams;

    fn family_name() -> &'static str {
        "Exponential"
    }

    fn resolve(params: Self::Params, rng: &mut SynthRng) -> Result<Self, ConfigError> {
        Ok(Self {
            base: resolve_param("base", params.base, rng, |_| std::f64::consts::E)?,
            amplitude: resolve_param("amplitude", params.amplitude, rng, |r| {
                1.0 + (r.gen_uniform() - 0.5) * 0.5
            })?,
            rate: resolve_param("rate", params.rate, rng, |r| (r.gen_uniform() - 0.5) * 0.5)?,
            shift: resolve_param("shift", params.shift, rng, |r| (r.gen_uniform() - 0.5) * 0.5)?,
            offset: resolve_param("offset", params.offset, rng, |r| r.gen_uniform() - 0.5)?,
        })
    }

    fn default_domain(&self, _rng: &mut SynthRng) -> (f64, f64) {
        (-10.0, 10.0)
    }

    fn evaluate(&self, x: &[f64]) -> Vec<f64> {
        x.iter()
            .map(|&v| self.amplitude * self.base.powf(self.rate * v + self.shift) + self.offset)
            .collect()
    }

    fn parameters(&self) -> Vec<(String, f64)> {
        vec![
            ("base".to_string(), self.base),
            ("amplitude".to_string(), self.amplitude),
            ("rate".to_string(), self.rate),
            ("shift".to_string(), self.shift),
            ("offset".to_string(), self.offset),
        ]
    }
}
