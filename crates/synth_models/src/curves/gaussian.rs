//! Gaussian bump family.
//!
//! Generated function:
//! ```text
//! y = amplitude * exp(-(x - centre)^2 / (2 * width^2)) + offset
//! ```
//!
//! This is the unnormalised bell curve; the normalised density lives in
//! the distributions module as `Normal`. The default width is bounded
//! away from zero so the inferred domain `centre ± 5*width` is always a
//! proper interval.

use synth_core::rng::SynthRng;
use synth_core::traits::{resolve_param, CurveFamily};
use synth_core::types::ConfigError;

/// Gaussian bump, `y = a * exp(-(x-b)^2 / (2c^2)) + d`.
#[derive(Clone, Debug, PartialEq)]
pub struct Gaussian {
    amplitude: f64,
    centre: f64,
    width: f64,
    offset: f64,
}

/// Optional parameters for [`Gaussian`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaussianParams {
    /// Peak amplitude `a`. Unset: randomised around 1.
    pub amplitude: Option<f64>,
    /// Peak position `b`. Unset: randomised around 0.
    pub centre: Option<f64>,
    /// Width `c`. Unset: uniform in `[0.25, 0.75)`.
    pub width: Option<f64>,
    /// Vertical offset `d`. Unset: randomised around 0.
    pub offset: Option<f64>,
}

impl Gaussian {
    /// Peak amplitude.
    #[inline]
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Peak position.
    #[inline]
    pub fn centre(&self) -> f64 {
        self.centre
    }

    /// Width parameter.
    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Vertical offset.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }
}

impl CurveFamily for Gaussian {
    type Params = GaussianParams;

    fn family_name() -> &'static str {
        "Gaussian"
    }

    fn resolve(params: Self::Params, rng: &mut SynthRng) -> Result<Self, ConfigError> {
        Ok(Self {
            amplitude: resolve_param("amplitude", params.amplitude, rng, |r| {
                1.0 + (r.gen_uniform() - 0.5) * 0.5
            })?,
            centre: resolve_param("centre", params.centre, rng, |r| {
                (r.gen_uniform() - 0.5) * 0.5
            })?,
            width: resolve_param("width", params.width, rng, |r| 0.25 + r.gen_uniform() * 0.5)?,
            offset: resolve_param("offset", params.offset, rng, |r| {
                (r.gen_uniform() - 0.5) * 0.2
            })?,
        })
    }

    fn default_domain(&self, _rng: &mut SynthRng) -> (f64, f64) {
        let span = 5.0 * self.width.abs();
        (self.centre - span, self.centre + span)
    }

    fn default_noise_amplitude() -> Option<f64> {
        Some(0.02)
    }

    fn evaluate(&self, x: &[f64]) -> Vec<f64> {
        let two_width_sq = 2.0 * self.width * self.width;
        x.iter()
            .map(|&v| {
                let d = v - self.centre;
                self.amplitude * (-d * d / two_width_sq).exp() + self.offset
            })
            .collect()
    }

    fn parameters(&self) -> Vec<(String, f64)> {
        vec![
            ("amplitude".to_string(), self.amplitude),
            ("centre".to_string(), self.centre),
            ("width".to_string(), self.width),
            ("offset".to_string(), self.offset),
        ]
    }
}
