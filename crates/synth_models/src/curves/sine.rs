//! Sine wave family.
//!
//! Generated function:
//! ```text
//! y = amplitude * sin(angular_frequency * x + phase) + offset
//! ```

use synth_core::rng::SynthRng;
use synth_core::traits::{resolve_param, CurveFamily};
use synth_core::types::ConfigError;

/// Sine wave, `y = a * sin(b*x + c) + d`.
#[derive(Clone, Debug, PartialEq)]
pub struct Sine {
    amplitude: f64,
    angular_frequency: f64,
    phase: f64,
    offset: f64,
}

/// Optional parameters for [`Sine`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SineParams {
    /// Amplitude `a`. Unset: randomised around 1.
    pub amplitude: Option<f64>,
    /// Angular frequency `b`. Unset: randomised around 2π.
    pub angular_frequency: Option<f64>,
    /// Phase `c`. Unset: randomised around 0.
    pub phase: Option<f64>,
    /// Vertical offset `d`. Unset: uniform in `[-0.5, 0.5)`.
    pub offset: Option<f64>,
}

impl Sine {
    /// Amplitude of the wave.
    #[inline]
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Angular frequency.
    #[inline]
    pub fn angular_frequency(&self) -> f64 {
        self.angular_frequency
    }

    /// Phase shift.
    #[inline]
    pub fn phase(&self) -> f64 {
        self.phase
    }

    /// Vertical offset.
    #[inline]
    pub fn offset(&self) -> f64 {
        self.offset
    }
}

impl CurveFamily for Sine {
    type Params = SineParams;

    fn family_name() -> &'static str {
        "Sine"
    }

    fn resolve(params: Self::Params, rng: &mut SynthRng) -> Result<Self, ConfigError> {
        Ok(Self {
            amplitude: resolve_param("amplitude", params.amplitude, rng, |r| {
                1.0 + (r.gen_uniform() - 0.5) * 0.5
            })?,
            angular_frequency: resolve_param(
                "angular_frequency",
                params.angular_frequency,
                rng,
                |r| 2.0 * std::f64::consts::PI * (r.gen_uniform() + 0.5),
            )?,
            phase: resolve_param("phase", params.phase, rng, |r| {
                (r.gen_uniform() - 0.5) * 0.5
            })?,
            offset: resolve_param("offset", params.offset, rng, |r| r.gen_uniform() - 0.5)?,
        })
    }

    fn default_domain(&self, _rng: &mut SynthRng) -> (f64, f64) {
        (-10.0, 10.0)
    }

    fn evaluate(&self, x: &[f64]) -> Vec<f64> {
        x.iter()
            .map(|&v| {
                self.amplitude * (self.angular_frequency * v + self.phase).sin() + self.offset
            })
            .collect()
    }

    fn parameters(&self) -> Vec<(String, f64)> {
        vec![
            ("amplitude".to_string(), self.amplitude),
            ("angular_frequency".to_string(), self.angular_frequency),
            ("phase".to_string(), self.phase),
            ("offset".to_string(), self.offset),
        ]
    }
}
