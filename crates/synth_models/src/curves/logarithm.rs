//! Logarithm family.
//!
//! Generated function:
//! ```text
//! y = amplitude * log_base(scale * x + shift) + offset
//! ```
//!
//! The default scale and shift are strictly positive and the default
//! domain starts right of zero, so the default argument stays positive
//! across the whole interval. User-supplied parameters can still drive
//! the argument negative; the resulting NaNs propagate to the caller.

use synth_core::rng::SynthRng;
use synth_core::traits::{resolve_param, CurveFamily};
use synth_core::types::ConfigError;

/// Logarithmic curve, `y = a * log_base(b*x + c) + d`.
#[derive(Clone, Debug, PartialEq)]
pub struct Logarithm {
    base: f64,
    amplitude: f64,
    scale: f64,
    shift: f64,
    offset: f64,
}

/// Optional parameters for [`Logarithm`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogarithmParams {
    /// Base of the logarithm. Unset: e.
    pub base: Option<f64>,
    /// Amplitude `a`. Unset: randomised around 1.
    pub amplitude: Option<f64>,
    /// Argument gradient `b`. Unset: uniform in `[0.5, 1.5)`.
    pub scale: Option<f64>,
    /// Argument constant `c`. Unset: uniform in `[1, 2)`.
    pub shift: Option<f64>,
    /// Vertical offset `d`. Unset: randomised around 0.
    pub offset: Option<f64>,
}

impl Logarithm {
    /// Base of the logarithm.
    #[inline]
    pub fn base(&self) -> f64 {
        self.base
    }

    /// Amplitude `a`.
    #[inline]
    pub fn amplitude(&self) -> f64 {
        self.amplitude
    }

    /// Argument gradient `b`.
    #[inline]
    pub fn scale(&self) -> f64 {
        self.scale
    }

    /// Argument constant `c`.
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

impl CurveFamily for Logarithm {
    type Params = LogarithmParams;

    fn family_name() -> &'static str {
        "Logarithm"
    }

    fn resolve(params: Self::Params, rng: &mut SynthRng) -> Result<Self, ConfigError> {
        Ok(Self {
            base: resolve_param("base", params.base, rng, |_| std::f64::consts::E)?,
            amplitude: resolve_param("amplitude", params.amplitude, rng, |r| {
                1.0 + (r.gen_uniform() - 0.5) * 0.5
            })?,
            scale: resolve_param("scale", params.scale, rng, |r| 0.5 + r.gen_uniform())?,
            shift: resolve_param("shift", params.shift, rng, |r| 1.0 + r.gen_uniform())?,
            offset: resolve_param("offset", params.offset, rng, |r| {
                (r.gen_uniform() - 0.5) * 0.5
            })?,
        })
    }

    fn default_domain(&self, _rng: &mut SynthRng) -> (f64, f64) {
        (0.5, 10.0)
    }

    fn evaluate(&self, x: &[f64]) -> Vec<f64> {
        let ln_base = self.base.ln();
        x.iter()
            .map(|&v| self.amplitude * (self.scale * v + self.shift).ln() / ln_base + self.offset)
            .collect()
    }

    fn parameters(&self) -> Vec<(String, f64)> {
        vec![
            ("base".to_string(), self.base),
            ("amplitude".to_string(), self.amplitude),
            ("scale".to_string(), self.scale),
            ("shift".to_string(), self.shift),
            ("offset".to_string(), self.offset),
        ]
    }
}
