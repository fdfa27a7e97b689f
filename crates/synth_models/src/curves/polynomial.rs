//! Polynomial families.
//!
//! Generated function:
//! ```text
//! y = a[0] + a[1]*x + a[2]*x^2 + ... + a[n]*x^n
//! ```
//!
//! Coefficients are ordered low-to-high everywhere: `a[i]` multiplies
//! `x^i`. [`Quadratic`] and [`Cubic`] are fixed-order conveniences with
//! the same ordering.

use synth_core::rng::SynthRng;
use synth_core::traits::{resolve_param, CurveFamily};
use synth_core::types::ConfigError;

/// Evaluate a low-to-high coefficient list by Horner's method.
fn horner(coefficients: &[f64], x: f64) -> f64 {
    coefficients
        .iter()
        .rev()
        .fold(0.0, |acc, &c| acc * x + c)
}

/// Polynomial of arbitrary order, coefficients low-to-high.
#[derive(Clone, Debug, PartialEq)]
pub struct Polynomial {
    coefficients: Vec<f64>,
}

/// Optional parameters for [`Polynomial`].
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PolynomialParams {
    /// Coefficient list, low-to-high. Unset: a random linear or
    /// quadratic with small coefficients.
    pub coefficients: Option<Vec<f64>>,
}

impl Polynomial {
    /// Resolved coefficient list, low-to-high.
    #[inline]
    pub fn coefficients(&self) -> &[f64] {
        &self.coefficients
    }

    /// Polynomial order (highest power of x).
    #[inline]
    pub fn order(&self) -> usize {
        self.coefficients.len().saturating_sub(1)
    }
}

impl CurveFamily for Polynomial {
    type Params = PolynomialParams;

    fn family_name() -> &'static str {
        "Polynomial"
    }

    fn resolve(params: Self::Params, rng: &mut SynthRng) -> Result<Self, ConfigError> {
        let coefficients = match params.coefficients {
            Some(supplied) => {
                for &value in &supplied {
                    if !value.is_finite() {
                        return Err(ConfigError::InvalidParameter {
                            name: "coefficients",
                            value,
                        });
                    }
                }
                supplied
            }
            None => {
                let count = rng.gen_int_range(2..=3) as usize;
                (0..count).map(|_| rng.gen_uniform() - 0.5).collect()
            }
        };

        Ok(Self { coefficients })
    }

    fn default_domain(&self, _rng: &mut SynthRng) -> (f64, f64) {
        (-10.0, 10.0)
    }

    fn default_noise_amplitude() -> Option<f64> {
        Some(1.0)
    }

    fn evaluate(&self, x: &[f64]) -> Vec<f64> {
        x.iter().map(|&v| horner(&self.coefficients, v)).collect()
    }

    fn parameters(&self) -> Vec<(String, f64)> {
        self.coefficients
            .iter()
            .enumerate()
            .map(|(i, &c)| (format!("a{}", i), c))
            .collect()
    }
}

/// Quadratic, `y = a + b*x + c*x^2`.
#[derive(Clone, Debug, PartialEq)]
pub struct Quadratic {
    constant: f64,
    linear: f64,
    quadratic: f64,
}

/// Optional parameters for [`Quadratic`]. Terms are named by power,
/// low-to-high.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QuadraticParams {
    /// Constant term `a`. Unset: uniform in `[-0.5, 0.5)`.
    pub constant: Option<f64>,
    /// Linear term `b`. Unset: uniform in `[-0.5, 0.5)`.
    pub linear: Option<f64>,
    /// Quadratic term `c`. Unset: uniform in `[-0.5, 0.5)`.
    pub quadratic: Option<f64>,
}

impl Quadratic {
    /// Constant term.
    #[inline]
    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Linear term.
    #[inline]
    pub fn linear(&self) -> f64 {
        self.linear
    }

    /// Quadratic term.
    #[inline]
    pub fn quadratic(&self) -> f64 {
        self.quadratic
    }
}

impl CurveFamily for Quadratic {
    type Params = QuadraticParams;

    fn family_name() -> &'static str {
        "Quadratic"
    }

    fn resolve(params: Self::Params, rng: &mut SynthRng) -> Result<Self, ConfigError> {
        Ok(Self {
            constant: resolve_param("constant", params.constant, rng, |r| r.gen_uniform() - 0.5)?,
            linear: resolve_param("linear", params.linear, rng, |r| r.gen_uniform() - 0.5)?,
            quadratic: resolve_param("quadratic", params.quadratic, rng, |r| {
                r.gen_uniform() - 0.5
            })?,
        })
    }

    fn default_domain(&self, _rng: &mut SynthRng) -> (f64, f64) {
        (-10.0, 10.0)
    }

    fn default_noise_amplitude() -> Option<f64> {
        Some(1.0)
    }

    fn evaluate(&self, x: &[f64]) -> Vec<f64> {
        x.iter()
            .map(|&v| horner(&[self.constant, self.linear, self.quadratic], v))
            .collect()
    }

    fn parameters(&self) -> Vec<(String, f64)> {
        vec![
            ("constant".to_string(), self.constant),
            ("linear".to_string(), self.linear),
            ("quadratic".to_string(), self.quadratic),
        ]
    }
}

/// Cubic, `y = a + b*x + c*x^2 + d*x^3`.
#[derive(Clone, Debug, PartialEq)]
pub struct Cubic {
    constant: f64,
    linear: f64,
    quadratic: f64,
    cubic: f64,
}

/// Optional parameters for [`Cubic`]. Terms are named by power,
/// low-to-high.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CubicParams {
    /// Constant term `a`. Unset: uniform in `[-0.5, 0.5)`.
    pub constant: Option<f64>,
    /// Linear term `b`. Unset: uniform in `[-0.5, 0.5)`.
    pub linear: Option<f64>,
    /// Quadratic term `c`. Unset: uniform in `[-0.5, 0.5)`.
    pub quadratic: Option<f64>,
    /// Cubic term `d`. Unset: uniform in `[-0.5, 0.5)`.
    pub cubic: Option<f64>,
}

impl Cubic {
    /// Constant term.
    #[inline]
    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Linear term.
    #[inline]
    pub fn linear(&self) -> f64 {
        self.linear
    }

    /// Quadratic term.
    #[inline]
    pub fn quadratic(&self) -> f64 {
        self.quadratic
    }

    /// Cubic term.
    #[inline]
    pub fn cubic(&self) -> f64 {
        self.cubic
    }
}

impl CurveFamily for Cubic {
    type Params = CubicParams;

    fn family_name() -> &'static str {
        "Cubic"
    }

    fn resolve(params: Self::Params, rng: &mut SynthRng) -> Result<Self, ConfigError> {
        Ok(Self {
            constant: resolve_param("constant", params.constant, rng, |r| r.gen_uniform() - 0.5)?,
            linear: resolve_param("linear", params.linear, rng, |r| r.gen_uniform() - 0.5)?,
            quadratic: resolve_param("quadratic", params.quadratic, rng, |r| {
                r.gen_uniform() - 0.5
            })?,
            cubic: resolve_param("cubic", params.cubic, rng, |r| r.gen_uniform() - 0.5)?,
        })
    }

    fn default_domain(&self, _rng: &mut SynthRng) -> (f64, f64) {
        (-10.0, 10.0)
    }

    fn default_noise_amplitude() -> Option<f64> {
        Some(5.0)
    }

    fn evaluate(&self, x: &[f64]) -> Vec<f64> {
        x.iter()
            .map(|&v| horner(&[self.constant, self.linear, self.quadratic, self.cubic], v))
            .collect()
    }

    fn parameters(&self) -> Vec<(String, f64)> {
        vec![
            ("constant".to_string(), self.constant),
            ("linear".to_string(), self.linear),
            ("quadratic".to_string(), self.quadratic),
            ("cubic".to_string(), self.cubic),
        ]
    }
}
