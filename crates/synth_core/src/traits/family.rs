//! The `CurveFamily` / `DistributionFamily` contract.

use crate::generator::GeneratorBuilder;
use crate::rng::SynthRng;
use crate::types::ConfigError;

/// The support of a family's output, acting as its capability set.
///
/// A family declares its support once, and the generator derives both
/// behaviours from it:
///
/// - non-negative supports clamp negative composed `y` values to zero;
/// - integer supports sample `x` on the deduplicated integer lattice and
///   shrink the effective sample count to the distinct points available.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Support {
    /// The whole real line. No clamping, continuous sampling.
    #[default]
    Real,

    /// Non-negative reals. Clamps negative `y`, continuous sampling.
    NonNegativeReal,

    /// Non-negative integers. Clamps negative `y`, lattice sampling.
    NonNegativeInteger,
}

impl Support {
    /// Whether composed `y` values below zero are clamped to zero.
    #[inline]
    pub fn clamps_negative(self) -> bool {
        !matches!(self, Support::Real)
    }

    /// Whether `x` is restricted to the integer lattice.
    #[inline]
    pub fn is_discrete(self) -> bool {
        matches!(self, Support::NonNegativeInteger)
    }
}

/// A parametric curve family: the closed-form formula plus its
/// parameter-resolution and default rules.
///
/// Implementations are plain structs of resolved `f64` (or integer)
/// parameters. All randomness happens once, inside [`resolve`] and
/// [`default_domain`], drawing from the generator's own stream;
/// [`evaluate`] is pure and must not touch the RNG or mutate anything.
///
/// [`resolve`]: CurveFamily::resolve
/// [`default_domain`]: CurveFamily::default_domain
/// [`evaluate`]: CurveFamily::evaluate
pub trait CurveFamily: Sized {
    /// Optional user-supplied parameters; `Default` means "all unset".
    type Params: Default;

    /// Family name used in display forms, e.g. `"Sine"`.
    fn family_name() -> &'static str;

    /// Resolves the parameter set: each supplied value is validated,
    /// each unset one is drawn from the family's default rule.
    ///
    /// # Errors
    /// `ConfigError::InvalidParameter` if a supplied value is not a
    /// finite number.
    fn resolve(params: Self::Params, rng: &mut SynthRng) -> Result<Self, ConfigError>;

    /// Default `(min, max)` sampling interval, inferred from the
    /// resolved parameters. May draw from the RNG.
    fn default_domain(&self, rng: &mut SynthRng) -> (f64, f64);

    /// Default perturbation amplitude; `None` means noise is off unless
    /// the caller enables it.
    fn default_noise_amplitude() -> Option<f64> {
        Some(0.1)
    }

    /// The family's output support. Defaults to the whole real line.
    fn support(&self) -> Support {
        Support::Real
    }

    /// Evaluates the closed-form formula over an x sequence.
    ///
    /// Pure: no randomness, no mutation. Non-finite outputs (e.g. a
    /// logarithm of a negative argument under user-supplied parameters)
    /// propagate as-is.
    fn evaluate(&self, x: &[f64]) -> Vec<f64>;

    /// Resolved parameters as `(name, value)` pairs, in declaration
    /// order, for the reconstruction-oriented display form. Names are
    /// owned so vector-valued families can number theirs.
    fn parameters(&self) -> Vec<(String, f64)>;

    /// Starts a generator builder for this family.
    fn builder() -> GeneratorBuilder<Self> {
        GeneratorBuilder::new()
    }
}

/// A probability distribution family: a [`CurveFamily`] whose curve is a
/// density or mass function, extended with closed-form summary
/// statistics and native sampling.
///
/// Every statistic independently returns `None` when the family adopts
/// no closed form for it, the distinguished "not supported" result.
/// Callers check before use; nothing raises.
pub trait DistributionFamily: CurveFamily {
    /// Expected value.
    fn mean(&self) -> Option<f64> {
        None
    }

    /// Median.
    fn median(&self) -> Option<f64> {
        None
    }

    /// Most probable value.
    fn mode(&self) -> Option<f64> {
        None
    }

    /// Variance.
    fn variance(&self) -> Option<f64> {
        None
    }

    /// Skewness.
    fn skewness(&self) -> Option<f64> {
        None
    }

    /// Draws `count` variates from the family's own parametric law
    /// using the supplied stream.
    ///
    /// Returns `None` for families without native sampling.
    fn draw(&self, rng: &mut SynthRng, count: usize) -> Option<Vec<f64>>;
}

/// Resolves one named parameter: the supplied value (validated finite)
/// or the family's randomised default.
///
/// This is the uniform name → resolver mapping applied to every
/// parameter of every family.
///
/// # Errors
/// `ConfigError::InvalidParameter` if `supplied` is `Some` but not
/// finite (NaN or infinite).
///
/// # Examples
/// ```
/// use synth_core::rng::SynthRng;
/// use synth_core::traits::resolve_param;
///
/// let mut rng = SynthRng::from_seed(1);
///
/// // Supplied values pass through untouched
/// let v = resolve_param("slope", Some(2.5), &mut rng, |r| r.gen_uniform()).unwrap();
/// assert_eq!(v, 2.5);
///
/// // NaN is rejected
/// assert!(resolve_param("slope", Some(f64::NAN), &mut rng, |r| r.gen_uniform()).is_err());
/// ```
pub fn resolve_param(
    name: &'static str,
    supplied: Option<f64>,
    rng: &mut SynthRng,
    default: impl FnOnce(&mut SynthRng) -> f64,
) -> Result<f64, ConfigError> {
    match supplied {
        Some(value) if value.is_finite() => Ok(value),
        Some(value) => Err(ConfigError::InvalidParameter { name, value }),
        None => Ok(default(rng)),
    }
}

/// Integer counterpart of [`resolve_param`].
///
/// Integer-typed parameters carry no finiteness failure mode, so this
/// resolver cannot fail.
pub fn resolve_int_param(
    supplied: Option<u64>,
    rng: &mut SynthRng,
    default: impl FnOnce(&mut SynthRng) -> u64,
) -> u64 {
    supplied.unwrap_or_else(|| default(rng))
}
