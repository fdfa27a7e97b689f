//! The generic lazy dataset generator.
//!
//! [`Generator`] owns a resolved family, a frozen configuration and an
//! exclusive RNG stream, and computes its `x` / base-`y` / noise
//! sequences at most once each. `y` is composed from the cached parts on
//! every read, so repeated reads are cheap and observably identical:
//! randomness is never redrawn.
//!
//! There is no invalidation API: parameters are resolved once at
//! construction and frozen, so every cache transition is one-way
//! (`uncomputed → computed`).

mod builder;

pub use builder::GeneratorBuilder;

use std::cell::{OnceCell, RefCell};
use std::fmt;

use crate::math::series::{cumulative_trapezoid, integer_lattice, linspace};
use crate::plot::{PlotStyle, Surface};
use crate::rng::SynthRng;
use crate::traits::{CurveFamily, DistributionFamily};
use crate::types::{Domain, Series};

/// A lazily evaluated synthetic dataset.
///
/// Constructed through [`GeneratorBuilder`] (usually via the family's
/// `builder()`). Single-threaded by design: the lazy cells use
/// single-thread interior mutability, so a generator is deliberately not
/// `Sync`.
///
/// # Examples
///
/// See the crate-level example in [`synth_core`](crate); concrete
/// families live in the models crate.
pub struct Generator<F: CurveFamily> {
    family: F,
    requested_samples: usize,
    domain: Domain,
    noise_amplitude: Option<f64>,
    allow_negative_y: bool,
    seed: u64,
    rng: RefCell<SynthRng>,
    x: OnceCell<Vec<f64>>,
    base_y: OnceCell<Vec<f64>>,
    noise: OnceCell<Vec<f64>>,
}

impl<F: CurveFamily> Generator<F> {
    pub(crate) fn from_resolved(
        family: F,
        requested_samples: usize,
        domain: Domain,
        noise_amplitude: Option<f64>,
        allow_negative_y: bool,
        rng: SynthRng,
    ) -> Self {
        let seed = rng.seed();
        Self {
            family,
            requested_samples,
            domain,
            noise_amplitude,
            allow_negative_y,
            seed,
            rng: RefCell::new(rng),
            x: OnceCell::new(),
            base_y: OnceCell::new(),
            noise: OnceCell::new(),
        }
    }

    /// The resolved family, exposing its frozen parameters.
    #[inline]
    pub fn family(&self) -> &F {
        &self.family
    }

    /// The sampling interval.
    #[inline]
    pub fn domain(&self) -> Domain {
        self.domain
    }

    /// The perturbation amplitude; `None` means noise is disabled.
    #[inline]
    pub fn noise_amplitude(&self) -> Option<f64> {
        self.noise_amplitude
    }

    /// The seed of the instance's RNG stream. Always known, including
    /// for entropy-seeded instances.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Effective sample count.
    ///
    /// For integer-support families this forces the `x` cache and
    /// reports the post-shrink count, so `samples() == x().len()`
    /// always holds.
    pub fn samples(&self) -> usize {
        self.x().len()
    }

    /// The x sequence: evenly spaced across the domain for continuous
    /// support, the deduplicated integer lattice for discrete support.
    ///
    /// Computed at most once per instance.
    pub fn x(&self) -> &[f64] {
        self.x.get_or_init(|| {
            if self.family.support().is_discrete() {
                integer_lattice(self.domain.min(), self.domain.max(), self.requested_samples)
            } else {
                linspace(self.domain.min(), self.domain.max(), self.requested_samples)
            }
        })
    }

    /// The perturbation sequence, one value per x sample, each uniform
    /// in `[-amplitude, +amplitude)`. All zeros when noise is disabled.
    ///
    /// Drawn at most once per instance; re-reading never redraws.
    pub fn noise(&self) -> &[f64] {
        let len = self.x().len();
        self.noise.get_or_init(|| match self.noise_amplitude {
            Some(amplitude) if amplitude > 0.0 => {
                let mut rng = self.rng.borrow_mut();
                (0..len).map(|_| amplitude * rng.signed_unit()).collect()
            }
            _ => vec![0.0; len],
        })
    }

    /// The noiseless function output over `x`. Computed at most once.
    pub fn base_y(&self) -> &[f64] {
        self.base_y.get_or_init(|| self.family.evaluate(self.x()))
    }

    /// The y sequence: `base_y + noise`, composed from the caches on
    /// each read. Families with non-negative support clamp values below
    /// zero to zero after composition, so noise can never push a
    /// density negative; `allow_negative_y` on the builder switches the
    /// clamp off.
    pub fn y(&self) -> Vec<f64> {
        let clamp = self.family.support().clamps_negative() && !self.allow_negative_y;
        self.base_y()
            .iter()
            .zip(self.noise())
            .map(|(&base, &noise)| {
                let value = base + noise;
                if clamp && value < 0.0 {
                    0.0
                } else {
                    value
                }
            })
            .collect()
    }

    /// The dataset as an owned `(x, y)` pair.
    pub fn data(&self) -> Series {
        Series::from_parts(self.x().to_vec(), self.y())
    }

    /// Draws the dataset onto an externally supplied surface.
    pub fn plot<S: Surface>(&self, surface: &mut S, style: &PlotStyle) {
        let series = self.data();
        series.plot(surface, style);
    }

    /// Requests a fresh surface from the plotting collaborator, draws
    /// the dataset onto it, and returns it.
    pub fn plot_new<S: Surface + Default>(&self, style: &PlotStyle) -> S {
        let mut surface = S::default();
        self.plot(&mut surface, style);
        surface
    }
}

impl<F: DistributionFamily> Generator<F> {
    /// Closed-form mean, `None` where the family adopts none.
    #[inline]
    pub fn mean(&self) -> Option<f64> {
        self.family.mean()
    }

    /// Closed-form median, `None` where the family adopts none.
    #[inline]
    pub fn median(&self) -> Option<f64> {
        self.family.median()
    }

    /// Closed-form mode, `None` where the family adopts none.
    #[inline]
    pub fn mode(&self) -> Option<f64> {
        self.family.mode()
    }

    /// Closed-form variance, `None` where the family adopts none.
    #[inline]
    pub fn variance(&self) -> Option<f64> {
        self.family.variance()
    }

    /// Closed-form skewness, `None` where the family adopts none.
    #[inline]
    pub fn skewness(&self) -> Option<f64> {
        self.family.skewness()
    }

    /// Draws `count` variates from the family's parametric law using
    /// this instance's RNG stream, not from the noisy curve.
    ///
    /// Returns `None` for families without native sampling.
    pub fn sample(&self, count: usize) -> Option<Vec<f64>> {
        self.family.draw(&mut self.rng.borrow_mut(), count)
    }

    /// Derives the cumulative transform: a new, independent series
    /// whose `y` is the running trapezoidal integral of this instance's
    /// `y` against `x`, anchored at zero.
    ///
    /// Reads the caches without altering them; the source generator is
    /// untouched.
    pub fn to_cumulative(&self) -> Series {
        let x = self.x().to_vec();
        let cumulative = cumulative_trapezoid(&x, &self.y());
        Series::from_parts(x, cumulative)
    }
}

impl<F: CurveFamily> fmt::Display for Generator<F> {
    /// Short form: `<Family : samples=N, noise_amplitude=A>`.
    ///
    /// The alternate form (`{:#}`) lists every constructor-visible
    /// attribute as `key=value`, sufficient to reconstruct the instance.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if f.alternate() {
            write!(f, "{}(", F::family_name())?;
            for (name, value) in self.family.parameters() {
                write!(f, "{}={}, ", name, value)?;
            }
            write!(
                f,
                "samples={}, domain={}, noise_amplitude={}, seed={})",
                self.requested_samples,
                self.domain,
                match self.noise_amplitude {
                    Some(amplitude) => amplitude.to_string(),
                    None => "disabled".to_string(),
                },
                self.seed
            )
        } else {
            write!(
                f,
                "<{} : samples={}, noise_amplitude={}>",
                F::family_name(),
                self.requested_samples,
                match self.noise_amplitude {
                    Some(amplitude) => amplitude.to_string(),
                    None => "disabled".to_string(),
                }
            )
        }
    }
}
