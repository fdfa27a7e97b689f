//! Probability distribution families.
//!
//! Each family's curve is its density or mass function, evaluated in
//! log space where factorials appear. Discrete families declare
//! `Support::NonNegativeInteger` and inherit lattice sampling and count
//! shrinking from the generator; all non-negative supports clamp
//! composed `y` below zero.
//!
//! Conventions fixed across the module:
//! - Geometric counts trials (support starts at 1).
//! - NegativeBinomial counts failures before the `r`-th success
//!   (support starts at 0).
//! - Gamma is parameterised by shape and scale.

mod binomial;
mod gamma;
mod geometric;
mod hypergeometric;
mod negative_binomial;
mod normal;
mod poisson;

pub use binomial::{Binomial, BinomialParams};
pub use gamma::{Gamma, GammaParams};
pub use geometric::{Geometric, GeometricParams};
pub use hypergeometric::{Hypergeometric, HypergeometricParams};
pub use negative_binomial::{NegativeBinomial, NegativeBinomialParams};
pub use normal::{Normal, NormalParams};
pub use poisson::{Poisson, PoissonParams};
