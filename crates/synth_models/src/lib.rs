//! # synth_models (Layer 2): Concrete Dataset Families
//!
//! The leaf function and distribution families of the workspace. Each
//! family supplies only its parameter-resolution rules and closed-form
//! formula; everything else (lazy caching, noise, seeding, discrete
//! lattices, the cumulative transform) comes from the
//! [`synth_core`] generator contract.
//!
//! ## Families
//!
//! Curves (`curves`): [`Linear`], [`Exponential`], [`Logarithm`],
//! [`Polynomial`], [`Quadratic`], [`Cubic`], [`Sine`], [`Gaussian`].
//!
//! Distributions (`distributions`): [`Normal`], [`Poisson`],
//! [`Binomial`], [`Hypergeometric`], [`Geometric`],
//! [`NegativeBinomial`], [`Gamma`].
//!
//! ## Usage Example
//!
//! ```rust
//! use synth_core::traits::CurveFamily;
//! use synth_models::{Linear, LinearParams};
//!
//! let line = Linear::builder()
//!     .samples(6)
//!     .domain(0.0, 5.0)
//!     .no_noise()
//!     .params(LinearParams {
//!         slope: Some(2.5),
//!         intercept: Some(0.0),
//!     })
//!     .build()
//!     .unwrap();
//!
//! let series = line.data();
//! assert_eq!(series.y(), &[0.0, 2.5, 5.0, 7.5, 10.0, 12.5]);
//! ```
//!
//! [`Linear`]: curves::Linear
//! [`Exponential`]: curves::Exponential
//! [`Logarithm`]: curves::Logarithm
//! [`Polynomial`]: curves::Polynomial
//! [`Quadratic`]: curves::Quadratic
//! [`Cubic`]: curves::Cubic
//! [`Sine`]: curves::Sine
//! [`Gaussian`]: curves::Gaussian
//! [`Normal`]: distributions::Normal
//! [`Poisson`]: distributions::Poisson
//! [`Binomial`]: distributions::Binomial
//! [`Hypergeometric`]: distributions::Hypergeometric
//! [`Geometric`]: distributions::Geometric
//! [`NegativeBinomial`]: distributions::NegativeBinomial
//! [`Gamma`]: distributions::Gamma

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod curves;
pub mod distributions;

pub use curves::{
    Cubic, CubicParams, Exponential, ExponentialParams, Gaussian, GaussianParams, Linear,
    LinearParams, Logarithm, LogarithmParams, Polynomial, PolynomialParams, Quadratic,
    QuadraticParams, Sine, SineParams,
};
pub use distributions::{
    Binomial, BinomialParams, Gamma, GammaParams, Geometric, GeometricParams, Hypergeometric,
    HypergeometricParams, NegativeBinomial, NegativeBinomialParams, Normal, NormalParams, Poisson,
    PoissonParams,
};
