//! # synth_core: Foundation Layer for Synthetic Dataset Generation
//!
//! ## Layer 1 (Foundation) Role
//!
//! synth_core is the bottom layer of the workspace, providing:
//! - Seeded, reproducible random number generation (`rng`)
//! - Series math: evenly spaced samples, integer lattices, cumulative
//!   trapezoidal integration, log-gamma special functions (`math`)
//! - The family traits every concrete function/distribution implements
//!   (`traits`)
//! - The generic lazy generator and its validating builder (`generator`)
//! - Data types: `Domain`, `Series`, `ConfigError` (`types`)
//! - The plotting collaborator seam (`plot`)
//!
//! ## Zero Dependency Principle
//!
//! Layer 1 has no dependencies on other synth_* crates, with minimal
//! external dependencies:
//! - rand: seedable random number generation
//! - num-traits: traits for generic numerical computation
//! - thiserror: structured error types
//! - serde: serialisation support (optional)
//!
//! ## Usage Example
//!
//! ```rust
//! use synth_core::generator::GeneratorBuilder;
//! use synth_core::rng::SynthRng;
//! use synth_core::traits::{resolve_param, CurveFamily};
//! use synth_core::types::ConfigError;
//!
//! /// A straight line, resolved from optional inputs.
//! struct Line {
//!     slope: f64,
//!     intercept: f64,
//! }
//!
//! #[derive(Clone, Default)]
//! struct LineParams {
//!     slope: Option<f64>,
//!     intercept: Option<f64>,
//! }
//!
//! impl CurveFamily for Line {
//!     type Params = LineParams;
//!
//!     fn family_name() -> &'static str {
//!         "Line"
//!     }
//!
//!     fn resolve(params: Self::Params, rng: &mut SynthRng) -> Result<Self, ConfigError> {
//!         Ok(Self {
//!             slope: resolve_param("slope", params.slope, rng, |r| r.gen_uniform())?,
//!             intercept: resolve_param("intercept", params.intercept, rng, |r| r.gen_uniform())?,
//!         })
//!     }
//!
//!     fn default_domain(&self, _rng: &mut SynthRng) -> (f64, f64) {
//!         (0.0, 10.0)
//!     }
//!
//!     fn evaluate(&self, x: &[f64]) -> Vec<f64> {
//!         x.iter().map(|&v| self.slope * v + self.intercept).collect()
//!     }
//!
//!     fn parameters(&self) -> Vec<(String, f64)> {
//!         vec![
//!             ("slope".to_string(), self.slope),
//!             ("intercept".to_string(), self.intercept),
//!         ]
//!     }
//! }
//!
//! let line = GeneratorBuilder::<Line>::new()
//!     .samples(11)
//!     .domain(0.0, 10.0)
//!     .no_noise()
//!     .seed(42)
//!     .build()
//!     .unwrap();
//!
//! let series = line.data();
//! assert_eq!(series.len(), 11);
//! assert_eq!(series.x()[0], 0.0);
//! assert_eq!(series.x()[10], 10.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod generator;
pub mod math;
pub mod plot;
pub mod rng;
pub mod traits;
pub mod types;
