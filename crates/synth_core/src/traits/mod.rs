//! Extension-point traits for function and distribution families.
//!
//! Every concrete dataset type plugs into the generator through exactly
//! two seams: [`CurveFamily`] (parameter resolution plus the pure
//! closed-form formula) and, for probability distributions,
//! [`DistributionFamily`] (summary statistics and native sampling).
//! [`Support`] is the capability set that selects clamping and discrete
//! lattice behaviour at construction; there is no inheritance lattice.

mod family;

pub use family::{resolve_int_param, resolve_param, CurveFamily, DistributionFamily, Support};
