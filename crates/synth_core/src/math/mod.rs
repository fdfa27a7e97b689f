//! Shared numerical routines.
//!
//! - `series`: evenly spaced sampling, integer lattices, cumulative
//!   trapezoidal integration
//! - `special`: log-gamma family used by the discrete probability mass
//!   functions

pub mod series;
pub mod special;
