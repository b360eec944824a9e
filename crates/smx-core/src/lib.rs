//! Scalar math utilities and hashing for SMX-RS.
//!
//! - utilities - comparisons, interpolation, fast reciprocal square
//!   root, angle conversions and float-to-int rounding (re-exported at
//!   the crate root)
//! - [`hash`] - FNV-1a hashing over raw component bytes

#![warn(missing_docs)]

pub mod hash;
mod util;

pub use util::*;
