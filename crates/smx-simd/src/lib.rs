//! 128-bit 4-lane SIMD abstraction for SMX-RS.
//!
//! Every value type in the workspace (vectors, matrices, quaternions,
//! rotators) routes its arithmetic through a single 4-lane register
//! abstraction built on [`wide`]:
//!
//! - [`LaneOps`] - operations shared by float and integer lanes
//! - [`LaneScalar`] - scalar element types (`f32`, `i32`) and their lane
//! - [`LaneF32`] - `f32x4` lanes with swizzle/shuffle/hadd/inv_sqrt
//! - [`LaneI32`] - `i32x4` lanes with emulated division
//!
//! Values shorter than four lanes are zero-padded on load; the padding
//! lanes are discarded on store and never observable through the public
//! API.

#![warn(missing_docs)]

mod float;
mod int;
mod ops;

pub use float::LaneF32;
pub use int::LaneI32;
pub use ops::{LaneOps, LaneScalar};
