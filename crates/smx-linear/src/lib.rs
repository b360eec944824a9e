//! SIMD-backed vectors and square matrices for SMX-RS.
//!
//! - [`Vector`] - fixed-length vectors over `f32` or `i32`, 2 to 4
//!   components, with the usual aliases ([`Vec2`], [`Vec3`], [`Vec4`],
//!   [`IntVec2`], [`IntVec3`], [`IntVec4`])
//! - [`Matrix`] - square row-major `f32` matrices ([`Mat2`], [`Mat3`],
//!   [`Mat4`])
//!
//! All arithmetic routes through the 4-lane registers of `smx-simd`;
//! values shorter than four lanes are zero-padded in the unused lanes.
//! Division by a (nearly-)zero scalar or an all-zero vector is a no-op
//! that returns the dividend unchanged.

#![warn(missing_docs)]

mod matrix;
mod vector;

pub use matrix::{Mat2, Mat3, Mat4, Matrix};
pub use vector::{IntPoint, IntVec2, IntVec3, IntVec4, Vec2, Vec3, Vec4, Vector};
