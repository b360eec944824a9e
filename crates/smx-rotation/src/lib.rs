//! Rotation types for SMX-RS.
//!
//! - [`Quaternion`] - unit-quaternion rotations with Hamilton products,
//!   normalized lerp and slerp
//! - [`Rotator`] - euler angles in degrees (roll around `x`, pitch
//!   around `y`, yaw around `z`)
//! - matrix builders ([`mat3_from_quaternion`], [`mat4_from_trs`], ...)
//!   composing rotations with scale and translation
//!
//! Conversions snap the sine and cosine of axis-aligned angles (0, 90,
//! 180, 270 degrees) to their exact values, so quarter-turn rotations
//! produce exact matrix entries.

#![warn(missing_docs)]

mod matrices;
mod quaternion;
mod rotator;
mod trig;

pub use matrices::{
    mat3_from_quaternion, mat3_from_rotator, mat3_from_scale, mat4_from_translation, mat4_from_trs,
};
pub use quaternion::Quaternion;
pub use rotator::Rotator;
