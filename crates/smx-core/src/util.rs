//! Scalar comparisons, interpolation and rounding.

use smx_simd::{LaneF32, LaneOps};

/// Archimedes' constant.
pub const PI: f32 = core::f32::consts::PI;

/// Default tolerance for near-equality and divide guards: `f32`
/// machine epsilon.
pub const EPSILON: f32 = f32::EPSILON;

/// The smaller of two values.
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if b < a { b } else { a }
}

/// The larger of two values.
#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if b > a { b } else { a }
}

/// The smallest value in a slice, or `None` when it is empty.
pub fn min_of<T: PartialOrd + Copy>(values: &[T]) -> Option<T> {
    values.iter().copied().reduce(min)
}

/// The largest value in a slice, or `None` when it is empty.
pub fn max_of<T: PartialOrd + Copy>(values: &[T]) -> Option<T> {
    values.iter().copied().reduce(max)
}

/// `n` limited to `[lo, hi]`. Bounds are not validated.
#[inline]
pub fn clamp<T: PartialOrd>(n: T, lo: T, hi: T) -> T {
    max(min(n, hi), lo)
}

/// Absolute value.
#[inline]
pub fn abs(n: f32) -> f32 {
    n.abs()
}

/// `1.0` for non-negative values, `-1.0` otherwise.
#[inline]
pub fn sign(n: f32) -> f32 {
    if n >= 0.0 { 1.0 } else { -1.0 }
}

/// `n * n`.
#[inline]
pub fn square<T: core::ops::Mul<Output = T> + Copy>(n: T) -> T {
    n * n
}

/// Degrees to radians.
#[inline]
pub fn deg_to_rad(deg: f32) -> f32 {
    deg * (PI / 180.0)
}

/// Radians to degrees.
#[inline]
pub fn rad_to_deg(rad: f32) -> f32 {
    rad * (180.0 / PI)
}

/// Sine of an angle in radians.
#[inline]
pub fn sin(rad: f32) -> f32 {
    rad.sin()
}

/// Cosine of an angle in radians.
#[inline]
pub fn cos(rad: f32) -> f32 {
    rad.cos()
}

/// Tangent of an angle in radians.
#[inline]
pub fn tan(rad: f32) -> f32 {
    rad.tan()
}

/// Arcsine in radians.
#[inline]
pub fn asin(n: f32) -> f32 {
    n.asin()
}

/// Arccosine in radians.
#[inline]
pub fn acos(n: f32) -> f32 {
    n.acos()
}

/// Arctangent in radians.
#[inline]
pub fn atan(n: f32) -> f32 {
    n.atan()
}

/// Four-quadrant arctangent of `y / x` in radians.
#[inline]
pub fn atan2(y: f32, x: f32) -> f32 {
    y.atan2(x)
}

/// Floating-point remainder of `a / b`, `0.0` when `b` is nearly zero.
#[inline]
pub fn fmod(a: f32, b: f32) -> f32 {
    if is_nearly_zero(b) { 0.0 } else { a % b }
}

/// Whether `a` and `b` differ by at most [`EPSILON`].
#[inline]
pub fn is_nearly_equal(a: f32, b: f32) -> bool {
    is_nearly_equal_within(a, b, EPSILON)
}

/// Whether `a` and `b` differ by at most `tolerance`.
#[inline]
pub fn is_nearly_equal_within(a: f32, b: f32, tolerance: f32) -> bool {
    (a - b).abs() <= tolerance
}

/// Whether `n` is within [`EPSILON`] of zero.
#[inline]
pub fn is_nearly_zero(n: f32) -> bool {
    n.abs() <= EPSILON
}

/// Whether `n` is within `tolerance` of zero.
#[inline]
pub fn is_nearly_zero_within(n: f32, tolerance: f32) -> bool {
    n.abs() <= tolerance
}

/// Where `value` falls in `[lo, hi]` as a fraction, unclamped.
#[inline]
pub fn range_pct(value: f32, lo: f32, hi: f32) -> f32 {
    (value - lo) / (hi - lo)
}

/// Linear interpolation from `a` to `b` by `t`, unclamped.
#[inline]
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// `1 / sqrt(n)` via the hardware estimate refined by `iterations`
/// Newton-Raphson rounds.
#[inline]
pub fn inv_sqrt_approx(n: f32, iterations: u32) -> f32 {
    LaneF32::splat(n).inv_sqrt(iterations).first()
}

/// `1 / sqrt(n)` accurate to within `f32` epsilon for normal inputs.
#[inline]
pub fn inv_sqrt(n: f32) -> f32 {
    inv_sqrt_approx(n, 2)
}

/// Square root as `n * inv_sqrt(n)`, `0.0` for nearly-zero inputs.
#[inline]
pub fn sqrt(n: f32) -> f32 {
    if is_nearly_zero(n) { 0.0 } else { n * inv_sqrt(n) }
}

/// Truncation toward zero.
#[inline]
pub fn trunc_to_int(n: f32) -> i32 {
    n as i32
}

/// Largest integer not greater than `n`.
#[inline]
pub fn floor_to_int(n: f32) -> i32 {
    n.floor() as i32
}

/// Smallest integer not less than `n`.
#[inline]
pub fn ceil_to_int(n: f32) -> i32 {
    n.ceil() as i32
}

/// Nearest integer, halfway cases away from zero.
#[inline]
pub fn round_to_int(n: f32) -> i32 {
    n.round() as i32
}
