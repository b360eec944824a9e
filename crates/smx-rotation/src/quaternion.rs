//! Unit-quaternion rotations.

use core::hash::{Hash, Hasher};
use core::ops::{Mul, MulAssign};

use rand::Rng;
use rand::distributions::{Distribution, Standard};
use smx_core::{EPSILON, PI, atan2, rad_to_deg, square};
use smx_linear::{Mat3, Vec3};
use smx_simd::{LaneF32, LaneOps};

use crate::Rotator;
use crate::trig::sin_cos_deg;

/// A rotation as a quaternion `(x, y, z, w)` with `w` the scalar part.
///
/// Products follow the Hamilton convention: `a * b` rotates by `b`
/// first, then `a`. Interpolation renormalizes its result, so inputs
/// are expected to be unit length but small drift is absorbed.
#[derive(Clone, Copy, Debug)]
#[repr(C, align(16))]
pub struct Quaternion {
    /// Vector part `x`.
    pub x: f32,
    /// Vector part `y`.
    pub y: f32,
    /// Vector part `z`.
    pub z: f32,
    /// Scalar part.
    pub w: f32,
}

impl Quaternion {
    /// The no-rotation quaternion.
    pub const IDENTITY: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    /// Quaternion from raw components.
    #[inline]
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    #[inline]
    fn lane(self) -> LaneF32 {
        LaneF32::from_array([self.x, self.y, self.z, self.w])
    }

    #[inline]
    fn from_lane(lane: LaneF32) -> Self {
        let [x, y, z, w] = lane.to_array();
        Self::new(x, y, z, w)
    }

    /// Scale the lane back to unit length.
    #[inline]
    fn renormalized(lane: LaneF32) -> Self {
        let size = lane * lane;
        let size = size.hadd(size);
        let size = size.hadd(size);
        Self::from_lane(lane * size.inv_sqrt(2))
    }

    /// The rotational inverse for unit quaternions.
    #[inline]
    pub fn conjugate(self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// Four-component dot product.
    #[inline]
    pub fn dot(self, rhs: Self) -> f32 {
        (self.lane() * rhs.lane()).reduce_add()
    }

    /// Whether every component is within [`EPSILON`] of `rhs`.
    #[inline]
    pub fn is_nearly_equal(self, rhs: Self) -> bool {
        self.is_nearly_equal_within(rhs, EPSILON)
    }

    /// Whether every component is within `tolerance` of `rhs`.
    #[inline]
    pub fn is_nearly_equal_within(self, rhs: Self, tolerance: f32) -> bool {
        let diff = (self.lane() - rhs.lane()).abs();
        diff.cmp_le(LaneF32::splat(tolerance)).move_mask() == 0xF
    }

    /// Component-wise linear interpolation, renormalized.
    ///
    /// Faster than [`slerp`](Self::slerp) but the angular velocity is
    /// not constant across `t`.
    pub fn lerp(a: Self, b: Self, t: f32) -> Self {
        let la = a.lane();
        let lb = b.lane();
        Self::renormalized(la + (lb - la) * LaneF32::splat(t))
    }

    /// Spherical linear interpolation along the shorter arc,
    /// renormalized. Falls back to linear interpolation when the inputs
    /// are nearly parallel.
    pub fn slerp(a: Self, b: Self, t: f32) -> Self {
        let raw_cos = a.dot(b);
        let cos = raw_cos.abs();

        let (scale_a, scale_b) = if cos < 0.9999 {
            let omega = cos.acos();
            let inv_sin = 1.0 / omega.sin();
            (
                ((1.0 - t) * omega).sin() * inv_sin,
                (t * omega).sin() * inv_sin,
            )
        } else {
            (1.0 - t, t)
        };

        let scale_b = if raw_cos >= 0.0 { scale_b } else { -scale_b };
        let mixed = a.lane() * LaneF32::splat(scale_a) + b.lane() * LaneF32::splat(scale_b);
        Self::renormalized(mixed)
    }

    /// Quaternion matching a [`Rotator`]'s orientation.
    pub fn from_rotator(rot: Rotator) -> Self {
        let half = rot * 0.5;
        let (sy, cy) = sin_cos_deg(half.yaw);
        let (sp, cp) = sin_cos_deg(half.pitch);
        let (sr, cr) = sin_cos_deg(half.roll);

        Self::new(
            sr * cp * cy - cr * sp * sy,
            cr * sp * cy + sr * cp * sy,
            cr * cp * sy - sr * sp * cy,
            cr * cp * cy + sr * sp * sy,
        )
    }

    /// Quaternion from euler angles in degrees.
    #[inline]
    pub fn from_euler(roll: f32, pitch: f32, yaw: f32) -> Self {
        Self::from_rotator(Rotator::new(roll, pitch, yaw))
    }

    /// Quaternion rotating by `angle` radians around `axis`.
    ///
    /// The axis is expected to be unit length.
    pub fn from_axis_angle(axis: Vec3, angle: f32) -> Self {
        let half = angle * 0.5;
        let v = axis * half.sin();
        Self::new(v.x(), v.y(), v.z(), half.cos())
    }

    /// Quaternion from a pure rotation matrix.
    pub fn from_mat3(m: Mat3) -> Self {
        let trace = m[0][0] + m[1][1] + m[2][2];

        if trace > 0.0 {
            let s = smx_core::sqrt(trace + 1.0);
            let w = s * 0.5;
            let s = 0.5 / s;
            Self::new(
                (m[2][1] - m[1][2]) * s,
                (m[0][2] - m[2][0]) * s,
                (m[1][0] - m[0][1]) * s,
                w,
            )
        } else {
            // Pick the dominant diagonal element to keep s away from zero.
            let i = if m[0][0] < m[1][1] {
                if m[1][1] < m[2][2] { 2 } else { 1 }
            } else if m[0][0] < m[2][2] {
                2
            } else {
                0
            };
            let j = (i + 1) % 3;
            let k = (i + 2) % 3;

            let s = smx_core::sqrt(m[i][i] - m[j][j] - m[k][k] + 1.0);
            let mut tmp = [0.0f32; 4];
            tmp[i] = s * 0.5;
            let s = 0.5 / s;
            tmp[3] = (m[k][j] - m[j][k]) * s;
            tmp[j] = (m[j][i] + m[i][j]) * s;
            tmp[k] = (m[k][i] + m[i][k]) * s;
            Self::new(tmp[0], tmp[1], tmp[2], tmp[3])
        }
    }

    /// Quaternion with every component drawn from `dist`.
    ///
    /// The result is not normalized.
    pub fn sample_from<R, D>(rng: &mut R, dist: &D) -> Self
    where
        R: Rng + ?Sized,
        D: Distribution<f32>,
    {
        Self::new(
            rng.sample(dist),
            rng.sample(dist),
            rng.sample(dist),
            rng.sample(dist),
        )
    }

    /// Convert to a [`glam::Quat`].
    #[inline]
    pub fn to_glam(self) -> glam::Quat {
        glam::Quat::from_xyzw(self.x, self.y, self.z, self.w)
    }

    /// Convert from a [`glam::Quat`].
    #[inline]
    pub fn from_glam(q: glam::Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

/// Euler angles (degrees) matching the quaternion's orientation.
///
/// At gimbal lock (pitch of +-90 degrees) only the combined roll/yaw
/// turn is observable; roll is reported as zero and the whole turn
/// goes into yaw.
pub(crate) fn rotator_from_quaternion(quat: Quaternion) -> Rotator {
    const THRESHOLD: f32 = 0.99999;

    let test = -2.0 * (quat.x * quat.z - quat.w * quat.y);
    if test.abs() >= THRESHOLD {
        let sign = smx_core::sign(test);
        // With pitch pinned at +-90 the z/w pair carries the remaining
        // turn: half of yaw - roll at +90, half of yaw + roll at -90.
        Rotator::new(
            0.0,
            rad_to_deg(PI * 0.5 * sign),
            2.0 * rad_to_deg(atan2(quat.z, quat.w)),
        )
    } else {
        let sqx = square(quat.x);
        let sqy = square(quat.y);
        let sqz = square(quat.z);
        let sqw = square(quat.w);

        Rotator::new(
            rad_to_deg(atan2(
                2.0 * (quat.y * quat.z + quat.w * quat.x),
                sqw - sqx - sqy + sqz,
            )),
            rad_to_deg(test.asin()),
            rad_to_deg(atan2(
                2.0 * (quat.x * quat.y + quat.w * quat.z),
                sqw + sqx - sqy - sqz,
            )),
        )
    }
}

impl Default for Quaternion {
    #[inline]
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl PartialEq for Quaternion {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.lane().cmp_eq(other.lane()).move_mask() == 0xF
    }
}

impl Mul for Quaternion {
    type Output = Self;

    /// Hamilton product via one broadcast per component and per-term
    /// sign masks.
    fn mul(self, rhs: Self) -> Self {
        let sign0 = LaneF32::from_array([1.0, -1.0, 1.0, -1.0]);
        let sign1 = LaneF32::from_array([1.0, 1.0, -1.0, -1.0]);
        let sign2 = LaneF32::from_array([-1.0, 1.0, 1.0, -1.0]);

        let l = self.lane();
        let r = rhs.lane();

        let mut result = l.replicate::<3>() * r;
        result = result + l.replicate::<0>() * r.swizzle::<3, 2, 1, 0>() * sign0;
        result = result + l.replicate::<1>() * r.swizzle::<2, 3, 0, 1>() * sign1;
        result = result + l.replicate::<2>() * r.swizzle::<1, 0, 3, 2>() * sign2;
        Self::from_lane(result)
    }
}

impl MulAssign for Quaternion {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl Hash for Quaternion {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.x.to_bits());
        state.write_u32(self.y.to_bits());
        state.write_u32(self.z.to_bits());
        state.write_u32(self.w.to_bits());
    }
}

impl Distribution<Quaternion> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Quaternion {
        Quaternion::sample_from(rng, &Standard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SQRT_HALF: f32 = 0.70710678;

    #[test]
    fn identity_is_neutral() {
        let q = Quaternion::new(0.0, 0.0, SQRT_HALF, SQRT_HALF);
        assert_eq!(q * Quaternion::IDENTITY, q);
        assert_eq!(Quaternion::IDENTITY * q, q);
        assert_eq!(Quaternion::default(), Quaternion::IDENTITY);
    }

    #[test]
    fn product_matches_fixture() {
        let a = Quaternion::new(0.0, 1.0, 0.0, 1.0);
        let b = Quaternion::new(0.5, 0.5, 0.75, 1.0);
        assert_eq!(a * b, Quaternion::new(1.25, 1.5, 0.25, 0.5));

        let mut c = a;
        c *= b;
        assert_eq!(c, a * b);
    }

    #[test]
    fn conjugate_inverts_unit_rotations() {
        let q = Quaternion::new(0.0, 0.0, SQRT_HALF, SQRT_HALF);
        assert!((q * q.conjugate()).is_nearly_equal_within(Quaternion::IDENTITY, 1e-6));
    }

    #[test]
    fn dot_product() {
        let a = Quaternion::new(0.0, 1.0, 0.0, 1.0);
        let b = Quaternion::new(0.5, 0.5, 0.75, 1.0);
        assert_eq!(a.dot(b), 1.5);
    }

    #[test]
    fn lerp_renormalizes() {
        let a = Quaternion::new(0.0, 1.0, 0.0, 1.0);
        let b = Quaternion::new(0.5, 0.5, 0.75, 1.0);
        let mid = Quaternion::lerp(a, b, 0.5);
        let expected = Quaternion::new(0.18814417, 0.56443252, 0.28221626, 0.75257669);
        assert!(mid.is_nearly_equal_within(expected, 1e-5));
        assert!(smx_core::is_nearly_equal_within(mid.dot(mid), 1.0, 1e-4));
    }

    #[test]
    fn slerp_of_nearly_parallel_inputs_takes_the_linear_path() {
        let a = Quaternion::new(0.0, 1.0, 0.0, 1.0);
        let b = Quaternion::new(0.5, 0.5, 0.75, 1.0);
        let mid = Quaternion::slerp(a, b, 0.5);
        assert!(mid.is_nearly_equal_within(Quaternion::lerp(a, b, 0.5), 1e-5));
    }

    #[test]
    fn slerp_halves_a_quarter_turn() {
        let quarter = Quaternion::new(0.0, 0.0, SQRT_HALF, SQRT_HALF);
        let mid = Quaternion::slerp(Quaternion::IDENTITY, quarter, 0.5);
        // sin/cos of 22.5 degrees.
        let expected = Quaternion::new(0.0, 0.0, 0.38268343, 0.92387953);
        assert!(mid.is_nearly_equal_within(expected, 1e-5));
    }

    #[test]
    fn slerp_takes_the_shorter_arc() {
        let quarter = Quaternion::new(0.0, 0.0, SQRT_HALF, SQRT_HALF);
        let negated = Quaternion::new(0.0, 0.0, -SQRT_HALF, -SQRT_HALF);
        let mid = Quaternion::slerp(Quaternion::IDENTITY, negated, 0.5);
        let reference = Quaternion::slerp(Quaternion::IDENTITY, quarter, 0.5);
        assert!(mid.is_nearly_equal_within(reference, 1e-5));
    }

    #[test]
    fn axis_angle_around_z() {
        let q = Quaternion::from_axis_angle(Vec3::FORWARD, PI / 2.0);
        assert!(q.is_nearly_equal_within(
            Quaternion::new(0.0, 0.0, SQRT_HALF, SQRT_HALF),
            1e-6
        ));
    }

    #[test]
    fn hashes_follow_equality() {
        use smx_core::hash::hash_one;

        let q = Quaternion::new(0.0, 1.0, 0.0, 1.0);
        assert_eq!(hash_one(&q), hash_one(&Quaternion::new(0.0, 1.0, 0.0, 1.0)));
        assert_ne!(hash_one(&q), hash_one(&Quaternion::IDENTITY));
    }
}
