//! Euler angles in degrees.

use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use rand::Rng;
use rand::distributions::{Distribution, Standard};
use smx_core::EPSILON;
use smx_linear::Vec3;
use smx_simd::{LaneF32, LaneOps};

use crate::Quaternion;
use crate::quaternion::rotator_from_quaternion;

/// Euler angles in degrees: roll around `x`, pitch around `y`, yaw
/// around `z`.
///
/// Angles are not wrapped; `Rotator::new(0.0, 0.0, 450.0)` and
/// `Rotator::new(0.0, 0.0, 90.0)` describe the same orientation but
/// compare unequal.
#[derive(Clone, Copy, Debug)]
#[repr(C, align(16))]
pub struct Rotator {
    /// Rotation around `x` in degrees.
    pub roll: f32,
    /// Rotation around `y` in degrees.
    pub pitch: f32,
    /// Rotation around `z` in degrees.
    pub yaw: f32,
}

impl Rotator {
    /// No rotation.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Rotator from roll, pitch and yaw in degrees.
    #[inline]
    pub const fn new(roll: f32, pitch: f32, yaw: f32) -> Self {
        Self { roll, pitch, yaw }
    }

    /// Rotator with the same angle on every axis.
    #[inline]
    pub const fn splat(angle: f32) -> Self {
        Self::new(angle, angle, angle)
    }

    /// Rotator from a vector holding `(roll, pitch, yaw)`.
    #[inline]
    pub fn from_vec3(v: Vec3) -> Self {
        Self::new(v.x(), v.y(), v.z())
    }

    /// The angles as a `(roll, pitch, yaw)` vector.
    #[inline]
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.roll, self.pitch, self.yaw)
    }

    /// Euler angles matching the quaternion's orientation.
    ///
    /// At gimbal lock (pitch of +-90 degrees) roll is reported as zero
    /// and the turn goes entirely into yaw.
    #[inline]
    pub fn from_quaternion(quat: Quaternion) -> Self {
        rotator_from_quaternion(quat)
    }

    #[inline]
    fn lane(self) -> LaneF32 {
        LaneF32::load(&[self.roll, self.pitch, self.yaw])
    }

    #[inline]
    fn from_lane(lane: LaneF32) -> Self {
        let mut out = [0.0; 3];
        lane.store(&mut out);
        Self::new(out[0], out[1], out[2])
    }

    /// Whether every angle is within [`EPSILON`] of `rhs`.
    #[inline]
    pub fn is_nearly_equal(self, rhs: Self) -> bool {
        self.is_nearly_equal_within(rhs, EPSILON)
    }

    /// Whether every angle is within `tolerance` of `rhs`.
    #[inline]
    pub fn is_nearly_equal_within(self, rhs: Self, tolerance: f32) -> bool {
        let diff = (self.lane() - rhs.lane()).abs();
        diff.cmp_le(LaneF32::splat(tolerance)).move_mask() == 0xF
    }

    /// Whether every angle is within [`EPSILON`] of zero.
    #[inline]
    pub fn is_nearly_zero(self) -> bool {
        self.is_nearly_equal_within(Self::ZERO, EPSILON)
    }

    /// Whether every angle is within `tolerance` of zero.
    #[inline]
    pub fn is_nearly_zero_within(self, tolerance: f32) -> bool {
        self.is_nearly_equal_within(Self::ZERO, tolerance)
    }

    /// Rotator with every angle drawn from `dist`.
    pub fn sample_from<R, D>(rng: &mut R, dist: &D) -> Self
    where
        R: Rng + ?Sized,
        D: Distribution<f32>,
    {
        Self::new(rng.sample(dist), rng.sample(dist), rng.sample(dist))
    }
}

impl Default for Rotator {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl PartialEq for Rotator {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.lane().cmp_eq(other.lane()).move_mask() == 0xF
    }
}

impl Add for Rotator {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_lane(self.lane() + rhs.lane())
    }
}

impl Sub for Rotator {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_lane(self.lane() - rhs.lane())
    }
}

impl Mul<f32> for Rotator {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: f32) -> Self {
        Self::from_lane(self.lane() * LaneF32::splat(rhs))
    }
}

impl Mul<Rotator> for f32 {
    type Output = Rotator;

    #[inline]
    fn mul(self, rhs: Rotator) -> Rotator {
        rhs * self
    }
}

impl Div<f32> for Rotator {
    type Output = Self;

    /// Division by a nearly-zero scalar is a no-op.
    #[inline]
    fn div(self, rhs: f32) -> Self {
        if smx_core::is_nearly_zero(rhs) {
            return self;
        }
        Self::from_lane(self.lane() / LaneF32::splat(rhs))
    }
}

impl Neg for Rotator {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::ZERO - self
    }
}

impl AddAssign for Rotator {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Rotator {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl MulAssign<f32> for Rotator {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl DivAssign<f32> for Rotator {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl Hash for Rotator {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.roll.to_bits());
        state.write_u32(self.pitch.to_bits());
        state.write_u32(self.yaw.to_bits());
    }
}

impl Distribution<Rotator> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Rotator {
        Rotator::sample_from(rng, &Standard)
    }
}
