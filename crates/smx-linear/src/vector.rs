//! Fixed-length vectors over SIMD lanes.

use core::hash::{Hash, Hasher};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use rand::Rng;
use rand::distributions::{Distribution, Standard};
use smx_core::EPSILON;
use smx_simd::{LaneF32, LaneOps, LaneScalar};

/// A fixed-length vector of 2 to 4 components.
///
/// `T` is `f32` or `i32`. All arithmetic runs on a 4-lane register with
/// the unused high lanes zeroed. Equality is exact and lane-wise;
/// floating-point vectors additionally offer
/// [`is_nearly_equal`](Vector::is_nearly_equal).
#[derive(Clone, Copy, Debug)]
#[repr(C, align(16))]
pub struct Vector<T: LaneScalar, const L: usize> {
    data: [T; L],
}

/// Two-component `f32` vector.
pub type Vec2 = Vector<f32, 2>;
/// Three-component `f32` vector.
pub type Vec3 = Vector<f32, 3>;
/// Four-component `f32` vector.
pub type Vec4 = Vector<f32, 4>;

/// Two-component `i32` vector, also used for screen-space points.
pub type IntVec2 = Vector<i32, 2>;
/// Grid coordinate pair.
pub type IntPoint = IntVec2;
/// Three-component `i32` vector.
pub type IntVec3 = Vector<i32, 3>;
/// Four-component `i32` vector.
pub type IntVec4 = Vector<i32, 4>;

impl<T: LaneScalar, const L: usize> Vector<T, L> {
    /// All components zero.
    pub const ZERO: Self = Self { data: [T::ZERO; L] };
    /// All components one.
    pub const ONE: Self = Self { data: [T::ONE; L] };

    /// Vector from a component array.
    #[inline]
    pub const fn from_array(data: [T; L]) -> Self {
        Self { data }
    }

    /// The components as an array.
    #[inline]
    pub fn to_array(self) -> [T; L] {
        self.data
    }

    /// The components as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// The components as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Vector with every component set to `n`.
    #[inline]
    pub fn splat(n: T) -> Self {
        Self { data: [n; L] }
    }

    #[inline]
    fn lane(self) -> T::Lane {
        T::Lane::load(&self.data)
    }

    #[inline]
    fn from_lane(lane: T::Lane) -> Self {
        let mut out = Self::ZERO;
        lane.store(&mut out.data);
        out
    }

    /// First component.
    #[inline]
    pub fn x(self) -> T {
        self.data[0]
    }

    /// Second component.
    #[inline]
    pub fn y(self) -> T {
        self.data[1]
    }

    /// Dot product.
    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        (self.lane() * rhs.lane()).reduce_add()
    }

    /// Dot product with itself.
    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    /// Component-wise minimum.
    #[inline]
    pub fn min(self, rhs: Self) -> Self {
        Self::from_lane(self.lane().min(rhs.lane()))
    }

    /// Component-wise maximum.
    #[inline]
    pub fn max(self, rhs: Self) -> Self {
        Self::from_lane(self.lane().max(rhs.lane()))
    }

    /// Component-wise clamp. Swapped bounds are reordered per component.
    #[inline]
    pub fn clamp(self, lo: Self, hi: Self) -> Self {
        let a = lo.lane();
        let b = hi.lane();
        let clamped = self.lane().max(a.min(b)).min(a.max(b));
        Self::from_lane(clamped)
    }

    /// Component-wise absolute value.
    #[inline]
    pub fn abs(self) -> Self {
        Self::from_lane(self.lane().abs())
    }

    /// Component-wise sign: `1`, `-1`, or `0` for zero components.
    #[inline]
    pub fn sign(self) -> Self {
        Self::from_lane(self.lane().sign())
    }

    /// Smallest component.
    #[inline]
    pub fn min_element(self) -> T {
        let mut out = self.data[0];
        for i in 1..L {
            if self.data[i] < out {
                out = self.data[i];
            }
        }
        out
    }

    /// Largest component.
    #[inline]
    pub fn max_element(self) -> T {
        let mut out = self.data[0];
        for i in 1..L {
            if out < self.data[i] {
                out = self.data[i];
            }
        }
        out
    }

    /// Vector with every component drawn from `dist`.
    pub fn sample_from<R, D>(rng: &mut R, dist: &D) -> Self
    where
        R: Rng + ?Sized,
        D: Distribution<T>,
    {
        let mut out = Self::ZERO;
        for slot in &mut out.data {
            *slot = rng.sample(dist);
        }
        out
    }
}

impl<T: LaneScalar> Vector<T, 2> {
    /// Vector from two components.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { data: [x, y] }
    }

    /// Unit vector along `+x`.
    pub const RIGHT: Self = Self::new(T::ONE, T::ZERO);
    /// Unit vector along `-x`.
    pub const LEFT: Self = Self::new(T::NEG_ONE, T::ZERO);
    /// Unit vector along `+y`.
    pub const UP: Self = Self::new(T::ZERO, T::ONE);
    /// Unit vector along `-y`.
    pub const DOWN: Self = Self::new(T::ZERO, T::NEG_ONE);

    /// Overwrite both components.
    #[inline]
    pub fn set(&mut self, x: T, y: T) {
        self.data = [x, y];
    }

    /// Append a third component.
    #[inline]
    pub fn extend(self, z: T) -> Vector<T, 3> {
        Vector::<T, 3>::new(self.data[0], self.data[1], z)
    }
}

impl<T: LaneScalar> Vector<T, 3> {
    /// Vector from three components.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { data: [x, y, z] }
    }

    /// Unit vector along `+x`.
    pub const RIGHT: Self = Self::new(T::ONE, T::ZERO, T::ZERO);
    /// Unit vector along `-x`.
    pub const LEFT: Self = Self::new(T::NEG_ONE, T::ZERO, T::ZERO);
    /// Unit vector along `+y`.
    pub const UP: Self = Self::new(T::ZERO, T::ONE, T::ZERO);
    /// Unit vector along `-y`.
    pub const DOWN: Self = Self::new(T::ZERO, T::NEG_ONE, T::ZERO);
    /// Unit vector along `+z`.
    pub const FORWARD: Self = Self::new(T::ZERO, T::ZERO, T::ONE);
    /// Unit vector along `-z`.
    pub const BACKWARD: Self = Self::new(T::ZERO, T::ZERO, T::NEG_ONE);

    /// Third component.
    #[inline]
    pub fn z(self) -> T {
        self.data[2]
    }

    /// Overwrite all three components.
    #[inline]
    pub fn set(&mut self, x: T, y: T, z: T) {
        self.data = [x, y, z];
    }

    /// Drop the third component.
    #[inline]
    pub fn truncate(self) -> Vector<T, 2> {
        Vector::<T, 2>::new(self.data[0], self.data[1])
    }

    /// Append a fourth component.
    #[inline]
    pub fn extend(self, w: T) -> Vector<T, 4> {
        Vector::<T, 4>::new(self.data[0], self.data[1], self.data[2], w)
    }
}

impl<T: LaneScalar> Vector<T, 4> {
    /// Vector from four components.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { data: [x, y, z, w] }
    }

    /// Third component.
    #[inline]
    pub fn z(self) -> T {
        self.data[2]
    }

    /// Fourth component.
    #[inline]
    pub fn w(self) -> T {
        self.data[3]
    }

    /// Overwrite all four components.
    #[inline]
    pub fn set(&mut self, x: T, y: T, z: T, w: T) {
        self.data = [x, y, z, w];
    }

    /// Drop the fourth component.
    #[inline]
    pub fn truncate(self) -> Vector<T, 3> {
        Vector::<T, 3>::new(self.data[0], self.data[1], self.data[2])
    }
}

impl Vec3 {
    /// Cross product, built from two swizzled lane products.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        let a = self.lane();
        let b = rhs.lane();
        let left = a.swizzle::<1, 2, 0, 3>() * b.swizzle::<2, 0, 1, 3>();
        let right = a.swizzle::<2, 0, 1, 3>() * b.swizzle::<1, 2, 0, 3>();
        Self::from_lane(left - right)
    }
}

impl<const L: usize> Vector<f32, L> {
    /// Euclidean length.
    #[inline]
    pub fn length(self) -> f32 {
        smx_core::sqrt(self.length_squared())
    }

    /// Distance to another point.
    #[inline]
    pub fn distance(self, rhs: Self) -> f32 {
        (rhs - self).length()
    }

    /// Squared distance to another point.
    #[inline]
    pub fn distance_squared(self, rhs: Self) -> f32 {
        (rhs - self).length_squared()
    }

    /// Scale to unit length in place.
    ///
    /// Returns `false` and leaves the vector unchanged when its length
    /// is nearly zero.
    #[inline]
    pub fn normalize(&mut self) -> bool {
        let len_sq = self.length_squared();
        if smx_core::is_nearly_zero(len_sq) {
            return false;
        }
        *self = *self * smx_core::inv_sqrt(len_sq);
        true
    }

    /// Unit-length copy, or [`Vector::ZERO`] when the length is nearly zero.
    #[inline]
    pub fn normal(self) -> Self {
        let mut out = self;
        if out.normalize() { out } else { Self::ZERO }
    }

    /// Linear interpolation toward `rhs` by `t`, unclamped.
    #[inline]
    pub fn lerp(self, rhs: Self, t: f32) -> Self {
        self + (rhs - self) * t
    }

    /// Component-wise fraction of `self` within `[lo, hi]`, unclamped.
    #[inline]
    pub fn range_pct(self, lo: Self, hi: Self) -> Self {
        Self::from_lane((self - lo).lane() / (hi - lo).lane())
    }

    /// Whether every component is within [`EPSILON`] of `rhs`.
    #[inline]
    pub fn is_nearly_equal(self, rhs: Self) -> bool {
        self.is_nearly_equal_within(rhs, EPSILON)
    }

    /// Whether every component is within `tolerance` of `rhs`.
    #[inline]
    pub fn is_nearly_equal_within(self, rhs: Self, tolerance: f32) -> bool {
        let diff = (self - rhs).lane().abs();
        diff.cmp_le(LaneF32::splat(tolerance)).move_mask() == 0xF
    }

    /// Whether every component is within [`EPSILON`] of zero.
    #[inline]
    pub fn is_nearly_zero(self) -> bool {
        self.is_nearly_equal_within(Self::ZERO, EPSILON)
    }

    /// Whether every component is within `tolerance` of zero.
    #[inline]
    pub fn is_nearly_zero_within(self, tolerance: f32) -> bool {
        self.is_nearly_equal_within(Self::ZERO, tolerance)
    }
}

impl<const L: usize> From<Vector<i32, L>> for Vector<f32, L> {
    #[inline]
    fn from(v: Vector<i32, L>) -> Self {
        let mut out = Self::ZERO;
        for i in 0..L {
            out.data[i] = v.data[i] as f32;
        }
        out
    }
}

impl<const L: usize> From<Vector<f32, L>> for Vector<i32, L> {
    /// Truncates each component toward zero.
    #[inline]
    fn from(v: Vector<f32, L>) -> Self {
        let mut out = Self::ZERO;
        for i in 0..L {
            out.data[i] = v.data[i] as i32;
        }
        out
    }
}

impl<T: LaneScalar, const L: usize> Default for Vector<T, L> {
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<T: LaneScalar, const L: usize> PartialEq for Vector<T, L> {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.lane().cmp_eq(other.lane()).move_mask() == 0xF
    }
}

impl<const L: usize> Eq for Vector<i32, L> {}

impl<T: LaneScalar, const L: usize> Index<usize> for Vector<T, L> {
    type Output = T;

    #[inline]
    fn index(&self, idx: usize) -> &T {
        &self.data[idx]
    }
}

impl<T: LaneScalar, const L: usize> IndexMut<usize> for Vector<T, L> {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut T {
        &mut self.data[idx]
    }
}

impl<T: LaneScalar, const L: usize> Add for Vector<T, L> {
    type Output = Self;

    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::from_lane(self.lane() + rhs.lane())
    }
}

impl<T: LaneScalar, const L: usize> Sub for Vector<T, L> {
    type Output = Self;

    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::from_lane(self.lane() - rhs.lane())
    }
}

impl<T: LaneScalar, const L: usize> Mul for Vector<T, L> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: Self) -> Self {
        Self::from_lane(self.lane() * rhs.lane())
    }
}

impl<T: LaneScalar, const L: usize> Div for Vector<T, L> {
    type Output = Self;

    /// Component-wise division. Dividing by the all-zero vector is a
    /// no-op that returns the dividend unchanged.
    #[inline]
    fn div(self, rhs: Self) -> Self {
        if rhs == Self::ZERO {
            return self;
        }
        Self::from_lane(self.lane() / rhs.lane())
    }
}

impl<T: LaneScalar, const L: usize> Mul<T> for Vector<T, L> {
    type Output = Self;

    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::from_lane(self.lane() * T::Lane::splat(rhs))
    }
}

impl<T: LaneScalar, const L: usize> Div<T> for Vector<T, L> {
    type Output = Self;

    /// Division by a (nearly-)zero scalar is a no-op.
    #[inline]
    fn div(self, rhs: T) -> Self {
        if rhs.is_zero_divisor() {
            return self;
        }
        Self::from_lane(self.lane() / T::Lane::splat(rhs))
    }
}

impl<T: LaneScalar, const L: usize> Neg for Vector<T, L> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::ZERO - self
    }
}

impl<T: LaneScalar, const L: usize> AddAssign for Vector<T, L> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: LaneScalar, const L: usize> SubAssign for Vector<T, L> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: LaneScalar, const L: usize> MulAssign for Vector<T, L> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: LaneScalar, const L: usize> DivAssign for Vector<T, L> {
    #[inline]
    fn div_assign(&mut self, rhs: Self) {
        *self = *self / rhs;
    }
}

impl<T: LaneScalar, const L: usize> MulAssign<T> for Vector<T, L> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: LaneScalar, const L: usize> DivAssign<T> for Vector<T, L> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

macro_rules! impl_scalar_mul {
    ($($t:ty),+ $(,)?) => {
        $(
            impl<const L: usize> Mul<Vector<$t, L>> for $t {
                type Output = Vector<$t, L>;

                #[inline]
                fn mul(self, rhs: Vector<$t, L>) -> Vector<$t, L> {
                    rhs * self
                }
            }
        )+
    };
}

impl_scalar_mul!(f32, i32);

impl<const L: usize> Hash for Vector<f32, L> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        for n in self.data {
            state.write_u32(n.to_bits());
        }
    }
}

impl<const L: usize> Hash for Vector<i32, L> {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        for n in self.data {
            state.write_i32(n);
        }
    }
}

impl<T: LaneScalar, const L: usize> Distribution<Vector<T, L>> for Standard
where
    Standard: Distribution<T>,
{
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Vector<T, L> {
        Vector::sample_from(rng, &Standard)
    }
}

impl Vec2 {
    /// Convert to a [`glam::Vec2`].
    #[inline]
    pub fn to_glam(self) -> glam::Vec2 {
        glam::Vec2::new(self.x(), self.y())
    }

    /// Convert from a [`glam::Vec2`].
    #[inline]
    pub fn from_glam(v: glam::Vec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl Vec3 {
    /// Convert to a [`glam::Vec3`].
    #[inline]
    pub fn to_glam(self) -> glam::Vec3 {
        glam::Vec3::new(self.x(), self.y(), self.z())
    }

    /// Convert from a [`glam::Vec3`].
    #[inline]
    pub fn from_glam(v: glam::Vec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl Vec4 {
    /// Convert to a [`glam::Vec4`].
    #[inline]
    pub fn to_glam(self) -> glam::Vec4 {
        glam::Vec4::new(self.x(), self.y(), self.z(), self.w())
    }

    /// Convert from a [`glam::Vec4`].
    #[inline]
    pub fn from_glam(v: glam::Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl IntVec2 {
    /// Convert to a [`glam::IVec2`].
    #[inline]
    pub fn to_glam(self) -> glam::IVec2 {
        glam::IVec2::new(self.x(), self.y())
    }

    /// Convert from a [`glam::IVec2`].
    #[inline]
    pub fn from_glam(v: glam::IVec2) -> Self {
        Self::new(v.x, v.y)
    }
}

impl IntVec3 {
    /// Convert to a [`glam::IVec3`].
    #[inline]
    pub fn to_glam(self) -> glam::IVec3 {
        glam::IVec3::new(self.x(), self.y(), self.z())
    }

    /// Convert from a [`glam::IVec3`].
    #[inline]
    pub fn from_glam(v: glam::IVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl IntVec4 {
    /// Convert to a [`glam::IVec4`].
    #[inline]
    pub fn to_glam(self) -> glam::IVec4 {
        glam::IVec4::new(self.x(), self.y(), self.z(), self.w())
    }

    /// Convert from a [`glam::IVec4`].
    #[inline]
    pub fn from_glam(v: glam::IVec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}
