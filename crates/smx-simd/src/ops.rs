//! Lane traits shared by the float and integer registers.

use core::fmt::Debug;
use core::ops::{Add, BitAnd, BitOr, BitXor, Div, Mul, Sub};

/// Scalar element types that have a 4-lane SIMD register.
///
/// Implemented for `f32` (backed by [`LaneF32`](crate::LaneF32)) and
/// `i32` (backed by [`LaneI32`](crate::LaneI32)).
pub trait LaneScalar: Copy + Default + PartialEq + PartialOrd + Debug + 'static {
    /// The 4-lane register holding this scalar.
    type Lane: LaneOps<Scalar = Self>;

    /// Additive identity.
    const ZERO: Self;
    /// Multiplicative identity.
    const ONE: Self;
    /// Negated multiplicative identity.
    const NEG_ONE: Self;

    /// Whether dividing by this value must be treated as a no-op.
    ///
    /// Near-zero for floats, exactly zero for integers.
    fn is_zero_divisor(self) -> bool;
}

/// Operations every 4-lane register supports.
///
/// Comparison methods return a lane mask: all bits of a lane set where
/// the predicate holds, all bits clear otherwise. Masks combine with the
/// bitwise operators and collapse to a 4-bit integer via
/// [`move_mask`](LaneOps::move_mask).
pub trait LaneOps:
    Copy
    + Debug
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + BitAnd<Output = Self>
    + BitOr<Output = Self>
    + BitXor<Output = Self>
{
    /// The scalar element type of this register.
    type Scalar: LaneScalar<Lane = Self>;

    /// Register with the value in every lane.
    fn splat(n: Self::Scalar) -> Self;

    /// Register from four explicit lanes.
    fn from_array(lanes: [Self::Scalar; 4]) -> Self;

    /// The four lanes as an array.
    fn to_array(self) -> [Self::Scalar; 4];

    /// Load `N <= 4` scalars into the low lanes, zero-filling the rest.
    #[inline]
    fn load<const N: usize>(src: &[Self::Scalar; N]) -> Self {
        debug_assert!(N <= 4);
        let mut lanes = [Self::Scalar::ZERO; 4];
        lanes[..N].copy_from_slice(src);
        Self::from_array(lanes)
    }

    /// Store the low `N <= 4` lanes, discarding the rest.
    #[inline]
    fn store<const N: usize>(self, dst: &mut [Self::Scalar; N]) {
        debug_assert!(N <= 4);
        dst.copy_from_slice(&self.to_array()[..N]);
    }

    /// All lanes zero.
    #[inline]
    fn zero() -> Self {
        Self::splat(Self::Scalar::ZERO)
    }

    /// All lanes one.
    #[inline]
    fn one() -> Self {
        Self::splat(Self::Scalar::ONE)
    }

    /// The lowest lane.
    #[inline]
    fn first(self) -> Self::Scalar {
        self.to_array()[0]
    }

    /// Lane mask of `self == rhs`.
    fn cmp_eq(self, rhs: Self) -> Self;
    /// Lane mask of `self < rhs`.
    fn cmp_lt(self, rhs: Self) -> Self;
    /// Lane mask of `self > rhs`.
    fn cmp_gt(self, rhs: Self) -> Self;
    /// Lane mask of `self <= rhs`.
    fn cmp_le(self, rhs: Self) -> Self;
    /// Lane mask of `self >= rhs`.
    fn cmp_ge(self, rhs: Self) -> Self;

    /// Lanes of `self` with the bits of `rhs` cleared.
    #[inline]
    fn and_not(self, rhs: Self) -> Self {
        (self ^ rhs) & self
    }

    /// Per-lane `mask ? a : b` without branching.
    #[inline]
    fn select(mask: Self, a: Self, b: Self) -> Self {
        b ^ (mask & (a ^ b))
    }

    /// Per-lane minimum.
    #[inline]
    fn min(self, rhs: Self) -> Self {
        Self::select(self.cmp_lt(rhs), self, rhs)
    }

    /// Per-lane maximum.
    #[inline]
    fn max(self, rhs: Self) -> Self {
        Self::select(self.cmp_gt(rhs), self, rhs)
    }

    /// Per-lane absolute value.
    fn abs(self) -> Self;

    /// Per-lane sign: `1` for positive lanes, `-1` for negative, `0` otherwise.
    #[inline]
    fn sign(self) -> Self {
        let pos = self.cmp_gt(Self::zero()) & Self::one();
        let neg = self.cmp_lt(Self::zero()) & Self::splat(Self::Scalar::NEG_ONE);
        pos | neg
    }

    /// The sign bit of each lane packed into the low four bits.
    ///
    /// A comparison mask collapses to `0xF` when every lane holds.
    fn move_mask(self) -> u32;

    /// Horizontal sum of the four lanes.
    fn reduce_add(self) -> Self::Scalar;
}

/// Forwards binary operator impls to the wrapped `wide` register.
macro_rules! impl_lane_binop {
    ($lane:ty: $($op:ident :: $fn:ident),+ $(,)?) => {
        $(
            impl core::ops::$op for $lane {
                type Output = Self;

                #[inline]
                fn $fn(self, rhs: Self) -> Self {
                    Self(core::ops::$op::$fn(self.0, rhs.0))
                }
            }
        )+
    };
}

pub(crate) use impl_lane_binop;

#[cfg(test)]
mod tests {
    use crate::{LaneF32, LaneI32, LaneOps};

    #[test]
    fn select_picks_per_lane() {
        let mask = LaneI32::from_array([1, 5, -3, 0]).cmp_gt(LaneI32::zero());
        let out = LaneI32::select(
            mask,
            LaneI32::from_array([10, 20, 30, 40]),
            LaneI32::from_array([-1, -2, -3, -4]),
        );
        assert_eq!(out.to_array(), [10, 20, -3, -4]);
    }

    #[test]
    fn select_works_on_floats() {
        let a = LaneF32::from_array([1.0, 2.0, 3.0, 4.0]);
        let b = LaneF32::from_array([5.0, 6.0, 7.0, 8.0]);
        let mask = a.cmp_gt(LaneF32::splat(2.5));
        assert_eq!(LaneF32::select(mask, a, b).to_array(), [5.0, 6.0, 3.0, 4.0]);
    }

    #[test]
    fn and_not_clears_bits() {
        let a = LaneI32::from_array([15, 8, 3, 0]);
        let b = LaneI32::from_array([9, 8, 1, 0]);
        assert_eq!(a.and_not(b).to_array(), [6, 0, 2, 0]);
    }

    #[test]
    fn sign_is_zero_at_zero() {
        let n = LaneF32::from_array([3.5, -0.25, 0.0, -7.0]);
        assert_eq!(n.sign().to_array(), [1.0, -1.0, 0.0, -1.0]);

        let n = LaneI32::from_array([42, -1, 0, i32::MIN]);
        assert_eq!(n.sign().to_array(), [1, -1, 0, -1]);
    }

    #[test]
    fn min_max_via_select() {
        let a = LaneI32::from_array([1, 9, -4, 0]);
        let b = LaneI32::from_array([2, 3, -5, 0]);
        assert_eq!(a.min(b).to_array(), [1, 3, -5, 0]);
        assert_eq!(a.max(b).to_array(), [2, 9, -4, 0]);
    }

    #[test]
    fn short_load_zero_fills() {
        let lane = LaneF32::load(&[1.0, 2.0, 3.0]);
        assert_eq!(lane.to_array(), [1.0, 2.0, 3.0, 0.0]);

        let mut out = [0.0; 2];
        LaneF32::from_array([5.0, 6.0, 7.0, 8.0]).store(&mut out);
        assert_eq!(out, [5.0, 6.0]);
    }
}
