//! Four `f32` lanes.

use wide::{CmpEq, CmpGe, CmpGt, CmpLe, CmpLt, f32x4};

use crate::ops::{LaneOps, LaneScalar, impl_lane_binop};

const EPSILON: f32 = f32::EPSILON;

/// Four `f32` lanes in a single 128-bit register.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct LaneF32(f32x4);

impl LaneScalar for f32 {
    type Lane = LaneF32;

    const ZERO: Self = 0.0;
    const ONE: Self = 1.0;
    const NEG_ONE: Self = -1.0;

    #[inline]
    fn is_zero_divisor(self) -> bool {
        self.abs() <= EPSILON
    }
}

impl_lane_binop!(LaneF32:
    Add::add,
    Sub::sub,
    Mul::mul,
    Div::div,
    BitAnd::bitand,
    BitOr::bitor,
    BitXor::bitxor,
);

impl LaneOps for LaneF32 {
    type Scalar = f32;

    #[inline]
    fn splat(n: f32) -> Self {
        Self(f32x4::splat(n))
    }

    #[inline]
    fn from_array(lanes: [f32; 4]) -> Self {
        Self(f32x4::from(lanes))
    }

    #[inline]
    fn to_array(self) -> [f32; 4] {
        self.0.to_array()
    }

    #[inline]
    fn cmp_eq(self, rhs: Self) -> Self {
        Self(self.0.cmp_eq(rhs.0))
    }

    #[inline]
    fn cmp_lt(self, rhs: Self) -> Self {
        Self(self.0.cmp_lt(rhs.0))
    }

    #[inline]
    fn cmp_gt(self, rhs: Self) -> Self {
        Self(self.0.cmp_gt(rhs.0))
    }

    #[inline]
    fn cmp_le(self, rhs: Self) -> Self {
        Self(self.0.cmp_le(rhs.0))
    }

    #[inline]
    fn cmp_ge(self, rhs: Self) -> Self {
        Self(self.0.cmp_ge(rhs.0))
    }

    #[inline]
    fn min(self, rhs: Self) -> Self {
        Self(self.0.min(rhs.0))
    }

    #[inline]
    fn max(self, rhs: Self) -> Self {
        Self(self.0.max(rhs.0))
    }

    #[inline]
    fn abs(self) -> Self {
        Self(self.0.abs())
    }

    #[inline]
    fn move_mask(self) -> u32 {
        let lanes = self.0.to_array();
        let mut mask = 0;
        for (i, lane) in lanes.iter().enumerate() {
            mask |= (lane.to_bits() >> 31) << i;
        }
        mask
    }

    #[inline]
    fn reduce_add(self) -> f32 {
        let pairs = self.hadd(self);
        pairs.hadd(pairs).first()
    }
}

impl LaneF32 {
    /// Per-lane square root.
    #[inline]
    pub fn sqrt(self) -> Self {
        Self(self.0.sqrt())
    }

    /// Per-lane `1 / sqrt(n)` from the hardware estimate, refined by
    /// `iterations` rounds of Newton-Raphson.
    ///
    /// Zero iterations returns the raw ~12-bit estimate; two converge to
    /// within `f32` epsilon for normal inputs.
    #[inline]
    pub fn inv_sqrt(self, iterations: u32) -> Self {
        let half_n = self.0 * f32x4::splat(0.5);
        let mut y = self.0.recip_sqrt();
        for _ in 0..iterations {
            y += y * (f32x4::splat(0.5) - half_n * y * y);
        }
        Self(y)
    }

    /// Reorder lanes of one register: lane `i` of the result is lane
    /// `const` parameter `i` of the input.
    #[inline]
    pub fn swizzle<const X: usize, const Y: usize, const Z: usize, const W: usize>(self) -> Self {
        let l = self.0.to_array();
        Self(f32x4::from([l[X], l[Y], l[Z], l[W]]))
    }

    /// Broadcast lane `I` to every lane.
    #[inline]
    pub fn replicate<const I: usize>(self) -> Self {
        self.swizzle::<I, I, I, I>()
    }

    /// Pick two lanes from `self` and two from `rhs`:
    /// `(self[X], self[Y], rhs[Z], rhs[W])`.
    #[inline]
    pub fn shuffle<const X: usize, const Y: usize, const Z: usize, const W: usize>(
        self,
        rhs: Self,
    ) -> Self {
        let a = self.0.to_array();
        let b = rhs.0.to_array();
        Self(f32x4::from([a[X], a[Y], b[Z], b[W]]))
    }

    /// Horizontal pairwise add:
    /// `(a0+a1, a2+a3, b0+b1, b2+b3)`.
    #[inline]
    pub fn hadd(self, rhs: Self) -> Self {
        let even = self.shuffle::<0, 2, 0, 2>(rhs);
        let odd = self.shuffle::<1, 3, 1, 3>(rhs);
        even + odd
    }
}
