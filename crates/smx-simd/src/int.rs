//! Four `i32` lanes.

use core::ops::Div;

use wide::{CmpEq, CmpGt, i32x4};

use crate::ops::{LaneOps, LaneScalar, impl_lane_binop};

/// Four `i32` lanes in a single 128-bit register.
///
/// Multiplication is exact (widening emulation under SSE2). Division has
/// no hardware equivalent and goes through `f32` with round-to-nearest,
/// so quotients exactly halfway between integers round to even.
#[derive(Clone, Copy, Debug)]
#[repr(transparent)]
pub struct LaneI32(i32x4);

impl LaneScalar for i32 {
    type Lane = LaneI32;

    const ZERO: Self = 0;
    const ONE: Self = 1;
    const NEG_ONE: Self = -1;

    #[inline]
    fn is_zero_divisor(self) -> bool {
        self == 0
    }
}

impl_lane_binop!(LaneI32:
    Add::add,
    Sub::sub,
    Mul::mul,
    BitAnd::bitand,
    BitOr::bitor,
    BitXor::bitxor,
);

impl Div for LaneI32 {
    type Output = Self;

    #[inline]
    fn div(self, rhs: Self) -> Self {
        Self((self.0.round_float() / rhs.0.round_float()).round_int())
    }
}

impl LaneOps for LaneI32 {
    type Scalar = i32;

    #[inline]
    fn splat(n: i32) -> Self {
        Self(i32x4::splat(n))
    }

    #[inline]
    fn from_array(lanes: [i32; 4]) -> Self {
        Self(i32x4::from(lanes))
    }

    #[inline]
    fn to_array(self) -> [i32; 4] {
        self.0.to_array()
    }

    #[inline]
    fn cmp_eq(self, rhs: Self) -> Self {
        Self(self.0.cmp_eq(rhs.0))
    }

    #[inline]
    fn cmp_lt(self, rhs: Self) -> Self {
        Self(rhs.0.cmp_gt(self.0))
    }

    #[inline]
    fn cmp_gt(self, rhs: Self) -> Self {
        Self(self.0.cmp_gt(rhs.0))
    }

    #[inline]
    fn cmp_le(self, rhs: Self) -> Self {
        self.cmp_lt(rhs) | self.cmp_eq(rhs)
    }

    #[inline]
    fn cmp_ge(self, rhs: Self) -> Self {
        self.cmp_gt(rhs) | self.cmp_eq(rhs)
    }

    #[inline]
    fn abs(self) -> Self {
        let mask = self.cmp_lt(Self::zero());
        (self ^ mask) - mask
    }

    #[inline]
    fn move_mask(self) -> u32 {
        let lanes = self.0.to_array();
        let mut mask = 0;
        for (i, lane) in lanes.iter().enumerate() {
            mask |= ((*lane as u32) >> 31) << i;
        }
        mask
    }

    #[inline]
    fn reduce_add(self) -> i32 {
        let l = self.0.to_array();
        l[0].wrapping_add(l[1]).wrapping_add(l[2]).wrapping_add(l[3])
    }
}
