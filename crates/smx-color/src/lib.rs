//! Packed 8-bit ARGB color for SMX-RS.
//!
//! [`Color`] stores one byte per channel in `(a, r, g, b)` order and
//! round-trips losslessly through a packed `u32`. Channel arithmetic
//! saturates at the byte bounds instead of wrapping.

#![warn(missing_docs)]

use core::hash::{Hash, Hasher};
use core::ops::{Add, AddAssign, Sub, SubAssign};

use rand::Rng;
use rand::distributions::{Distribution, Standard};

/// An 8-bit-per-channel ARGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(C, align(4))]
pub struct Color {
    /// Alpha channel.
    pub a: u8,
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// Opaque black.
    pub const BLACK: Self = Self::new(0, 0, 0);
    /// Opaque blue.
    pub const BLUE: Self = Self::new(0, 0, 255);
    /// Fully transparent black.
    pub const TRANSPARENT: Self = Self::with_alpha(0, 0, 0, 0);
    /// Opaque cyan.
    pub const CYAN: Self = Self::new(0, 255, 255);
    /// Opaque mid gray.
    pub const GRAY: Self = Self::new(127, 127, 127);
    /// Opaque green.
    pub const GREEN: Self = Self::new(0, 255, 0);
    /// Opaque magenta.
    pub const MAGENTA: Self = Self::new(255, 0, 255);
    /// Opaque red.
    pub const RED: Self = Self::new(255, 0, 0);
    /// Opaque white.
    pub const WHITE: Self = Self::new(255, 255, 255);
    /// Opaque yellow.
    pub const YELLOW: Self = Self::new(255, 255, 0);

    /// Opaque color from RGB channels.
    #[inline]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self::with_alpha(r, g, b, 255)
    }

    /// Color from RGBA channels.
    #[inline]
    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Pack into a `u32` with alpha in the low byte.
    #[inline]
    pub const fn to_bits(self) -> u32 {
        (self.a as u32) | ((self.r as u32) << 8) | ((self.g as u32) << 16) | ((self.b as u32) << 24)
    }

    /// Unpack from a `u32` produced by [`to_bits`](Self::to_bits).
    #[inline]
    pub const fn from_bits(bits: u32) -> Self {
        Self {
            a: bits as u8,
            r: (bits >> 8) as u8,
            g: (bits >> 16) as u8,
            b: (bits >> 24) as u8,
        }
    }

    /// Channel-wise minimum.
    #[inline]
    pub fn min(self, rhs: Self) -> Self {
        Self {
            a: self.a.min(rhs.a),
            r: self.r.min(rhs.r),
            g: self.g.min(rhs.g),
            b: self.b.min(rhs.b),
        }
    }

    /// Channel-wise maximum.
    #[inline]
    pub fn max(self, rhs: Self) -> Self {
        Self {
            a: self.a.max(rhs.a),
            r: self.r.max(rhs.r),
            g: self.g.max(rhs.g),
            b: self.b.max(rhs.b),
        }
    }

    /// Color with every channel drawn from `dist`.
    pub fn sample_from<R, D>(rng: &mut R, dist: &D) -> Self
    where
        R: Rng + ?Sized,
        D: Distribution<u8>,
    {
        Self::with_alpha(
            rng.sample(dist),
            rng.sample(dist),
            rng.sample(dist),
            rng.sample(dist),
        )
    }
}

impl Default for Color {
    /// Opaque white.
    #[inline]
    fn default() -> Self {
        Self::WHITE
    }
}

impl Add for Color {
    type Output = Self;

    /// Channel-wise addition, saturating at 255.
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self {
            a: self.a.saturating_add(rhs.a),
            r: self.r.saturating_add(rhs.r),
            g: self.g.saturating_add(rhs.g),
            b: self.b.saturating_add(rhs.b),
        }
    }
}

impl Sub for Color {
    type Output = Self;

    /// Channel-wise subtraction, saturating at 0.
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self {
            a: self.a.saturating_sub(rhs.a),
            r: self.r.saturating_sub(rhs.r),
            g: self.g.saturating_sub(rhs.g),
            b: self.b.saturating_sub(rhs.b),
        }
    }
}

impl AddAssign for Color {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl SubAssign for Color {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl Hash for Color {
    #[inline]
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u32(self.to_bits());
    }
}

impl From<u32> for Color {
    #[inline]
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}

impl From<Color> for u32 {
    #[inline]
    fn from(color: Color) -> u32 {
        color.to_bits()
    }
}

impl Distribution<Color> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Color {
        Color::from_bits(rng.sample(Standard))
    }
}
