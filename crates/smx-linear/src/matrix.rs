//! Square row-major matrices over SIMD lanes.

use core::hash::{Hash, Hasher};
use core::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

use rand::Rng;
use rand::distributions::{Distribution, Standard};
use smx_core::EPSILON;
use smx_simd::{LaneF32, LaneOps};

use crate::Vector;

/// A square row-major `f32` matrix of dimension 2 to 4.
///
/// Rows load into 4-lane registers with unused lanes zeroed. Inversion
/// reports singularity explicitly: [`inverse`](Mat4::inverse) returns
/// `None`, [`invert`](Mat4::invert) returns `false` and leaves the matrix
/// unchanged, and [`inverted`](Mat4::inverted) falls back to the identity.
#[derive(Clone, Copy, Debug)]
#[repr(C, align(16))]
pub struct Matrix<const L: usize> {
    rows: [[f32; L]; L],
}

/// 2x2 `f32` matrix.
pub type Mat2 = Matrix<2>;
/// 3x3 `f32` matrix.
pub type Mat3 = Matrix<3>;
/// 4x4 `f32` matrix.
pub type Mat4 = Matrix<4>;

impl<const L: usize> Matrix<L> {
    /// All elements zero.
    pub const ZERO: Self = Self {
        rows: [[0.0; L]; L],
    };

    /// All elements one.
    pub const ONE: Self = Self { rows: [[1.0; L]; L] };

    /// The identity matrix.
    pub const IDENTITY: Self = Self::identity();

    const fn identity() -> Self {
        let mut rows = [[0.0; L]; L];
        let mut i = 0;
        while i < L {
            rows[i][i] = 1.0;
            i += 1;
        }
        Self { rows }
    }

    /// Matrix with every element set to `n`.
    #[inline]
    pub const fn splat(n: f32) -> Self {
        Self { rows: [[n; L]; L] }
    }

    /// Matrix from row arrays.
    #[inline]
    pub const fn from_rows(rows: [[f32; L]; L]) -> Self {
        Self { rows }
    }

    /// Matrix with `diag` on the diagonal and zeros elsewhere.
    pub fn diagonal(diag: Vector<f32, L>) -> Self {
        let mut out = Self::ZERO;
        let d = diag.to_array();
        for i in 0..L {
            out.rows[i][i] = d[i];
        }
        out
    }

    /// Matrix from row vectors.
    #[inline]
    pub fn from_row_vectors(rows: [Vector<f32, L>; L]) -> Self {
        let mut out = Self::ZERO;
        for i in 0..L {
            out.rows[i] = rows[i].to_array();
        }
        out
    }

    /// The rows as arrays.
    #[inline]
    pub const fn to_rows(self) -> [[f32; L]; L] {
        self.rows
    }

    /// Row `i` as a vector.
    #[inline]
    pub fn row(&self, i: usize) -> Vector<f32, L> {
        Vector::from_array(self.rows[i])
    }

    /// Element at `(row, col)`.
    #[inline]
    pub fn at(&self, row: usize, col: usize) -> f32 {
        self.rows[row][col]
    }

    /// Mutable element at `(row, col)`.
    #[inline]
    pub fn at_mut(&mut self, row: usize, col: usize) -> &mut f32 {
        &mut self.rows[row][col]
    }

    #[inline]
    fn row_lane(&self, i: usize) -> LaneF32 {
        LaneF32::load(&self.rows[i])
    }

    #[inline]
    fn store_row(&mut self, i: usize, lane: LaneF32) {
        lane.store(&mut self.rows[i]);
    }

    /// Transposed copy.
    #[inline]
    pub fn transposed(self) -> Self {
        let mut out = Self::ZERO;
        for i in 0..L {
            for j in 0..L {
                out.rows[j][i] = self.rows[i][j];
            }
        }
        out
    }

    /// Transpose in place.
    #[inline]
    pub fn transpose(&mut self) {
        *self = self.transposed();
    }

    /// Whether every element is within [`EPSILON`] of `rhs`.
    #[inline]
    pub fn is_nearly_equal(&self, rhs: &Self) -> bool {
        self.is_nearly_equal_within(rhs, EPSILON)
    }

    /// Whether every element is within `tolerance` of `rhs`.
    pub fn is_nearly_equal_within(&self, rhs: &Self, tolerance: f32) -> bool {
        let eps = LaneF32::splat(tolerance);
        (0..L).all(|i| {
            let diff = (self.row_lane(i) - rhs.row_lane(i)).abs();
            diff.cmp_le(eps).move_mask() == 0xF
        })
    }

    /// Whether every element is within [`EPSILON`] of zero.
    #[inline]
    pub fn is_nearly_zero(&self) -> bool {
        self.is_nearly_equal_within(&Self::ZERO, EPSILON)
    }

    /// Whether every element is within `tolerance` of zero.
    #[inline]
    pub fn is_nearly_zero_within(&self, tolerance: f32) -> bool {
        self.is_nearly_equal_within(&Self::ZERO, tolerance)
    }

    /// Row-major matrix-vector product.
    pub fn mul_vec(&self, v: Vector<f32, L>) -> Vector<f32, L> {
        let mut out = [0.0; L];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.row(i).dot(v);
        }
        Vector::from_array(out)
    }

    /// Matrix with every element drawn from `dist`.
    pub fn sample_from<R, D>(rng: &mut R, dist: &D) -> Self
    where
        R: Rng + ?Sized,
        D: Distribution<f32>,
    {
        let mut out = Self::ZERO;
        for row in &mut out.rows {
            for slot in row {
                *slot = rng.sample(dist);
            }
        }
        out
    }
}

impl Mat2 {
    /// Matrix from 4 elements in row-major order.
    #[inline]
    pub const fn from_array(n: [f32; 4]) -> Self {
        Self::from_rows([[n[0], n[1]], [n[2], n[3]]])
    }

    /// Determinant.
    #[inline]
    pub fn determinant(&self) -> f32 {
        let [[a, b], [c, d]] = self.rows;
        a * d - b * c
    }

    /// Inverse, or `None` when the determinant is zero.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return None;
        }
        let m = LaneF32::from_array([
            self.rows[0][0],
            self.rows[0][1],
            self.rows[1][0],
            self.rows[1][1],
        ]);
        let adj = m.swizzle::<3, 1, 2, 0>() * LaneF32::from_array([1.0, -1.0, -1.0, 1.0]);
        let inv = (adj * LaneF32::splat(1.0 / det)).to_array();
        Some(Self::from_rows([[inv[0], inv[1]], [inv[2], inv[3]]]))
    }

    /// Invert in place; `false` leaves the matrix unchanged.
    #[inline]
    pub fn invert(&mut self) -> bool {
        match self.inverse() {
            Some(inv) => {
                *self = inv;
                true
            }
            None => false,
        }
    }

    /// Inverted copy, or the identity when singular.
    #[inline]
    pub fn inverted(&self) -> Self {
        self.inverse().unwrap_or(Self::IDENTITY)
    }

    /// Convert to a [`glam::Mat2`].
    #[inline]
    pub fn to_glam(self) -> glam::Mat2 {
        glam::Mat2::from_cols_array_2d(&self.transposed().rows)
    }

    /// Convert from a [`glam::Mat2`].
    #[inline]
    pub fn from_glam(m: glam::Mat2) -> Self {
        Self::from_rows(m.to_cols_array_2d()).transposed()
    }
}

impl Mat3 {
    /// Matrix from 9 elements in row-major order.
    #[inline]
    pub const fn from_array(n: [f32; 9]) -> Self {
        Self::from_rows([
            [n[0], n[1], n[2]],
            [n[3], n[4], n[5]],
            [n[6], n[7], n[8]],
        ])
    }

    /// Determinant by cofactor expansion along the first row.
    pub fn determinant(&self) -> f32 {
        let m = self.rows;
        m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0])
    }

    /// Inverse via the adjugate, or `None` when the determinant is zero.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 {
            return None;
        }
        let inv_det = 1.0 / det;
        let m = self.rows;
        Some(Self::from_rows([
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) * inv_det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) * inv_det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) * inv_det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) * inv_det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) * inv_det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) * inv_det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) * inv_det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) * inv_det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) * inv_det,
            ],
        ]))
    }

    /// Invert in place; `false` leaves the matrix unchanged.
    #[inline]
    pub fn invert(&mut self) -> bool {
        match self.inverse() {
            Some(inv) => {
                *self = inv;
                true
            }
            None => false,
        }
    }

    /// Inverted copy, or the identity when singular.
    #[inline]
    pub fn inverted(&self) -> Self {
        self.inverse().unwrap_or(Self::IDENTITY)
    }

    /// Convert to a [`glam::Mat3`].
    #[inline]
    pub fn to_glam(self) -> glam::Mat3 {
        glam::Mat3::from_cols_array_2d(&self.transposed().rows)
    }

    /// Convert from a [`glam::Mat3`].
    #[inline]
    pub fn from_glam(m: glam::Mat3) -> Self {
        Self::from_rows(m.to_cols_array_2d()).transposed()
    }
}

// 2x2 blocks of a 4x4 matrix, stored one block per register as
// (m00, m01, m10, m11).

#[inline]
fn mat2_mul(l: LaneF32, r: LaneF32) -> LaneF32 {
    l * r.swizzle::<0, 3, 0, 3>() + l.swizzle::<1, 0, 3, 2>() * r.swizzle::<2, 1, 2, 1>()
}

#[inline]
fn mat2_adj_mul(l: LaneF32, r: LaneF32) -> LaneF32 {
    l.swizzle::<3, 3, 0, 0>() * r - l.swizzle::<1, 1, 2, 2>() * r.swizzle::<2, 3, 0, 1>()
}

#[inline]
fn mat2_mul_adj(l: LaneF32, r: LaneF32) -> LaneF32 {
    l * r.swizzle::<3, 0, 3, 0>() - l.swizzle::<1, 0, 3, 2>() * r.swizzle::<2, 1, 2, 1>()
}

impl Mat4 {
    /// Matrix from 16 elements in row-major order.
    #[inline]
    pub const fn from_array(n: [f32; 16]) -> Self {
        Self::from_rows([
            [n[0], n[1], n[2], n[3]],
            [n[4], n[5], n[6], n[7]],
            [n[8], n[9], n[10], n[11]],
            [n[12], n[13], n[14], n[15]],
        ])
    }

    /// Determinant by cofactor expansion, evaluated on transposed rows
    /// with three shared swizzle patterns.
    pub fn determinant(&self) -> f32 {
        let t = self.transposed();
        let r0 = t.row_lane(0);
        let r1 = t.row_lane(1);
        let r2 = t.row_lane(2);
        let r3 = t.row_lane(3);

        let zzyy = |r: LaneF32| r.swizzle::<2, 2, 1, 1>();
        let wwwz = |r: LaneF32| r.swizzle::<3, 3, 3, 2>();
        let yxxx = |r: LaneF32| r.swizzle::<1, 0, 0, 0>();

        let e0 = zzyy(r2) * wwwz(r3) - zzyy(r3) * wwwz(r2);
        let e1 = yxxx(r2) * wwwz(r3) - yxxx(r3) * wwwz(r2);
        let e2 = yxxx(r2) * zzyy(r3) - yxxx(r3) * zzyy(r2);

        let cofactor = e0 * yxxx(r1) - e1 * zzyy(r1) + e2 * wwwz(r1);
        let det = (cofactor * r0).to_array();
        det[0] - det[1] + det[2] - det[3]
    }

    /// Inverse via 2x2 block adjugates, or `None` when the determinant
    /// is zero.
    pub fn inverse(&self) -> Option<Self> {
        let m0 = self.row_lane(0);
        let m1 = self.row_lane(1);
        let m2 = self.row_lane(2);
        let m3 = self.row_lane(3);

        let a = m0.shuffle::<0, 1, 0, 1>(m1);
        let b = m0.shuffle::<2, 3, 2, 3>(m1);
        let c = m2.shuffle::<0, 1, 0, 1>(m3);
        let d = m2.shuffle::<2, 3, 2, 3>(m3);

        // Determinants of the four 2x2 sub-matrices.
        let det_sub = m0.shuffle::<0, 2, 0, 2>(m2) * m1.shuffle::<1, 3, 1, 3>(m3)
            - m0.shuffle::<1, 3, 1, 3>(m2) * m1.shuffle::<0, 2, 0, 2>(m3);
        let det_a = det_sub.replicate::<0>();
        let det_b = det_sub.replicate::<1>();
        let det_c = det_sub.replicate::<2>();
        let det_d = det_sub.replicate::<3>();

        let d_c = mat2_adj_mul(d, c);
        let a_b = mat2_adj_mul(a, b);

        let x_ = det_d * a - mat2_mul(b, d_c);
        let w_ = det_a * d - mat2_mul(c, a_b);
        let y_ = det_b * c - mat2_mul_adj(d, a_b);
        let z_ = det_c * b - mat2_mul_adj(a, d_c);

        // |M| = |A||D| + |B||C| - tr((A#B)(D#C))
        let mut det_m = det_a * det_d + det_b * det_c;
        let tr = a_b * d_c.swizzle::<0, 2, 1, 3>();
        let tr = tr.hadd(tr);
        let tr = tr.hadd(tr);
        det_m = det_m - tr;

        if det_m.first() == 0.0 {
            return None;
        }

        let adj_sign = LaneF32::from_array([1.0, -1.0, -1.0, 1.0]);
        let r_det_m = adj_sign / det_m;

        let x_ = x_ * r_det_m;
        let y_ = y_ * r_det_m;
        let z_ = z_ * r_det_m;
        let w_ = w_ * r_det_m;

        let mut out = Self::ZERO;
        out.store_row(0, x_.shuffle::<3, 1, 3, 1>(y_));
        out.store_row(1, x_.shuffle::<2, 0, 2, 0>(y_));
        out.store_row(2, z_.shuffle::<3, 1, 3, 1>(w_));
        out.store_row(3, z_.shuffle::<2, 0, 2, 0>(w_));
        Some(out)
    }

    /// Invert in place; `false` leaves the matrix unchanged.
    #[inline]
    pub fn invert(&mut self) -> bool {
        match self.inverse() {
            Some(inv) => {
                *self = inv;
                true
            }
            None => false,
        }
    }

    /// Inverted copy, or the identity when singular.
    #[inline]
    pub fn inverted(&self) -> Self {
        self.inverse().unwrap_or(Self::IDENTITY)
    }

    /// Convert to a [`glam::Mat4`].
    #[inline]
    pub fn to_glam(self) -> glam::Mat4 {
        glam::Mat4::from_cols_array_2d(&self.transposed().rows)
    }

    /// Convert from a [`glam::Mat4`].
    #[inline]
    pub fn from_glam(m: glam::Mat4) -> Self {
        Self::from_rows(m.to_cols_array_2d()).transposed()
    }
}

impl<const L: usize> Default for Matrix<L> {
    /// The zero matrix.
    #[inline]
    fn default() -> Self {
        Self::ZERO
    }
}

impl<const L: usize> PartialEq for Matrix<L> {
    fn eq(&self, other: &Self) -> bool {
        (0..L).all(|i| self.row_lane(i).cmp_eq(other.row_lane(i)).move_mask() == 0xF)
    }
}

impl<const L: usize> Index<usize> for Matrix<L> {
    type Output = [f32; L];

    #[inline]
    fn index(&self, idx: usize) -> &[f32; L] {
        &self.rows[idx]
    }
}

impl<const L: usize> IndexMut<usize> for Matrix<L> {
    #[inline]
    fn index_mut(&mut self, idx: usize) -> &mut [f32; L] {
        &mut self.rows[idx]
    }
}

impl<const L: usize> Add for Matrix<L> {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        let mut out = Self::ZERO;
        for i in 0..L {
            out.store_row(i, self.row_lane(i) + rhs.row_lane(i));
        }
        out
    }
}

impl<const L: usize> Sub for Matrix<L> {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        let mut out = Self::ZERO;
        for i in 0..L {
            out.store_row(i, self.row_lane(i) - rhs.row_lane(i));
        }
        out
    }
}

impl<const L: usize> Mul for Matrix<L> {
    type Output = Self;

    /// Matrix product; the right-hand side is transposed once so every
    /// element is a lane dot product of two rows.
    fn mul(self, rhs: Self) -> Self {
        let rt = rhs.transposed();
        let mut out = Self::ZERO;
        for i in 0..L {
            let lhs = self.row_lane(i);
            for j in 0..L {
                out.rows[i][j] = (lhs * rt.row_lane(j)).reduce_add();
            }
        }
        out
    }
}

impl<const L: usize> Mul<f32> for Matrix<L> {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self {
        let scale = LaneF32::splat(rhs);
        let mut out = Self::ZERO;
        for i in 0..L {
            out.store_row(i, self.row_lane(i) * scale);
        }
        out
    }
}

impl<const L: usize> Mul<Matrix<L>> for f32 {
    type Output = Matrix<L>;

    #[inline]
    fn mul(self, rhs: Matrix<L>) -> Matrix<L> {
        rhs * self
    }
}

impl<const L: usize> Div<f32> for Matrix<L> {
    type Output = Self;

    /// Division by a nearly-zero scalar is a no-op.
    fn div(self, rhs: f32) -> Self {
        if smx_core::is_nearly_zero(rhs) {
            return self;
        }
        let divisor = LaneF32::splat(rhs);
        let mut out = Self::ZERO;
        for i in 0..L {
            out.store_row(i, self.row_lane(i) / divisor);
        }
        out
    }
}

impl<const L: usize> Neg for Matrix<L> {
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::ZERO - self
    }
}

impl<const L: usize> AddAssign for Matrix<L> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<const L: usize> SubAssign for Matrix<L> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<const L: usize> MulAssign for Matrix<L> {
    #[inline]
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<const L: usize> MulAssign<f32> for Matrix<L> {
    #[inline]
    fn mul_assign(&mut self, rhs: f32) {
        *self = *self * rhs;
    }
}

impl<const L: usize> DivAssign<f32> for Matrix<L> {
    #[inline]
    fn div_assign(&mut self, rhs: f32) {
        *self = *self / rhs;
    }
}

impl<const L: usize> Hash for Matrix<L> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for row in self.rows {
            for n in row {
                state.write_u32(n.to_bits());
            }
        }
    }
}

impl<const L: usize> Distribution<Matrix<L>> for Standard {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Matrix<L> {
        Matrix::sample_from(rng, &Standard)
    }
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::{Vec2, Vec3};

    fn det3(m: [[f32; 3]; 3]) -> f32 {
        Mat3::from_rows(m).determinant()
    }

    // Textbook Laplace expansion along the first row.
    fn laplace4(m: [[f32; 4]; 4]) -> f32 {
        let minor = |col: usize| {
            let mut sub = [[0.0; 3]; 3];
            for (i, row) in m[1..].iter().enumerate() {
                let mut k = 0;
                for (j, &n) in row.iter().enumerate() {
                    if j != col {
                        sub[i][k] = n;
                        k += 1;
                    }
                }
            }
            det3(sub)
        };
        m[0][0] * minor(0) - m[0][1] * minor(1) + m[0][2] * minor(2) - m[0][3] * minor(3)
    }

    #[test]
    fn constants_and_rows() {
        assert_eq!(Mat3::default(), Mat3::ZERO);
        assert_eq!(Mat3::IDENTITY[1], [0.0, 1.0, 0.0]);
        assert_eq!(Mat2::ZERO + Mat2::ONE, Mat2::ONE);
        assert_eq!(Mat2::splat(1.0), Mat2::ONE);

        let m = Mat2::from_row_vectors([Vec2::new(1.0, 2.0), Vec2::new(3.0, 4.0)]);
        assert_eq!(m, Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]));
        assert_eq!(m, Mat2::from_array([1.0, 2.0, 3.0, 4.0]));
        assert_eq!(m.row(1), Vec2::new(3.0, 4.0));
        assert_eq!(m.at(1, 0), 3.0);

        let mut d = Mat3::diagonal(Vec3::new(1.0, 2.0, 3.0));
        assert_eq!(d.determinant(), 6.0);
        *d.at_mut(0, 0) = 4.0;
        assert_eq!(d[0], [4.0, 0.0, 0.0]);
    }

    #[test]
    fn transpose_swaps_indices() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);
        let t = m.transposed();
        assert_eq!(t[0], [1.0, 4.0, 7.0]);
        assert_eq!(t.transposed(), m);

        let mut n = m;
        n.transpose();
        assert_eq!(n, t);
    }

    #[test]
    fn elementwise_arithmetic() {
        let m = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m + m, m * 2.0);
        assert_eq!(m - m, Mat2::ZERO);
        assert_eq!(2.0 * m, m * 2.0);
        assert_eq!((m * 4.0) / 2.0, m * 2.0);
        assert_eq!(m / 0.0, m);
        assert_eq!(-m + m, Mat2::ZERO);

        let mut n = m;
        n += m;
        n /= 2.0;
        assert_eq!(n, m);
    }

    #[test]
    fn multiply_matches_fixture() {
        let m = Mat4::from_rows([
            [5.0, 4.0, 12.0, 7.0],
            [14.0, 9.0, 8.0, 3.0],
            [6.0, 10.0, 1.0, 0.0],
            [11.0, 6.0, 3.0, 8.0],
        ]);
        let prod = m * m.transposed();
        let expected = Mat4::from_rows([
            [234.0, 223.0, 82.0, 171.0],
            [223.0, 350.0, 182.0, 256.0],
            [82.0, 182.0, 137.0, 129.0],
            [171.0, 256.0, 129.0, 230.0],
        ]);
        assert_eq!(prod, expected);
        assert_eq!(m * Mat4::IDENTITY, m);
        assert_eq!(Mat4::IDENTITY * m, m);
    }

    #[test]
    fn matrix_vector_product() {
        let m = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.mul_vec(Vec2::new(1.0, 1.0)), Vec2::new(3.0, 7.0));
        assert_eq!(
            Mat3::IDENTITY.mul_vec(Vec3::new(1.0, 2.0, 3.0)),
            Vec3::new(1.0, 2.0, 3.0)
        );
    }

    #[test]
    fn determinants() {
        let m2 = Mat2::from_rows([[4.0, 7.0], [2.0, 6.0]]);
        assert_eq!(m2.determinant(), 10.0);

        let m3 = Mat3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        assert_eq!(m3.determinant(), 1.0);

        let rows = [
            [5.0, 4.0, 12.0, 7.0],
            [14.0, 9.0, 8.0, 3.0],
            [6.0, 10.0, 1.0, 0.0],
            [11.0, 6.0, 3.0, 8.0],
        ];
        let m4 = Mat4::from_rows(rows);
        assert_eq!(m4.determinant(), laplace4(rows));
        assert_eq!(Mat4::IDENTITY.determinant(), 1.0);
        assert_eq!(Mat4::ONE.determinant(), 0.0);
    }

    #[test]
    fn inverse_2x2() {
        let m = Mat2::from_rows([[4.0, 7.0], [2.0, 6.0]]);
        let inv = m.inverse().unwrap();
        assert!(inv.is_nearly_equal_within(&Mat2::from_rows([[0.6, -0.7], [-0.2, 0.4]]), 1e-6));
        assert!((m * inv).is_nearly_equal_within(&Mat2::IDENTITY, 1e-6));
        assert!(Mat2::ONE.inverse().is_none());
    }

    #[test]
    fn inverse_3x3() {
        let m = Mat3::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        let inv = m.inverse().unwrap();
        let expected = Mat3::from_rows([
            [-24.0, 18.0, 5.0],
            [20.0, -15.0, -4.0],
            [-5.0, 4.0, 1.0],
        ]);
        assert!(inv.is_nearly_equal_within(&expected, 1e-4));
        assert!((m * inv).is_nearly_equal_within(&Mat3::IDENTITY, 1e-4));
    }

    #[test]
    fn inverse_4x4() {
        let m = Mat4::from_rows([
            [1.0, 2.0, 1.0, 1.0],
            [1.0, 1.0, -1.0, -2.0],
            [1.0, -1.0, -1.0, 2.0],
            [1.0, -2.0, 1.0, -1.0],
        ]);
        let inv = m.inverse().unwrap();
        let expected = Mat4::from_rows([
            [0.25, 0.25, 0.25, 0.25],
            [0.2, 0.1, -0.1, -0.2],
            [0.25, -0.25, -0.25, 0.25],
            [0.1, -0.2, 0.2, -0.1],
        ]);
        assert!(inv.is_nearly_equal_within(&expected, 1e-5));
        assert!((m * inv).is_nearly_equal_within(&Mat4::IDENTITY, 1e-5));
    }

    #[test]
    fn singular_matrices_fail_explicitly() {
        let mut m = Mat4::ONE;
        assert!(m.inverse().is_none());
        assert!(!m.invert());
        assert_eq!(m, Mat4::ONE);
        assert_eq!(m.inverted(), Mat4::IDENTITY);
    }

    #[test]
    fn invert_in_place_round_trips() {
        let mut m = Mat3::from_rows([[2.0, 0.0, 1.0], [0.0, 3.0, 0.0], [1.0, 0.0, 1.0]]);
        let original = m;
        assert!(m.invert());
        assert!(!(m == original));
        assert!((m * original).is_nearly_equal_within(&Mat3::IDENTITY, 1e-5));
    }

    #[test]
    fn nearly_equal_checks_every_row() {
        let a = Mat4::IDENTITY;
        let mut b = a;
        b[3][3] += 1.0;
        assert!(!a.is_nearly_equal_within(&b, 1e-3));
        assert!(a.is_nearly_equal_within(&b, 1.5));
        assert!((a - a).is_nearly_zero());
        assert!(!a.is_nearly_zero());
        assert!(a.is_nearly_zero_within(2.0));
    }

    #[test]
    fn glam_round_trip() {
        let m = Mat4::from_rows([
            [1.0, 2.0, 3.0, 4.0],
            [5.0, 6.0, 7.0, 8.0],
            [9.0, 10.0, 11.0, 12.0],
            [13.0, 14.0, 15.0, 16.0],
        ]);
        assert_eq!(Mat4::from_glam(m.to_glam()), m);
        // Round-tripping through glam preserves row-major layout.
        assert_eq!(m.to_glam().col(0).to_array(), [1.0, 5.0, 9.0, 13.0]);
    }

    #[test]
    fn hashes_follow_equality() {
        use smx_core::hash::hash_one;

        let m = Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(hash_one(&m), hash_one(&Mat2::from_rows([[1.0, 2.0], [3.0, 4.0]])));
        assert_ne!(hash_one(&m), hash_one(&Mat2::IDENTITY));
    }

    #[test]
    fn sampled_matrices_stay_in_range() {
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            let m: Mat3 = rng.sample(Standard);
            for i in 0..3 {
                for j in 0..3 {
                    assert!((0.0..1.0).contains(&m[i][j]));
                }
            }
        }
    }
}
