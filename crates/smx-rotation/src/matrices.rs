//! Rotation, scale and translation matrix builders.

use smx_linear::{Mat3, Mat4, Vec3};

use crate::trig::sin_cos_deg;
use crate::{Quaternion, Rotator};

/// Rotation matrix from a unit quaternion.
pub fn mat3_from_quaternion(quat: Quaternion) -> Mat3 {
    let s = 2.0 / quat.dot(quat);
    let xs = quat.x * s;
    let ys = quat.y * s;
    let zs = quat.z * s;
    let wx = quat.w * xs;
    let wy = quat.w * ys;
    let wz = quat.w * zs;
    let xx = quat.x * xs;
    let xy = quat.x * ys;
    let xz = quat.x * zs;
    let yy = quat.y * ys;
    let yz = quat.y * zs;
    let zz = quat.z * zs;

    Mat3::from_rows([
        [1.0 - (yy + zz), xy - wz, xz + wy],
        [xy + wz, 1.0 - (xx + zz), yz - wx],
        [xz - wy, yz + wx, 1.0 - (xx + yy)],
    ])
}

/// Rotation matrix from euler angles in degrees.
///
/// Axis-aligned angles produce exact matrix entries thanks to sine and
/// cosine snapping.
pub fn mat3_from_rotator(rot: Rotator) -> Mat3 {
    let (sy, cy) = sin_cos_deg(rot.yaw);
    let (sp, cp) = sin_cos_deg(rot.pitch);
    let (sr, cr) = sin_cos_deg(rot.roll);

    let cc = cr * cy;
    let cs = cr * sy;
    let sc = sr * cy;
    let ss = sr * sy;

    Mat3::from_rows([
        [cp * cy, sp * sc - cs, sp * cc + ss],
        [cp * sy, sp * ss + cc, sp * cs - sc],
        [-sp, cp * sr, cp * cr],
    ])
}

/// Non-uniform scale matrix.
pub fn mat3_from_scale(scale: Vec3) -> Mat3 {
    Mat3::from_rows([
        [scale.x(), 0.0, 0.0],
        [0.0, scale.y(), 0.0],
        [0.0, 0.0, scale.z()],
    ])
}

/// Translation matrix for row vectors: the offset sits in the last row.
pub fn mat4_from_translation(pos: Vec3) -> Mat4 {
    Mat4::from_rows([
        [1.0, 0.0, 0.0, 0.0],
        [0.0, 1.0, 0.0, 0.0],
        [0.0, 0.0, 1.0, 0.0],
        [pos.x(), pos.y(), pos.z(), 1.0],
    ])
}

/// Combined translation, rotation and scale matrix for row vectors.
///
/// Scale applies first, then the rotation (the transpose of
/// [`mat3_from_rotator`], since row vectors multiply from the left),
/// then the translation in the last row.
pub fn mat4_from_trs(pos: Vec3, rot: Rotator, scale: Vec3) -> Mat4 {
    let r = mat3_from_rotator(rot).transposed().to_rows();
    let s = scale.to_array();

    let mut rows = [[0.0f32; 4]; 4];
    for i in 0..3 {
        for j in 0..3 {
            rows[i][j] = r[i][j] * s[i];
        }
    }
    rows[3] = [pos.x(), pos.y(), pos.z(), 1.0];
    Mat4::from_rows(rows)
}
