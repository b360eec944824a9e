//! Degree-angle helpers shared by the conversion paths.

use smx_core::{deg_to_rad, is_nearly_equal};

/// Sine and cosine of an angle in degrees, snapped to exact values at
/// the four axis-aligned angles.
pub(crate) fn sin_cos_deg(deg: f32) -> (f32, f32) {
    if is_nearly_equal(deg, 0.0) {
        (0.0, 1.0)
    } else if is_nearly_equal(deg, 90.0) {
        (1.0, 0.0)
    } else if is_nearly_equal(deg, 180.0) {
        (0.0, -1.0)
    } else if is_nearly_equal(deg, 270.0) {
        (-1.0, 0.0)
    } else {
        deg_to_rad(deg).sin_cos()
    }
}
