//! The bit-identity hash contract across the value types, and FNV-backed
//! collections.

use std::collections::HashMap;

use smx_color::Color;
use smx_core::hash::{FnvBuildHasher, hash_bytes, hash_one};
use smx_linear::{IntVec2, Mat4, Vec3};
use smx_rotation::{Quaternion, Rotator};

#[test]
fn bit_identical_values_hash_equal() {
    assert_eq!(
        hash_one(&Vec3::new(1.0, 2.0, 3.0)),
        hash_one(&Vec3::new(1.0, 2.0, 3.0))
    );
    assert_eq!(hash_one(&Mat4::IDENTITY), hash_one(&Mat4::IDENTITY));
    assert_eq!(
        hash_one(&Quaternion::IDENTITY),
        hash_one(&Quaternion::new(0.0, 0.0, 0.0, 1.0))
    );
    assert_eq!(hash_one(&Rotator::ZERO), hash_one(&Rotator::new(0.0, 0.0, 0.0)));
    assert_eq!(hash_one(&Color::RED), hash_one(&Color::new(255, 0, 0)));
}

#[test]
fn distinct_values_hash_distinct() {
    // Not guaranteed for arbitrary inputs, but these must not collide.
    assert_ne!(
        hash_one(&Vec3::new(1.0, 2.0, 3.0)),
        hash_one(&Vec3::new(3.0, 2.0, 1.0))
    );
    assert_ne!(hash_one(&Mat4::IDENTITY), hash_one(&Mat4::ZERO));
    assert_ne!(hash_one(&IntVec2::new(1, 2)), hash_one(&IntVec2::new(2, 1)));
}

#[test]
fn vector_hash_matches_raw_component_bytes() {
    let v = Vec3::new(1.5, -2.25, 8.0);
    let mut bytes = Vec::new();
    for c in v.to_array() {
        bytes.extend_from_slice(&c.to_bits().to_ne_bytes());
    }
    assert_eq!(hash_one(&v), hash_bytes(&bytes));
}

#[test]
fn int_vectors_key_fnv_maps() {
    let mut grid: HashMap<IntVec2, &str, FnvBuildHasher> = HashMap::default();
    grid.insert(IntVec2::new(0, 0), "origin");
    grid.insert(IntVec2::new(3, -4), "corner");
    grid.insert(IntVec2::new(0, 0), "overwritten");

    assert_eq!(grid.len(), 2);
    assert_eq!(grid[&IntVec2::new(0, 0)], "overwritten");
    assert_eq!(grid.get(&IntVec2::new(3, -4)), Some(&"corner"));
    assert_eq!(grid.get(&IntVec2::new(-3, 4)), None);
}

#[test]
fn colors_key_fnv_maps_through_their_packed_bits() {
    let mut names: HashMap<Color, &str, FnvBuildHasher> = HashMap::default();
    names.insert(Color::RED, "red");
    names.insert(Color::from_bits(Color::BLUE.to_bits()), "blue");

    assert_eq!(names[&Color::new(255, 0, 0)], "red");
    assert_eq!(names[&Color::BLUE], "blue");
}
