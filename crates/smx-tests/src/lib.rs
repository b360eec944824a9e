//! Shared helpers for the SMX-RS integration tests.

#![warn(missing_docs)]

use rand::SeedableRng;
use rand::distributions::Uniform;
use rand::rngs::StdRng;
use smx_linear::Mat4;

/// Deterministic RNG so randomized tests are reproducible.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// A random 4x4 matrix with elements in `[-5, 5)` and a determinant
/// comfortably away from zero, suitable for inversion tests.
pub fn well_conditioned_mat4(rng: &mut StdRng) -> Mat4 {
    let dist = Uniform::new(-5.0f32, 5.0);
    loop {
        let m = Mat4::sample_from(rng, &dist);
        if m.determinant().abs() >= 1.0 {
            return m;
        }
    }
}
