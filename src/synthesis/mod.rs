//! Elevation synthesis strategies.
//!
//! Each strategy mutates the interior samples of a heightmap in place, using
//! the two pre-seeded endpoint values as boundary conditions. Dispatch on
//! [`crate::TerrainKind`] happens in [`crate::heightmap::generate_heightmap`].

mod rocky_mountains;
mod rolling_hills;

pub use rocky_mountains::rocky_mountains;
pub use rolling_hills::rolling_hills;

use rand::Rng;

/// Uniform displacement in `[-roughness, roughness]`.
///
/// Zero roughness draws nothing from the generator, so a smooth preset leaves
/// the random stream untouched beyond the endpoint seeds.
fn displacement(rng: &mut impl Rng, roughness: f32) -> f32 {
    if roughness > 0.0 {
        rng.random_range(-roughness..=roughness)
    } else {
        0.0
    }
}

/// Cosine-eased blend between `start` and `end` at fraction `t` in `[0, 1]`.
fn cosine_interpolate(start: f32, end: f32, t: f32) -> f32 {
    let eased = (1.0 - (t * std::f32::consts::PI).cos()) / 2.0;
    start * (1.0 - eased) + end * eased
}
