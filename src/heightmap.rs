//! Heightmap generation: endpoint seeding, synthesis dispatch, recentering.

use rand::Rng;

use crate::error::TerrainError;
use crate::preset::{TerrainKind, TerrainPreset};
use crate::synthesis;

/// Generates an elevation profile of `terrain_width * resolution + 1` samples.
///
/// The two endpoints are drawn independently from the preset's height band,
/// the interior is filled by the synthesis strategy named by `preset.kind`,
/// and the whole profile is then shifted so its observed `(min + max) / 2`
/// aligns with the band center. The shift recenters only; samples are never
/// clamped back into the band.
///
/// The random source is injected so a seeded generator replays the exact same
/// profile. One generator instance per call keeps replays independent.
pub fn generate_heightmap(
    terrain_width: u32,
    resolution: u32,
    preset: &TerrainPreset,
    rng: &mut impl Rng,
) -> Result<Vec<f32>, TerrainError> {
    if terrain_width == 0 {
        return Err(TerrainError::invalid("terrain_width must be at least 1"));
    }
    if resolution == 0 {
        return Err(TerrainError::invalid("resolution must be at least 1"));
    }
    preset.validate()?;

    let len = terrain_width as usize * resolution as usize + 1;
    let mut heights = vec![0.0f32; len];
    heights[0] = draw_endpoint(preset, rng);
    heights[len - 1] = draw_endpoint(preset, rng);

    match preset.kind {
        TerrainKind::RockyMountains => synthesis::rocky_mountains(
            &mut heights,
            preset.roughness,
            preset.smoothing_factor,
            rng,
        ),
        TerrainKind::RollingHills => {
            synthesis::rolling_hills(&mut heights, preset.roughness, preset.feature_count, rng)
        }
    }

    recenter(&mut heights, preset);

    log::debug!(
        "generated {:?} heightmap: {} samples around band center {}",
        preset.kind,
        heights.len(),
        preset.band_center()
    );

    Ok(heights)
}

fn draw_endpoint(preset: &TerrainPreset, rng: &mut impl Rng) -> f32 {
    if preset.absolute_min_height < preset.absolute_max_height {
        rng.random_range(preset.absolute_min_height..=preset.absolute_max_height)
    } else {
        // Collapsed band: the only value it contains.
        preset.absolute_min_height
    }
}

/// Shifts every sample so the observed `(min + max) / 2` matches the band
/// center. The fold is seeded with the band bounds rather than ±infinity:
/// the max accumulator starts at the band minimum and the min accumulator at
/// the band maximum, which changes the outcome when every sample lies on one
/// side of the band.
fn recenter(heights: &mut [f32], preset: &TerrainPreset) {
    let mut highest = preset.absolute_min_height;
    let mut lowest = preset.absolute_max_height;
    for &h in heights.iter() {
        if h > highest {
            highest = h;
        }
        if h < lowest {
            lowest = h;
        }
    }

    let adjustment = preset.band_center() - (lowest + highest) / 2.0;
    for h in heights.iter_mut() {
        *h += adjustment;
    }
}
