//! Front door tying heightmap synthesis and meshing together.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::error::TerrainError;
use crate::heightmap::generate_heightmap;
use crate::mesh::{build_mesh, TerrainMesh};
use crate::preset::TerrainPreset;

/// One-shot terrain strip generator.
///
/// Holds the dimensions and preset for a strip and produces a fresh
/// [`TerrainMesh`] per call. Generation is synchronous and pure over the
/// parameters and the injected random source; reusing a seed replays the
/// exact same strip.
#[derive(Debug, Clone)]
pub struct TerrainGenerator {
    terrain_width: u32,
    resolution: u32,
    preset: TerrainPreset,
}

impl TerrainGenerator {
    pub fn new(terrain_width: u32, resolution: u32, preset: TerrainPreset) -> Self {
        Self {
            terrain_width,
            resolution,
            preset,
        }
    }

    pub fn preset(&self) -> &TerrainPreset {
        &self.preset
    }

    /// Synthesizes the elevation profile and meshes it.
    pub fn generate(&self, rng: &mut impl Rng) -> Result<TerrainMesh, TerrainError> {
        let heights = generate_heightmap(self.terrain_width, self.resolution, &self.preset, rng)?;
        let mesh = build_mesh(&heights, self.terrain_width, self.resolution);
        log::debug!(
            "meshed terrain strip: {} vertices, {} triangles",
            mesh.vertex_count(),
            mesh.triangle_count()
        );
        Ok(mesh)
    }

    /// Like [`generate`](Self::generate), with a fresh seeded generator per
    /// call so replays stay independent of any shared random state.
    pub fn generate_seeded(&self, seed: u64) -> Result<TerrainMesh, TerrainError> {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        self.generate(&mut rng)
    }

    /// Synthesizes just the elevation profile, without meshing.
    pub fn generate_heightmap(&self, rng: &mut impl Rng) -> Result<Vec<f32>, TerrainError> {
        generate_heightmap(self.terrain_width, self.resolution, &self.preset, rng)
    }
}
