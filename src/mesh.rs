//! Triangle mesh construction from an elevation profile.
//!
//! Every heightmap sample becomes a vertical pair of vertices (surface and
//! ground), interleaved top/ground along the strip. Two UV channels are
//! emitted: channel 1 maps world-scale texture space, channel 2 a normalized
//! band used for gradient shading. Meshing is pure: the same profile and
//! resolution always produce bit-identical buffers.

use crate::error::TerrainError;

/// Raw mesh buffers for one terrain strip.
///
/// Positions are `(x, y, 0)`; the consumer recomputes normals and bounds.
/// Byte views are provided for direct upload to GPU vertex/index buffers.
#[derive(Debug, Clone, PartialEq)]
pub struct TerrainMesh {
    /// Interleaved surface/ground vertex pairs, one pair per sample.
    pub positions: Vec<[f32; 3]>,
    /// World-scale texture coordinates.
    pub uv: Vec<[f32; 2]>,
    /// Normalized band coordinates for gradient shading. The ground `v` may
    /// leave `[0, 1]` when a sample's height exceeds the strip's nominal
    /// width; the overflow is a shading signal and is never clamped here.
    pub uv2: Vec<[f32; 2]>,
    /// Triangle list, counter-wound for a single-sided front face.
    pub indices: Vec<u32>,
}

impl TerrainMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn position_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.positions)
    }

    pub fn uv_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uv)
    }

    pub fn uv2_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.uv2)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }

    /// Simplified 2D boundary polyline for a physics/collision layer: one
    /// point per original sample, taken from each pair's surface vertex.
    pub fn collider_outline(&self) -> Vec<[f32; 2]> {
        self.positions
            .iter()
            .step_by(2)
            .map(|p| [p[0], p[1]])
            .collect()
    }
}

/// Builds the strip mesh for `heights`. Pure function of its inputs;
/// `resolution` is clamped to a minimum of 1.
///
/// A profile shorter than two samples has no span to mesh and yields empty
/// buffers.
pub fn build_mesh(heights: &[f32], terrain_width: u32, resolution: u32) -> TerrainMesh {
    let len = heights.len();
    if len < 2 {
        return TerrainMesh {
            positions: Vec::new(),
            uv: Vec::new(),
            uv2: Vec::new(),
            indices: Vec::new(),
        };
    }

    let resolution = resolution.max(1) as f32;
    // Texture span in sample units; also the strip's nominal width times
    // the resolution.
    let tex_size = (len - 1) as f32;

    let mut positions = Vec::with_capacity(len * 2);
    let mut uv = Vec::with_capacity(len * 2);
    let mut uv2 = Vec::with_capacity(len * 2);

    for (i, &height) in heights.iter().enumerate() {
        let x = i as f32 / resolution;
        let u = i as f32 / tex_size;

        // Surface vertex, then the ground vertex directly beneath it.
        positions.push([x, height, 0.0]);
        positions.push([x, 0.0, 0.0]);

        uv.push([u, height / terrain_width as f32]);
        uv.push([u, 0.0]);

        // Ground v reaches 1 when the column has zero height and crosses 0
        // (going negative) once the height exceeds the nominal strip width.
        uv2.push([u, 1.0]);
        uv2.push([u, (height * resolution - tex_size) / -tex_size]);
    }

    let indices = triangulate(positions.len());

    TerrainMesh {
        positions,
        uv,
        uv2,
        indices,
    }
}

/// Validated wrapper around [`build_mesh`] for callers holding raw profiles.
pub fn try_build_mesh(
    heights: &[f32],
    terrain_width: u32,
    resolution: u32,
) -> Result<TerrainMesh, TerrainError> {
    if terrain_width == 0 {
        return Err(TerrainError::invalid("terrain_width must be at least 1"));
    }
    if heights.len() < 2 {
        return Err(TerrainError::invalid(
            "heightmap needs at least two samples",
        ));
    }
    Ok(build_mesh(heights, terrain_width, resolution))
}

/// Emits the triangle list for `count` interleaved strip vertices: each quad
/// of consecutive vertices contributes two counter-wound triangles. Empty for
/// fewer than four vertices.
fn triangulate(count: usize) -> Vec<u32> {
    if count < 4 {
        return Vec::new();
    }

    let mut indices = Vec::with_capacity((count - 2) * 3);
    let mut i = 0u32;
    while i as usize <= count - 4 {
        indices.extend_from_slice(&[i, i + 3, i + 1]);
        indices.extend_from_slice(&[i + 3, i, i + 2]);
        i += 2;
    }
    indices
}
