use serde::{Deserialize, Serialize};

use crate::error::TerrainError;

/// Synthesis strategy for the elevation profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TerrainKind {
    /// Recursive midpoint displacement: fractal, self-similar jaggedness.
    RockyMountains,
    /// Sparse feature points blended with cosine easing: smooth hills.
    RollingHills,
}

/// Tuning parameters for one terrain generation call.
///
/// The preset is immutable for the duration of the call and owned by the
/// caller. `feature_count` only matters for [`TerrainKind::RollingHills`],
/// `smoothing_factor` only for [`TerrainKind::RockyMountains`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TerrainPreset {
    pub kind: TerrainKind,
    /// Maximum random displacement applied to a synthesized sample.
    pub roughness: f32,
    /// Geometric decay of `roughness` per recursion depth. Must stay above 1,
    /// otherwise displacement never shrinks and the profile diverges.
    pub smoothing_factor: f32,
    /// Number of interior control points for hill synthesis.
    pub feature_count: u32,
    pub absolute_min_height: f32,
    pub absolute_max_height: f32,
}

impl Default for TerrainPreset {
    fn default() -> Self {
        Self {
            kind: TerrainKind::RockyMountains,
            roughness: 24.0,
            smoothing_factor: 2.0,
            feature_count: 4,
            absolute_min_height: 5.0,
            absolute_max_height: 75.0,
        }
    }
}

impl TerrainPreset {
    /// Midpoint of the configured height band.
    pub fn band_center(&self) -> f32 {
        (self.absolute_min_height + self.absolute_max_height) / 2.0
    }

    /// Checks the preset before any generation work happens.
    ///
    /// A collapsed band (`min == max`) is degenerate but valid: it produces a
    /// flat profile rather than an error.
    pub fn validate(&self) -> Result<(), TerrainError> {
        for (name, value) in [
            ("roughness", self.roughness),
            ("smoothing_factor", self.smoothing_factor),
            ("absolute_min_height", self.absolute_min_height),
            ("absolute_max_height", self.absolute_max_height),
        ] {
            if !value.is_finite() {
                return Err(TerrainError::invalid(format!(
                    "{name} must be finite, got {value}"
                )));
            }
        }

        if self.absolute_min_height > self.absolute_max_height {
            return Err(TerrainError::invalid(format!(
                "height band is inverted: min {} > max {}",
                self.absolute_min_height, self.absolute_max_height
            )));
        }

        if self.roughness < 0.0 {
            return Err(TerrainError::invalid(format!(
                "roughness must be non-negative, got {}",
                self.roughness
            )));
        }

        if self.kind == TerrainKind::RockyMountains && self.smoothing_factor <= 1.0 {
            return Err(TerrainError::invalid(format!(
                "smoothing_factor must exceed 1 for RockyMountains, got {}",
                self.smoothing_factor
            )));
        }

        Ok(())
    }
}
