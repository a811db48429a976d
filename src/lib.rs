#![warn(clippy::all, rust_2018_idioms)]

//! Procedural 2D terrain strips.
//!
//! A one-dimensional elevation profile is synthesized from a [`TerrainPreset`]
//! (midpoint displacement for jagged ranges, feature points with cosine easing
//! for rolling hills), recentered around the configured height band, and turned
//! into a renderable triangle mesh with two UV channels.
//!
//! ```
//! use ridgeline::{TerrainGenerator, TerrainKind, TerrainPreset};
//!
//! let preset = TerrainPreset {
//!     kind: TerrainKind::RockyMountains,
//!     ..TerrainPreset::default()
//! };
//! let generator = TerrainGenerator::new(100, 2, preset);
//! let mesh = generator.generate_seeded(42).unwrap();
//! assert_eq!(mesh.positions.len(), 2 * (100 * 2 + 1));
//! ```

pub mod error;
pub mod generator;
pub mod heightmap;
pub mod mesh;
pub mod preset;
pub mod synthesis;

pub use error::TerrainError;
pub use generator::TerrainGenerator;
pub use heightmap::generate_heightmap;
pub use mesh::{build_mesh, TerrainMesh};
pub use preset::{TerrainKind, TerrainPreset};
