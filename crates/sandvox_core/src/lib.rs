//! # Sandvox Core
//!
//! The voxel data model shared by every other crate: dense chunk grids,
//! infinite-world chunk coordinates, material palettes, world seeds, and the
//! TOML world configuration.
//!
//! ## Design Principles
//!
//! - **Deterministic**: no wall-clock time, no global RNG, no pointer
//!   hashing. Everything a world contains derives from one [`WorldSeed`].
//! - **Engine-agnostic**: plain arrays and integers at the API surface, so a
//!   renderer, a headless server, or a test consumes the same data unchanged.
//! - **Fixed memory**: one chunk is one boxed `32^3` array, nothing else.
//!
//! ## Coordinate Spaces
//!
//! | Space | Unit | Type |
//! |-------|------|------|
//! | World | meters-ish, scaled by `voxel_size` | `[f32; 3]` |
//! | World voxel | one voxel | `(i32, i32, i32)` |
//! | Chunk | one `32^3` block | [`ChunkCoord`] |
//! | Local | one voxel inside a chunk | `(usize, usize, usize)` |

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod config;
pub mod coord;
pub mod error;
pub mod grid;
pub mod palette;
pub mod seed;
pub mod voxel;

pub use config::{TerrainSettings, WorldConfig};
pub use coord::{split_voxel_pos, world_to_voxel, ChunkCoord};
pub use error::{ConfigError, ConfigResult};
pub use grid::{VoxelGrid, CHUNK_SIZE, CHUNK_VOLUME};
pub use palette::{MaterialDef, MaterialPalette, MaterialSample};
pub use seed::WorldSeed;
pub use voxel::{material, Voxel};
