//! # Sandvox Terrain
//!
//! Deterministic procedural generation: what every chunk contains before
//! anyone edits it.
//!
//! ## Design Principles
//!
//! - **Same seed, same world**: every value traces back to one
//!   [`WorldSeed`](sandvox_core::WorldSeed) through named derivation
//!   streams. No wall clock, no global RNG, no platform entropy.
//! - **Pure column math**: height, biome, and cave decisions are per-cell
//!   functions usable with or without a chunk store.
//! - **Two-phase areas**: terrain fills before structures plant, so trees
//!   crossing chunk borders land in finished ground.
//!
//! ## Pipeline
//!
//! ```rust,ignore
//! let config = WorldConfig::default();
//! let generator = TerrainGenerator::new(config.world_seed(), config.terrain);
//! let mut store = ChunkStore::new(config.palette(), config.voxel_size);
//! generator.generate_area(
//!     &mut store,
//!     ChunkCoord::new(-1, 0, -1),
//!     ChunkCoord::new(1, 0, 1),
//! );
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod biome;
pub mod generator;
pub mod noise;

pub use biome::{Biome, BiomeClassifier};
pub use generator::TerrainGenerator;
pub use noise::SimplexNoise;
