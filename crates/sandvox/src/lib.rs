//! # SANDVOX
//!
//! Engine-independent voxel sandbox: deterministic terrain, greedy meshing,
//! and sphere-brush editing over a sparse chunk world.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                          SANDVOX                                │
//! ├─────────────────────────────────────────────────────────────────┤
//! │                                                                 │
//! │  ┌──────────────┐          ┌──────────────┐                     │
//! │  │ sandvox_core │          │ sandvox_mesh │                     │
//! │  │              │─────────>│              │                     │
//! │  │ • VoxelGrid  │          │ • GreedyMesh │                     │
//! │  │ • Coords     │          │ • ChunkMesh  │                     │
//! │  │ • Config     │          │ • Normals    │                     │
//! │  └──────┬───────┘          └──────┬───────┘                     │
//! │         │                         │                             │
//! │         │        ┌────────────────┘                             │
//! │         v        v                                              │
//! │  ┌──────────────────┐       ┌─────────────────┐                 │
//! │  │ sandvox_world    │<──────│ sandvox_terrain │                 │
//! │  │                  │       │                 │                 │
//! │  │ • ChunkStore     │       │ • Noise fields  │                 │
//! │  │ • Brush edits    │       │ • Biomes        │                 │
//! │  │ • Dirty remesh   │       │ • Trees         │                 │
//! │  └──────────────────┘       └─────────────────┘                 │
//! │                                                                 │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The host engine owns the frame loop, rendering, and input. It hands this
//! crate a TOML config and brush strokes; it gets back chunk meshes and a
//! list of which ones changed.
//!
//! ## Quick Start
//!
//! ```
//! use sandvox::{ChunkCoord, ChunkStore, TerrainGenerator, WorldConfig};
//!
//! let config = WorldConfig::default();
//! let generator = TerrainGenerator::new(config.world_seed(), config.terrain);
//! let mut store = ChunkStore::new(config.palette(), config.voxel_size);
//!
//! generator.generate_chunk(&mut store, ChunkCoord::new(0, 0, 0));
//! for coord in store.take_remeshed() {
//!     let mesh = store.chunk(coord).unwrap().mesh();
//!     // Upload mesh.positions / normals / colors / indices.
//!     assert_eq!(mesh.positions.len(), mesh.normals.len());
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

// The four library crates, under stable module names.
pub use sandvox_core as core;
pub use sandvox_mesh as mesh;
pub use sandvox_terrain as terrain;
pub use sandvox_world as world;

// The types nearly every host touches, at the crate root.
pub use sandvox_core::{
    material, ChunkCoord, MaterialPalette, TerrainSettings, Voxel, VoxelGrid, WorldConfig,
    WorldSeed,
};
pub use sandvox_mesh::{Aabb, ChunkMesh, GreedyMesher, MeshStats};
pub use sandvox_terrain::{Biome, TerrainGenerator};
pub use sandvox_world::{Chunk, ChunkStore};
