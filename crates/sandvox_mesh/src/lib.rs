//! # Sandvox Mesh
//!
//! Greedy surface extraction: voxel grids in, renderer-ready vertex buffers
//! out.
//!
//! ## Design Principles
//!
//! - **Pure function of the grid**: meshing reads a [`VoxelGrid`] and a
//!   [`MaterialPalette`](sandvox_core::MaterialPalette) and writes a
//!   [`ChunkMesh`]. No hidden state, no engine handles.
//! - **Steady-state zero-alloc**: the mesher owns its sweep mask and refills
//!   caller-provided buffers, so remeshing an edited chunk reuses memory.
//! - **Double-sided output**: every boundary plane is emitted for both
//!   winding directions; backface culling picks the visible copy. The sweep
//!   never looks outside its own grid, so chunk-boundary faces are always
//!   present.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut mesher = GreedyMesher::new();
//! let mesh = mesher.mesh(&grid, &palette, 0.5);
//! renderer.upload(mesh.position_bytes(), mesh.index_bytes());
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod greedy;
pub mod mesh;

pub use greedy::GreedyMesher;
pub use mesh::{Aabb, ChunkMesh, MeshStats};

// Grid types, re-exported for mesh-only consumers.
pub use sandvox_core::{VoxelGrid, CHUNK_SIZE};
