//! # Sandvox World
//!
//! The mutable world: a sparse map of chunks, the dirty-flag remesh
//! pipeline, and the spherical brush players dig and build with.
//!
//! ## Design Principles
//!
//! - **Sparse**: chunks exist only where something happened. An untouched
//!   region costs nothing and reads as `None`, never as fake air.
//! - **Lazy meshing, eager edits**: bulk writes (terrain fill, structures)
//!   mark chunks dirty and batch their rebuild; brush edits remesh
//!   synchronously so the crater is visible the same frame.
//! - **Single mutator**: no locks, no queues. One caller thread owns the
//!   store; determinism falls out for free.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let mut store = ChunkStore::default();
//! store.fill_flat_chunk(ChunkCoord::new(0, 0, 0), 16, material::SOIL);
//! store.apply_brush([8.0, 8.0, 8.0], 1.2, -1, material::KEEP);
//! for coord in store.take_remeshed() {
//!     renderer.refresh(coord, store.chunk(coord).unwrap().mesh());
//! }
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![deny(clippy::perf)]

pub mod chunk;
pub mod store;

pub use chunk::Chunk;
pub use store::ChunkStore;
