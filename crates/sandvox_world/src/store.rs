//! The sparse chunk store and its edit operations.
//!
//! Chunks live in a hash map keyed by [`ChunkCoord`] and exist only where
//! terrain was generated or an edit landed. All mutation funnels through the
//! store, so dirty-flag bookkeeping cannot be bypassed: brush edits remesh
//! the chunks they touch before returning, bulk writes defer to
//! [`ChunkStore::rebuild_dirty`], and either path records the remeshed
//! coordinates for render layers to drain via [`ChunkStore::take_remeshed`].

use std::collections::HashMap;

use sandvox_core::{
    material, split_voxel_pos, world_to_voxel, ChunkCoord, MaterialPalette, Voxel, CHUNK_SIZE,
};
use sandvox_mesh::GreedyMesher;

use crate::chunk::Chunk;

/// Sparse, editable world of chunks.
///
/// Single-threaded by design: every edit, generation pass, and remesh runs
/// to completion on the caller's thread. The palette is fixed at
/// construction and shared read-only by every rebuild.
pub struct ChunkStore {
    chunks: HashMap<ChunkCoord, Chunk>,
    palette: MaterialPalette,
    voxel_size: f32,
    mesher: GreedyMesher,
    remeshed: Vec<ChunkCoord>,
}

impl ChunkStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new(palette: MaterialPalette, voxel_size: f32) -> Self {
        Self {
            chunks: HashMap::new(),
            palette,
            voxel_size,
            mesher: GreedyMesher::new(),
            remeshed: Vec::new(),
        }
    }

    /// The material palette shared by every chunk mesh.
    #[must_use]
    pub fn palette(&self) -> &MaterialPalette {
        &self.palette
    }

    /// Edge length of one voxel in world units.
    #[must_use]
    pub const fn voxel_size(&self) -> f32 {
        self.voxel_size
    }

    /// Number of existing chunks.
    #[must_use]
    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// The chunk at `coord`, if it exists.
    #[must_use]
    pub fn chunk(&self, coord: ChunkCoord) -> Option<&Chunk> {
        self.chunks.get(&coord)
    }

    /// Mutable access to the chunk at `coord`, if it exists.
    pub fn chunk_mut(&mut self, coord: ChunkCoord) -> Option<&mut Chunk> {
        self.chunks.get_mut(&coord)
    }

    /// The chunk at `coord`, created all-air on first touch.
    ///
    /// Idempotent: asking twice returns the same chunk with its contents
    /// intact.
    pub fn get_or_create_chunk(&mut self, coord: ChunkCoord) -> &mut Chunk {
        let voxel_size = self.voxel_size;
        self.chunks.entry(coord).or_insert_with(|| {
            tracing::debug!("created chunk at {coord:?}");
            Chunk::new(coord, voxel_size)
        })
    }

    /// Coordinates of all existing chunks, in no particular order.
    pub fn coords(&self) -> impl Iterator<Item = ChunkCoord> + '_ {
        self.chunks.keys().copied()
    }

    /// Voxel at a world voxel position. `None` where no chunk exists.
    #[must_use]
    pub fn voxel(&self, x: i32, y: i32, z: i32) -> Option<Voxel> {
        let (coord, (lx, ly, lz)) = split_voxel_pos(x, y, z);
        self.chunks.get(&coord).map(|chunk| chunk.get(lx, ly, lz))
    }

    /// Writes a voxel at a world voxel position, creating the chunk on
    /// demand.
    ///
    /// The touched chunk goes dirty; remeshing defers to
    /// [`Self::rebuild_dirty`], so bulk writers pay for meshing once.
    pub fn set_voxel(&mut self, x: i32, y: i32, z: i32, voxel: Voxel) {
        let (coord, (lx, ly, lz)) = split_voxel_pos(x, y, z);
        self.get_or_create_chunk(coord).set(lx, ly, lz, voxel);
    }

    /// Voxel containing a world-space point. `None` where no chunk exists.
    #[must_use]
    pub fn try_get_voxel_at(&self, pos: [f32; 3]) -> Option<Voxel> {
        let (x, y, z) = world_to_voxel(pos, self.voxel_size);
        self.voxel(x, y, z)
    }

    /// Writes the voxel containing a world-space point, creating the chunk
    /// on demand.
    pub fn set_voxel_at(&mut self, pos: [f32; 3], voxel: Voxel) {
        let (x, y, z) = world_to_voxel(pos, self.voxel_size);
        self.set_voxel(x, y, z, voxel);
    }

    /// Applies a spherical occupancy brush centered at a world-space point.
    ///
    /// Every cell whose center lies within `radius` of `center` (inclusive,
    /// squared-distance test) shifts occupancy by `delta`, clamped to
    /// `0..=1`: +1 places, -1 carves. `material` overwrites the cell's
    /// material unless it is [`material::KEEP`], which carves without
    /// repainting.
    ///
    /// The brush is a no-op when no chunk contains the center point. It
    /// edits the center chunk and its 26 neighbors where they exist, but
    /// never creates chunks. Touched chunks remesh synchronously before
    /// this returns.
    pub fn apply_brush(&mut self, center: [f32; 3], radius: f32, delta: i8, material: u8) {
        let center_coord = ChunkCoord::from_world_pos(center, self.voxel_size);
        if !self.chunks.contains_key(&center_coord) {
            tracing::debug!("brush at {center:?} skipped: no chunk at {center_coord:?}");
            return;
        }
        let radius_sq = radius * radius;
        let mut touched = 0usize;

        for dz in -1..=1 {
            for dy in -1..=1 {
                for dx in -1..=1 {
                    let coord = center_coord.offset(dx, dy, dz);
                    let Some(chunk) = self.chunks.get_mut(&coord) else {
                        continue;
                    };
                    let origin = chunk.world_origin();
                    let mut hit = false;
                    for z in 0..CHUNK_SIZE {
                        for y in 0..CHUNK_SIZE {
                            for x in 0..CHUNK_SIZE {
                                let cx = origin[0] + (x as f32 + 0.5) * self.voxel_size;
                                let cy = origin[1] + (y as f32 + 0.5) * self.voxel_size;
                                let cz = origin[2] + (z as f32 + 0.5) * self.voxel_size;
                                let dist_sq = (cx - center[0]) * (cx - center[0])
                                    + (cy - center[1]) * (cy - center[1])
                                    + (cz - center[2]) * (cz - center[2]);
                                if dist_sq > radius_sq {
                                    continue;
                                }
                                let mut voxel = chunk.get(x, y, z);
                                let occupancy = i16::from(voxel.occupancy) + i16::from(delta);
                                voxel.occupancy = occupancy.clamp(0, 1) as u8;
                                if material != material::KEEP {
                                    voxel.material = material;
                                }
                                chunk.set(x, y, z, voxel);
                                hit = true;
                            }
                        }
                    }
                    if hit {
                        touched += 1;
                        if chunk.rebuild_if_dirty(&mut self.mesher, &self.palette) {
                            self.remeshed.push(coord);
                        }
                    }
                }
            }
        }
        tracing::debug!("brush at {center:?} (r = {radius}): {touched} chunks remeshed");
    }

    /// Remeshes every dirty chunk. Returns how many were rebuilt.
    ///
    /// The batch half of the remesh pipeline; [`Self::apply_brush`] is the
    /// immediate half.
    pub fn rebuild_dirty(&mut self) -> usize {
        let mut rebuilt = 0;
        for chunk in self.chunks.values_mut() {
            if chunk.rebuild_if_dirty(&mut self.mesher, &self.palette) {
                self.remeshed.push(chunk.coord());
                rebuilt += 1;
            }
        }
        if rebuilt > 0 {
            tracing::debug!("rebuilt {rebuilt} dirty chunk meshes");
        }
        rebuilt
    }

    /// Drains the list of chunks remeshed since the last call.
    ///
    /// Render layers poll this to know which buffers to refresh. Order is
    /// unspecified; a chunk appears once per rebuild, so repeated edits can
    /// list it more than once.
    pub fn take_remeshed(&mut self) -> Vec<ChunkCoord> {
        std::mem::take(&mut self.remeshed)
    }

    /// Fills one chunk with a flat ground slab: every cell below world
    /// height `ground_level` (in voxels) becomes `material`, the rest air.
    ///
    /// Debug worlds and tests use this in place of a terrain generator.
    pub fn fill_flat_chunk(&mut self, coord: ChunkCoord, ground_level: i32, material: u8) {
        let chunk = self.get_or_create_chunk(coord);
        let (_, oy, _) = coord.voxel_origin();
        let grid = chunk.grid_mut();
        for y in 0..CHUNK_SIZE {
            let world_y = oy + y as i32;
            let voxel = if world_y < ground_level {
                Voxel::solid(material)
            } else {
                Voxel::AIR
            };
            for z in 0..CHUNK_SIZE {
                for x in 0..CHUNK_SIZE {
                    grid.set(x, y, z, voxel);
                }
            }
        }
    }
}

impl Default for ChunkStore {
    fn default() -> Self {
        Self::new(MaterialPalette::default(), 0.5)
    }
}
