//! One placed chunk: grid, cached mesh, dirty flag.

use sandvox_core::{ChunkCoord, MaterialPalette, Voxel, VoxelGrid, CHUNK_SIZE};
use sandvox_mesh::{Aabb, ChunkMesh, GreedyMesher};

/// A chunk placed in the world.
///
/// Couples a [`VoxelGrid`] to its cached [`ChunkMesh`] through a dirty flag.
/// The invariant is one-directional: whenever the mesh might be stale, the
/// chunk is dirty. New chunks start dirty, so the first rebuild always
/// produces a mesh.
pub struct Chunk {
    coord: ChunkCoord,
    voxel_size: f32,
    grid: VoxelGrid,
    mesh: ChunkMesh,
    dirty: bool,
}

impl Chunk {
    /// Creates an all-air chunk at `coord`.
    #[must_use]
    pub fn new(coord: ChunkCoord, voxel_size: f32) -> Self {
        Self {
            coord,
            voxel_size,
            grid: VoxelGrid::new(),
            mesh: ChunkMesh::new(),
            dirty: true,
        }
    }

    /// Position of this chunk in the chunk lattice.
    #[must_use]
    pub const fn coord(&self) -> ChunkCoord {
        self.coord
    }

    /// Edge length of one voxel in world units.
    #[must_use]
    pub const fn voxel_size(&self) -> f32 {
        self.voxel_size
    }

    /// World-space position of the chunk's minimum corner.
    #[must_use]
    pub fn world_origin(&self) -> [f32; 3] {
        self.coord.world_origin(self.voxel_size)
    }

    /// World-space bounds of the whole chunk volume.
    #[must_use]
    pub fn world_bounds(&self) -> Aabb {
        let min = self.world_origin();
        let span = CHUNK_SIZE as f32 * self.voxel_size;
        Aabb {
            min,
            max: [min[0] + span, min[1] + span, min[2] + span],
        }
    }

    /// Read access to the voxel grid.
    #[must_use]
    pub fn grid(&self) -> &VoxelGrid {
        &self.grid
    }

    /// Write access to the voxel grid, marking the chunk dirty up front.
    ///
    /// Bulk writers (terrain generation) fill grids through this borrow.
    pub fn grid_mut(&mut self) -> &mut VoxelGrid {
        self.dirty = true;
        &mut self.grid
    }

    /// Voxel at local coordinates.
    #[must_use]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Voxel {
        self.grid.get(x, y, z)
    }

    /// Writes a voxel at local coordinates and marks the chunk dirty.
    pub fn set(&mut self, x: usize, y: usize, z: usize, voxel: Voxel) {
        self.grid.set(x, y, z, voxel);
        self.dirty = true;
    }

    /// Fills the whole grid and marks the chunk dirty.
    pub fn fill(&mut self, voxel: Voxel) {
        self.grid.fill(voxel);
        self.dirty = true;
    }

    /// True when the mesh no longer matches the grid.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// The cached mesh. Stale while [`Self::is_dirty`] returns true.
    #[must_use]
    pub fn mesh(&self) -> &ChunkMesh {
        &self.mesh
    }

    /// Remeshes if dirty. Returns whether a rebuild happened.
    pub fn rebuild_if_dirty(
        &mut self,
        mesher: &mut GreedyMesher,
        palette: &MaterialPalette,
    ) -> bool {
        if !self.dirty {
            return false;
        }
        mesher.mesh_into(&self.grid, palette, self.voxel_size, &mut self.mesh);
        self.dirty = false;
        true
    }
}
