//! Dense voxel storage for one chunk.
//!
//! A grid is a boxed `32^3` array plus a cached solid-cell count. It knows
//! nothing about world placement; [`ChunkCoord`](crate::ChunkCoord) handles
//! that. Local coordinates run `0..CHUNK_SIZE` on each axis.

use crate::voxel::Voxel;

/// Chunk side length in voxels.
pub const CHUNK_SIZE: usize = 32;

/// Voxels per chunk.
pub const CHUNK_VOLUME: usize = CHUNK_SIZE * CHUNK_SIZE * CHUNK_SIZE;

/// Dense voxel array for one chunk.
pub struct VoxelGrid {
    voxels: Box<[Voxel; CHUNK_VOLUME]>,
    solid_count: u32,
}

impl VoxelGrid {
    /// Creates an all-air grid.
    #[must_use]
    pub fn new() -> Self {
        Self {
            voxels: Box::new([Voxel::AIR; CHUNK_VOLUME]),
            solid_count: 0,
        }
    }

    /// Flat index for local coordinates. Layout is x-fastest:
    /// `x + CHUNK_SIZE * (y + CHUNK_SIZE * z)`.
    const fn index(x: usize, y: usize, z: usize) -> usize {
        debug_assert!(x < CHUNK_SIZE && y < CHUNK_SIZE && z < CHUNK_SIZE);
        x + CHUNK_SIZE * (y + CHUNK_SIZE * z)
    }

    /// Returns the voxel at local coordinates.
    ///
    /// # Panics
    ///
    /// Debug builds panic when a coordinate is outside `0..CHUNK_SIZE`.
    /// Release builds do not range-check each axis; callers pass validated
    /// coordinates or use [`Self::try_get`].
    #[must_use]
    pub fn get(&self, x: usize, y: usize, z: usize) -> Voxel {
        self.voxels[Self::index(x, y, z)]
    }

    /// Returns the voxel at local coordinates, or `None` outside the grid.
    #[must_use]
    pub fn try_get(&self, x: usize, y: usize, z: usize) -> Option<Voxel> {
        if x < CHUNK_SIZE && y < CHUNK_SIZE && z < CHUNK_SIZE {
            Some(self.voxels[Self::index(x, y, z)])
        } else {
            None
        }
    }

    /// Writes the voxel at local coordinates, keeping the solid count
    /// current.
    ///
    /// # Panics
    ///
    /// Same range policy as [`Self::get`].
    pub fn set(&mut self, x: usize, y: usize, z: usize, voxel: Voxel) {
        let idx = Self::index(x, y, z);
        let old = self.voxels[idx];
        if old.is_solid() {
            self.solid_count -= 1;
        }
        if voxel.is_solid() {
            self.solid_count += 1;
        }
        self.voxels[idx] = voxel;
    }

    /// Fills every cell with the same voxel.
    pub fn fill(&mut self, voxel: Voxel) {
        self.voxels.fill(voxel);
        self.solid_count = if voxel.is_solid() {
            CHUNK_VOLUME as u32
        } else {
            0
        };
    }

    /// Number of solid cells.
    #[must_use]
    pub const fn solid_count(&self) -> u32 {
        self.solid_count
    }

    /// True when no cell is solid. Empty grids skip meshing entirely.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.solid_count == 0
    }

    /// True when every cell is solid.
    #[must_use]
    pub const fn is_full(&self) -> bool {
        self.solid_count as usize == CHUNK_VOLUME
    }

    /// Raw bytes of the voxel array, for hashing, diffing, or upload.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.voxels[..])
    }
}

impl Default for VoxelGrid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::voxel::material;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = VoxelGrid::new();
        assert!(grid.is_empty());
        assert!(!grid.is_full());
        assert_eq!(grid.solid_count(), 0);
        assert_eq!(grid.get(0, 0, 0), Voxel::AIR);
        assert_eq!(grid.get(31, 31, 31), Voxel::AIR);
    }

    #[test]
    fn test_set_get_round_trip() {
        let mut grid = VoxelGrid::new();
        let voxel = Voxel::solid(material::STONE);

        grid.set(0, 0, 0, voxel);
        grid.set(31, 31, 31, voxel);
        grid.set(5, 17, 23, voxel);

        assert_eq!(grid.get(0, 0, 0), voxel);
        assert_eq!(grid.get(31, 31, 31), voxel);
        assert_eq!(grid.get(5, 17, 23), voxel);
        assert_eq!(grid.get(5, 17, 22), Voxel::AIR);
    }

    #[test]
    fn test_solid_count_tracking() {
        let mut grid = VoxelGrid::new();

        grid.set(1, 2, 3, Voxel::solid(material::SOIL));
        assert_eq!(grid.solid_count(), 1);

        // Overwriting solid with solid must not double-count.
        grid.set(1, 2, 3, Voxel::solid(material::STONE));
        assert_eq!(grid.solid_count(), 1);

        grid.set(1, 2, 3, Voxel::AIR);
        assert_eq!(grid.solid_count(), 0);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_fill() {
        let mut grid = VoxelGrid::new();
        grid.fill(Voxel::solid(material::SAND));
        assert!(grid.is_full());
        assert_eq!(grid.solid_count() as usize, CHUNK_VOLUME);
        assert_eq!(grid.get(16, 16, 16).material, material::SAND);

        grid.fill(Voxel::AIR);
        assert!(grid.is_empty());
    }

    #[test]
    fn test_try_get_out_of_range_is_none() {
        let grid = VoxelGrid::new();
        assert!(grid.try_get(0, 0, 0).is_some());
        assert!(grid.try_get(31, 31, 31).is_some());
        assert!(grid.try_get(32, 0, 0).is_none());
        assert!(grid.try_get(0, 32, 0).is_none());
        assert!(grid.try_get(0, 0, 32).is_none());
    }

    #[test]
    fn test_flat_index_is_x_fastest() {
        let mut grid = VoxelGrid::new();
        grid.set(1, 0, 0, Voxel::solid(1));
        grid.set(0, 1, 0, Voxel::solid(2));
        grid.set(0, 0, 1, Voxel::solid(3));

        let bytes = grid.as_bytes();
        // Two bytes per voxel: occupancy, material.
        assert_eq!(bytes[2], 1);
        assert_eq!(bytes[3], 1);
        assert_eq!(bytes[CHUNK_SIZE * 2], 1);
        assert_eq!(bytes[CHUNK_SIZE * 2 + 1], 2);
        assert_eq!(bytes[CHUNK_SIZE * CHUNK_SIZE * 2], 1);
        assert_eq!(bytes[CHUNK_SIZE * CHUNK_SIZE * 2 + 1], 3);
    }

    #[test]
    fn test_as_bytes_length() {
        let grid = VoxelGrid::new();
        assert_eq!(grid.as_bytes().len(), CHUNK_VOLUME * 2);
    }
}
