//! Chunk coordinates and world-space addressing.
//!
//! World voxel space is the infinite integer lattice; chunk space divides it
//! into `32^3` blocks. Both conversions use floored (Euclidean) division so
//! negative coordinates map correctly: world voxel -1 lives in chunk -1 at
//! local index 31, never in chunk 0.

use crate::grid::CHUNK_SIZE;

/// Signed chunk size, for coordinate arithmetic.
const CHUNK_SIZE_I32: i32 = CHUNK_SIZE as i32;

/// Position of a chunk in the infinite chunk lattice.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ChunkCoord {
    /// Chunk index along world X.
    pub x: i32,
    /// Chunk index along world Y.
    pub y: i32,
    /// Chunk index along world Z.
    pub z: i32,
}

impl ChunkCoord {
    /// Creates a chunk coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// The chunk containing the given world voxel position.
    #[must_use]
    pub const fn from_voxel_pos(x: i32, y: i32, z: i32) -> Self {
        Self {
            x: x.div_euclid(CHUNK_SIZE_I32),
            y: y.div_euclid(CHUNK_SIZE_I32),
            z: z.div_euclid(CHUNK_SIZE_I32),
        }
    }

    /// The chunk containing the given world-space point.
    #[must_use]
    pub fn from_world_pos(pos: [f32; 3], voxel_size: f32) -> Self {
        let span = CHUNK_SIZE as f32 * voxel_size;
        Self {
            x: (pos[0] / span).floor() as i32,
            y: (pos[1] / span).floor() as i32,
            z: (pos[2] / span).floor() as i32,
        }
    }

    /// World voxel position of this chunk's minimum corner.
    #[must_use]
    pub const fn voxel_origin(self) -> (i32, i32, i32) {
        (
            self.x * CHUNK_SIZE_I32,
            self.y * CHUNK_SIZE_I32,
            self.z * CHUNK_SIZE_I32,
        )
    }

    /// World-space position of this chunk's minimum corner.
    #[must_use]
    pub fn world_origin(self, voxel_size: f32) -> [f32; 3] {
        let span = CHUNK_SIZE as f32 * voxel_size;
        [
            self.x as f32 * span,
            self.y as f32 * span,
            self.z as f32 * span,
        ]
    }

    /// This coordinate displaced by whole chunks.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32, dz: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.z + dz)
    }
}

/// Splits a world voxel position into its owning chunk and local indices.
///
/// The two halves always reassemble: `chunk.voxel_origin() + local` is the
/// input position, for any sign of input.
#[must_use]
pub const fn split_voxel_pos(x: i32, y: i32, z: i32) -> (ChunkCoord, (usize, usize, usize)) {
    let chunk = ChunkCoord::from_voxel_pos(x, y, z);
    let local = (
        x.rem_euclid(CHUNK_SIZE_I32) as usize,
        y.rem_euclid(CHUNK_SIZE_I32) as usize,
        z.rem_euclid(CHUNK_SIZE_I32) as usize,
    );
    (chunk, local)
}

/// Floors a world-space point to the world voxel containing it.
///
/// Voxel cells are half-open: the point exactly on a cell's upper face
/// belongs to the next cell.
#[must_use]
pub fn world_to_voxel(pos: [f32; 3], voxel_size: f32) -> (i32, i32, i32) {
    (
        (pos[0] / voxel_size).floor() as i32,
        (pos[1] / voxel_size).floor() as i32,
        (pos[2] / voxel_size).floor() as i32,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_positive_voxels_map_to_positive_chunks() {
        assert_eq!(ChunkCoord::from_voxel_pos(0, 0, 0), ChunkCoord::new(0, 0, 0));
        assert_eq!(
            ChunkCoord::from_voxel_pos(31, 31, 31),
            ChunkCoord::new(0, 0, 0)
        );
        assert_eq!(ChunkCoord::from_voxel_pos(32, 0, 0), ChunkCoord::new(1, 0, 0));
    }

    #[test]
    fn test_negative_voxels_floor_correctly() {
        assert_eq!(
            ChunkCoord::from_voxel_pos(-1, -1, -1),
            ChunkCoord::new(-1, -1, -1)
        );
        assert_eq!(
            ChunkCoord::from_voxel_pos(-32, 0, 0),
            ChunkCoord::new(-1, 0, 0)
        );
        assert_eq!(
            ChunkCoord::from_voxel_pos(-33, 0, 0),
            ChunkCoord::new(-2, 0, 0)
        );
    }

    #[test]
    fn test_split_reassembles_for_any_sign() {
        let samples = [
            (0, 0, 0),
            (31, 31, 31),
            (32, 64, 96),
            (-1, -1, -1),
            (-32, -33, -64),
            (100, -7, 45),
        ];
        for (x, y, z) in samples {
            let (chunk, (lx, ly, lz)) = split_voxel_pos(x, y, z);
            let (ox, oy, oz) = chunk.voxel_origin();
            assert_eq!(ox + lx as i32, x, "x mismatch for {:?}", (x, y, z));
            assert_eq!(oy + ly as i32, y, "y mismatch for {:?}", (x, y, z));
            assert_eq!(oz + lz as i32, z, "z mismatch for {:?}", (x, y, z));
            assert!(lx < CHUNK_SIZE && ly < CHUNK_SIZE && lz < CHUNK_SIZE);
        }
    }

    #[test]
    fn test_negative_voxel_lands_at_high_local_index() {
        let (chunk, local) = split_voxel_pos(-1, -1, -1);
        assert_eq!(chunk, ChunkCoord::new(-1, -1, -1));
        assert_eq!(local, (31, 31, 31));
    }

    #[test]
    fn test_world_pos_to_chunk() {
        // voxel_size 0.5 puts the chunk span at 16.0 world units.
        let size = 0.5;
        assert_eq!(
            ChunkCoord::from_world_pos([0.0, 0.0, 0.0], size),
            ChunkCoord::new(0, 0, 0)
        );
        assert_eq!(
            ChunkCoord::from_world_pos([15.9, 0.0, 0.0], size),
            ChunkCoord::new(0, 0, 0)
        );
        assert_eq!(
            ChunkCoord::from_world_pos([16.0, 0.0, 0.0], size),
            ChunkCoord::new(1, 0, 0)
        );
        assert_eq!(
            ChunkCoord::from_world_pos([-0.1, 0.0, 0.0], size),
            ChunkCoord::new(-1, 0, 0)
        );
    }

    #[test]
    fn test_world_to_voxel_half_open_cells() {
        let size = 0.5;
        assert_eq!(world_to_voxel([0.0, 0.0, 0.0], size), (0, 0, 0));
        assert_eq!(world_to_voxel([0.49, 0.0, 0.0], size), (0, 0, 0));
        assert_eq!(world_to_voxel([0.5, 0.0, 0.0], size), (1, 0, 0));
        assert_eq!(world_to_voxel([-0.01, 0.0, 0.0], size), (-1, 0, 0));
    }

    #[test]
    fn test_world_origin_matches_voxel_origin() {
        let coord = ChunkCoord::new(2, -1, 0);
        let (vx, vy, vz) = coord.voxel_origin();
        let origin = coord.world_origin(0.5);
        assert!((origin[0] - vx as f32 * 0.5).abs() < f32::EPSILON);
        assert!((origin[1] - vy as f32 * 0.5).abs() < f32::EPSILON);
        assert!((origin[2] - vz as f32 * 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_offset() {
        let coord = ChunkCoord::new(1, 2, 3).offset(-1, 0, 2);
        assert_eq!(coord, ChunkCoord::new(0, 2, 5));
    }
}
