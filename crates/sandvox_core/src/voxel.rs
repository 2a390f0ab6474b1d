//! The voxel value type.
//!
//! Two bytes per voxel: occupancy and material id. Occupancy is binary today
//! (0 = empty, 1 = solid) but stored as a full byte so a density gradient can
//! move in later without changing the layout or any stored data.

use bytemuck::{Pod, Zeroable};

/// Material ids for the default palette.
///
/// These are indices into [`MaterialPalette`](crate::MaterialPalette), not an
/// enum: worlds can define up to 256 entries and the grid stores the raw byte
/// either way.
pub mod material {
    /// Empty space. Index 0 is air in every palette.
    pub const AIR: u8 = 0;
    /// Packed earth between the surface and the stone layer.
    pub const SOIL: u8 = 1;
    /// Surface cover of plains and forests.
    pub const GRASS: u8 = 2;
    /// Deep terrain filler.
    pub const STONE: u8 = 3;
    /// Desert surface and ocean floor.
    pub const SAND: u8 = 4;
    /// Mountain caps above the snow line.
    pub const SNOW: u8 = 5;
    /// Tree trunks.
    pub const WOOD: u8 = 6;
    /// Tree canopies.
    pub const LEAVES: u8 = 7;
    /// Player-built masonry.
    pub const BRICK: u8 = 8;
    /// Player-built glazing.
    pub const GLASS: u8 = 9;
    /// Brush sentinel: keep the existing material, change occupancy only.
    pub const KEEP: u8 = 255;
}

/// A single voxel cell.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Pod, Zeroable)]
pub struct Voxel {
    /// 0 = empty, 1 = solid. Values above 1 are reserved for future density.
    pub occupancy: u8,
    /// Palette index of the cell's material.
    pub material: u8,
}

impl Voxel {
    /// The empty cell. All-zero, so zeroed memory is valid air.
    pub const AIR: Self = Self {
        occupancy: 0,
        material: material::AIR,
    };

    /// A solid cell of the given material.
    #[must_use]
    pub const fn solid(material: u8) -> Self {
        Self {
            occupancy: 1,
            material,
        }
    }

    /// True when the cell occupies space and produces mesh faces.
    #[must_use]
    pub const fn is_solid(self) -> bool {
        self.occupancy > 0
    }

    /// True when the cell is passable air.
    #[must_use]
    pub const fn is_air(self) -> bool {
        self.occupancy == 0
    }
}
