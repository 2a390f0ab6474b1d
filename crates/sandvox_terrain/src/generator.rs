//! # Terrain Generation
//!
//! Turns `(seed, settings, chunk coordinate)` into voxels, in four stages:
//!
//! 1. **Height field**: four octaves of 2D noise give each column a surface
//!    height around `base_height`.
//! 2. **Biome**: height plus two climate channels, classified per column.
//! 3. **Fill**: air above the surface, cave carving below the crust,
//!    materials layered by depth.
//! 4. **Structures**: trees planted per chunk from a chunk-seeded RNG;
//!    canopies write through world-space addressing and may cross borders.
//!
//! Every stage is a pure function of the seed and settings, so chunks can be
//! generated in any order, regenerated, or queried cell-by-cell without a
//! store at all.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use sandvox_core::{
    material, ChunkCoord, TerrainSettings, Voxel, VoxelGrid, WorldSeed, CHUNK_SIZE,
};
use sandvox_world::ChunkStore;

use crate::biome::{Biome, BiomeClassifier};
use crate::noise::SimplexNoise;

/// Signed chunk size, for world coordinate arithmetic.
const CHUNK_SIZE_I32: i32 = CHUNK_SIZE as i32;

/// Deterministic terrain generator.
///
/// Construction fixes everything: two generators built from the same seed
/// and settings produce byte-identical chunks, in any generation order, on
/// any platform.
pub struct TerrainGenerator {
    height_noise: SimplexNoise,
    cave_noise: SimplexNoise,
    classifier: BiomeClassifier,
    settings: TerrainSettings,
    seed: WorldSeed,
}

impl TerrainGenerator {
    /// Octaves summed into the height field.
    const HEIGHT_OCTAVES: u32 = 4;
    /// Sample frequency of the 3D cave field.
    const CAVE_SCALE: f64 = 0.05;
    /// Depth band below the surface that cave carving leaves intact.
    const CAVE_CRUST: f64 = 5.0;
    /// Seed stream for the height field.
    const HEIGHT_STREAM: u64 = 100;
    /// Seed stream for cave carving.
    const CAVE_STREAM: u64 = 101;
    /// Seed stream for structure placement.
    const STRUCTURE_STREAM: u64 = 102;
    /// Columns this close to a chunk's x/z edges never root a tree.
    const TREE_MARGIN: i32 = 4;
    /// Shortest trunk, in voxels above the ground voxel.
    const TREE_MIN_HEIGHT: i32 = 4;
    /// Tallest trunk.
    const TREE_MAX_HEIGHT: i32 = 6;
    /// Leaf canopy radius around the trunk top.
    const CANOPY_RADIUS: i32 = 2;

    /// Creates a generator for a seed and settings.
    #[must_use]
    pub fn new(seed: WorldSeed, settings: TerrainSettings) -> Self {
        Self {
            height_noise: SimplexNoise::new(seed.derive(Self::HEIGHT_STREAM)),
            cave_noise: SimplexNoise::new(seed.derive(Self::CAVE_STREAM)),
            classifier: BiomeClassifier::new(seed, &settings),
            settings,
            seed,
        }
    }

    /// The seed this generator was built from.
    #[must_use]
    pub const fn seed(&self) -> WorldSeed {
        self.seed
    }

    /// The settings this generator was built from.
    #[must_use]
    pub const fn settings(&self) -> &TerrainSettings {
        &self.settings
    }

    /// Surface height of a world column, in world voxel units.
    ///
    /// Unnormalized octave sum: amplitudes halve and frequencies double per
    /// octave, and the raw sum spreads over `height_scale` voxels around
    /// `base_height`.
    #[must_use]
    pub fn surface_height(&self, world_x: f64, world_z: f64) -> f64 {
        let mut total = 0.0;
        let mut amplitude = 1.0;
        let mut frequency = self.settings.noise_scale;
        for _ in 0..Self::HEIGHT_OCTAVES {
            total += self
                .height_noise
                .sample(world_x * frequency, world_z * frequency)
                * amplitude;
            amplitude *= 0.5;
            frequency *= 2.0;
        }
        f64::from(self.settings.base_height) + total * self.settings.height_scale
    }

    /// Biome of a world column.
    #[must_use]
    pub fn biome_at(&self, world_x: f64, world_z: f64) -> Biome {
        let height = self.surface_height(world_x, world_z);
        self.classifier.classify(world_x, world_z, height)
    }

    /// Biome used for a chunk's structure pass, classified at the chunk's
    /// center column.
    #[must_use]
    pub fn chunk_biome(&self, coord: ChunkCoord) -> Biome {
        let (ox, _, oz) = coord.voxel_origin();
        let half = CHUNK_SIZE_I32 / 2;
        self.biome_at(f64::from(ox + half), f64::from(oz + half))
    }

    /// The terrain voxel at integer world voxel coordinates.
    ///
    /// Pure height/biome/cave evaluation; structures are not included. Any
    /// cell can be queried without generating its chunk.
    #[must_use]
    pub fn voxel_at(&self, x: i32, y: i32, z: i32) -> Voxel {
        let (fx, fz) = (f64::from(x), f64::from(z));
        let height = self.surface_height(fx, fz);
        let biome = self.classifier.classify(fx, fz, height);
        self.voxel_for_column(x, y, z, height, biome)
    }

    /// Fills `grid` with terrain for the chunk at `coord`.
    ///
    /// Height and biome are evaluated once per column; the y loop then runs
    /// on cached values. Structures are a separate pass, see
    /// [`Self::place_structures`].
    pub fn generate_grid(&self, coord: ChunkCoord, grid: &mut VoxelGrid) {
        let (ox, oy, oz) = coord.voxel_origin();
        for z in 0..CHUNK_SIZE {
            for x in 0..CHUNK_SIZE {
                let world_x = ox + x as i32;
                let world_z = oz + z as i32;
                let (fx, fz) = (f64::from(world_x), f64::from(world_z));
                let height = self.surface_height(fx, fz);
                let biome = self.classifier.classify(fx, fz, height);
                for y in 0..CHUNK_SIZE {
                    let world_y = oy + y as i32;
                    grid.set(
                        x,
                        y,
                        z,
                        self.voxel_for_column(world_x, world_y, world_z, height, biome),
                    );
                }
            }
        }
        tracing::trace!(
            "filled chunk {coord:?}: {} solid voxels",
            grid.solid_count()
        );
    }

    /// Creates the chunk at `coord` in `store` and fills it with terrain.
    ///
    /// No structures, no remesh; callers batch those.
    pub fn fill_chunk(&self, store: &mut ChunkStore, coord: ChunkCoord) {
        let chunk = store.get_or_create_chunk(coord);
        self.generate_grid(coord, chunk.grid_mut());
    }

    /// Plants trees for the chunk at `coord`.
    ///
    /// The count comes from the chunk's center-column biome. Each tree picks
    /// a column in the chunk interior, roots on the highest solid voxel
    /// within this chunk's own y-range (columns that are all air get
    /// nothing), and grows a trunk plus a spherical canopy. Writes go
    /// through world-space addressing and may create neighboring chunks.
    pub fn place_structures(&self, store: &mut ChunkStore, coord: ChunkCoord) {
        let biome = self.chunk_biome(coord);
        let count = biome.tree_count();
        if count == 0 {
            return;
        }

        let mut rng = ChaCha8Rng::seed_from_u64(
            self.seed
                .derive(Self::STRUCTURE_STREAM)
                .for_chunk(coord)
                .value(),
        );
        let (ox, oy, oz) = coord.voxel_origin();
        let mut planted = 0u32;

        for _ in 0..count {
            // Draw all three values up front so the stream stays aligned
            // even when a column has no ground.
            let lx = rng.gen_range(Self::TREE_MARGIN..CHUNK_SIZE_I32 - Self::TREE_MARGIN);
            let lz = rng.gen_range(Self::TREE_MARGIN..CHUNK_SIZE_I32 - Self::TREE_MARGIN);
            let trunk = rng.gen_range(Self::TREE_MIN_HEIGHT..=Self::TREE_MAX_HEIGHT);

            let x = ox + lx;
            let z = oz + lz;
            let Some(ground) = (oy..oy + CHUNK_SIZE_I32)
                .rev()
                .find(|&y| store.voxel(x, y, z).is_some_and(Voxel::is_solid))
            else {
                continue;
            };

            self.grow_tree(store, x, ground, z, trunk);
            planted += 1;
        }
        tracing::debug!("planted {planted} trees in {biome:?} chunk {coord:?}");
    }

    /// Generates one chunk end to end: fill, structures, remesh.
    pub fn generate_chunk(&self, store: &mut ChunkStore, coord: ChunkCoord) {
        self.fill_chunk(store, coord);
        self.place_structures(store, coord);
        store.rebuild_dirty();
    }

    /// Generates every chunk in the box `min..=max` (inclusive, per axis).
    ///
    /// Two phases: all terrain fills first, then all structure passes, so a
    /// canopy spilling across a border lands in already-filled terrain
    /// instead of being buried by a later fill. One remesh at the end covers
    /// everything the passes dirtied.
    pub fn generate_area(&self, store: &mut ChunkStore, min: ChunkCoord, max: ChunkCoord) {
        for z in min.z..=max.z {
            for y in min.y..=max.y {
                for x in min.x..=max.x {
                    self.fill_chunk(store, ChunkCoord::new(x, y, z));
                }
            }
        }
        for z in min.z..=max.z {
            for y in min.y..=max.y {
                for x in min.x..=max.x {
                    self.place_structures(store, ChunkCoord::new(x, y, z));
                }
            }
        }
        let rebuilt = store.rebuild_dirty();
        tracing::debug!("generated area {min:?}..={max:?}: {rebuilt} chunks meshed");
    }

    /// Terrain voxel for a cell given its column's height and biome.
    fn voxel_for_column(&self, x: i32, y: i32, z: i32, height: f64, biome: Biome) -> Voxel {
        let fy = f64::from(y);
        if fy > height {
            return Voxel::AIR;
        }
        if fy < height - Self::CAVE_CRUST && self.is_cave(x, y, z) {
            return Voxel::AIR;
        }
        Voxel::solid(self.material_for(y, height, biome))
    }

    /// True when the 3D cave field empties this cell.
    fn is_cave(&self, x: i32, y: i32, z: i32) -> bool {
        let value = self.cave_noise.sample3(
            f64::from(x) * Self::CAVE_SCALE,
            f64::from(y) * Self::CAVE_SCALE,
            f64::from(z) * Self::CAVE_SCALE,
        );
        value > self.settings.cave_threshold
    }

    /// Material by depth below the surface: surface skin, shallow layer,
    /// then stone.
    fn material_for(&self, y: i32, height: f64, biome: Biome) -> u8 {
        let depth = height - f64::from(y);
        if depth < 1.0 {
            biome.surface_material(y)
        } else if depth < 4.0 {
            biome.subsurface_material()
        } else {
            material::STONE
        }
    }

    /// Writes one tree: trunk above `ground`, spherical leaf canopy
    /// centered on the trunk top.
    fn grow_tree(&self, store: &mut ChunkStore, x: i32, ground: i32, z: i32, trunk: i32) {
        for dy in 1..=trunk {
            store.set_voxel(x, ground + dy, z, Voxel::solid(material::WOOD));
        }

        let top = ground + trunk;
        let r = Self::CANOPY_RADIUS;
        for dy in -r..=r {
            for dz in -r..=r {
                for dx in -r..=r {
                    if dx * dx + dy * dy + dz * dz > r * r {
                        continue;
                    }
                    store.set_voxel(x + dx, top + dy, z + dz, Voxel::solid(material::LEAVES));
                }
            }
        }
    }
}
