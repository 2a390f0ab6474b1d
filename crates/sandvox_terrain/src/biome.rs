//! # Biome Classification
//!
//! Decides what kind of terrain a column is, from three inputs:
//! - Surface height (computed by the generator's height field)
//! - Temperature (its own noise channel)
//! - Humidity (another independent channel)
//!
//! Height outranks climate: a column below the ocean cutoff is Ocean and a
//! column above the mountain cutoff is Mountains, whatever the weather says.

use sandvox_core::{material, TerrainSettings, WorldSeed};

use crate::noise::SimplexNoise;

/// World height above which mountain surfaces read snow instead of stone.
pub const SNOW_LINE: i32 = 30;

/// Terrain biomes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Biome {
    /// Flat grassland with the occasional lone tree.
    Plains,
    /// Hot and dry; sand from the surface down.
    Desert,
    /// Temperate and humid, densely treed.
    Forest,
    /// High terrain; bare stone, snow above the snow line.
    Mountains,
    /// Columns below the sea cutoff.
    Ocean,
}

impl Biome {
    /// Material of the topmost solid voxel in a column of this biome.
    #[must_use]
    pub const fn surface_material(self, world_y: i32) -> u8 {
        match self {
            Self::Plains | Self::Forest => material::GRASS,
            Self::Desert | Self::Ocean => material::SAND,
            Self::Mountains => {
                if world_y > SNOW_LINE {
                    material::SNOW
                } else {
                    material::STONE
                }
            }
        }
    }

    /// Material of the shallow layer under the surface.
    #[must_use]
    pub const fn subsurface_material(self) -> u8 {
        match self {
            Self::Desert => material::SAND,
            _ => material::SOIL,
        }
    }

    /// How many trees the structure pass tries to plant per chunk.
    #[must_use]
    pub const fn tree_count(self) -> u32 {
        match self {
            Self::Forest => 5,
            Self::Plains => 1,
            _ => 0,
        }
    }
}

/// Classifies world columns into biomes.
///
/// The climate channels derive from the world seed through separate streams,
/// so temperature and humidity never correlate with each other or with the
/// height field.
pub struct BiomeClassifier {
    temperature_noise: SimplexNoise,
    humidity_noise: SimplexNoise,
    /// Columns with surface height below this are Ocean.
    ocean_below: f64,
    /// Columns with surface height above this are Mountains.
    mountain_above: f64,
}

impl BiomeClassifier {
    /// Sample frequency shared by both climate channels.
    const CLIMATE_SCALE: f64 = 0.01;
    /// Seed stream for the temperature channel.
    const TEMPERATURE_STREAM: u64 = 1;
    /// Seed stream for the humidity channel.
    const HUMIDITY_STREAM: u64 = 2;

    /// Creates a classifier for a seed and terrain settings.
    #[must_use]
    pub fn new(seed: WorldSeed, settings: &TerrainSettings) -> Self {
        Self {
            temperature_noise: SimplexNoise::new(seed.derive(Self::TEMPERATURE_STREAM)),
            humidity_noise: SimplexNoise::new(seed.derive(Self::HUMIDITY_STREAM)),
            ocean_below: f64::from(settings.sea_level - 5),
            mountain_above: f64::from(settings.base_height + 15),
        }
    }

    /// Temperature at a world column, in `[-1, 1]`.
    #[must_use]
    pub fn temperature(&self, world_x: f64, world_z: f64) -> f64 {
        self.temperature_noise
            .sample(world_x * Self::CLIMATE_SCALE, world_z * Self::CLIMATE_SCALE)
    }

    /// Humidity at a world column, in `[-1, 1]`.
    #[must_use]
    pub fn humidity(&self, world_x: f64, world_z: f64) -> f64 {
        self.humidity_noise
            .sample(world_x * Self::CLIMATE_SCALE, world_z * Self::CLIMATE_SCALE)
    }

    /// Classifies the column at `(world_x, world_z)` whose surface height is
    /// `height` (world voxel units).
    #[must_use]
    pub fn classify(&self, world_x: f64, world_z: f64, height: f64) -> Biome {
        // Height cutoffs first; climate only splits the middle band.
        if height < self.ocean_below {
            return Biome::Ocean;
        }
        if height > self.mountain_above {
            return Biome::Mountains;
        }

        let temperature = self.temperature(world_x, world_z);
        let humidity = self.humidity(world_x, world_z);
        if temperature > 0.3 && humidity < -0.2 {
            return Biome::Desert;
        }
        if humidity > 0.2 {
            return Biome::Forest;
        }
        Biome::Plains
    }
}
