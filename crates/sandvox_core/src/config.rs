//! World configuration, loaded once at startup.
//!
//! A world is fully described by one TOML document: master seed, voxel
//! scale, terrain shaping parameters, and the material palette. Every field
//! has a default, so the empty document is a valid (and playable) config.
//!
//! ```toml
//! seed = 12345
//! voxel_size = 0.5
//!
//! [terrain]
//! base_height = 16
//! sea_level = 12
//!
//! [[materials]]
//! name = "air"
//! color = [0.0, 0.0, 0.0]
//! hardness = 0.0
//! ```

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, ConfigResult};
use crate::palette::{MaterialDef, MaterialPalette};
use crate::seed::WorldSeed;

/// Terrain shaping parameters.
///
/// Heights are in voxel units. The generator samples height noise at
/// `noise_scale` and spreads it over `height_scale` voxels around
/// `base_height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TerrainSettings {
    /// Horizontal frequency of the height field.
    pub noise_scale: f64,
    /// Vertical amplitude of the height field, in voxels.
    pub height_scale: f64,
    /// Mean terrain height, in voxels.
    pub base_height: i32,
    /// Cave noise threshold in `-1.0..=1.0`; higher carves fewer caves.
    pub cave_threshold: f64,
    /// World height below which low terrain becomes ocean.
    pub sea_level: i32,
}

impl Default for TerrainSettings {
    fn default() -> Self {
        Self {
            noise_scale: 0.05,
            height_scale: 20.0,
            base_height: 16,
            cave_threshold: 0.4,
            sea_level: 12,
        }
    }
}

/// Complete description of one world.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WorldConfig {
    /// Master seed. Everything in the world derives from this one value.
    pub seed: u64,
    /// Edge length of one voxel in world units.
    pub voxel_size: f32,
    /// Terrain shaping parameters.
    pub terrain: TerrainSettings,
    /// Material palette, in id order.
    pub materials: Vec<MaterialDef>,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            seed: WorldSeed::default().value(),
            voxel_size: 0.5,
            terrain: TerrainSettings::default(),
            materials: MaterialPalette::default_entries(),
        }
    }
}

impl WorldConfig {
    /// Parses and validates a config from TOML text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed TOML, plus anything
    /// [`Self::validate`] rejects.
    pub fn from_toml_str(text: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] when the file cannot be read, plus
    /// anything [`Self::from_toml_str`] rejects.
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let text = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("loaded world config from {}", path.display());
        Ok(config)
    }

    /// Checks the invariants the type system cannot.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidSetting`] or
    /// [`ConfigError::InvalidPalette`] naming the offending field.
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.voxel_size.is_finite() || self.voxel_size <= 0.0 {
            return Err(ConfigError::InvalidSetting {
                name: "voxel_size",
                reason: format!("must be positive, got {}", self.voxel_size),
            });
        }
        if !self.terrain.noise_scale.is_finite() || self.terrain.noise_scale <= 0.0 {
            return Err(ConfigError::InvalidSetting {
                name: "terrain.noise_scale",
                reason: format!("must be positive, got {}", self.terrain.noise_scale),
            });
        }
        if !self.terrain.height_scale.is_finite() {
            return Err(ConfigError::InvalidSetting {
                name: "terrain.height_scale",
                reason: "must be finite".to_owned(),
            });
        }
        if !self.terrain.cave_threshold.is_finite() {
            return Err(ConfigError::InvalidSetting {
                name: "terrain.cave_threshold",
                reason: "must be finite".to_owned(),
            });
        }
        if self.materials.is_empty() {
            return Err(ConfigError::InvalidPalette {
                reason: "at least one entry (air, id 0) is required".to_owned(),
            });
        }
        if self.materials.len() > 256 {
            return Err(ConfigError::InvalidPalette {
                reason: format!(
                    "{} entries, but voxel material ids only address 256",
                    self.materials.len()
                ),
            });
        }
        for (id, def) in self.materials.iter().enumerate() {
            if !def.hardness.is_finite() || def.hardness < 0.0 {
                return Err(ConfigError::InvalidPalette {
                    reason: format!("entry {id} ({}): hardness must be non-negative", def.name),
                });
            }
            if def.color.iter().any(|c| !(0.0..=1.0).contains(c)) {
                return Err(ConfigError::InvalidPalette {
                    reason: format!("entry {id} ({}): color channels must be in 0..=1", def.name),
                });
            }
        }
        Ok(())
    }

    /// The master seed as a typed value.
    #[must_use]
    pub fn world_seed(&self) -> WorldSeed {
        WorldSeed::new(self.seed)
    }

    /// Builds the material palette from the configured entries.
    #[must_use]
    pub fn palette(&self) -> MaterialPalette {
        MaterialPalette::new(self.materials.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = WorldConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.materials.len(), 10);
        assert!((config.voxel_size - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_empty_document_gives_defaults() {
        let config = WorldConfig::from_toml_str("").unwrap();
        assert_eq!(config, WorldConfig::default());
    }

    #[test]
    fn test_partial_document_overrides_some_fields() {
        let config = WorldConfig::from_toml_str(
            r#"
            seed = 777

            [terrain]
            sea_level = 20
            "#,
        )
        .unwrap();
        assert_eq!(config.seed, 777);
        assert_eq!(config.terrain.sea_level, 20);
        // Untouched fields keep their defaults.
        assert_eq!(config.terrain.base_height, 16);
        assert_eq!(config.materials.len(), 10);
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let result = WorldConfig::from_toml_str("seed = [not an integer");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_zero_voxel_size_rejected() {
        let result = WorldConfig::from_toml_str("voxel_size = 0.0");
        match result {
            Err(ConfigError::InvalidSetting { name, .. }) => assert_eq!(name, "voxel_size"),
            other => panic!("expected InvalidSetting, got {other:?}"),
        }
    }

    #[test]
    fn test_negative_hardness_rejected() {
        let mut config = WorldConfig::default();
        config.materials[3].hardness = -1.0;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPalette { .. })
        ));
    }

    #[test]
    fn test_out_of_range_color_rejected() {
        let mut config = WorldConfig::default();
        config.materials[2].color = [0.1, 1.5, 0.1];
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPalette { .. })
        ));
    }

    #[test]
    fn test_oversized_palette_rejected() {
        let mut config = WorldConfig::default();
        while config.materials.len() <= 256 {
            config.materials
                .push(MaterialDef::new("filler", [0.5, 0.5, 0.5], 1.0));
        }
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidPalette { .. })
        ));
    }

    #[test]
    fn test_toml_round_trip() {
        let config = WorldConfig::default();
        let text = toml::to_string(&config).unwrap();
        let back = WorldConfig::from_toml_str(&text).unwrap();
        assert_eq!(config, back);
    }

    #[test]
    fn test_palette_and_seed_accessors() {
        let config = WorldConfig::default();
        assert_eq!(config.world_seed(), WorldSeed::default());
        assert_eq!(config.palette().len(), 10);
    }
}
