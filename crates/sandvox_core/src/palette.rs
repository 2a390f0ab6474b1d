//! Material palette: id to color and hardness.
//!
//! The palette is data, not code: worlds ship their own entry lists through
//! [`WorldConfig`](crate::WorldConfig). Lookups never fail; ids outside the
//! palette resolve to a loud magenta debug material, so a bad id shows up in
//! the rendered mesh instead of crashing the mesher.

use serde::{Deserialize, Serialize};

/// One palette entry, as authored in config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MaterialDef {
    /// Display name, for tooling and logs.
    pub name: String,
    /// Linear RGB base color, each channel in `0.0..=1.0`.
    pub color: [f32; 3],
    /// Dig resistance. Air uses 0.0.
    pub hardness: f32,
}

impl MaterialDef {
    /// Creates an entry.
    #[must_use]
    pub fn new(name: &str, color: [f32; 3], hardness: f32) -> Self {
        Self {
            name: name.to_owned(),
            color,
            hardness,
        }
    }
}

/// Material properties as consumed per lookup.
///
/// Plain `Copy` data, so meshing can sample materials without holding a
/// borrow on the entry list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MaterialSample {
    /// Linear RGB base color.
    pub color: [f32; 3],
    /// Dig resistance.
    pub hardness: f32,
}

/// Indexed material table with a sentinel for unknown ids.
#[derive(Debug, Clone, PartialEq)]
pub struct MaterialPalette {
    entries: Vec<MaterialDef>,
}

impl MaterialPalette {
    /// Sample returned for ids with no palette entry. Magenta, visible from
    /// across the map.
    pub const MISSING: MaterialSample = MaterialSample {
        color: [1.0, 0.0, 1.0],
        hardness: 1.0,
    };

    /// Builds a palette from an entry list. Entry order is id order.
    #[must_use]
    pub fn new(entries: Vec<MaterialDef>) -> Self {
        Self { entries }
    }

    /// The default ten-material palette used by generated terrain.
    #[must_use]
    pub fn default_entries() -> Vec<MaterialDef> {
        vec![
            MaterialDef::new("air", [0.0, 0.0, 0.0], 0.0),
            MaterialDef::new("soil", [0.5, 0.3, 0.1], 1.0),
            MaterialDef::new("grass", [0.1, 0.8, 0.1], 0.8),
            MaterialDef::new("stone", [0.5, 0.5, 0.5], 3.0),
            MaterialDef::new("sand", [1.0, 0.9, 0.4], 0.5),
            MaterialDef::new("snow", [1.0, 1.0, 1.0], 0.2),
            MaterialDef::new("wood", [0.6, 0.4, 0.2], 2.0),
            MaterialDef::new("leaves", [0.0, 0.5, 0.0], 0.1),
            MaterialDef::new("brick", [0.8, 0.3, 0.2], 4.0),
            MaterialDef::new("glass", [0.8, 0.9, 1.0], 1.5),
        ]
    }

    /// Resolves an id to its material sample, or [`Self::MISSING`].
    #[must_use]
    pub fn get(&self, id: u8) -> MaterialSample {
        self.entries
            .get(usize::from(id))
            .map_or(Self::MISSING, |def| MaterialSample {
                color: def.color,
                hardness: def.hardness,
            })
    }

    /// The authored entry for an id, if it exists.
    #[must_use]
    pub fn entry(&self, id: u8) -> Option<&MaterialDef> {
        self.entries.get(usize::from(id))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the palette has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for MaterialPalette {
    fn default() -> Self {
        Self::new(Self::default_entries())
    }
}
