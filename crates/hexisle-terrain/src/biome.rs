//! Height-threshold biome classification.

use crate::error::TerrainError;

/// Terrain material assigned to a hex column.
///
/// Declared from the highest band to the lowest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Biome {
    Stone,
    Dirt,
    Grass,
    Sand,
    Dirt2,
}

impl Biome {
    /// All biomes, highest band first.
    pub const ALL: [Biome; 5] = [
        Biome::Stone,
        Biome::Dirt,
        Biome::Grass,
        Biome::Sand,
        Biome::Dirt2,
    ];

    /// Stable lowercase name, used for mesh and material names.
    pub fn name(self) -> &'static str {
        match self {
            Biome::Stone => "stone",
            Biome::Dirt => "dirt",
            Biome::Grass => "grass",
            Biome::Sand => "sand",
            Biome::Dirt2 => "dirt2",
        }
    }

    /// Position in [`Biome::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Lower bounds of each biome band as fractions of the maximum height.
///
/// A column belongs to the first band whose bound it strictly exceeds.
#[derive(Clone, Debug, PartialEq)]
pub struct BiomeThresholds {
    pub stone: f32,
    pub dirt: f32,
    pub grass: f32,
    pub sand: f32,
    pub dirt2: f32,
}

impl Default for BiomeThresholds {
    fn default() -> Self {
        Self {
            stone: 0.8,
            dirt: 0.7,
            grass: 0.5,
            sand: 0.3,
            dirt2: 0.0,
        }
    }
}

impl BiomeThresholds {
    fn bands(&self) -> [(Biome, f32); 5] {
        [
            (Biome::Stone, self.stone),
            (Biome::Dirt, self.dirt),
            (Biome::Grass, self.grass),
            (Biome::Sand, self.sand),
            (Biome::Dirt2, self.dirt2),
        ]
    }

    /// Check that every bound is finite and the bands strictly descend.
    ///
    /// # Errors
    ///
    /// Returns [`TerrainError::NonFinite`] or [`TerrainError::UnorderedThresholds`].
    pub fn validate(&self) -> Result<(), TerrainError> {
        let bands = self.bands();
        for (biome, bound) in bands {
            if !bound.is_finite() {
                return Err(TerrainError::NonFinite {
                    name: biome.name(),
                    value: bound as f64,
                });
            }
        }
        for pair in bands.windows(2) {
            let (upper, upper_bound) = pair[0];
            let (lower, lower_bound) = pair[1];
            if upper_bound <= lower_bound {
                return Err(TerrainError::UnorderedThresholds(format!(
                    "{} ({upper_bound}) must exceed {} ({lower_bound})",
                    upper.name(),
                    lower.name()
                )));
            }
        }
        Ok(())
    }

    /// Classify a column height. Returns `None` when the column is at or
    /// below the lowest band and no column should be built.
    pub fn classify(&self, height: f32, max_height: f32) -> Option<Biome> {
        self.bands()
            .into_iter()
            .find(|&(_, fraction)| height > fraction * max_height)
            .map(|(biome, _)| biome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bands() {
        let t = BiomeThresholds::default();
        assert_eq!(t.classify(9.5, 10.0), Some(Biome::Stone));
        assert_eq!(t.classify(7.5, 10.0), Some(Biome::Dirt));
        assert_eq!(t.classify(6.0, 10.0), Some(Biome::Grass));
        assert_eq!(t.classify(4.0, 10.0), Some(Biome::Sand));
        assert_eq!(t.classify(1.0, 10.0), Some(Biome::Dirt2));
    }

    #[test]
    fn test_bounds_are_exclusive() {
        let t = BiomeThresholds::default();
        assert_eq!(t.classify(8.0, 10.0), Some(Biome::Dirt));
        assert_eq!(t.classify(5.0, 10.0), Some(Biome::Sand));
        assert_eq!(t.classify(0.0, 10.0), None);
    }

    #[test]
    fn test_thresholds_scale_with_max_height() {
        let t = BiomeThresholds::default();
        assert_eq!(t.classify(9.0, 20.0), Some(Biome::Sand));
        assert_eq!(t.classify(17.0, 20.0), Some(Biome::Stone));
    }

    #[test]
    fn test_validate_accepts_default() {
        assert!(BiomeThresholds::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_unordered() {
        let t = BiomeThresholds {
            grass: 0.75,
            ..Default::default()
        };
        assert!(matches!(
            t.validate(),
            Err(TerrainError::UnorderedThresholds(_))
        ));
    }

    #[test]
    fn test_validate_rejects_nan() {
        let t = BiomeThresholds {
            sand: f32::NAN,
            ..Default::default()
        };
        assert!(matches!(t.validate(), Err(TerrainError::NonFinite { .. })));
    }

    #[test]
    fn test_names_and_indices() {
        for (i, biome) in Biome::ALL.iter().enumerate() {
            assert_eq!(biome.index(), i);
        }
        assert_eq!(Biome::Dirt2.name(), "dirt2");
    }
}
