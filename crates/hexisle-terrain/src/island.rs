//! Island generation pipeline: grid enumeration, height sampling, biome
//! classification and decoration.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use glam::Vec2;
use hashbrown::HashMap;
use tracing::debug;

use crate::biome::{Biome, BiomeThresholds};
use crate::error::TerrainError;
use crate::feature::{Decoration, DecorationParams, decorate};
use crate::heightmap::{HeightmapParams, HeightmapSampler};
use crate::hex::{HexCoord, coords_within_radius};
use crate::seed::{SeedStream, stream_rng};

/// Largest accepted island radius. About 300k columns fit inside it.
pub const MAX_RADIUS: f32 = 512.0;

/// Largest accepted column height.
pub const MAX_HEIGHT: f32 = 1000.0;

/// Everything needed to generate one island.
#[derive(Clone, Debug)]
pub struct IslandParams {
    /// Circle radius; columns outside it are dropped.
    pub radius: f32,
    /// Height of a column whose normalized noise is 1.0.
    pub max_height: f32,
    /// World seed for noise and decoration.
    pub seed: u64,
    /// Coordinate multiplier for the noise lookup.
    pub noise_scale: f64,
    /// Exponent applied to the normalized noise.
    pub height_exponent: f64,
    /// Biome band bounds.
    pub thresholds: BiomeThresholds,
    /// Rock and tree probabilities.
    pub decoration: DecorationParams,
}

impl Default for IslandParams {
    fn default() -> Self {
        Self {
            radius: 16.0,
            max_height: 10.0,
            seed: 0,
            noise_scale: 0.1,
            height_exponent: 1.5,
            thresholds: BiomeThresholds::default(),
            decoration: DecorationParams::default(),
        }
    }
}

impl IslandParams {
    /// # Errors
    ///
    /// Rejects non-finite numbers, a radius above [`MAX_RADIUS`], a height
    /// above [`MAX_HEIGHT`], unordered thresholds and invalid chances.
    /// Negative radii and heights are accepted and produce an empty island.
    pub fn validate(&self) -> Result<(), TerrainError> {
        for (name, value) in [
            ("radius", self.radius as f64),
            ("max_height", self.max_height as f64),
            ("noise_scale", self.noise_scale),
            ("height_exponent", self.height_exponent),
        ] {
            if !value.is_finite() {
                return Err(TerrainError::NonFinite { name, value });
            }
        }
        for (name, value, max) in [
            ("radius", self.radius, MAX_RADIUS),
            ("max_height", self.max_height, MAX_HEIGHT),
        ] {
            if value > max {
                return Err(TerrainError::TooLarge {
                    name,
                    value: value as f64,
                    max: max as f64,
                });
            }
        }
        self.thresholds.validate()?;
        self.decoration.validate()
    }

    fn heightmap(&self) -> HeightmapParams {
        HeightmapParams {
            seed: self.seed,
            noise_scale: self.noise_scale,
            exponent: self.height_exponent,
            max_height: self.max_height,
        }
    }
}

/// One hex column of the island.
#[derive(Clone, Debug, PartialEq)]
pub struct HexTile {
    pub coord: HexCoord,
    /// Centre on the ground plane (`x`, `z`).
    pub position: Vec2,
    pub height: f32,
    pub biome: Biome,
    pub decoration: Option<Decoration>,
}

/// Summary counts for an island.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct IslandStats {
    /// Columns per biome, indexed by [`Biome::index`].
    pub tiles_per_biome: [usize; 5],
    /// Cells inside the radius that fell below the lowest band.
    pub empty_cells: usize,
    pub rocks: usize,
    pub trees: usize,
    pub highest: f32,
}

impl IslandStats {
    /// Total number of columns.
    pub fn tile_count(&self) -> usize {
        self.tiles_per_biome.iter().sum()
    }

    /// Columns of one biome.
    pub fn count(&self, biome: Biome) -> usize {
        self.tiles_per_biome[biome.index()]
    }
}

/// A generated island: ordered columns plus a coordinate index.
#[derive(Clone, Debug)]
pub struct Island {
    params: IslandParams,
    tiles: Vec<HexTile>,
    index: HashMap<HexCoord, usize>,
    stats: IslandStats,
}

impl Island {
    /// Generate an island.
    ///
    /// Cells are visited column-major; each cell inside the radius samples a
    /// height, picks a biome and rolls its decoration from the seeded
    /// decoration stream. Equal params always yield equal islands.
    pub fn generate(params: IslandParams) -> Result<Self, TerrainError> {
        params.validate()?;

        let sampler = HeightmapSampler::new(params.heightmap());
        let mut rng = stream_rng(params.seed, SeedStream::Decoration);

        let mut tiles = Vec::new();
        let mut stats = IslandStats::default();

        // A non-positive max height has no band above zero to fill.
        let coords = if params.max_height > 0.0 {
            coords_within_radius(params.radius)
        } else {
            Vec::new()
        };

        for coord in coords {
            let height = sampler.sample(coord);
            let Some(biome) = params.thresholds.classify(height, params.max_height) else {
                stats.empty_cells += 1;
                continue;
            };

            let decoration = decorate(biome, &params.decoration, &mut rng);
            match decoration {
                Some(Decoration::Rock { .. }) => stats.rocks += 1,
                Some(Decoration::Tree { .. }) => stats.trees += 1,
                None => {}
            }
            stats.tiles_per_biome[biome.index()] += 1;
            stats.highest = stats.highest.max(height);

            tiles.push(HexTile {
                coord,
                position: coord.to_position(),
                height,
                biome,
                decoration,
            });
        }

        let index = tiles
            .iter()
            .enumerate()
            .map(|(i, tile)| (tile.coord, i))
            .collect();

        debug!(
            seed = params.seed,
            radius = params.radius,
            tiles = tiles.len(),
            rocks = stats.rocks,
            trees = stats.trees,
            "generated island"
        );

        Ok(Self {
            params,
            tiles,
            index,
            stats,
        })
    }

    pub fn params(&self) -> &IslandParams {
        &self.params
    }

    /// Columns in generation order.
    pub fn tiles(&self) -> &[HexTile] {
        &self.tiles
    }

    /// Column at a grid cell, if one was built there.
    pub fn tile_at(&self, coord: HexCoord) -> Option<&HexTile> {
        self.index.get(&coord).map(|&i| &self.tiles[i])
    }

    /// Columns of a single biome.
    pub fn tiles_of(&self, biome: Biome) -> impl Iterator<Item = &HexTile> {
        self.tiles.iter().filter(move |t| t.biome == biome)
    }

    pub fn len(&self) -> usize {
        self.tiles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tiles.is_empty()
    }

    pub fn stats(&self) -> &IslandStats {
        &self.stats
    }

    /// Digest over every column's coordinate, height bits, biome and decoration.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        for tile in &self.tiles {
            tile.coord.hash(&mut hasher);
            tile.height.to_bits().hash(&mut hasher);
            tile.biome.hash(&mut hasher);
            match tile.decoration {
                Some(Decoration::Rock { offset, radius }) => {
                    1u8.hash(&mut hasher);
                    offset.x.to_bits().hash(&mut hasher);
                    offset.y.to_bits().hash(&mut hasher);
                    radius.to_bits().hash(&mut hasher);
                }
                Some(Decoration::Tree { height }) => {
                    2u8.hash(&mut hasher);
                    height.to_bits().hash(&mut hasher);
                }
                None => 0u8.hash(&mut hasher),
            }
        }
        hasher.finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(seed: u64) -> IslandParams {
        IslandParams {
            seed,
            ..Default::default()
        }
    }

    #[test]
    fn test_same_seed_same_island() {
        let a = Island::generate(params(42)).unwrap();
        let b = Island::generate(params(42)).unwrap();
        assert_eq!(a.tiles(), b.tiles());
        assert_eq!(a.content_hash(), b.content_hash());
    }

    #[test]
    fn test_different_seed_different_island() {
        let a = Island::generate(params(1)).unwrap();
        let b = Island::generate(params(2)).unwrap();
        assert_ne!(a.content_hash(), b.content_hash());
    }

    #[test]
    fn test_every_tile_within_radius() {
        for radius in [4.0, 10.0, 16.0, 25.0] {
            let island = Island::generate(IslandParams {
                radius,
                seed: 9,
                ..Default::default()
            })
            .unwrap();
            for tile in island.tiles() {
                assert!(tile.position.length() <= radius);
            }
        }
    }

    #[test]
    fn test_biome_matches_height() {
        let island = Island::generate(params(17)).unwrap();
        let thresholds = BiomeThresholds::default();
        for tile in island.tiles() {
            assert_eq!(thresholds.classify(tile.height, 10.0), Some(tile.biome));
            assert!(tile.height > 0.0 && tile.height <= 10.0);
        }
    }

    #[test]
    fn test_decorations_only_on_expected_biomes() {
        let island = Island::generate(IslandParams {
            seed: 23,
            radius: 30.0,
            decoration: DecorationParams {
                rock_chance: 1.0,
                tree_chance: 1.0,
            },
            ..Default::default()
        })
        .unwrap();
        for tile in island.tiles() {
            match (tile.biome, tile.decoration) {
                (Biome::Stone | Biome::Sand, Some(Decoration::Rock { .. })) => {}
                (Biome::Dirt, Some(Decoration::Tree { .. })) => {}
                (Biome::Grass | Biome::Dirt2, None) => {}
                other => panic!("unexpected decoration pairing {other:?}"),
            }
        }
    }

    #[test]
    fn test_stats_match_tiles() {
        let island = Island::generate(params(5)).unwrap();
        let stats = island.stats();
        assert_eq!(stats.tile_count(), island.len());
        for biome in Biome::ALL {
            assert_eq!(stats.count(biome), island.tiles_of(biome).count());
        }
        let rocks = island
            .tiles()
            .iter()
            .filter(|t| matches!(t.decoration, Some(Decoration::Rock { .. })))
            .count();
        assert_eq!(stats.rocks, rocks);
        let cells = coords_within_radius(16.0).len();
        assert_eq!(stats.tile_count() + stats.empty_cells, cells);
    }

    #[test]
    fn test_tile_lookup() {
        let island = Island::generate(params(3)).unwrap();
        let first = &island.tiles()[0];
        assert_eq!(island.tile_at(first.coord), Some(first));
        assert!(island.tile_at(HexCoord::new(1000, 1000)).is_none());
    }

    #[test]
    fn test_negative_radius_is_empty() {
        let island = Island::generate(IslandParams {
            radius: -3.0,
            ..Default::default()
        })
        .unwrap();
        assert!(island.is_empty());
    }

    #[test]
    fn test_non_positive_height_is_empty() {
        let island = Island::generate(IslandParams {
            max_height: -5.0,
            ..Default::default()
        })
        .unwrap();
        assert!(island.is_empty());
    }

    #[test]
    fn test_nan_radius_rejected() {
        let result = Island::generate(IslandParams {
            radius: f32::NAN,
            ..Default::default()
        });
        assert!(matches!(
            result,
            Err(TerrainError::NonFinite { name: "radius", .. })
        ));
    }

    #[test]
    fn test_oversized_inputs_rejected() {
        let result = Island::generate(IslandParams {
            radius: 4.0e9,
            max_height: 5.0,
            ..Default::default()
        });
        assert!(matches!(
            result,
            Err(TerrainError::TooLarge { name: "radius", .. })
        ));
        let result = Island::generate(IslandParams {
            max_height: MAX_HEIGHT * 2.0,
            ..Default::default()
        });
        assert!(matches!(
            result,
            Err(TerrainError::TooLarge { name: "max_height", .. })
        ));
        assert!(
            IslandParams {
                radius: MAX_RADIUS,
                ..Default::default()
            }
            .validate()
            .is_ok()
        );
    }
}
