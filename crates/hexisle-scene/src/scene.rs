//! Everything that makes up one rendered island.

use hexisle_config::Config;
use hexisle_lighting::{LightRig, TimeOfDay};
use hexisle_materials::MaterialLibrary;
use hexisle_mesh::{BiomeMeshes, ShoreMeshes};
use hexisle_terrain::seed::{SeedStream, stream_rng};
use hexisle_terrain::{BiomeThresholds, DecorationParams, Island, IslandParams};
use rand::Rng;
use tracing::{info, warn};

use crate::clouds::CloudField;
use crate::error::SceneError;

/// Use the configured seed, or draw one and say so.
pub fn resolve_seed(seed: Option<u64>) -> u64 {
    match seed {
        Some(seed) => seed,
        None => {
            let seed = rand::rng().random::<u64>();
            warn!("No seed configured, using random seed {seed}; pass --seed {seed} to reproduce");
            seed
        }
    }
}

/// Map the island, terrain and decoration config sections onto generator
/// parameters.
pub fn island_params(config: &Config, seed: u64) -> IslandParams {
    let t = &config.terrain.thresholds;
    IslandParams {
        radius: config.island.radius,
        max_height: config.island.max_height,
        seed,
        noise_scale: config.terrain.noise_scale,
        height_exponent: config.terrain.height_exponent,
        thresholds: BiomeThresholds {
            stone: t.stone,
            dirt: t.dirt,
            grass: t.grass,
            sand: t.sand,
            dirt2: t.dirt2,
        },
        decoration: DecorationParams {
            rock_chance: config.decoration.rock_chance,
            tree_chance: config.decoration.tree_chance,
        },
    }
}

pub struct IslandScene {
    pub seed: u64,
    pub island: Island,
    pub meshes: BiomeMeshes,
    pub shore: ShoreMeshes,
    pub materials: MaterialLibrary,
    pub lights: LightRig,
    pub clouds: CloudField,
}

impl IslandScene {
    /// Generate the island and build every mesh, light and cloud from scratch.
    pub fn build(config: &Config, seed: u64) -> Result<Self, SceneError> {
        let island = Island::generate(island_params(config, seed))?;
        let meshes = BiomeMeshes::build(&island);
        let shore = ShoreMeshes::build(config.island.radius, config.island.max_height);

        let time = if config.lighting.night {
            TimeOfDay::Night
        } else {
            TimeOfDay::Day
        };
        let mut lights = LightRig::new(time, config.lighting.intensity_scale);
        lights.fit_shadows(config.island.radius);

        let clouds = CloudField::new(&config.clouds, stream_rng(seed, SeedStream::Clouds));

        let stats = island.stats();
        info!(
            seed,
            tiles = stats.tile_count(),
            rocks = stats.rocks,
            trees = stats.trees,
            triangles = meshes.total_triangles(),
            "Built island scene"
        );

        Ok(Self {
            seed,
            island,
            meshes,
            shore,
            materials: MaterialLibrary::default(),
            lights,
            clouds,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexisle_terrain::Biome;

    #[test]
    fn test_build_default_scene() {
        let scene = IslandScene::build(&Config::default(), 42).unwrap();
        assert!(!scene.island.is_empty());
        assert_eq!(scene.clouds.len(), 4);
        assert_eq!(scene.lights.visible_directional_count(), 1);
        assert_eq!(scene.lights.time_of_day(), TimeOfDay::Day);
        for biome in Biome::ALL {
            assert_eq!(
                scene.meshes.get(biome).column_count,
                scene.island.stats().count(biome)
            );
        }
    }

    #[test]
    fn test_same_seed_same_scene() {
        let config = Config::default();
        let a = IslandScene::build(&config, 5).unwrap();
        let b = IslandScene::build(&config, 5).unwrap();
        assert_eq!(a.meshes.content_hash(), b.meshes.content_hash());
        assert_eq!(a.clouds.clouds(), b.clouds.clouds());
    }

    #[test]
    fn test_night_config() {
        let mut config = Config::default();
        config.lighting.night = true;
        config.lighting.intensity_scale = 9.0;
        let scene = IslandScene::build(&config, 1).unwrap();
        assert!(scene.lights.moon.visible);
        assert_eq!(scene.lights.intensity_scale(), 2.0);
    }

    #[test]
    fn test_nan_radius_is_error() {
        let mut config = Config::default();
        config.island.radius = f32::NAN;
        assert!(matches!(
            IslandScene::build(&config, 1),
            Err(SceneError::Terrain(_))
        ));
    }

    #[test]
    fn test_resolve_seed_keeps_configured() {
        assert_eq!(resolve_seed(Some(77)), 77);
    }

    #[test]
    fn test_island_params_mapping() {
        let mut config = Config::default();
        config.island.radius = 9.0;
        config.decoration.tree_chance = 0.5;
        let params = island_params(&config, 3);
        assert_eq!(params.radius, 9.0);
        assert_eq!(params.seed, 3);
        assert_eq!(params.decoration.tree_chance, 0.5);
        assert_eq!(params.thresholds, BiomeThresholds::default());
    }
}
