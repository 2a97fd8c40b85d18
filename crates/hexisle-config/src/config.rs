//! Configuration structs with sensible defaults and RON persistence.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level generator configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Island shape and world seed.
    pub island: IslandConfig,
    /// Height sampling and biome cut-offs.
    pub terrain: TerrainConfig,
    /// Rock and tree placement.
    pub decoration: DecorationConfig,
    /// Drifting cloud pool.
    pub clouds: CloudConfig,
    /// Day/night preset and global light scale.
    pub lighting: LightingConfig,
    /// Output files written by the app.
    pub export: ExportConfig,
    /// Debug/development settings.
    pub debug: DebugConfig,
}

/// Island shape configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct IslandConfig {
    /// Circle radius in world units; hex columns outside it are dropped.
    pub radius: f32,
    /// Height of a column whose normalized noise is 1.0.
    pub max_height: f32,
    /// World seed. `None` draws a fresh seed on every run.
    pub seed: Option<u64>,
}

/// Height sampling configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TerrainConfig {
    /// Multiplier applied to hex coordinates before the noise lookup.
    pub noise_scale: f64,
    /// Exponent applied to the normalized noise value.
    pub height_exponent: f64,
    /// Biome cut-offs as fractions of `max_height`.
    pub thresholds: BiomeThresholdConfig,
}

/// Biome cut-offs as fractions of the island's maximum height.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct BiomeThresholdConfig {
    pub stone: f32,
    pub dirt: f32,
    pub grass: f32,
    pub sand: f32,
    pub dirt2: f32,
}

/// Decoration placement configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DecorationConfig {
    /// Probability of a rock on a stone or sand column.
    pub rock_chance: f64,
    /// Probability of a tree on a dirt column.
    pub tree_chance: f64,
}

/// Cloud pool configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CloudConfig {
    /// Number of clouds kept alive at all times.
    pub count: usize,
    /// Drift speed along +X in world units per second. Negative values hold
    /// the clouds still.
    pub speed: f32,
    /// Clouds wrap once their x exceeds this value.
    pub boundary: f32,
    /// Lowest spawn altitude.
    pub base_altitude: f32,
    /// Spawn altitude spread above `base_altitude`.
    pub altitude_range: f32,
    /// Spawn z is drawn from `[-depth, depth]`.
    pub depth: f32,
}

/// Lighting configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightingConfig {
    /// Start in the night preset.
    pub night: bool,
    /// Multiplier applied to every light intensity, clamped to `[0, 2]`.
    pub intensity_scale: f32,
}

/// Export configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory receiving the OBJ, MTL, PNG and scene summary.
    pub output_dir: PathBuf,
    /// Directory holding the biome textures. Missing textures are reported
    /// but do not stop an export.
    pub asset_dir: PathBuf,
    /// Number of 60 Hz animation frames simulated before exporting.
    pub frames: u32,
    /// Write `island.obj` and `island.mtl`.
    pub write_obj: bool,
    /// Write the top-down `biomes.png` map.
    pub write_png: bool,
    /// Edge length of the biome map in pixels.
    pub png_size: u32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
    /// Also write JSON logs to the platform log directory.
    pub log_to_file: bool,
}

// --- Default implementations ---

impl Default for IslandConfig {
    fn default() -> Self {
        Self {
            radius: 16.0,
            max_height: 10.0,
            seed: None,
        }
    }
}

impl Default for TerrainConfig {
    fn default() -> Self {
        Self {
            noise_scale: 0.1,
            height_exponent: 1.5,
            thresholds: BiomeThresholdConfig::default(),
        }
    }
}

impl Default for BiomeThresholdConfig {
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

impl Default for DecorationConfig {
    fn default() -> Self {
        Self {
            rock_chance: 0.2,
            tree_chance: 0.2,
        }
    }
}

impl Default for CloudConfig {
    fn default() -> Self {
        Self {
            count: 4,
            speed: 1.0,
            boundary: 20.0,
            base_altitude: 7.0,
            altitude_range: 7.0,
            depth: 10.0,
        }
    }
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            night: false,
            intensity_scale: 1.0,
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("out"),
            asset_dir: PathBuf::from("assets"),
            frames: 120,
            write_obj: true,
            write_png: true,
            png_size: 512,
        }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_to_file: false,
        }
    }
}

// --- Load / Save / Reload ---

/// File name of the config inside the config directory.
pub const CONFIG_FILE: &str = "config.ron";

fn read_config(path: &Path) -> Result<Config, ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    ron::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

impl Config {
    /// Load `config.ron` from `config_dir`, writing the defaults there first
    /// if it does not exist yet.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join(CONFIG_FILE);

        if config_path.exists() {
            let config = read_config(&config_path)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Write `config.ron` into `config_dir`, creating the directory.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        let write_err = |path: &Path| {
            let path = path.to_path_buf();
            move |source: std::io::Error| ConfigError::Write { path, source }
        };
        std::fs::create_dir_all(config_dir).map_err(write_err(config_dir))?;

        let config_path = config_dir.join(CONFIG_FILE);
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);
        let serialized = ron::ser::to_string_pretty(self, pretty)?;

        std::fs::write(&config_path, serialized).map_err(write_err(&config_path))
    }

    /// Re-read `config.ron`. Returns `Some` only when it differs from `self`.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let new_config = read_config(&config_dir.join(CONFIG_FILE))?;
        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}
