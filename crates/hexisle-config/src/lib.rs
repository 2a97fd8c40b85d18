//! Configuration system for Hexisle.
//!
//! Island, terrain, decoration, cloud, lighting and export settings persist to
//! disk as `config.ron`. CLI flags parsed with clap override the loaded
//! values. [`Config::reload`] reports whether the file on disk has changed.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    BiomeThresholdConfig, CONFIG_FILE, CloudConfig, Config, DebugConfig, DecorationConfig,
    ExportConfig, IslandConfig, LightingConfig, TerrainConfig,
};
pub use error::ConfigError;
