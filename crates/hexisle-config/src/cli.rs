//! Command-line argument parsing for Hexisle.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Hexisle command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug, Default)]
#[command(name = "hexisle", about = "Procedural hex-tile island generator")]
pub struct CliArgs {
    /// Island circle radius in world units.
    #[arg(long)]
    pub radius: Option<f32>,

    /// Maximum column height.
    #[arg(long)]
    pub max_height: Option<f32>,

    /// World seed (random if neither this nor the config sets one).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Start in the night lighting preset.
    #[arg(long)]
    pub night: bool,

    /// Global light intensity scale (0.0 - 2.0).
    #[arg(long)]
    pub light: Option<f32>,

    /// Number of animation frames to simulate before exporting.
    #[arg(long)]
    pub frames: Option<u32>,

    /// Output directory for exported files.
    #[arg(long)]
    pub out: Option<PathBuf>,

    /// Directory holding the terrain textures.
    #[arg(long)]
    pub assets: Option<PathBuf>,

    /// Read commands from stdin instead of exporting once.
    #[arg(long)]
    pub interactive: bool,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(r) = args.radius {
            self.island.radius = r;
        }
        if let Some(h) = args.max_height {
            self.island.max_height = h;
        }
        if let Some(seed) = args.seed {
            self.island.seed = Some(seed);
        }
        if args.night {
            self.lighting.night = true;
        }
        if let Some(scale) = args.light {
            self.lighting.intensity_scale = scale;
        }
        if let Some(frames) = args.frames {
            self.export.frames = frames;
        }
        if let Some(ref out) = args.out {
            self.export.output_dir = out.clone();
        }
        if let Some(ref assets) = args.assets {
            self.export.asset_dir = assets.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_override() {
        let mut config = Config::default();
        let args = CliArgs {
            radius: Some(24.0),
            seed: Some(7),
            night: true,
            out: Some(PathBuf::from("renders")),
            ..Default::default()
        };
        config.apply_cli_overrides(&args);
        assert_eq!(config.island.radius, 24.0);
        assert_eq!(config.island.seed, Some(7));
        assert!(config.lighting.night);
        assert_eq!(config.export.output_dir, PathBuf::from("renders"));
        // Non-overridden fields retain defaults
        assert_eq!(config.island.max_height, 10.0);
        assert_eq!(config.lighting.intensity_scale, 1.0);
    }

    #[test]
    fn test_cli_no_override() {
        let original = Config::default();
        let mut config = Config::default();
        config.apply_cli_overrides(&CliArgs::default());
        assert_eq!(config, original);
    }

    #[test]
    fn test_night_flag_does_not_clear_config_night() {
        let mut config = Config::default();
        config.lighting.night = true;
        config.apply_cli_overrides(&CliArgs::default());
        assert!(config.lighting.night);
    }

    #[test]
    fn test_parse_from_args() {
        let args = CliArgs::parse_from([
            "hexisle",
            "--radius",
            "12.5",
            "--max-height",
            "6",
            "--light",
            "0.5",
            "--interactive",
        ]);
        assert_eq!(args.radius, Some(12.5));
        assert_eq!(args.max_height, Some(6.0));
        assert_eq!(args.light, Some(0.5));
        assert!(args.interactive);
        assert!(!args.night);
    }
}
