//! An editable scene: the headless counterpart of the terrain form, the
//! day/night toggle and the light slider.

use std::path::Path;

use hexisle_config::Config;
use hexisle_lighting::TimeOfDay;
use hexisle_materials::{TextureSet, TextureSlot};
use tracing::{info, warn};

use crate::clouds::Respawn;
use crate::command::{Command, HELP};
use crate::error::SceneError;
use crate::export::{ExportOptions, ExportedFiles, biome_counts, export_scene};
use crate::scene::{IslandScene, resolve_seed};

/// What the caller should do after [`Session::execute`].
#[derive(Clone, Debug, PartialEq)]
pub enum CommandOutcome {
    /// Handled; show this line to the user.
    Message(String),
    /// Run this many fixed animation frames.
    Step(u32),
    /// Write the scene to the output directory.
    Export,
    Quit,
}

pub struct Session {
    config: Config,
    scene: IslandScene,
    textures: TextureSet,
    elapsed: f64,
}

impl Session {
    /// Resolve the seed, load textures and build the first scene.
    ///
    /// Each missing texture is logged and only its own materials export
    /// without a texture map.
    pub fn new(config: Config) -> Result<Self, SceneError> {
        let seed = resolve_seed(config.island.seed);
        let textures = TextureSet::load(&config.export.asset_dir);
        if !textures.missing().is_empty() {
            warn!(
                "{} of {} textures unavailable in {}",
                textures.missing().len(),
                TextureSlot::ALL.len(),
                config.export.asset_dir.display()
            );
        }
        let scene = IslandScene::build(&config, seed)?;
        Ok(Self {
            config,
            scene,
            textures,
            elapsed: 0.0,
        })
    }

    pub fn scene(&self) -> &IslandScene {
        &self.scene
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn textures(&self) -> &TextureSet {
        &self.textures
    }

    /// Seconds of animation simulated so far.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Rebuild the island, meshes, shore and clouds for a new size. Lighting
    /// state carries over. On error the current scene is kept.
    ///
    /// The seed is `seed` if given, else the configured seed, else a freshly
    /// drawn one, so an unseeded session gets a new island on every call.
    pub fn regenerate(
        &mut self,
        radius: f32,
        max_height: f32,
        seed: Option<u64>,
    ) -> Result<(), SceneError> {
        let seed = resolve_seed(seed.or(self.config.island.seed));
        let mut config = self.config.clone();
        config.island.radius = radius;
        config.island.max_height = max_height;
        config.lighting.night = self.scene.lights.time_of_day() == TimeOfDay::Night;
        config.lighting.intensity_scale = self.scene.lights.intensity_scale();

        let scene = IslandScene::build(&config, seed)?;
        info!(radius, max_height, seed, "Regenerated island");
        self.scene = scene;
        self.config = config;
        Ok(())
    }

    pub fn set_time_of_day(&mut self, time: TimeOfDay) {
        self.scene.lights.set_time_of_day(time);
    }

    pub fn toggle_day_night(&mut self) -> TimeOfDay {
        self.scene.lights.toggle()
    }

    /// Returns the clamped scale actually applied.
    pub fn set_light_scale(&mut self, scale: f32) -> f32 {
        self.scene.lights.set_intensity_scale(scale)
    }

    /// One animation frame.
    pub fn advance(&mut self, dt: f64) -> Vec<Respawn> {
        if dt.is_finite() && dt > 0.0 {
            self.elapsed += dt;
        }
        self.scene.clouds.step(dt as f32)
    }

    pub fn export(&self, dir: &Path) -> Result<ExportedFiles, SceneError> {
        let export = &self.config.export;
        export_scene(
            &self.scene,
            Some(&self.textures),
            self.elapsed,
            dir,
            ExportOptions {
                write_obj: export.write_obj,
                write_png: export.write_png,
                png_size: export.png_size,
            },
        )
    }

    pub fn stats_line(&self) -> String {
        let island = &self.scene.island;
        let stats = island.stats();
        format!(
            "seed {} | {} columns ({}) | {} rocks, {} trees | {} triangles | {} x{:.2}",
            self.scene.seed,
            stats.tile_count(),
            biome_counts(island),
            stats.rocks,
            stats.trees,
            self.scene.meshes.total_triangles(),
            self.scene.lights.time_of_day().name(),
            self.scene.lights.intensity_scale(),
        )
    }

    /// Apply a command that only touches the scene. Animation, export and
    /// quitting are handed back to the caller.
    pub fn execute(&mut self, command: Command) -> Result<CommandOutcome, SceneError> {
        let outcome = match command {
            Command::Generate {
                radius,
                max_height,
                seed,
            } => {
                self.regenerate(radius, max_height, seed)?;
                CommandOutcome::Message(self.stats_line())
            }
            Command::Day => {
                self.set_time_of_day(TimeOfDay::Day);
                CommandOutcome::Message("day".into())
            }
            Command::Night => {
                self.set_time_of_day(TimeOfDay::Night);
                CommandOutcome::Message("night".into())
            }
            Command::Toggle => {
                CommandOutcome::Message(self.toggle_day_night().name().to_string())
            }
            Command::Light(scale) => {
                let applied = self.set_light_scale(scale);
                CommandOutcome::Message(format!("light scale {applied:.2}"))
            }
            Command::Stats => CommandOutcome::Message(self.stats_line()),
            Command::Help => CommandOutcome::Message(HELP.to_string()),
            Command::Step(frames) => CommandOutcome::Step(frames),
            Command::Export => CommandOutcome::Export,
            Command::Quit => CommandOutcome::Quit,
        };
        Ok(outcome)
    }
}
