//! Scene assembly for hex islands: terrain, meshes, shore, materials, lights
//! and clouds, plus the interactive session that edits them.

pub mod clouds;
mod command;
mod error;
pub mod export;
mod scene;
mod session;

pub use clouds::{Cloud, CloudField, Puff, Respawn};
pub use command::{Command, CommandError, HELP};
pub use error::SceneError;
pub use export::{ExportOptions, ExportedFiles, SceneSummary, export_scene};
pub use scene::{IslandScene, island_params, resolve_seed};
pub use session::{CommandOutcome, Session};
