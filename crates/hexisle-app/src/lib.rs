//! Hexisle application: platform directories, the fixed-timestep animation
//! loop and the interactive command loop.

pub mod game_loop;
pub mod platform;
pub mod repl;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Platform(#[from] platform::PlatformError),

    #[error(transparent)]
    Scene(#[from] hexisle_scene::SceneError),

    #[error("console I/O error: {0}")]
    Io(#[from] std::io::Error),
}
