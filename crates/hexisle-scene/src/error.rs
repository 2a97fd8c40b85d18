use std::path::PathBuf;

use hexisle_materials::MaterialError;
use hexisle_mesh::ExportError;
use hexisle_terrain::TerrainError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SceneError {
    #[error("terrain error: {0}")]
    Terrain(#[from] TerrainError),

    #[error("material error: {0}")]
    Material(#[from] MaterialError),

    #[error("export error: {0}")]
    Export(#[from] ExportError),

    #[error("failed to write {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to encode {path}: {source}")]
    Image {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("scene summary serialize error: {0}")]
    Serialize(#[from] ron::Error),
}
