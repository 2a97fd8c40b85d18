//! Texture manifest: the fixed set of image files the island materials use.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::material::MaterialError;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TextureSlot {
    Dirt,
    Dirt2,
    Grass,
    Sand,
    Stone,
    Water,
    Leaves,
}

impl TextureSlot {
    pub const ALL: [TextureSlot; 7] = [
        TextureSlot::Dirt,
        TextureSlot::Dirt2,
        TextureSlot::Grass,
        TextureSlot::Sand,
        TextureSlot::Stone,
        TextureSlot::Water,
        TextureSlot::Leaves,
    ];

    /// File name inside the asset directory.
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Dirt => "dirt.jpg",
            Self::Dirt2 => "dirt2.jpeg",
            Self::Grass => "grass.jpg",
            Self::Sand => "sand.jpg",
            Self::Stone => "stone.png",
            Self::Water => "water.jpg",
            Self::Leaves => "leaves.png",
        }
    }

    pub fn path_in(self, asset_dir: &Path) -> PathBuf {
        asset_dir.join(self.file_name())
    }
}

/// A texture that was found and decoded.
#[derive(Clone, Debug, PartialEq)]
pub struct TextureInfo {
    pub slot: TextureSlot,
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

/// The textures of [`TextureSlot::ALL`] that were found on disk. Slots that
/// failed to load are listed in [`TextureSet::missing`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TextureSet {
    textures: Vec<TextureInfo>,
    missing: Vec<TextureSlot>,
}

/// Open and decode one texture.
///
/// # Errors
///
/// Returns [`MaterialError::Texture`] if the file is missing or cannot be
/// decoded.
pub fn load_texture(slot: TextureSlot, asset_dir: &Path) -> Result<TextureInfo, MaterialError> {
    let path = slot.path_in(asset_dir);
    let image = image::open(&path).map_err(|source| MaterialError::Texture {
        path: path.clone(),
        source,
    })?;
    Ok(TextureInfo {
        slot,
        path,
        width: image.width(),
        height: image.height(),
    })
}

impl TextureSet {
    /// Open each texture under `asset_dir` and record its dimensions.
    ///
    /// Every slot is loaded on its own; a missing or corrupt file is logged
    /// and only that slot is left out.
    pub fn load(asset_dir: &Path) -> Self {
        let mut set = Self::default();
        for slot in TextureSlot::ALL {
            match load_texture(slot, asset_dir) {
                Ok(info) => {
                    debug!(
                        "Loaded texture {} ({}x{})",
                        info.path.display(),
                        info.width,
                        info.height
                    );
                    set.textures.push(info);
                }
                Err(e) => {
                    warn!("Texture {slot:?} unavailable: {e}");
                    set.missing.push(slot);
                }
            }
        }
        set
    }

    /// Slots whose file was missing or unreadable.
    pub fn missing(&self) -> &[TextureSlot] {
        &self.missing
    }

    pub fn get(&self, slot: TextureSlot) -> Option<&TextureInfo> {
        self.textures.iter().find(|t| t.slot == slot)
    }

    pub fn iter(&self) -> impl Iterator<Item = &TextureInfo> {
        self.textures.iter()
    }

    pub fn len(&self) -> usize {
        self.textures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.textures.is_empty()
    }
}
