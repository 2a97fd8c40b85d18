//! The island's named materials, persisted as RON.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::material::{MaterialDef, MaterialError, Side};
use crate::texture::TextureSlot;

/// Ordered, uniquely named material list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct MaterialLibrary {
    materials: Vec<MaterialDef>,
}

impl Default for MaterialLibrary {
    fn default() -> Self {
        let biome = |name: &str, texture| MaterialDef {
            name: name.to_string(),
            flat_shading: true,
            env_map_intensity: 0.135,
            texture: Some(texture),
            ..Default::default()
        };

        let materials = vec![
            biome("stone", TextureSlot::Stone),
            biome("dirt", TextureSlot::Dirt),
            biome("grass", TextureSlot::Grass),
            biome("sand", TextureSlot::Sand),
            biome("dirt2", TextureSlot::Dirt2),
            MaterialDef {
                name: "water".into(),
                color: [0.333, 0.667, 1.0],
                roughness: 1.0,
                metalness: 0.025,
                transmission: 0.9,
                ior: 1.4,
                thickness: 1.5,
                texture: Some(TextureSlot::Water),
                opacity: 0.8,
                ..Default::default()
            },
            MaterialDef {
                name: "container".into(),
                env_map_intensity: 0.2,
                side: Side::Double,
                texture: Some(TextureSlot::Dirt),
                ..Default::default()
            },
            MaterialDef {
                name: "floor".into(),
                env_map_intensity: 0.1,
                side: Side::Double,
                texture: Some(TextureSlot::Dirt2),
                ..Default::default()
            },
            MaterialDef {
                name: "cloud".into(),
                env_map_intensity: 0.75,
                flat_shading: true,
                opacity: 0.9,
                ..Default::default()
            },
        ];
        Self { materials }
    }
}

impl MaterialLibrary {
    /// Build from definitions, validating each and rejecting duplicate names.
    pub fn new(defs: Vec<MaterialDef>) -> Result<Self, MaterialError> {
        let mut materials: Vec<MaterialDef> = Vec::with_capacity(defs.len());
        for def in defs {
            let def = def.validated()?;
            if materials.iter().any(|m| m.name == def.name) {
                return Err(MaterialError::DuplicateName(def.name));
            }
            materials.push(def);
        }
        Ok(Self { materials })
    }

    pub fn get(&self, name: &str) -> Option<&MaterialDef> {
        self.materials.iter().find(|m| m.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MaterialDef> {
        self.materials.iter()
    }

    pub fn len(&self) -> usize {
        self.materials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.materials.is_empty()
    }

    /// Texture slots referenced by at least one material.
    pub fn used_textures(&self) -> Vec<TextureSlot> {
        TextureSlot::ALL
            .into_iter()
            .filter(|slot| self.materials.iter().any(|m| m.texture == Some(*slot)))
            .collect()
    }

    pub fn from_ron_str(text: &str) -> Result<Self, MaterialError> {
        let library: MaterialLibrary = ron::from_str(text)?;
        Self::new(library.materials)
    }

    pub fn load(path: &Path) -> Result<Self, MaterialError> {
        let text = std::fs::read_to_string(path).map_err(|source| MaterialError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let library = Self::from_ron_str(&text)?;
        info!(
            "Loaded {} materials from {}",
            library.len(),
            path.display()
        );
        Ok(library)
    }

    pub fn save(&self, path: &Path) -> Result<(), MaterialError> {
        let pretty = ron::ser::PrettyConfig::new().depth_limit(4);
        let text = ron::ser::to_string_pretty(self, pretty)?;
        std::fs::write(path, text).map_err(|source| MaterialError::Io {
            path: path.to_path_buf(),
            source,
        })
    }
}
