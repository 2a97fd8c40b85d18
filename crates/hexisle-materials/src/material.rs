//! Core material types: [`MaterialDef`], [`MaterialGpuData`] and [`MaterialError`].

use std::path::PathBuf;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::texture::TextureSlot;

// ---------------------------------------------------------------------------
// MaterialError
// ---------------------------------------------------------------------------

#[derive(Debug, Error)]
pub enum MaterialError {
    /// The material name must not be empty.
    #[error("material name must not be empty")]
    EmptyName,

    #[error("duplicate material name: {0}")]
    DuplicateName(String),

    /// A texture file is missing or cannot be decoded.
    #[error("failed to load texture {path}: {source}")]
    Texture {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("failed to access {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("material library parse error: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("material library serialize error: {0}")]
    Serialize(#[from] ron::Error),
}

// ---------------------------------------------------------------------------
// MaterialDef
// ---------------------------------------------------------------------------

/// Which faces of a surface are rendered.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    #[default]
    Front,
    Back,
    Double,
}

/// Physical material definition.
///
/// All numeric fields are validated and clamped via [`MaterialDef::validated`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialDef {
    pub name: String,

    /// Base color in linear RGB. Each component is clamped to `[0.0, 1.0]`.
    pub color: [f32; 3],

    /// Clamped to `[0.0, 1.0]`.
    pub roughness: f32,

    /// Clamped to `[0.0, 1.0]`.
    pub metalness: f32,

    /// Fraction of light passing through the surface. Clamped to `[0.0, 1.0]`.
    pub transmission: f32,

    /// Index of refraction, clamped to `[1.0, 2.333]`.
    pub ior: f32,

    /// Volume thickness used by transmission. Must be >= 0.0.
    pub thickness: f32,

    /// Environment reflection strength. Must be >= 0.0.
    pub env_map_intensity: f32,

    pub flat_shading: bool,

    pub side: Side,

    /// Diffuse texture, if any.
    pub texture: Option<TextureSlot>,

    /// 1.0 = fully opaque. Clamped to `[0.0, 1.0]`.
    pub opacity: f32,
}

impl Default for MaterialDef {
    fn default() -> Self {
        Self {
            name: String::from("default"),
            color: [1.0, 1.0, 1.0],
            roughness: 1.0,
            metalness: 0.0,
            transmission: 0.0,
            ior: 1.5,
            thickness: 0.0,
            env_map_intensity: 1.0,
            flat_shading: false,
            side: Side::Front,
            texture: None,
            opacity: 1.0,
        }
    }
}

impl MaterialDef {
    /// Validates and clamps all fields to their legal ranges.
    ///
    /// # Errors
    ///
    /// Returns [`MaterialError::EmptyName`] if the name is empty.
    pub fn validated(mut self) -> Result<Self, MaterialError> {
        if self.name.is_empty() {
            return Err(MaterialError::EmptyName);
        }

        for c in &mut self.color {
            *c = c.clamp(0.0, 1.0);
        }

        self.roughness = self.roughness.clamp(0.0, 1.0);
        self.metalness = self.metalness.clamp(0.0, 1.0);
        self.transmission = self.transmission.clamp(0.0, 1.0);
        self.ior = self.ior.clamp(1.0, 2.333);
        self.thickness = self.thickness.max(0.0);
        self.env_map_intensity = self.env_map_intensity.max(0.0);
        self.opacity = self.opacity.clamp(0.0, 1.0);

        Ok(self)
    }

    /// Needs sorting and blending when rendered.
    pub fn is_transparent(&self) -> bool {
        self.opacity < 1.0 || self.transmission > 0.0
    }
}

// ---------------------------------------------------------------------------
// MaterialGpuData
// ---------------------------------------------------------------------------

/// Bit set in [`MaterialGpuData::flags`] for flat-shaded materials.
const FLAG_FLAT_SHADING: u32 = 1;
/// Bit set when the material samples a diffuse texture.
const FLAG_TEXTURED: u32 = 1 << 1;
/// Bit set for double-sided materials.
const FLAG_DOUBLE_SIDED: u32 = 1 << 2;

/// GPU-friendly packed material data, 48 bytes, std140-compatible.
#[repr(C)]
#[derive(Clone, Copy, Debug, Pod, Zeroable)]
pub struct MaterialGpuData {
    /// xyz = color, w = opacity.
    pub color_opacity: [f32; 4],
    pub roughness: f32,
    pub metalness: f32,
    pub transmission: f32,
    pub ior: f32,
    pub thickness: f32,
    pub env_map_intensity: f32,
    pub flags: u32,
    pub _padding: u32,
}

impl From<&MaterialDef> for MaterialGpuData {
    fn from(m: &MaterialDef) -> Self {
        let mut flags = 0;
        if m.flat_shading {
            flags |= FLAG_FLAT_SHADING;
        }
        if m.texture.is_some() {
            flags |= FLAG_TEXTURED;
        }
        if m.side == Side::Double {
            flags |= FLAG_DOUBLE_SIDED;
        }
        Self {
            color_opacity: [m.color[0], m.color[1], m.color[2], m.opacity],
            roughness: m.roughness,
            metalness: m.metalness,
            transmission: m.transmission,
            ior: m.ior,
            thickness: m.thickness,
            env_map_intensity: m.env_map_intensity,
            flags,
            _padding: 0,
        }
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
