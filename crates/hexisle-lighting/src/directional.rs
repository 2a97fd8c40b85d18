//! Directional light: the sun by day and the moon by night.
//!
//! [`DirectionalLight`] is the CPU-side description; [`DirectionalLightUniform`]
//! is what gets written to a uniform buffer.

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::shadow::ShadowCamera;

/// An infinitely distant light aimed from `position` at `target`.
#[derive(Clone, Debug, PartialEq)]
pub struct DirectionalLight {
    pub position: Vec3,
    pub target: Vec3,
    /// Linear RGB color (not premultiplied by intensity).
    pub color: Vec3,
    /// Base intensity before the rig's scale is applied.
    pub intensity: f32,
    pub visible: bool,
    pub cast_shadow: bool,
    pub shadow: ShadowCamera,
}

impl DirectionalLight {
    /// Warm sun above the +x/+z quadrant.
    pub fn sun() -> Self {
        Self {
            position: Vec3::new(10.0, 20.0, 10.0),
            target: Vec3::ZERO,
            color: Vec3::new(1.0, 0.95, 0.85),
            intensity: 3.5,
            visible: true,
            cast_shadow: true,
            shadow: ShadowCamera::default(),
        }
    }

    /// Cool, dim moon opposite the sun.
    pub fn moon() -> Self {
        Self {
            position: Vec3::new(-10.0, 20.0, -10.0),
            target: Vec3::ZERO,
            color: Vec3::new(0.55, 0.6, 0.85),
            intensity: 0.8,
            visible: false,
            cast_shadow: true,
            shadow: ShadowCamera::default(),
        }
    }

    /// Unit vector pointing from the light toward its target.
    pub fn direction(&self) -> Vec3 {
        (self.target - self.position).normalize_or_zero()
    }

    /// Pack with an already-scaled intensity. Hidden lights pack as zero
    /// intensity.
    pub fn to_uniform(&self, intensity: f32) -> DirectionalLightUniform {
        let d = self.direction();
        let intensity = if self.visible { intensity } else { 0.0 };
        DirectionalLightUniform {
            direction_intensity: [d.x, d.y, d.z, intensity],
            color_shadow: [
                self.color.x,
                self.color.y,
                self.color.z,
                if self.cast_shadow { 1.0 } else { 0.0 },
            ],
        }
    }
}

/// GPU-side representation, 32 bytes, std140-compatible.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct DirectionalLightUniform {
    /// xyz = direction (normalized), w = intensity.
    pub direction_intensity: [f32; 4],
    /// xyz = color (linear RGB), w = 1.0 when casting shadows.
    pub color_shadow: [f32; 4],
}
