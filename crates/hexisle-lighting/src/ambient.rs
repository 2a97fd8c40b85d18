//! Non-directional fill lights.

use glam::Vec3;

/// Sky/ground gradient fill. Surfaces facing up receive `sky_color`, facing
/// down `ground_color`.
#[derive(Clone, Debug, PartialEq)]
pub struct HemisphereLight {
    pub sky_color: Vec3,
    pub ground_color: Vec3,
    pub intensity: f32,
}

impl Default for HemisphereLight {
    fn default() -> Self {
        Self {
            sky_color: Vec3::new(1.0, 1.0, 1.0),
            ground_color: Vec3::new(0.55, 0.45, 0.35),
            intensity: 0.6,
        }
    }
}

impl HemisphereLight {
    /// Radiance for a surface with the given normal.
    pub fn irradiance(&self, normal: Vec3) -> Vec3 {
        let t = normal.normalize_or_zero().y * 0.5 + 0.5;
        self.ground_color.lerp(self.sky_color, t) * self.intensity
    }
}

/// Uniform light reaching every surface equally.
#[derive(Clone, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: Vec3,
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: Vec3::ONE,
            intensity: 0.3,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hemisphere_blends_by_normal() {
        let light = HemisphereLight::default();
        let up = light.irradiance(Vec3::Y);
        let down = light.irradiance(-Vec3::Y);
        assert!((up - light.sky_color * light.intensity).length() < 1e-6);
        assert!((down - light.ground_color * light.intensity).length() < 1e-6);
        let side = light.irradiance(Vec3::X);
        let mid = (light.sky_color + light.ground_color) * 0.5 * light.intensity;
        assert!((side - mid).length() < 1e-6);
    }
}
