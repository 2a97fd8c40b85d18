//! Orthographic shadow camera for a directional light.

use glam::{Mat4, Vec3};

/// Orthographic frustum a directional light renders its shadow map from.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ShadowCamera {
    /// Half width and half height of the frustum in world units.
    pub half_extent: f32,
    pub near: f32,
    pub far: f32,
    /// Shadow map resolution (width = height).
    pub map_size: u32,
}

impl Default for ShadowCamera {
    fn default() -> Self {
        Self {
            half_extent: 20.0,
            near: 0.5,
            far: 100.0,
            map_size: 2048,
        }
    }
}

impl ShadowCamera {
    /// A camera wide enough to cover an island of `radius` plus its floor.
    pub fn covering(radius: f32) -> Self {
        Self {
            half_extent: radius.max(0.0) + 2.5,
            ..Self::default()
        }
    }

    /// View-projection matrix mapping world space into the light's clip space.
    pub fn light_space_matrix(&self, position: Vec3, target: Vec3) -> Mat4 {
        let forward = (target - position).normalize_or_zero();
        let up = if forward.cross(Vec3::Y).length_squared() < 1e-6 {
            Vec3::Z
        } else {
            Vec3::Y
        };
        let view = Mat4::look_at_rh(position, target, up);
        let e = self.half_extent;
        let projection = Mat4::orthographic_rh(-e, e, -e, e, self.near, self.far);
        projection * view
    }

    /// World units covered by one shadow-map texel.
    pub fn texel_size(&self) -> f32 {
        self.half_extent * 2.0 / self.map_size.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_target_projects_to_centre() {
        let camera = ShadowCamera::default();
        let m = camera.light_space_matrix(Vec3::new(10.0, 20.0, 10.0), Vec3::ZERO);
        let clip = m.project_point3(Vec3::ZERO);
        assert!(clip.x.abs() < 1e-5 && clip.y.abs() < 1e-5);
        assert!((0.0..=1.0).contains(&clip.z));
    }

    #[test]
    fn test_island_edge_inside_frustum() {
        let camera = ShadowCamera::covering(16.0);
        let m = camera.light_space_matrix(Vec3::new(10.0, 20.0, 10.0), Vec3::ZERO);
        for corner in [
            Vec3::new(16.0, 0.0, 0.0),
            Vec3::new(-16.0, 0.0, 0.0),
            Vec3::new(0.0, 10.0, 16.0),
            Vec3::new(0.0, 0.0, -16.0),
        ] {
            let clip = m.project_point3(corner);
            assert!(clip.x.abs() <= 1.0 && clip.y.abs() <= 1.0, "{corner} outside");
            assert!((0.0..=1.0).contains(&clip.z));
        }
    }

    #[test]
    fn test_straight_down_light_is_finite() {
        let camera = ShadowCamera::default();
        let m = camera.light_space_matrix(Vec3::new(0.0, 30.0, 0.0), Vec3::ZERO);
        assert!(m.is_finite());
    }

    #[test]
    fn test_texel_size() {
        let camera = ShadowCamera {
            half_extent: 8.0,
            map_size: 1024,
            ..Default::default()
        };
        assert!((camera.texel_size() - 16.0 / 1024.0).abs() < 1e-7);
    }
}
