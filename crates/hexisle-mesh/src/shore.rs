//! Water disc, container skirt and floor around the island.

use glam::Vec3;

use crate::geometry::Geometry;
use crate::primitives::{CylinderParams, cylinder};

/// Radial segments of every shore cylinder.
pub const SHORE_SEGMENTS: u32 = 50;

/// The three shoreline meshes.
#[derive(Clone, Debug)]
pub struct ShoreMeshes {
    /// Closed disc just above the ground, radius `r + 1`.
    pub water: Geometry,
    /// Open-ended wall around the water with inward-facing sides, radius `r + 1.1`.
    pub container: Geometry,
    /// Closed slab under everything, radius `r + 2.5`.
    pub floor: Geometry,
}

impl ShoreMeshes {
    /// Build the shoreline for an island of `radius` and `max_height`.
    ///
    /// Negative inputs are treated as zero.
    pub fn build(radius: f32, max_height: f32) -> Self {
        let r = radius.max(0.0);
        let h = max_height.max(0.0);

        let mut water = cylinder(CylinderParams::new(r + 1.0, r + 1.0, h * 0.2, SHORE_SEGMENTS));
        water.translate(Vec3::new(0.0, h * 0.1, 0.0));

        let mut container = cylinder(
            CylinderParams::new(r + 1.1, r + 1.1, h * 0.25, SHORE_SEGMENTS).open_ended(),
        );
        container
            .translate(Vec3::new(0.0, h * 0.125, 0.0))
            .flip_faces();

        let mut floor = cylinder(CylinderParams::new(r + 2.5, r + 2.5, h * 0.1, SHORE_SEGMENTS));
        floor.translate(Vec3::new(0.0, -h * 0.05, 0.0));

        Self {
            water,
            container,
            floor,
        }
    }
}
