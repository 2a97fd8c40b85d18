//! Primitive shape builders: cylinders (and cones) and UV spheres.
//!
//! Shapes are centred on the origin with +y up. Cylinders emit torso rows top
//! to bottom, then the top cap, then the bottom cap; spheres emit rows from the
//! north pole down.

use std::f32::consts::{PI, TAU};

use glam::{Vec2, Vec3};

use crate::geometry::Geometry;

/// Cylinder description. A zero `radius_top` gives a cone.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CylinderParams {
    pub radius_top: f32,
    pub radius_bottom: f32,
    pub height: f32,
    pub radial_segments: u32,
    pub height_segments: u32,
    /// Skip both caps.
    pub open_ended: bool,
}

impl CylinderParams {
    /// Closed cylinder with one height segment.
    pub fn new(radius_top: f32, radius_bottom: f32, height: f32, radial_segments: u32) -> Self {
        Self {
            radius_top,
            radius_bottom,
            height,
            radial_segments,
            height_segments: 1,
            open_ended: false,
        }
    }

    pub fn open_ended(mut self) -> Self {
        self.open_ended = true;
        self
    }
}

/// Build a cylinder, cone or truncated cone.
pub fn cylinder(params: CylinderParams) -> Geometry {
    let radial = params.radial_segments.max(3);
    let rows = params.height_segments.max(1);
    let half_height = params.height * 0.5;
    let slope = if params.height != 0.0 {
        (params.radius_bottom - params.radius_top) / params.height
    } else {
        0.0
    };

    let mut geometry = Geometry::new();
    let mut grid: Vec<Vec<u32>> = Vec::with_capacity(rows as usize + 1);

    for y in 0..=rows {
        let v = y as f32 / rows as f32;
        let radius = v * (params.radius_bottom - params.radius_top) + params.radius_top;
        let mut row = Vec::with_capacity(radial as usize + 1);
        for x in 0..=radial {
            let u = x as f32 / radial as f32;
            let (sin, cos) = (u * TAU).sin_cos();
            let position = Vec3::new(radius * sin, -v * params.height + half_height, radius * cos);
            let normal = Vec3::new(sin, slope, cos).normalize();
            row.push(geometry.push_vertex(position, normal, Vec2::new(u, 1.0 - v)));
        }
        grid.push(row);
    }

    for x in 0..radial as usize {
        for y in 0..rows as usize {
            let a = grid[y][x];
            let b = grid[y + 1][x];
            let c = grid[y + 1][x + 1];
            let d = grid[y][x + 1];
            geometry.push_triangle(a, b, d);
            geometry.push_triangle(b, c, d);
        }
    }

    if !params.open_ended {
        if params.radius_top > 0.0 {
            push_cap(&mut geometry, params.radius_top, half_height, radial, true);
        }
        if params.radius_bottom > 0.0 {
            push_cap(&mut geometry, params.radius_bottom, half_height, radial, false);
        }
    }

    geometry
}

fn push_cap(geometry: &mut Geometry, radius: f32, half_height: f32, radial: u32, top: bool) {
    let sign = if top { 1.0 } else { -1.0 };
    let normal = Vec3::new(0.0, sign, 0.0);
    let y = half_height * sign;

    // One centre vertex per segment keeps the cap UVs unshared.
    let center_start = geometry.vertex_count() as u32;
    for _ in 0..radial {
        geometry.push_vertex(Vec3::new(0.0, y, 0.0), normal, Vec2::splat(0.5));
    }

    let ring_start = geometry.vertex_count() as u32;
    for x in 0..=radial {
        let u = x as f32 / radial as f32;
        let (sin, cos) = (u * TAU).sin_cos();
        geometry.push_vertex(
            Vec3::new(radius * sin, y, radius * cos),
            normal,
            Vec2::new(cos * 0.5 + 0.5, sin * 0.5 * sign + 0.5),
        );
    }

    for x in 0..radial {
        let c = center_start + x;
        let i = ring_start + x;
        if top {
            geometry.push_triangle(i, i + 1, c);
        } else {
            geometry.push_triangle(i + 1, i, c);
        }
    }
}

/// Build a UV sphere.
pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Geometry {
    let columns = width_segments.max(3);
    let rows = height_segments.max(2);

    let mut geometry = Geometry::new();
    let mut grid: Vec<Vec<u32>> = Vec::with_capacity(rows as usize + 1);

    for iy in 0..=rows {
        let v = iy as f32 / rows as f32;
        let u_offset = if iy == 0 {
            0.5 / columns as f32
        } else if iy == rows {
            -0.5 / columns as f32
        } else {
            0.0
        };
        let (theta_sin, theta_cos) = (v * PI).sin_cos();

        let mut row = Vec::with_capacity(columns as usize + 1);
        for ix in 0..=columns {
            let u = ix as f32 / columns as f32;
            let (phi_sin, phi_cos) = (u * TAU).sin_cos();
            let position = Vec3::new(
                -radius * phi_cos * theta_sin,
                radius * theta_cos,
                radius * phi_sin * theta_sin,
            );
            let normal = position.normalize_or_zero();
            row.push(geometry.push_vertex(position, normal, Vec2::new(u + u_offset, 1.0 - v)));
        }
        grid.push(row);
    }

    for iy in 0..rows as usize {
        for ix in 0..columns as usize {
            let a = grid[iy][ix + 1];
            let b = grid[iy][ix];
            let c = grid[iy + 1][ix];
            let d = grid[iy + 1][ix + 1];
            if iy != 0 {
                geometry.push_triangle(a, b, d);
            }
            if iy != rows as usize - 1 {
                geometry.push_triangle(b, c, d);
            }
        }
    }

    geometry
}
