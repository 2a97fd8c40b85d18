//! Indexed triangle geometry with position, normal and uv attributes.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use glam::{Quat, Vec2, Vec3};

/// Indexed triangle mesh held on the CPU.
///
/// The three attribute vectors always have the same length; `indices` holds
/// three entries per triangle with counter-clockwise front faces.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Geometry {
    pub positions: Vec<Vec3>,
    pub normals: Vec<Vec3>,
    pub uvs: Vec<Vec2>,
    pub indices: Vec<u32>,
}

impl Geometry {
    /// Creates an empty geometry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends one vertex and returns its index.
    pub fn push_vertex(&mut self, position: Vec3, normal: Vec3, uv: Vec2) -> u32 {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.normals.push(normal);
        self.uvs.push(uv);
        index
    }

    pub fn push_triangle(&mut self, a: u32, b: u32, c: u32) {
        self.indices.extend_from_slice(&[a, b, c]);
    }

    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Moves every vertex by `offset`.
    pub fn translate(&mut self, offset: Vec3) -> &mut Self {
        for p in &mut self.positions {
            *p += offset;
        }
        self
    }

    /// Rotates positions and normals around the y axis through the origin.
    pub fn rotate_y(&mut self, angle: f32) -> &mut Self {
        let rotation = Quat::from_rotation_y(angle);
        for p in &mut self.positions {
            *p = rotation * *p;
        }
        for n in &mut self.normals {
            *n = rotation * *n;
        }
        self
    }

    /// Turns the surface inside out: normals are negated and every triangle's
    /// winding is reversed.
    pub fn flip_faces(&mut self) -> &mut Self {
        for n in &mut self.normals {
            *n = -*n;
        }
        for tri in self.indices.chunks_exact_mut(3) {
            tri.swap(1, 2);
        }
        self
    }

    /// Axis-aligned bounds `(min, max)`, or `None` for an empty geometry.
    pub fn bounds(&self) -> Option<(Vec3, Vec3)> {
        let first = *self.positions.first()?;
        Some(
            self.positions
                .iter()
                .fold((first, first), |(min, max), &p| (min.min(p), max.max(p))),
        )
    }

    /// Appends `other`, offsetting its indices past the current vertices.
    pub fn append(&mut self, other: &Geometry) {
        let base = self.positions.len() as u32;
        self.positions.extend_from_slice(&other.positions);
        self.normals.extend_from_slice(&other.normals);
        self.uvs.extend_from_slice(&other.uvs);
        self.indices.extend(other.indices.iter().map(|i| i + base));
    }

    /// Digest over the exact bits of every attribute and index.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        self.hash_into(&mut hasher);
        hasher.finish()
    }

    pub(crate) fn hash_into(&self, hasher: &mut impl Hasher) {
        for p in &self.positions {
            p.to_array().map(f32::to_bits).hash(hasher);
        }
        for n in &self.normals {
            n.to_array().map(f32::to_bits).hash(hasher);
        }
        for uv in &self.uvs {
            uv.to_array().map(f32::to_bits).hash(hasher);
        }
        self.indices.hash(hasher);
    }
}

/// Merge several geometries into one, preserving order.
pub fn merge_geometries(parts: &[Geometry]) -> Geometry {
    let vertices: usize = parts.iter().map(Geometry::vertex_count).sum();
    let indices: usize = parts.iter().map(|g| g.indices.len()).sum();

    let mut merged = Geometry {
        positions: Vec::with_capacity(vertices),
        normals: Vec::with_capacity(vertices),
        uvs: Vec::with_capacity(vertices),
        indices: Vec::with_capacity(indices),
    };
    for part in parts {
        merged.append(part);
    }
    merged
}
