//! Packed vertex and `wgpu::VertexBufferLayout` for island meshes.
//!
//! | Location | Offset | Format    | Field    |
//! |----------|--------|-----------|----------|
//! | 0        | 0      | Float32x3 | position |
//! | 1        | 12     | Float32x3 | normal   |
//! | 2        | 24     | Float32x2 | uv       |

use std::mem;

use bytemuck::{Pod, Zeroable};
use wgpu::{VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

use crate::geometry::Geometry;

/// One interleaved vertex as uploaded to the GPU.
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable)]
pub struct TerrainVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub uv: [f32; 2],
}

static_assertions::assert_eq_size!(TerrainVertex, [u8; 32]);

pub const TERRAIN_VERTEX_ATTRIBUTES: [VertexAttribute; 3] = [
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 0,
        shader_location: 0,
    },
    VertexAttribute {
        format: VertexFormat::Float32x3,
        offset: 12,
        shader_location: 1,
    },
    VertexAttribute {
        format: VertexFormat::Float32x2,
        offset: 24,
        shader_location: 2,
    },
];

/// Layout shared by every island pipeline (biomes, shore, clouds).
pub const TERRAIN_VERTEX_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<TerrainVertex>() as u64,
    step_mode: VertexStepMode::Vertex,
    attributes: &TERRAIN_VERTEX_ATTRIBUTES,
};

/// Owned copy of [`TERRAIN_VERTEX_LAYOUT`].
pub fn terrain_vertex_buffer_layout() -> VertexBufferLayout<'static> {
    TERRAIN_VERTEX_LAYOUT
}

const _: () =
    assert!(TERRAIN_VERTEX_ATTRIBUTES[1].offset == mem::offset_of!(TerrainVertex, normal) as u64);
const _: () =
    assert!(TERRAIN_VERTEX_ATTRIBUTES[2].offset == mem::offset_of!(TerrainVertex, uv) as u64);

/// Interleave a geometry's attributes into upload order.
pub fn pack_vertices(geometry: &Geometry) -> Vec<TerrainVertex> {
    geometry
        .positions
        .iter()
        .zip(&geometry.normals)
        .zip(&geometry.uvs)
        .map(|((p, n), uv)| TerrainVertex {
            position: p.to_array(),
            normal: n.to_array(),
            uv: uv.to_array(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::{CylinderParams, cylinder};

    #[test]
    fn test_layout_stride_matches_vertex_struct_size() {
        assert_eq!(TERRAIN_VERTEX_LAYOUT.array_stride, 32);
        assert_eq!(terrain_vertex_buffer_layout().attributes.len(), 3);
    }

    #[test]
    fn test_shader_locations_are_sequential() {
        for (i, attr) in TERRAIN_VERTEX_ATTRIBUTES.iter().enumerate() {
            assert_eq!(attr.shader_location, i as u32);
        }
    }

    #[test]
    fn test_pack_vertices_preserves_order() {
        let g = cylinder(CylinderParams::new(1.0, 1.0, 2.0, 6));
        let packed = pack_vertices(&g);
        assert_eq!(packed.len(), g.vertex_count());
        assert_eq!(packed[3].position, g.positions[3].to_array());
        assert_eq!(packed[3].normal, g.normals[3].to_array());
        assert_eq!(packed[3].uv, g.uvs[3].to_array());

        let bytes: &[u8] = bytemuck::cast_slice(&packed);
        assert_eq!(bytes.len(), packed.len() * 32);
    }
}
