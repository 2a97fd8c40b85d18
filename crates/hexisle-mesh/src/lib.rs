//! Mesh construction for hex islands: geometry buffers, primitive builders,
//! per-biome merging, shoreline meshes, OBJ export and the packed GPU vertex.

pub mod biome_mesh;
pub mod column;
pub mod geometry;
pub mod obj;
pub mod primitives;
pub mod shore;
pub mod vertex_format;

pub use biome_mesh::{BiomeMesh, BiomeMeshes};
pub use column::{hex_column, rock_geometry, tile_geometries, tree_geometry};
pub use geometry::{Geometry, merge_geometries};
pub use obj::{ExportError, MtlMaterial, ObjObject, export_obj, write_mtl, write_obj};
pub use primitives::{CylinderParams, cylinder, sphere};
pub use shore::{SHORE_SEGMENTS, ShoreMeshes};
pub use vertex_format::{
    TERRAIN_VERTEX_ATTRIBUTES, TERRAIN_VERTEX_LAYOUT, TerrainVertex, pack_vertices,
    terrain_vertex_buffer_layout,
};
