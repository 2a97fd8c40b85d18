//! Per-biome mesh accumulation.
//!
//! Each island tile contributes its column to its own biome's accumulator
//! and its decoration to the decoration's target biome. Accumulators are then
//! merged into one mesh per biome.

use std::collections::hash_map::DefaultHasher;
use std::hash::Hasher;

use hexisle_terrain::{Biome, Island};
use tracing::debug;

use crate::column::tile_geometries;
use crate::geometry::{Geometry, merge_geometries};

/// The merged mesh of one biome.
#[derive(Clone, Debug)]
pub struct BiomeMesh {
    pub biome: Biome,
    pub geometry: Geometry,
    /// Columns merged into this mesh.
    pub column_count: usize,
    /// Rocks or trees merged into this mesh.
    pub decoration_count: usize,
}

/// Five merged meshes, one per biome, in [`Biome::ALL`] order.
#[derive(Clone, Debug)]
pub struct BiomeMeshes {
    meshes: [BiomeMesh; 5],
}

impl BiomeMeshes {
    /// Build all five meshes from scratch.
    pub fn build(island: &Island) -> Self {
        let mut parts: [Vec<Geometry>; 5] = Default::default();
        let mut columns = [0usize; 5];
        let mut decorations = [0usize; 5];

        for tile in island.tiles() {
            let (column, decoration) = tile_geometries(tile);
            parts[tile.biome.index()].push(column);
            columns[tile.biome.index()] += 1;
            if let Some((target, geometry)) = decoration {
                parts[target.index()].push(geometry);
                decorations[target.index()] += 1;
            }
        }

        let meshes = Biome::ALL.map(|biome| {
            let i = biome.index();
            let geometry = merge_geometries(&parts[i]);
            debug!(
                biome = biome.name(),
                columns = columns[i],
                decorations = decorations[i],
                triangles = geometry.triangle_count(),
                "merged biome mesh"
            );
            BiomeMesh {
                biome,
                geometry,
                column_count: columns[i],
                decoration_count: decorations[i],
            }
        });

        Self { meshes }
    }

    pub fn get(&self, biome: Biome) -> &BiomeMesh {
        &self.meshes[biome.index()]
    }

    pub fn iter(&self) -> impl Iterator<Item = &BiomeMesh> {
        self.meshes.iter()
    }

    pub fn total_triangles(&self) -> usize {
        self.meshes.iter().map(|m| m.geometry.triangle_count()).sum()
    }

    /// Digest over all five meshes in order.
    pub fn content_hash(&self) -> u64 {
        let mut hasher = DefaultHasher::new();
        for mesh in &self.meshes {
            mesh.geometry.hash_into(&mut hasher);
        }
        hasher.finish()
    }
}
