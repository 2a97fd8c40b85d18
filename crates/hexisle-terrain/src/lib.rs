//! Procedural island terrain: hex grid layout, simplex height sampling, biome
//! classification, decoration placement, and the island generation pipeline.

mod biome;
mod error;
mod feature;
mod heightmap;
mod hex;
mod island;

pub mod debug_viz;
pub mod seed;

pub use biome::{Biome, BiomeThresholds};
pub use error::TerrainError;
pub use feature::{Decoration, DecorationParams, TREE_TIERS, decorate};
pub use heightmap::{HeightmapParams, HeightmapSampler};
pub use hex::{
    HEX_RADIUS, HEX_SPACING_X, HEX_SPACING_Z, HexCoord, coords_within_radius, grid_extent,
    nearest_coord, tile_to_position,
};
pub use island::{HexTile, Island, IslandParams, IslandStats, MAX_HEIGHT, MAX_RADIUS};
