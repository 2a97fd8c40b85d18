//! Geometry for single hex columns and their decorations.

use glam::{Vec2, Vec3};
use hexisle_terrain::{Biome, Decoration, HEX_RADIUS, HexTile, TREE_TIERS};

use crate::geometry::{Geometry, merge_geometries};
use crate::primitives::{CylinderParams, cylinder, sphere};

/// Radial segments of a hex column.
const HEX_SIDES: u32 = 6;

/// Segments used for rock spheres in both directions.
const ROCK_SEGMENTS: u32 = 7;

/// Sides of each tree cone.
const TREE_SIDES: u32 = 3;

/// A hexagonal prism standing on y = 0 with its top at `height`.
pub fn hex_column(height: f32, position: Vec2) -> Geometry {
    let mut geometry = cylinder(CylinderParams::new(HEX_RADIUS, HEX_RADIUS, height, HEX_SIDES));
    geometry.translate(Vec3::new(position.x, height * 0.5, position.y));
    geometry
}

/// A rock sphere centred at `center`.
pub fn rock_geometry(center: Vec3, radius: f32) -> Geometry {
    let mut geometry = sphere(radius, ROCK_SEGMENTS, ROCK_SEGMENTS);
    geometry.translate(center);
    geometry
}

/// Three stacked three-sided cones on top of a column.
pub fn tree_geometry(tree_height: f32, position: Vec2, column_height: f32) -> Geometry {
    let centers = Decoration::tree_tier_centers(tree_height, position, column_height);
    let tiers: Vec<Geometry> = TREE_TIERS
        .iter()
        .zip(centers)
        .map(|(&(radius, _), center)| {
            let mut cone = cylinder(CylinderParams::new(0.0, radius, tree_height, TREE_SIDES));
            cone.translate(center);
            cone
        })
        .collect();
    merge_geometries(&tiers)
}

/// Column geometry for a tile plus its decoration and the biome the
/// decoration merges into.
pub fn tile_geometries(tile: &HexTile) -> (Geometry, Option<(Biome, Geometry)>) {
    let column = hex_column(tile.height, tile.position);
    let decoration = tile.decoration.map(|decoration| {
        let geometry = match decoration {
            Decoration::Rock { offset, radius } => rock_geometry(
                Decoration::rock_center(offset, tile.position, tile.height),
                radius,
            ),
            Decoration::Tree { height } => tree_geometry(height, tile.position, tile.height),
        };
        (decoration.target_biome(), geometry)
    });
    (column, decoration)
}

#[cfg(test)]
mod tests {
    use super::*;
    use hexisle_terrain::HexCoord;

    #[test]
    fn test_column_stands_on_ground() {
        let g = hex_column(3.5, Vec2::new(2.0, -1.0));
        let (min, max) = g.bounds().unwrap();
        assert!(min.y.abs() < 1e-6);
        assert!((max.y - 3.5).abs() < 1e-6);
        // Corners sit at z +/- 1 and x +/- sqrt(3)/2 around the centre.
        assert!((max.z - 0.0).abs() < 1e-5);
        assert!((min.x - (2.0 - 3f32.sqrt() / 2.0)).abs() < 1e-5);
    }

    #[test]
    fn test_rock_centred() {
        let center = Vec3::new(1.0, 4.0, -2.0);
        let g = rock_geometry(center, 0.25);
        let (min, max) = g.bounds().unwrap();
        assert!(((min + max) * 0.5 - center).length() < 0.05);
    }

    #[test]
    fn test_tree_sits_above_column() {
        let g = tree_geometry(1.5, Vec2::ZERO, 7.0);
        let (min, max) = g.bounds().unwrap();
        // Lowest cone is centred one unit above the column top.
        assert!((min.y - (7.0 + 1.0 - 0.75)).abs() < 1e-5);
        assert!((max.y - (7.0 + 1.5 * 1.25 + 1.0 + 0.75)).abs() < 1e-5);
        assert_eq!(g.triangle_count(), 3 * 9);
    }

    #[test]
    fn test_tile_geometries_routes_decorations() {
        let tile = HexTile {
            coord: HexCoord::new(0, 0),
            position: Vec2::ZERO,
            height: 8.5,
            biome: Biome::Stone,
            decoration: Some(Decoration::Rock {
                offset: Vec2::new(0.1, 0.2),
                radius: 0.2,
            }),
        };
        let (column, decoration) = tile_geometries(&tile);
        assert!(!column.is_empty());
        let (biome, rock) = decoration.unwrap();
        assert_eq!(biome, Biome::Stone);
        assert_eq!(rock.vertex_count(), 64);

        let tree_tile = HexTile {
            biome: Biome::Dirt,
            decoration: Some(Decoration::Tree { height: 1.3 }),
            ..tile
        };
        let (_, decoration) = tile_geometries(&tree_tile);
        assert_eq!(decoration.unwrap().0, Biome::Grass);
    }
}
