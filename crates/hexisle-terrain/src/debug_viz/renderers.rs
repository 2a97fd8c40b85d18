//! Biome and height map renderers.

use glam::Vec2;

use super::image::DebugImage;
use crate::biome::Biome;
use crate::hex::{HEX_RADIUS, nearest_coord};
use crate::island::{HexTile, Island};

/// Colour of the water disc around the island.
pub const WATER_COLOR: [u8; 4] = [70, 140, 215, 255];

/// Colour of the floor ring outside the water.
pub const FLOOR_COLOR: [u8; 4] = [92, 70, 48, 255];

/// Flat colour for each biome, close to the average of its texture.
pub fn biome_color(biome: Biome) -> [u8; 4] {
    match biome {
        Biome::Stone => [140, 140, 145, 255],
        Biome::Dirt => [120, 90, 55, 255],
        Biome::Grass => [85, 150, 60, 255],
        Biome::Sand => [220, 200, 140, 255],
        Biome::Dirt2 => [150, 115, 75, 255],
    }
}

/// Darken `color` for low columns: factor ranges from 0.55 at height 0 to 1.0
/// at `max_height`.
pub fn shade(color: [u8; 4], height: f32, max_height: f32) -> [u8; 4] {
    let t = if max_height > 0.0 {
        (height / max_height).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let factor = 0.55 + 0.45 * t;
    [
        (color[0] as f32 * factor).round() as u8,
        (color[1] as f32 * factor).round() as u8,
        (color[2] as f32 * factor).round() as u8,
        color[3],
    ]
}

/// Paint every pixel of a `size`×`size` view centred on the island.
///
/// The view spans the floor ring (`radius + 2.5`). `tile_color` picks the
/// colour of a pixel covered by a column.
fn render_with(
    island: &Island,
    size: u32,
    tile_color: impl Fn(&HexTile, f32) -> [u8; 4],
) -> DebugImage {
    let mut image = DebugImage::new(size, size);
    let radius = island.params().radius.max(0.0);
    let max_height = island.params().max_height;
    let extent = radius + 2.5;
    let water_radius = radius + 1.0;

    for py in 0..size {
        for px in 0..size {
            let point = Vec2::new(
                -extent + (px as f32 + 0.5) / size as f32 * 2.0 * extent,
                -extent + (py as f32 + 0.5) / size as f32 * 2.0 * extent,
            );

            let coord = nearest_coord(point);
            let covered = island
                .tile_at(coord)
                .filter(|tile| tile.position.distance(point) <= HEX_RADIUS);

            let color = if let Some(tile) = covered {
                tile_color(tile, max_height)
            } else if point.length() <= water_radius {
                WATER_COLOR
            } else if point.length() <= extent {
                FLOOR_COLOR
            } else {
                continue;
            };
            image.set_pixel(px, py, color);
        }
    }

    image
}

/// Top-down biome map, shaded by column height.
pub fn render_biome_map(island: &Island, size: u32) -> DebugImage {
    render_with(island, size, |tile, max_height| {
        shade(biome_color(tile.biome), tile.height, max_height)
    })
}

/// Top-down greyscale height map.
pub fn render_height_map(island: &Island, size: u32) -> DebugImage {
    render_with(island, size, |tile, max_height| {
        shade([255, 255, 255, 255], tile.height, max_height)
    })
}
