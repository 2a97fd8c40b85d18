//! Top-down raster views of a generated island.
//!
//! [`DebugImage`] holds RGBA pixels; the renderers paint biome and height maps
//! that the app writes out as PNG next to the exported meshes.

mod image;
mod renderers;

pub use self::image::DebugImage;
pub use renderers::{
    FLOOR_COLOR, WATER_COLOR, biome_color, render_biome_map, render_height_map, shade,
};
