//! Hex grid layout: offset coordinates and their world-space positions.
//!
//! Columns are laid out in offset rows; odd rows shift half a column. World
//! positions are 2D (`x`, `z`) on the ground plane.

use glam::Vec2;

/// Horizontal distance between column centres in one row.
pub const HEX_SPACING_X: f32 = 1.77;

/// Distance between row centres.
pub const HEX_SPACING_Z: f32 = 1.535;

/// Circumradius of a single hex column.
pub const HEX_RADIUS: f32 = 1.0;

/// Offset coordinate of a grid cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HexCoord {
    pub col: i32,
    pub row: i32,
}

impl HexCoord {
    pub const fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// World-space centre of this cell on the ground plane.
    pub fn to_position(self) -> Vec2 {
        tile_to_position(self)
    }
}

/// Map a grid cell to its world-space centre.
///
/// `row % 2` keeps the sign of `row`, so odd negative rows shift by half a
/// column towards -x.
pub fn tile_to_position(coord: HexCoord) -> Vec2 {
    let shift = (coord.row % 2) as f32 * 0.5;
    Vec2::new(
        (coord.col as f32 + shift) * HEX_SPACING_X,
        coord.row as f32 * HEX_SPACING_Z,
    )
}

/// Largest `|col|`/`|row|` that can still land inside `radius`.
///
/// Returns `None` for a negative, NaN or infinite radius, and for a radius
/// whose extent does not fit in `i32`.
pub fn grid_extent(radius: f32) -> Option<i32> {
    if !(radius >= 0.0) || !radius.is_finite() {
        return None;
    }
    let rows = (radius / HEX_SPACING_Z).ceil();
    if rows >= i32::MAX as f32 {
        return None;
    }
    (rows as i32).checked_add(1)
}

/// Every cell whose centre lies within `radius` of the origin, column-major.
pub fn coords_within_radius(radius: f32) -> Vec<HexCoord> {
    let Some(extent) = grid_extent(radius) else {
        return Vec::new();
    };

    let mut coords = Vec::new();
    for col in -extent..=extent {
        for row in -extent..=extent {
            let coord = HexCoord::new(col, row);
            if coord.to_position().length() <= radius {
                coords.push(coord);
            }
        }
    }
    coords
}

/// Grid cell whose centre is closest to a ground-plane point.
pub fn nearest_coord(point: Vec2) -> HexCoord {
    let row_guess = (point.y / HEX_SPACING_Z).round() as i32;
    let mut best = HexCoord::new(0, row_guess);
    let mut best_dist = f32::INFINITY;
    for row in row_guess - 1..=row_guess + 1 {
        let shift = (row % 2) as f32 * 0.5;
        let col_guess = (point.x / HEX_SPACING_X - shift).round() as i32;
        for col in col_guess - 1..=col_guess + 1 {
            let coord = HexCoord::new(col, row);
            let dist = coord.to_position().distance_squared(point);
            if dist < best_dist {
                best = coord;
                best_dist = dist;
            }
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_maps_to_origin() {
        assert_eq!(tile_to_position(HexCoord::new(0, 0)), Vec2::ZERO);
    }

    #[test]
    fn test_odd_rows_shift_half_column() {
        let even = tile_to_position(HexCoord::new(2, 2));
        let odd = tile_to_position(HexCoord::new(2, 1));
        assert!((even.x - 2.0 * HEX_SPACING_X).abs() < 1e-6);
        assert!((odd.x - 2.5 * HEX_SPACING_X).abs() < 1e-6);
        assert!((odd.y - HEX_SPACING_Z).abs() < 1e-6);
    }

    #[test]
    fn test_negative_odd_row_shifts_left() {
        let p = tile_to_position(HexCoord::new(0, -1));
        assert!((p.x + 0.5 * HEX_SPACING_X).abs() < 1e-6);
        assert!((p.y + HEX_SPACING_Z).abs() < 1e-6);
    }

    #[test]
    fn test_all_cells_within_radius() {
        for radius in [0.0_f32, 3.0, 8.5, 16.0, 31.0] {
            for coord in coords_within_radius(radius) {
                let len = coord.to_position().length();
                assert!(len <= radius, "{coord:?} at {len} outside radius {radius}");
            }
        }
    }

    #[test]
    fn test_extent_covers_the_whole_disc() {
        // A brute-force scan over a much larger window finds nothing extra.
        let radius = 16.0;
        let expected = coords_within_radius(radius).len();
        let mut brute = 0;
        for col in -40..=40 {
            for row in -40..=40 {
                if HexCoord::new(col, row).to_position().length() <= radius {
                    brute += 1;
                }
            }
        }
        assert_eq!(expected, brute);
    }

    #[test]
    fn test_zero_radius_keeps_only_origin() {
        assert_eq!(coords_within_radius(0.0), vec![HexCoord::new(0, 0)]);
    }

    #[test]
    fn test_negative_or_nan_radius_is_empty() {
        assert!(coords_within_radius(-4.0).is_empty());
        assert!(coords_within_radius(f32::NAN).is_empty());
        assert_eq!(grid_extent(f32::INFINITY), None);
    }

    #[test]
    fn test_huge_radius_extent_does_not_overflow() {
        assert_eq!(grid_extent(4.0e9), None);
        assert_eq!(grid_extent(f32::MAX), None);
        assert_eq!(grid_extent(16.0), Some(12));
    }

    #[test]
    fn test_nearest_coord_recovers_centres() {
        for coord in coords_within_radius(12.0) {
            assert_eq!(nearest_coord(coord.to_position()), coord);
            let nudged = coord.to_position() + Vec2::new(0.3, -0.2);
            assert_eq!(nearest_coord(nudged), coord);
        }
    }

    #[test]
    fn test_larger_radius_has_more_cells() {
        assert!(coords_within_radius(20.0).len() > coords_within_radius(10.0).len());
    }
}
