//! Column decoration: rocks on stone and sand, trees on dirt.

use glam::{Vec2, Vec3};
use rand::Rng;

use crate::biome::Biome;
use crate::error::TerrainError;

/// Bottom radius and vertical placement factor of each tree tier, lowest first.
///
/// Tier `i` is centred at `column_height + tree_height * factor + 1`.
pub const TREE_TIERS: [(f32, f32); 3] = [(1.5, 0.0), (1.15, 0.6), (0.8, 1.25)];

/// Maximum horizontal rock offset from the column centre.
const ROCK_MAX_OFFSET: f32 = 0.4;

/// A decoration sitting on top of one column.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Decoration {
    /// A single sphere resting on the column top.
    Rock {
        /// Offset from the column centre on the ground plane.
        offset: Vec2,
        /// Sphere radius.
        radius: f32,
    },
    /// Three stacked cones.
    Tree {
        /// Height of every cone.
        height: f32,
    },
}

impl Decoration {
    /// The biome mesh this decoration is merged into.
    pub fn target_biome(&self) -> Biome {
        match self {
            Decoration::Rock { .. } => Biome::Stone,
            Decoration::Tree { .. } => Biome::Grass,
        }
    }

    /// Rock centre in world space for a column at `position` of `column_height`.
    pub fn rock_center(offset: Vec2, position: Vec2, column_height: f32) -> Vec3 {
        Vec3::new(
            position.x + offset.x,
            column_height,
            position.y + offset.y,
        )
    }

    /// Centres of the three tree tiers in world space.
    pub fn tree_tier_centers(tree_height: f32, position: Vec2, column_height: f32) -> [Vec3; 3] {
        TREE_TIERS.map(|(_, factor)| {
            Vec3::new(
                position.x,
                column_height + tree_height * factor + 1.0,
                position.y,
            )
        })
    }
}

/// Decoration probabilities.
#[derive(Clone, Debug, PartialEq)]
pub struct DecorationParams {
    /// Chance of a rock on stone and sand columns.
    pub rock_chance: f64,
    /// Chance of a tree on dirt columns.
    pub tree_chance: f64,
}

impl Default for DecorationParams {
    fn default() -> Self {
        Self {
            rock_chance: 0.2,
            tree_chance: 0.2,
        }
    }
}

impl DecorationParams {
    /// # Errors
    ///
    /// Returns [`TerrainError::InvalidProbability`] for a chance outside `[0, 1]`.
    pub fn validate(&self) -> Result<(), TerrainError> {
        for (name, value) in [
            ("rock_chance", self.rock_chance),
            ("tree_chance", self.tree_chance),
        ] {
            if !(0.0..=1.0).contains(&value) {
                return Err(TerrainError::InvalidProbability { name, value });
            }
        }
        Ok(())
    }
}

/// Roll the decoration for one column.
///
/// Grass and dirt2 columns never draw from `rng`; the other biomes draw one
/// chance value and, on success, the decoration's shape values.
pub fn decorate(biome: Biome, params: &DecorationParams, rng: &mut impl Rng) -> Option<Decoration> {
    match biome {
        Biome::Stone | Biome::Sand => {
            if rng.random::<f64>() >= params.rock_chance {
                return None;
            }
            let offset = Vec2::new(
                rng.random::<f32>() * ROCK_MAX_OFFSET,
                rng.random::<f32>() * ROCK_MAX_OFFSET,
            );
            let radius = rng.random::<f32>() * 0.3 + 0.1;
            Some(Decoration::Rock { offset, radius })
        }
        Biome::Dirt => {
            if rng.random::<f64>() >= params.tree_chance {
                return None;
            }
            Some(Decoration::Tree {
                height: rng.random::<f32>() + 1.25,
            })
        }
        Biome::Grass | Biome::Dirt2 => None,
    }
}
