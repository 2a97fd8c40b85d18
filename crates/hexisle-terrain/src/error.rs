//! Terrain generation error types.

/// Errors returned when island parameters cannot produce a terrain.
#[derive(Debug, thiserror::Error)]
pub enum TerrainError {
    /// A numeric parameter was NaN or infinite.
    #[error("{name} must be finite, got {value}")]
    NonFinite {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// Biome thresholds are not strictly descending from stone to dirt2.
    #[error("biome thresholds must descend: {0}")]
    UnorderedThresholds(String),

    /// A probability fell outside `[0, 1]`.
    #[error("{name} must be within [0, 1], got {value}")]
    InvalidProbability {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },

    /// A size parameter exceeded its supported maximum.
    #[error("{name} must be at most {max}, got {value}")]
    TooLarge {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
        /// Largest accepted value.
        max: f64,
    },
}
