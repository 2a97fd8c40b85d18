//! Column height sampler over seeded 2D simplex noise.
//!
//! Noise is looked up at scaled hex coordinates, remapped from `[-1, 1]` to
//! `[0, 1]`, raised to an exponent that flattens lowlands, and finally scaled
//! by the island's maximum height.

use noise::{NoiseFn, Simplex};

use crate::hex::HexCoord;
use crate::seed::noise_seed;

/// Configuration for per-column height sampling.
#[derive(Clone, Debug)]
pub struct HeightmapParams {
    /// World seed; the noise permutation is derived from it.
    pub seed: u64,
    /// Multiplier applied to `(col, row)` before the noise lookup. Default: 0.1.
    pub noise_scale: f64,
    /// Exponent applied to the normalized noise. Default: 1.5.
    pub exponent: f64,
    /// Height of a column whose normalized noise is 1.0. Default: 10.0.
    pub max_height: f32,
}

impl Default for HeightmapParams {
    fn default() -> Self {
        Self {
            seed: 0,
            noise_scale: 0.1,
            exponent: 1.5,
            max_height: 10.0,
        }
    }
}

/// Samples column heights from 2D simplex noise.
pub struct HeightmapSampler {
    noise: Simplex,
    params: HeightmapParams,
}

impl HeightmapSampler {
    /// Create a new sampler with the given parameters.
    pub fn new(params: HeightmapParams) -> Self {
        let noise = Simplex::new(noise_seed(params.seed));
        Self { noise, params }
    }

    /// Normalized height in `[0, 1]` before scaling by `max_height`.
    pub fn normalized(&self, coord: HexCoord) -> f64 {
        let scale = self.params.noise_scale;
        let raw = self
            .noise
            .get([coord.col as f64 * scale, coord.row as f64 * scale]);
        ((raw + 1.0) * 0.5).clamp(0.0, 1.0).powf(self.params.exponent)
    }

    /// Column height at the given cell.
    pub fn sample(&self, coord: HexCoord) -> f32 {
        (self.normalized(coord) * self.params.max_height as f64) as f32
    }

    /// Return a reference to the current parameters.
    pub fn params(&self) -> &HeightmapParams {
        &self.params
    }
}
