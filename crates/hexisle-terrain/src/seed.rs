//! Deterministic seeded generation utilities.
//!
//! Every random stream used while building an island (noise permutation,
//! decoration, clouds) is derived from a single `u64` world seed, so equal
//! seeds reproduce identical islands.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Independent random streams derived from one world seed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SeedStream {
    /// Simplex noise permutation table.
    Noise,
    /// Rock and tree placement.
    Decoration,
    /// Cloud spawning and respawning.
    Clouds,
}

/// Derive a u64 seed for one stream from the world seed.
///
/// Uses SipHash (via std's `DefaultHasher`) so neighbouring world seeds map to
/// unrelated stream seeds.
pub fn derive_seed(world_seed: u64, stream: SeedStream) -> u64 {
    let mut hasher = DefaultHasher::new();
    world_seed.hash(&mut hasher);
    stream.hash(&mut hasher);
    hasher.finish()
}

/// Derive a deterministic RNG for one stream.
pub fn stream_rng(world_seed: u64, stream: SeedStream) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(derive_seed(world_seed, stream))
}

/// Seed for the `noise` crate, which takes a `u32`.
pub fn noise_seed(world_seed: u64) -> u32 {
    let derived = derive_seed(world_seed, SeedStream::Noise);
    (derived ^ (derived >> 32)) as u32
}
