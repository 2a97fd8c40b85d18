//! Drifting cloud pool.
//!
//! A fixed number of clouds drift along +X. A cloud that passes the boundary
//! is dropped and replaced in the same step by a fresh cloud entering at the
//! opposite edge, so the pool never changes size.

use glam::Vec3;
use hexisle_config::CloudConfig;
use hexisle_mesh::{Geometry, merge_geometries, sphere};
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use tracing::trace;

/// Sphere segments used for every puff.
const PUFF_SEGMENTS: u32 = 7;

/// Horizontal distance of the side puffs from the centre puff.
const SIDE_PUFF_OFFSET: f32 = 1.85;

/// Centre, left and right puff radii.
const PUFF_RADII: [f32; 3] = [1.2, 1.5, 0.9];

/// One sphere of a cloud, relative to the cloud's origin before rotation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Puff {
    pub offset: Vec3,
    pub radius: f32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Cloud {
    /// Unique within a field; respawned clouds get a new id.
    pub id: u64,
    pub position: Vec3,
    pub rotation_y: f32,
    pub puffs: [Puff; 3],
}

impl Cloud {
    pub fn geometry(&self) -> Geometry {
        let parts: Vec<Geometry> = self
            .puffs
            .iter()
            .map(|puff| {
                let mut g = sphere(puff.radius, PUFF_SEGMENTS, PUFF_SEGMENTS);
                g.translate(puff.offset);
                g
            })
            .collect();
        let mut merged = merge_geometries(&parts);
        merged.rotate_y(self.rotation_y).translate(self.position);
        merged
    }
}

/// A cloud that crossed the boundary and the cloud that replaced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Respawn {
    pub removed: u64,
    pub spawned: u64,
}

/// Sanitized copy of [`CloudConfig`]. Non-finite values and negative speeds
/// or extents become zero, so clouds only ever drift towards +X.
#[derive(Clone, Copy, Debug, PartialEq)]
struct Extents {
    speed: f32,
    boundary: f32,
    base_altitude: f32,
    altitude_range: f32,
    depth: f32,
}

fn non_negative(value: f32) -> f32 {
    if value.is_finite() { value.max(0.0) } else { 0.0 }
}

impl From<&CloudConfig> for Extents {
    fn from(config: &CloudConfig) -> Self {
        Self {
            speed: non_negative(config.speed),
            boundary: non_negative(config.boundary),
            base_altitude: if config.base_altitude.is_finite() {
                config.base_altitude
            } else {
                0.0
            },
            altitude_range: non_negative(config.altitude_range),
            depth: non_negative(config.depth),
        }
    }
}

pub struct CloudField {
    clouds: Vec<Cloud>,
    extents: Extents,
    rng: ChaCha8Rng,
    next_id: u64,
}

impl CloudField {
    /// Spawn `config.count` clouds at random positions inside the field.
    pub fn new(config: &CloudConfig, rng: ChaCha8Rng) -> Self {
        let mut field = Self {
            clouds: Vec::with_capacity(config.count),
            extents: Extents::from(config),
            rng,
            next_id: 0,
        };
        for _ in 0..config.count {
            let x = symmetric(&mut field.rng, field.extents.boundary);
            let cloud = field.spawn(x);
            field.clouds.push(cloud);
        }
        field
    }

    fn spawn(&mut self, x: f32) -> Cloud {
        let rng = &mut self.rng;
        let lift = |rng: &mut ChaCha8Rng| rng.random::<f32>() * 0.3;
        let puffs = [
            Puff {
                offset: Vec3::ZERO,
                radius: PUFF_RADII[0],
            },
            Puff {
                offset: Vec3::new(-SIDE_PUFF_OFFSET, lift(rng), 0.0),
                radius: PUFF_RADII[1],
            },
            Puff {
                offset: Vec3::new(SIDE_PUFF_OFFSET, lift(rng), 0.0),
                radius: PUFF_RADII[2],
            },
        ];
        let y = self.extents.base_altitude + rng.random::<f32>() * self.extents.altitude_range;
        let z = symmetric(rng, self.extents.depth);
        let rotation_y = rng.random::<f32>() * std::f32::consts::TAU;

        let id = self.next_id;
        self.next_id += 1;
        Cloud {
            id,
            position: Vec3::new(x, y, z),
            rotation_y,
            puffs,
        }
    }

    /// Drift every cloud by `speed * dt` and recycle the ones past the
    /// boundary. Non-finite or negative `dt` is ignored.
    pub fn step(&mut self, dt: f32) -> Vec<Respawn> {
        let mut respawns = Vec::new();
        if !dt.is_finite() || dt <= 0.0 {
            return respawns;
        }
        let dx = self.extents.speed * dt;
        let boundary = self.extents.boundary;

        for i in 0..self.clouds.len() {
            self.clouds[i].position.x += dx;
            if self.clouds[i].position.x > boundary {
                let removed = self.clouds[i].id;
                let cloud = self.spawn(-boundary);
                trace!(removed, spawned = cloud.id, "cloud wrapped");
                respawns.push(Respawn {
                    removed,
                    spawned: cloud.id,
                });
                self.clouds[i] = cloud;
            }
        }
        respawns
    }

    pub fn clouds(&self) -> &[Cloud] {
        &self.clouds
    }

    pub fn len(&self) -> usize {
        self.clouds.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clouds.is_empty()
    }

    pub fn boundary(&self) -> f32 {
        self.extents.boundary
    }

    /// All clouds merged into one mesh.
    pub fn geometry(&self) -> Geometry {
        let parts: Vec<Geometry> = self.clouds.iter().map(Cloud::geometry).collect();
        merge_geometries(&parts)
    }
}

/// Uniform sample from `[-half, half]`.
fn symmetric(rng: &mut ChaCha8Rng, half: f32) -> f32 {
    (rng.random::<f32>() * 2.0 - 1.0) * half
}
