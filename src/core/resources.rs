//! Core domain: run configuration and the simulation random source.

use bevy::prelude::*;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Longest frame the simulation will integrate in one step.
pub const MAX_FRAME_DT: f32 = 1.0 / 30.0;

/// Elapsed time for this frame, clamped so a stall cannot tunnel actors.
pub fn frame_dt(time: &Time) -> f32 {
    time.delta_secs().min(MAX_FRAME_DT)
}

#[derive(Resource, Debug)]
pub struct RunConfig {
    pub seed: u64,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            seed: rand::rng().random(),
        }
    }
}

/// Seeded random source for enemy behavior rolls.
#[derive(Resource, Debug)]
pub struct SimRng(pub ChaCha8Rng);

impl SimRng {
    pub fn from_seed(seed: u64) -> Self {
        Self(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl Default for SimRng {
    fn default() -> Self {
        Self::from_seed(0)
    }
}
