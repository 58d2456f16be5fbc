//! Core domain: run flow state, frame ordering, and shared geometry.

mod events;
pub mod geometry;
mod resources;
mod state;
mod systems;

pub use events::{ResetCause, ResetRequested};
pub use geometry::{Aabb, Circle};
pub use resources::{RunConfig, SimRng, frame_dt};
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{announce_level_clear, follow_player, setup_camera};

/// Fixed per-frame order of the simulation.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    Input,
    Hazard,
    Player,
    Enemies,
    Pickups,
    Animation,
    Present,
}

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<RunConfig>()
            .init_resource::<SimRng>()
            .add_message::<ResetRequested>()
            .configure_sets(
                Update,
                (
                    SimulationSet::Input,
                    SimulationSet::Hazard,
                    SimulationSet::Player,
                    SimulationSet::Enemies,
                    SimulationSet::Pickups,
                    SimulationSet::Animation,
                    SimulationSet::Present,
                )
                    .chain()
                    .run_if(in_state(GameState::Playing)),
            )
            .add_systems(Startup, setup_camera)
            .add_systems(
                Update,
                (follow_player, announce_level_clear).in_set(SimulationSet::Present),
            );
    }
}
