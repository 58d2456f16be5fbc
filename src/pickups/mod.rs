//! Pickups domain: power-ups, checkpoints and teleport zones.

mod components;
pub mod rules;
mod systems;

pub use components::{Checkpoint, PowerUp, Teleport};

use bevy::prelude::*;

use crate::core::{GameState, SimulationSet};
use crate::pickups::systems::{
    reset_pickups, resolve_pickups, spawn_pickups, sync_pickup_visibility,
};

pub struct PickupsPlugin;

impl Plugin for PickupsPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(OnEnter(GameState::Playing), spawn_pickups)
            .add_systems(
                Update,
                (reset_pickups, resolve_pickups)
                    .chain()
                    .in_set(SimulationSet::Pickups),
            )
            .add_systems(Update, sync_pickup_visibility.in_set(SimulationSet::Present));
    }
}
