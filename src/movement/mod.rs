//! Movement domain: player input, the player state machine, and tuning.

mod components;
pub mod controller;
mod resources;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{
    AttackKind, DeathCause, Facing, Player, PlayerMode, PlayerState, WallSide,
};
pub use controller::{HitOutcome, attack_box, take_hit};
pub use resources::{MovementInput, MovementTuning};

use bevy::prelude::*;

use crate::core::{GameState, SimulationSet};
use crate::movement::systems::{
    read_input, request_reset_on_acknowledge, reset_players, spawn_player, step_players,
    sync_player_sprite,
};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(OnEnter(GameState::Playing), spawn_player)
            .add_systems(
                Update,
                (read_input, request_reset_on_acknowledge)
                    .chain()
                    .in_set(SimulationSet::Input),
            )
            .add_systems(
                Update,
                (reset_players, step_players)
                    .chain()
                    .in_set(SimulationSet::Player),
            )
            .add_systems(Update, sync_player_sprite.in_set(SimulationSet::Present));
    }
}
