//! Combat domain: enemies, boss, projectiles and damage hazards.

pub mod ai;
mod components;
mod events;
mod resources;
mod spawn;
pub mod spikes;
mod systems;
#[cfg(test)]
mod tests;

pub use components::{Brain, ContactMob, DiveState, Health, Projectile};
pub use events::BossDefeatedEvent;
pub use resources::EnemyTuning;

use bevy::prelude::*;

use crate::combat::spawn::spawn_enemies;
use crate::combat::systems::{
    apply_spikes, reset_enemies, sync_enemy_transforms, update_brains, update_mobs,
    update_projectiles,
};
use crate::core::{GameState, SimulationSet};

pub struct CombatPlugin;

impl Plugin for CombatPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<EnemyTuning>()
            .add_message::<BossDefeatedEvent>()
            .add_systems(OnEnter(GameState::Playing), spawn_enemies)
            .add_systems(
                Update,
                (
                    reset_enemies,
                    update_mobs,
                    update_brains,
                    update_projectiles,
                    apply_spikes,
                )
                    .chain()
                    .in_set(SimulationSet::Enemies),
            )
            .add_systems(
                Update,
                sync_enemy_transforms.in_set(SimulationSet::Present),
            );
    }
}
