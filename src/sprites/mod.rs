//! Sprites module: sheet manifests, animation sequencing, and presentation.
//!
//! This module handles:
//! - Loading the sprite manifest from JSON and the sheets it names
//! - Frame sequencing for every animated actor
//! - Deriving source rectangles from the current frame for rendering

pub mod animation;
pub mod manifest;
mod systems;

use bevy::prelude::*;

pub use animation::*;
pub use manifest::*;
pub use systems::actor_sprite;

use crate::core::{GameState, SimulationSet};
use crate::sprites::systems::{await_sprite_sheets, load_sprite_sheets, sync_sprite_frames};

pub struct SpritesPlugin;

impl Plugin for SpritesPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_sprite_sheets)
            .add_systems(
                Update,
                await_sprite_sheets.run_if(in_state(GameState::Loading)),
            )
            .add_systems(
                Update,
                (
                    advance_animations.in_set(SimulationSet::Animation),
                    sync_sprite_frames.in_set(SimulationSet::Present),
                ),
            );
    }
}
