//! Content module: RON level and tuning data loaded at startup.

pub mod data;
pub mod loader;
mod systems;
pub mod validation;

pub use data::*;

use bevy::prelude::*;

use crate::core::GameState;
use crate::content::systems::{load_content, spawn_level_geometry};

pub struct ContentPlugin;

impl Plugin for ContentPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Startup, load_content)
            .add_systems(OnEnter(GameState::Playing), spawn_level_geometry);
    }
}
