//! Debug tooling for fast iteration and testing.
//!
//! Features:
//! - Toggle noclip and invincibility
//! - Warp through the level's debug points
//! - Request a reset at any time
//! - Info overlay (position, health, charges, light phase, seed)

mod state;
mod systems;

pub use state::DebugState;

use bevy::prelude::*;

use crate::core::SimulationSet;
use crate::debug::systems::{
    handle_debug_hotkeys, update_debug_info_overlay, update_status_message,
};

pub struct DebugPlugin;

impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<DebugState>()
            .add_systems(
                Update,
                (handle_debug_hotkeys, update_status_message)
                    .chain()
                    .in_set(SimulationSet::Input),
            )
            .add_systems(
                Update,
                update_debug_info_overlay.in_set(SimulationSet::Present),
            );
    }
}
