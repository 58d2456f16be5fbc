//! Hazard domain: red light / green light timing and the movement rule.

mod systems;
mod timer;

pub use timer::{HazardRule, HazardSample, HazardTimer, HazardTuning, LightPhase};

use bevy::prelude::*;

use crate::core::{GameState, SimulationSet};
use crate::hazard::systems::{
    reset_hazard_timer, start_hazard_timer, tick_hazard_timer, tint_background,
};

pub struct HazardPlugin;

impl Plugin for HazardPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<HazardTuning>()
            .init_resource::<HazardTimer>()
            .add_systems(OnEnter(GameState::Playing), start_hazard_timer)
            .add_systems(
                Update,
                (reset_hazard_timer, tick_hazard_timer)
                    .chain()
                    .in_set(SimulationSet::Hazard),
            )
            .add_systems(Update, tint_background.in_set(SimulationSet::Present));
    }
}
