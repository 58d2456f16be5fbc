//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::Deserialize;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct MovementTuning {
    /// Horizontal speed in px/s.
    pub run_speed: f32,
    pub jump_force: f32,
    pub gravity: f32,
    pub terminal_velocity: f32,
    /// Constant descent rate while wall-sliding.
    pub wall_slide_speed: f32,
    /// Nudge away from the wall when a slide ends.
    pub wall_release_push: f32,
    /// Horizontal kick away from the wall on a wall jump.
    pub wall_jump_push: f32,
    pub dash_distance: f32,
    /// Distance covered per dash frame.
    pub dash_step: f32,
    pub max_health: i32,
    pub initial_double_jumps: u32,
    pub initial_dashes: u32,
    pub knockback_speed: f32,
    pub knockback_lift: f32,
    /// How fast knockback speed bleeds off, in px/s^2.
    pub knockback_decay: f32,
    pub hurt_time: f32,
    pub invulnerable_time: f32,
    /// Extra reach of the attack box in the facing direction.
    pub attack_reach: f32,
    pub levitation_time: f32,
    pub phase_time: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            run_speed: 250.0,
            jump_force: 1200.0,
            gravity: 2000.0,
            terminal_velocity: 1600.0,
            wall_slide_speed: 120.0,
            wall_release_push: 4.0,
            wall_jump_push: 24.0,
            dash_distance: 200.0,
            dash_step: 20.0,
            max_health: 3,
            initial_double_jumps: 0,
            initial_dashes: 0,
            knockback_speed: 400.0,
            knockback_lift: 350.0,
            knockback_decay: 1600.0,
            hurt_time: 0.3,
            invulnerable_time: 1.0,
            attack_reach: 40.0,
            levitation_time: 5.0,
            phase_time: 5.0,
        }
    }
}

impl MovementTuning {
    /// Frame budget for one dash.
    pub fn dash_frames(&self) -> u32 {
        if self.dash_step <= 0.0 {
            return 0;
        }
        (self.dash_distance / self.dash_step).ceil() as u32
    }
}

/// Per-frame input snapshot: "pressed" fields are edges, the rest are held.
#[derive(Resource, Debug, Default, Clone)]
pub struct MovementInput {
    pub left: bool,
    pub right: bool,
    pub down_pressed: bool,
    pub jump_pressed: bool,
    pub jump_held: bool,
    pub dash_pressed: bool,
    pub dash_held: bool,
    pub primary_pressed: bool,
    pub secondary_pressed: bool,
    pub interact_pressed: bool,
    pub acknowledge_pressed: bool,
    /// Cursor in simulation space, when over the window.
    pub cursor: Option<Vec2>,
}

impl MovementInput {
    /// Any movement key is held or was just pressed.
    pub fn movement_held(&self) -> bool {
        self.left
            || self.right
            || self.jump_held
            || self.jump_pressed
            || self.dash_held
            || self.dash_pressed
    }
}
