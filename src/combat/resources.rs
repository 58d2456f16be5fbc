//! Combat domain: tuning resources.

use bevy::prelude::*;
use serde::Deserialize;

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EnemyTuning {
    /// Seconds between mob strikes while the player stays in range.
    pub mob_attack_cooldown: f32,
    /// Mob hitbox width as a fraction of its collider.
    pub mob_hitbox_width: f32,
    /// Mob hitbox height as a fraction of its collider.
    pub mob_hitbox_height: f32,
    pub contact_damage: i32,
    /// Chance per frame that a floating brain starts a dive.
    pub dive_chance: f64,
    pub dive_speed: f32,
    pub ascend_speed: f32,
    pub projectile_speed: f32,
    pub projectile_size: f32,
}

impl EnemyTuning {
    pub fn mob_hitbox_scale(&self) -> Vec2 {
        Vec2::new(self.mob_hitbox_width, self.mob_hitbox_height)
    }
}

impl Default for EnemyTuning {
    fn default() -> Self {
        Self {
            mob_attack_cooldown: 0.8,
            mob_hitbox_width: 0.6,
            mob_hitbox_height: 0.5,
            contact_damage: 1,
            dive_chance: 0.005,
            dive_speed: 420.0,
            ascend_speed: 180.0,
            projectile_speed: 360.0,
            projectile_size: 24.0,
        }
    }
}
