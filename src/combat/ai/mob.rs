//! Combat domain: contact mob behavior.

use bevy::prelude::*;

use crate::combat::components::{ContactMob, Health};
use crate::combat::resources::EnemyTuning;
use crate::core::Aabb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MobEvent {
    /// The player entered the hitbox; the cooldown started.
    Engaged,
    /// The player left the hitbox.
    Disengaged,
    /// The cooldown ran out with the player still inside.
    Strike,
}

/// Hitbox of the given scale centered on the bottom edge of the collider.
pub fn mob_hitbox(collider: &Aabb, scale: Vec2) -> Aabb {
    let foot = Vec2::new(collider.center().x, collider.bottom());
    Aabb::from_foot(foot, collider.size() * scale)
}

/// Advance one mob by `dt` against the player's box.
pub fn update_mob(
    mob: &mut ContactMob,
    player_box: &Aabb,
    player_alive: bool,
    tuning: &EnemyTuning,
    dt: f32,
) -> Option<MobEvent> {
    mob.hitbox = mob_hitbox(&mob.collider, tuning.mob_hitbox_scale());
    if !mob.alive {
        return None;
    }

    let overlapping = player_alive && mob.hitbox.overlaps(player_box);
    if !overlapping {
        if mob.active {
            mob.active = false;
            mob.attack_timer = 0.0;
            return Some(MobEvent::Disengaged);
        }
        return None;
    }

    if !mob.active {
        mob.active = true;
        mob.attack_timer = tuning.mob_attack_cooldown;
        return Some(MobEvent::Engaged);
    }

    mob.attack_timer -= dt;
    if mob.attack_timer <= 0.0 {
        mob.attack_timer = tuning.mob_attack_cooldown;
        return Some(MobEvent::Strike);
    }
    None
}

/// Land a player attack on the mob if the attack box reaches its collider.
/// Returns `Some(killed)` when the hit lands.
pub fn hit_mob(mob: &mut ContactMob, health: &mut Health, attack: &Aabb) -> Option<bool> {
    if !mob.alive || !attack.overlaps(&mob.collider) {
        return None;
    }

    health.take_damage(1);
    if health.is_dead() {
        mob.alive = false;
        mob.active = false;
        return Some(true);
    }
    Some(false)
}
