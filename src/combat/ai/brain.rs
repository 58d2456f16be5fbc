//! Combat domain: brain boss patrol, dives and contact.

use bevy::prelude::*;
use rand::Rng;

use crate::combat::components::{Brain, DiveState, Health, Projectile};
use crate::combat::resources::EnemyTuning;
use crate::core::Aabb;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrainContact {
    None,
    /// The player's open damage window reached the boss.
    BossHit,
    /// The boss touched the player.
    PlayerHit,
}

/// Advance patrol and dive by `dt`. Returns a projectile when a dive
/// bottoms out.
pub fn update_brain(
    brain: &mut Brain,
    tuning: &EnemyTuning,
    rng: &mut impl Rng,
    player_center: Vec2,
    dt: f32,
) -> Option<Projectile> {
    if !brain.alive {
        return None;
    }

    brain.body.x += brain.direction * brain.speed * dt;
    if brain.body.x <= brain.patrol_min_x {
        brain.body.x = brain.patrol_min_x;
        brain.direction = 1.0;
    } else if brain.body.x >= brain.patrol_max_x {
        brain.body.x = brain.patrol_max_x;
        brain.direction = -1.0;
    }

    match brain.dive {
        DiveState::Floating => {
            if roll_dive(rng, tuning.dive_chance) {
                brain.dive = DiveState::Dropping;
            }
            None
        }
        DiveState::Dropping => {
            brain.body.y += tuning.dive_speed * dt;
            if brain.body.y < brain.dive_floor_y {
                return None;
            }
            brain.body.y = brain.dive_floor_y;
            brain.dive = DiveState::Ascending;

            let center = brain.body.center();
            let toward = if player_center.x < center.x { -1.0 } else { 1.0 };
            Some(Projectile::new(
                Vec2::new(center.x, brain.body.bottom() - tuning.projectile_size * 0.5),
                tuning.projectile_size,
                Vec2::new(toward * tuning.projectile_speed, 0.0),
            ))
        }
        DiveState::Ascending => {
            brain.body.y -= tuning.ascend_speed * dt;
            if brain.body.y <= brain.float_y {
                brain.body.y = brain.float_y;
                brain.dive = DiveState::Floating;
            }
            None
        }
    }
}

/// A chance outside 0..=1 is clamped; a non-finite one never dives.
fn roll_dive(rng: &mut impl Rng, chance: f64) -> bool {
    if !chance.is_finite() {
        return false;
    }
    rng.random_bool(chance.clamp(0.0, 1.0))
}

/// Classify overlap between the boss circle and the player.
///
/// `attack_box` is present while the damage window is open. The boss never
/// hurts the player during that window; `hit_available` says whether this
/// swing may still damage the boss.
pub fn brain_contact(
    brain: &Brain,
    player_box: &Aabb,
    attack_box: Option<&Aabb>,
    hit_available: bool,
) -> BrainContact {
    if !brain.alive {
        return BrainContact::None;
    }
    let circle = brain.circle();
    match attack_box {
        Some(attack) if hit_available && circle.overlaps_box(attack) => BrainContact::BossHit,
        Some(_) => BrainContact::None,
        None if circle.overlaps_box(player_box) => BrainContact::PlayerHit,
        None => BrainContact::None,
    }
}

/// Apply one point of damage to the boss. Returns whether it died.
pub fn damage_brain(brain: &mut Brain, health: &mut Health) -> bool {
    health.take_damage(1);
    if health.is_dead() {
        brain.alive = false;
        return true;
    }
    false
}
