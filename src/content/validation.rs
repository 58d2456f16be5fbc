//! Validation for level geometry, placements and tuning.

use bevy::prelude::Vec2;

use super::data::{GameplayDefaults, Level};
use crate::core::Aabb;

pub const LEVEL_SCHEMA_VERSION: u32 = 1;

/// A validation error with context about what failed.
#[derive(Debug)]
pub struct ValidationError {
    pub source_type: &'static str,
    pub index: usize,
    pub field: &'static str,
    pub message: String,
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} #{} field '{}': {}",
            self.source_type, self.index, self.field, self.message
        )
    }
}

/// Helper macro for checking a rectangle has a positive size
macro_rules! check_rect {
    ($errors:expr, $source_type:expr, $index:expr, $field:expr, $rect:expr) => {
        if !$rect.is_valid() {
            $errors.push(ValidationError {
                source_type: $source_type,
                index: $index,
                field: $field,
                message: format!("rectangle {:?} must have positive size", $rect),
            });
        }
    };
}

/// Helper macro for checking a point lies inside the level bounds
macro_rules! check_in_bounds {
    ($errors:expr, $bounds:expr, $source_type:expr, $index:expr, $field:expr, $point:expr) => {{
        let point: Vec2 = $point.into();
        if !$bounds.contains_point(point) {
            $errors.push(ValidationError {
                source_type: $source_type,
                index: $index,
                field: $field,
                message: format!(
                    "point ({}, {}) lies outside the level bounds",
                    point.x, point.y
                ),
            });
        }
    }};
}

fn push(
    errors: &mut Vec<ValidationError>,
    source_type: &'static str,
    index: usize,
    field: &'static str,
    message: impl Into<String>,
) {
    errors.push(ValidationError {
        source_type,
        index,
        field,
        message: message.into(),
    });
}

/// Validate a parsed level.
/// Returns a list of validation errors, empty if the level is usable.
pub fn validate_level(level: &Level) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let bounds = level.bounds;

    if level.schema_version != LEVEL_SCHEMA_VERSION {
        push(
            &mut errors,
            "Level",
            0,
            "schema_version",
            format!(
                "expected {}, found {}",
                LEVEL_SCHEMA_VERSION, level.schema_version
            ),
        );
    }

    check_rect!(errors, "Level", 0, "bounds", bounds);
    check_rect!(errors, "Level", 0, "player_size", level.spawn_box());
    check_in_bounds!(errors, bounds, "Level", 0, "player_spawn", level.player_spawn);
    if !box_within(&bounds, &level.spawn_box()) {
        push(
            &mut errors,
            "Level",
            0,
            "player_spawn",
            "player box must start inside the level bounds",
        );
    }

    if level.platforms.is_empty() {
        push(&mut errors, "Level", 0, "platforms", "level has no platforms");
    }
    for (i, platform) in level.platforms.iter().enumerate() {
        check_rect!(errors, "Platform", i, "area", platform);
    }
    for (i, tile) in level.tiles.iter().enumerate() {
        check_rect!(errors, "Tile", i, "area", tile.area);
    }
    for (i, hazard) in level.hazards.iter().enumerate() {
        check_rect!(errors, "Hazard", i, "area", hazard);
    }
    for (i, power_up) in level.power_ups.iter().enumerate() {
        check_rect!(errors, "PowerUp", i, "area", power_up.area);
    }
    for (i, checkpoint) in level.checkpoints.iter().enumerate() {
        check_rect!(errors, "Checkpoint", i, "area", checkpoint.area);
        check_in_bounds!(errors, bounds, "Checkpoint", i, "spawn", checkpoint.spawn);
    }
    for (i, teleport) in level.teleports.iter().enumerate() {
        check_rect!(errors, "Teleport", i, "area", teleport.area);
        check_in_bounds!(errors, bounds, "Teleport", i, "destination", teleport.destination);
    }
    for (i, mob) in level.mobs.iter().enumerate() {
        check_rect!(errors, "Mob", i, "area", mob.area);
        if mob.health <= 0 {
            push(&mut errors, "Mob", i, "health", "health must be positive");
        }
    }
    if let Some(brain) = &level.brain {
        check_rect!(errors, "Brain", 0, "area", brain.area);
        if brain.health <= 0 {
            push(&mut errors, "Brain", 0, "health", "health must be positive");
        }
        if brain.radius <= 0.0 {
            push(&mut errors, "Brain", 0, "radius", "radius must be positive");
        }
        if brain.patrol_min_x > brain.patrol_max_x {
            push(
                &mut errors,
                "Brain",
                0,
                "patrol_min_x",
                "patrol_min_x must not exceed patrol_max_x",
            );
        }
        if brain.float_y >= brain.dive_floor_y {
            push(
                &mut errors,
                "Brain",
                0,
                "dive_floor_y",
                "dive_floor_y must lie below float_y",
            );
        }
    }
    if let Some(arena) = level.boss_arena {
        check_rect!(errors, "Level", 0, "boss_arena", arena);
    }
    for (i, warp) in level.debug_warps.iter().enumerate() {
        check_in_bounds!(errors, bounds, "DebugWarp", i, "point", *warp);
    }

    errors
}

/// Helper macro for checking tuning values are finite and not negative
macro_rules! check_non_negative {
    ($errors:expr, $source_type:expr, $($owner:ident . $field:ident),+ $(,)?) => {
        $(
            let value = f64::from($owner.$field);
            if !value.is_finite() || value < 0.0 {
                push(
                    &mut $errors,
                    $source_type,
                    0,
                    stringify!($field),
                    format!("{} must be finite and not negative", value),
                );
            }
        )+
    };
}

/// Validate parsed gameplay tuning.
/// Returns a list of validation errors, empty if the tuning is usable.
pub fn validate_defaults(defaults: &GameplayDefaults) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let movement = &defaults.movement;
    check_non_negative!(
        errors,
        "MovementTuning",
        movement.run_speed,
        movement.jump_force,
        movement.gravity,
        movement.terminal_velocity,
        movement.wall_slide_speed,
        movement.wall_release_push,
        movement.wall_jump_push,
        movement.dash_distance,
        movement.dash_step,
        movement.knockback_speed,
        movement.knockback_lift,
        movement.knockback_decay,
        movement.hurt_time,
        movement.invulnerable_time,
        movement.attack_reach,
        movement.levitation_time,
        movement.phase_time,
    );
    if movement.max_health <= 0 {
        push(
            &mut errors,
            "MovementTuning",
            0,
            "max_health",
            "max_health must be positive",
        );
    }

    let hazard = &defaults.hazard;
    check_non_negative!(errors, "HazardTuning", hazard.green_duration, hazard.red_duration);

    let enemy = &defaults.enemy;
    check_non_negative!(
        errors,
        "EnemyTuning",
        enemy.mob_attack_cooldown,
        enemy.mob_hitbox_width,
        enemy.mob_hitbox_height,
        enemy.dive_chance,
        enemy.dive_speed,
        enemy.ascend_speed,
        enemy.projectile_speed,
        enemy.projectile_size,
    );
    if enemy.dive_chance > 1.0 {
        push(
            &mut errors,
            "EnemyTuning",
            0,
            "dive_chance",
            format!("{} is not a probability in 0..=1", enemy.dive_chance),
        );
    }

    errors
}

/// True when the box lies entirely inside the bounds.
fn box_within(bounds: &Aabb, aabb: &Aabb) -> bool {
    aabb.left() >= bounds.left()
        && aabb.right() <= bounds.right()
        && aabb.top() >= bounds.top()
        && aabb.bottom() <= bounds.bottom()
}
