//! Data definitions for the RON content files.
//!
//! These structs mirror assets/data/*.ron. Rectangles use [`Aabb`] directly
//! in screen space (y down); points use [`PointDef`].

use bevy::prelude::*;
use serde::Deserialize;

use crate::combat::EnemyTuning;
use crate::core::Aabb;
use crate::hazard::HazardTuning;
use crate::movement::MovementTuning;

/// Serializable Vec2 for RON.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct PointDef {
    pub x: f32,
    pub y: f32,
}

impl From<PointDef> for Vec2 {
    fn from(p: PointDef) -> Self {
        Vec2::new(p.x, p.y)
    }
}

// ============================================================================
// Gameplay defaults (gameplay_defaults.ron)
// ============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GameplayDefaults {
    #[serde(default)]
    pub movement: MovementTuning,
    #[serde(default)]
    pub hazard: HazardTuning,
    #[serde(default)]
    pub enemy: EnemyTuning,
    /// Fixed seed for enemy behavior rolls; random when absent.
    #[serde(default)]
    pub seed: Option<u64>,
}

// ============================================================================
// Level (level.ron)
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub enum PowerUpKind {
    /// Grants double-jump charges.
    DoubleJump,
    /// Grants dash charges.
    Dash,
    /// Reverses gravity for a while.
    Levitation,
    /// Lets the player pass through walls for a while.
    Phase,
    /// Lets the player shoot down projectiles with the mouse.
    Laser,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PowerUpDef {
    pub kind: PowerUpKind,
    pub area: Aabb,
    /// Charges granted by DoubleJump and Dash pickups.
    #[serde(default = "default_amount")]
    pub amount: u32,
}

fn default_amount() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckpointDef {
    pub area: Aabb,
    /// Top-left of the player box on respawn.
    pub spawn: PointDef,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TeleportDef {
    pub area: Aabb,
    /// Top-left of the player box after teleporting.
    pub destination: PointDef,
    #[serde(default)]
    pub requires_interact: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MobDef {
    pub area: Aabb,
    pub health: i32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BrainDef {
    /// Resting box; the bounding circle is centered on it.
    pub area: Aabb,
    pub radius: f32,
    pub health: i32,
    pub patrol_min_x: f32,
    pub patrol_max_x: f32,
    /// Horizontal patrol speed in px/s.
    pub speed: f32,
    /// Top of the box while floating.
    pub float_y: f32,
    /// Top of the box at the bottom of a dive.
    pub dive_floor_y: f32,
}

/// Visual-only tile placement.
#[derive(Debug, Clone, Deserialize)]
pub struct TileDef {
    pub area: Aabb,
    pub tile: u32,
}

/// The immutable level asset: collision geometry plus every placed entity.
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct Level {
    pub schema_version: u32,
    pub name: String,
    /// Leaving these vertically kills the player.
    pub bounds: Aabb,
    /// Top-left of the player box at the start of the run.
    pub player_spawn: PointDef,
    pub player_size: PointDef,
    pub platforms: Vec<Aabb>,
    #[serde(default)]
    pub tiles: Vec<TileDef>,
    #[serde(default)]
    pub hazards: Vec<Aabb>,
    #[serde(default)]
    pub power_ups: Vec<PowerUpDef>,
    #[serde(default)]
    pub checkpoints: Vec<CheckpointDef>,
    #[serde(default)]
    pub teleports: Vec<TeleportDef>,
    #[serde(default)]
    pub mobs: Vec<MobDef>,
    #[serde(default)]
    pub brain: Option<BrainDef>,
    /// While the player is inside, the light stays green.
    #[serde(default)]
    pub boss_arena: Option<Aabb>,
    #[serde(default)]
    pub debug_warps: Vec<PointDef>,
}

impl Level {
    /// Player box at the start of the run.
    pub fn spawn_box(&self) -> Aabb {
        Aabb::new(
            self.player_spawn.x,
            self.player_spawn.y,
            self.player_size.x,
            self.player_size.y,
        )
    }

    pub fn summary(&self) -> String {
        format!(
            "Level '{}' loaded: {} platforms, {} tiles, {} hazards, {} power-ups, \
             {} checkpoints, {} teleports, {} mobs, brain={}",
            self.name,
            self.platforms.len(),
            self.tiles.len(),
            self.hazards.len(),
            self.power_ups.len(),
            self.checkpoints.len(),
            self.teleports.len(),
            self.mobs.len(),
            self.brain.is_some()
        )
    }
}
