//! Pickups domain: power-up, checkpoint and teleport components.

use bevy::prelude::*;

use crate::content::{CheckpointDef, PowerUpDef, PowerUpKind, TeleportDef};
use crate::core::Aabb;

/// One-shot power-up. Stays in the world while collected so a reset can
/// bring it back.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct PowerUp {
    pub kind: PowerUpKind,
    pub area: Aabb,
    pub amount: u32,
    pub collected: bool,
}

impl PowerUp {
    pub fn new(kind: PowerUpKind, area: Aabb, amount: u32) -> Self {
        Self {
            kind,
            area,
            amount,
            collected: false,
        }
    }
}

impl From<&PowerUpDef> for PowerUp {
    fn from(def: &PowerUpDef) -> Self {
        Self::new(def.kind, def.area, def.amount)
    }
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Checkpoint {
    pub area: Aabb,
    /// Top-left of the player box on respawn.
    pub spawn: Vec2,
}

impl From<&CheckpointDef> for Checkpoint {
    fn from(def: &CheckpointDef) -> Self {
        Self {
            area: def.area,
            spawn: def.spawn.into(),
        }
    }
}

#[derive(Component, Debug, Clone, PartialEq)]
pub struct Teleport {
    pub area: Aabb,
    pub destination: Vec2,
    pub requires_interact: bool,
}

impl From<&TeleportDef> for Teleport {
    fn from(def: &TeleportDef) -> Self {
        Self {
            area: def.area,
            destination: def.destination.into(),
            requires_interact: def.requires_interact,
        }
    }
}
