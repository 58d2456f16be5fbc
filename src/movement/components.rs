//! Movement domain: the player record and its exclusive action mode.

use bevy::prelude::*;

use crate::collision::Contacts;
use crate::combat::Health;
use crate::core::Aabb;

#[derive(Component, Debug)]
pub struct Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    #[default]
    Right,
    Left,
}

impl Facing {
    pub fn sign(self) -> f32 {
        match self {
            Facing::Right => 1.0,
            Facing::Left => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WallSide {
    Left,
    Right,
}

impl WallSide {
    /// Horizontal direction pointing away from the wall.
    pub fn away(self) -> f32 {
        match self {
            WallSide::Left => 1.0,
            WallSide::Right => -1.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackKind {
    /// Primary mouse button.
    Slash,
    /// Secondary mouse button.
    Thrust,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeathCause {
    RedLight,
    OutOfBounds,
    Damage,
}

/// What the player is doing this frame. Exactly one mode is active.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum PlayerMode {
    Grounded,
    #[default]
    Airborne,
    Dashing {
        target_x: f32,
        frames_left: u32,
    },
    WallSliding {
        side: WallSide,
    },
    /// The damage window is open for the whole attack pose.
    Attacking {
        kind: AttackKind,
        /// A hit already landed during this swing.
        hit_landed: bool,
    },
    Dead {
        cause: DeathCause,
    },
}

/// Kinematic and resource state of the player, in screen space.
#[derive(Component, Debug, Clone)]
pub struct PlayerState {
    pub body: Aabb,
    pub velocity_y: f32,
    /// Horizontal velocity from knockback; decays back to zero.
    pub knockback_x: f32,
    pub facing: Facing,
    /// +1 normally, -1 while levitating.
    pub gravity_sign: f32,
    pub mode: PlayerMode,
    /// Standing on a landing surface after the last resolution.
    pub grounded: bool,
    pub contacts: Contacts,
    pub health: Health,
    pub double_jumps: u32,
    pub dashes: u32,
    pub laser: bool,
    /// Top-left corner the player respawns at.
    pub spawn: Vec2,
    pub levitation_timer: f32,
    pub phase_timer: f32,
    pub hurt_timer: f32,
    pub invulnerable_timer: f32,
    /// Horizontal input moved the player this frame.
    pub moving: bool,
    pub noclip: bool,
    pub invincible: bool,
}

impl PlayerState {
    pub fn new(body: Aabb, max_health: i32, double_jumps: u32, dashes: u32) -> Self {
        Self {
            body,
            velocity_y: 0.0,
            knockback_x: 0.0,
            facing: Facing::Right,
            gravity_sign: 1.0,
            mode: PlayerMode::Airborne,
            grounded: false,
            contacts: Contacts::default(),
            health: Health::new(max_health),
            double_jumps,
            dashes,
            laser: false,
            spawn: body.position(),
            levitation_timer: 0.0,
            phase_timer: 0.0,
            hurt_timer: 0.0,
            invulnerable_timer: 0.0,
            moving: false,
            noclip: false,
            invincible: false,
        }
    }

    pub fn is_alive(&self) -> bool {
        !matches!(self.mode, PlayerMode::Dead { .. })
    }

    pub fn is_dashing(&self) -> bool {
        matches!(self.mode, PlayerMode::Dashing { .. })
    }

    pub fn is_wall_sliding(&self) -> bool {
        matches!(self.mode, PlayerMode::WallSliding { .. })
    }

    pub fn is_attacking(&self) -> bool {
        matches!(self.mode, PlayerMode::Attacking { .. })
    }

    /// An attack is in progress; it closes when the attack pose ends.
    pub fn damage_window_open(&self) -> bool {
        self.is_attacking()
    }

    /// The open window has not spent its hit yet.
    pub fn can_land_hit(&self) -> bool {
        matches!(
            self.mode,
            PlayerMode::Attacking {
                hit_landed: false,
                ..
            }
        )
    }

    /// Spend this swing's hit. The window stays open until the pose ends.
    pub fn mark_hit_landed(&mut self) {
        if let PlayerMode::Attacking { hit_landed, .. } = &mut self.mode {
            *hit_landed = true;
        }
    }

    /// Horizontal collision is skipped while phase or noclip is active.
    pub fn is_phasing(&self) -> bool {
        self.noclip || self.phase_timer > 0.0
    }

    pub fn is_invulnerable(&self) -> bool {
        self.invincible || self.invulnerable_timer > 0.0
    }

    /// Locomotion mode matching the current surface contact.
    pub(crate) fn settled_mode(&self) -> PlayerMode {
        if self.grounded {
            PlayerMode::Grounded
        } else {
            PlayerMode::Airborne
        }
    }
}
