//! Combat domain: components and combat-related state types.

use bevy::prelude::*;

use crate::core::{Aabb, Circle};

/// Health component for damageable entities
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub struct Health {
    pub current: i32,
    pub max: i32,
}

impl Health {
    pub fn new(max: i32) -> Self {
        Self { current: max, max }
    }

    /// Returns the damage actually dealt.
    pub fn take_damage(&mut self, amount: i32) -> i32 {
        let actual = amount.clamp(0, self.current.max(0));
        self.current -= actual;
        actual
    }

    pub fn is_dead(&self) -> bool {
        self.current <= 0
    }

    pub fn reset(&mut self) {
        self.current = self.max;
    }
}

/// Melee mob that strikes the player on a timer while they overlap.
#[derive(Component, Debug, Clone)]
pub struct ContactMob {
    pub collider: Aabb,
    /// Centered on the bottom of the collider, recomputed every frame.
    pub hitbox: Aabb,
    /// The player is inside the hitbox and the cooldown is running.
    pub active: bool,
    pub attack_timer: f32,
    pub alive: bool,
    /// Collider at level load, restored on reset.
    pub spawn: Aabb,
}

impl ContactMob {
    pub fn new(collider: Aabb) -> Self {
        Self {
            collider,
            hitbox: collider,
            active: false,
            attack_timer: 0.0,
            alive: true,
            spawn: collider,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::new(self.spawn);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DiveState {
    #[default]
    Floating,
    Dropping,
    Ascending,
}

/// Patrolling, diving boss with a circular collision shape.
#[derive(Component, Debug, Clone)]
pub struct Brain {
    pub body: Aabb,
    pub radius: f32,
    pub patrol_min_x: f32,
    pub patrol_max_x: f32,
    pub speed: f32,
    /// +1 moving right, -1 moving left.
    pub direction: f32,
    pub dive: DiveState,
    pub float_y: f32,
    pub dive_floor_y: f32,
    pub alive: bool,
    pub spawn: Aabb,
}

impl Brain {
    pub fn circle(&self) -> Circle {
        Circle::new(self.body.center(), self.radius)
    }

    pub fn reset(&mut self) {
        self.body = self.spawn;
        self.body.y = self.float_y;
        self.direction = 1.0;
        self.dive = DiveState::Floating;
        self.alive = true;
    }
}

/// Shot launched by the brain at the bottom of a dive.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Projectile {
    pub body: Aabb,
    pub velocity: Vec2,
}

impl Projectile {
    pub fn new(center: Vec2, size: f32, velocity: Vec2) -> Self {
        Self {
            body: Aabb::new(center.x - size * 0.5, center.y - size * 0.5, size, size),
            velocity,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.body = self
            .body
            .translated(self.velocity.x * dt, self.velocity.y * dt);
    }
}
