//! Core domain: axis-aligned boxes and circles shared by every actor.
//!
//! All simulation geometry lives in screen space: `x` grows to the right and
//! `y` grows downward, so a box's `top` is its smallest `y`.

use bevy::prelude::*;
use serde::Deserialize;

/// Axis-aligned rectangle anchored at its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
pub struct Aabb {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Aabb {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Box of the given size whose bottom edge is centered on `foot`.
    pub fn from_foot(foot: Vec2, size: Vec2) -> Self {
        Self::new(foot.x - size.x * 0.5, foot.y - size.y, size.x, size.y)
    }

    pub fn left(&self) -> f32 {
        self.x
    }

    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    pub fn top(&self) -> f32 {
        self.y
    }

    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w * 0.5, self.y + self.h * 0.5)
    }

    pub fn set_position(&mut self, position: Vec2) {
        self.x = position.x;
        self.y = position.y;
    }

    pub fn translated(&self, dx: f32, dy: f32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.w, self.h)
    }

    /// Strict overlap: boxes that only share an edge do not overlap.
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }

    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Box stretched by `reach` on the side given by `direction` (-1 or +1).
    pub fn extended(&self, direction: f32, reach: f32) -> Self {
        if direction < 0.0 {
            Self::new(self.x - reach, self.y, self.w + reach, self.h)
        } else {
            Self::new(self.x, self.y, self.w + reach, self.h)
        }
    }

    pub fn is_valid(&self) -> bool {
        self.w > 0.0 && self.h > 0.0 && self.x.is_finite() && self.y.is_finite()
    }
}

/// Bounding circle, used for the brain boss.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Circle {
    pub center: Vec2,
    pub radius: f32,
}

impl Circle {
    pub fn new(center: Vec2, radius: f32) -> Self {
        Self { center, radius }
    }

    /// Circle-vs-box test using the closest point of the box to the center.
    pub fn overlaps_box(&self, other: &Aabb) -> bool {
        let closest = Vec2::new(
            self.center.x.clamp(other.left(), other.right()),
            self.center.y.clamp(other.top(), other.bottom()),
        );
        closest.distance_squared(self.center) < self.radius * self.radius
    }
}

/// Screen-space point to Bevy world space (y up).
pub fn to_world(point: Vec2) -> Vec2 {
    Vec2::new(point.x, -point.y)
}

/// Bevy world-space point to screen space (y down).
pub fn to_screen(point: Vec2) -> Vec2 {
    Vec2::new(point.x, -point.y)
}

/// World-space translation of a box's center at the given depth.
pub fn box_translation(aabb: &Aabb, z: f32) -> Vec3 {
    to_world(aabb.center()).extend(z)
}
