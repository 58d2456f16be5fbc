//! Sprite-sheet animation sequencing.
//!
//! An [`Animation`] walks a contiguous frame range on one row of a uniform
//! sprite sheet. Poses (idle, run, death, ...) rewrite the range, row and
//! mode; the sequencer only ever moves `current_frame` inside that range.

use bevy::prelude::*;
use serde::Deserialize;

/// Playback policy once the last frame is reached.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum AnimationMode {
    /// Wrap back to the first frame.
    #[default]
    Loop,
    /// Hold the last frame forever.
    OneShot,
}

/// A frame range on one sheet row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
pub struct Pose {
    pub row: u32,
    pub first: u32,
    pub last: u32,
    #[serde(default)]
    pub mode: AnimationMode,
}

impl Pose {
    pub const fn looping(row: u32, first: u32, last: u32) -> Self {
        Self {
            row,
            first,
            last,
            mode: AnimationMode::Loop,
        }
    }

    pub const fn one_shot(row: u32, first: u32, last: u32) -> Self {
        Self {
            row,
            first,
            last,
            mode: AnimationMode::OneShot,
        }
    }

    pub fn frame_count(&self) -> u32 {
        self.last.saturating_sub(self.first) + 1
    }
}

/// Component for frame playback on a sprite sheet.
#[derive(Component, Debug, Clone, PartialEq)]
pub struct Animation {
    pub first_frame: u32,
    pub last_frame: u32,
    pub current_frame: u32,
    /// Seconds per frame.
    pub speed: f32,
    /// Seconds left before the next frame step.
    pub time_left: f32,
    pub row: u32,
    pub mode: AnimationMode,
}

impl Animation {
    pub fn new(pose: Pose, speed: f32) -> Self {
        Self {
            first_frame: pose.first,
            last_frame: pose.last.max(pose.first),
            current_frame: pose.first,
            speed,
            time_left: speed,
            row: pose.row,
            mode: pose.mode,
        }
    }

    /// The pose currently being played.
    pub fn pose(&self) -> Pose {
        Pose {
            row: self.row,
            first: self.first_frame,
            last: self.last_frame,
            mode: self.mode,
        }
    }

    /// Step the frame timer by `dt` seconds. At most one frame is advanced
    /// per call; the timer restarts at `speed` after each step.
    pub fn advance(&mut self, dt: f32) {
        self.time_left -= dt;
        if self.time_left > 0.0 {
            return;
        }
        self.time_left = self.speed;

        match self.mode {
            AnimationMode::Loop => {
                if self.current_frame >= self.last_frame {
                    self.current_frame = self.first_frame;
                } else {
                    self.current_frame += 1;
                }
            }
            AnimationMode::OneShot => {
                if self.current_frame < self.last_frame {
                    self.current_frame += 1;
                }
            }
        }
    }

    /// Switch to `pose` if it differs from the current one, starting from its
    /// first frame. Returns whether a switch happened.
    pub fn set_pose(&mut self, pose: Pose) -> bool {
        if self.pose() == pose {
            return false;
        }
        self.restart(pose);
        true
    }

    /// Play `pose` from its first frame even if it is already playing.
    pub fn restart(&mut self, pose: Pose) {
        self.first_frame = pose.first;
        self.last_frame = pose.last.max(pose.first);
        self.row = pose.row;
        self.mode = pose.mode;
        self.current_frame = self.first_frame;
        self.time_left = self.speed;
    }

    /// True once the final frame is showing. Completion of a one-shot pose is
    /// detected by callers through this, the sequencer never signals it.
    pub fn at_last_frame(&self) -> bool {
        self.current_frame == self.last_frame
    }

    /// Source rectangle of the current frame on a uniform grid sheet.
    pub fn frame_rect(&self, columns: u32, rows: u32, sheet_size: Vec2) -> Rect {
        let frame_width = sheet_size.x / columns.max(1) as f32;
        let frame_height = sheet_size.y / rows.max(1) as f32;
        let x = (self.current_frame % columns.max(1)) as f32 * frame_width;
        let y = self.row as f32 * frame_height;
        Rect::new(x, y, x + frame_width, y + frame_height)
    }
}

/// Advance every animation by the frame delta.
pub fn advance_animations(time: Res<Time>, mut query: Query<&mut Animation>) {
    let dt = crate::core::frame_dt(&time);
    for mut animation in &mut query {
        animation.advance(dt);
    }
}
