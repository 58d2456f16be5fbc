//! Debug domain: toggles and warp cursor for debug tooling.

use bevy::prelude::*;

/// Resource tracking debug mode state
#[derive(Resource, Debug, Default)]
pub struct DebugState {
    /// Horizontal collision is skipped while set; the light rule still applies
    pub noclip: bool,
    /// Whether player is invincible
    pub invincible: bool,
    /// Whether to show debug info overlay (position, health, etc.)
    pub show_info: bool,
    /// Index of the next entry in `Level::debug_warps`
    pub next_warp: usize,
    /// Message to display temporarily in the overlay
    pub status_message: Option<(String, f32)>,
}

impl DebugState {
    /// Set a status message that will fade after a duration
    pub fn set_message(&mut self, message: impl Into<String>, duration: f32) {
        self.status_message = Some((message.into(), duration));
    }

    /// Next warp target, cycling through `warps` in order.
    pub fn advance_warp(&mut self, warps: &[Vec2]) -> Option<Vec2> {
        if warps.is_empty() {
            return None;
        }
        let index = self.next_warp % warps.len();
        self.next_warp = (index + 1) % warps.len();
        Some(warps[index])
    }

    /// Count down the status message, clearing it once expired.
    pub fn tick_message(&mut self, dt: f32) {
        if let Some((_, ref mut duration)) = self.status_message {
            *duration -= dt;
            if *duration <= 0.0 {
                self.status_message = None;
            }
        }
    }
}
