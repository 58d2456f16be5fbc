//! Hazard domain: the red light / green light phase clock.

use bevy::prelude::*;
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LightPhase {
    /// Movement is allowed.
    #[default]
    Green,
    /// Moving is lethal.
    Red,
}

/// What counts as moving during a red phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
pub enum HazardRule {
    /// Holding any movement input.
    #[default]
    MovementInput,
    /// Being anywhere other than where the phase turned red.
    Displacement,
}

#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HazardTuning {
    /// Seconds of green light.
    pub green_duration: f64,
    /// Seconds of red light.
    pub red_duration: f64,
    pub rule: HazardRule,
    /// Whether the light cycles at all outside boss arenas.
    pub enabled: bool,
}

impl Default for HazardTuning {
    fn default() -> Self {
        Self {
            green_duration: 5.0,
            red_duration: 3.0,
            rule: HazardRule::MovementInput,
            enabled: true,
        }
    }
}

/// Two-phase clock toggling on elapsed time.
#[derive(Resource, Debug, Clone)]
pub struct HazardTimer {
    phase: LightPhase,
    phase_started_at: f64,
    green_duration: f64,
    red_duration: f64,
    enabled: bool,
    /// Player position captured when the phase turned red.
    red_anchor: Option<Vec2>,
}

impl Default for HazardTimer {
    fn default() -> Self {
        Self::new(&HazardTuning::default(), 0.0)
    }
}

impl HazardTimer {
    pub fn new(tuning: &HazardTuning, now: f64) -> Self {
        Self {
            phase: LightPhase::Green,
            phase_started_at: now,
            green_duration: tuning.green_duration,
            red_duration: tuning.red_duration,
            enabled: tuning.enabled,
            red_anchor: None,
        }
    }

    pub fn phase(&self) -> LightPhase {
        self.phase
    }

    pub fn is_red(&self) -> bool {
        self.phase == LightPhase::Red
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn red_anchor(&self) -> Option<Vec2> {
        self.red_anchor
    }

    /// Seconds until the next phase change.
    pub fn remaining(&self, now: f64) -> f64 {
        let duration = match self.phase {
            LightPhase::Green => self.green_duration,
            LightPhase::Red => self.red_duration,
        };
        (duration - (now - self.phase_started_at)).max(0.0)
    }

    /// Advance the clock to `now`. Returns the new phase when it flipped.
    pub fn tick(&mut self, now: f64, player_position: Vec2) -> Option<LightPhase> {
        if !self.enabled {
            return None;
        }

        let elapsed = now - self.phase_started_at;
        match self.phase {
            LightPhase::Green if elapsed >= self.green_duration => {
                self.phase = LightPhase::Red;
                self.phase_started_at = now;
                self.red_anchor = Some(player_position);
                Some(LightPhase::Red)
            }
            LightPhase::Red if elapsed >= self.red_duration => {
                self.phase = LightPhase::Green;
                self.phase_started_at = now;
                self.red_anchor = None;
                Some(LightPhase::Green)
            }
            _ => None,
        }
    }

    /// Start over from a fresh green phase.
    pub fn restart(&mut self, now: f64) {
        self.phase = LightPhase::Green;
        self.phase_started_at = now;
        self.red_anchor = None;
    }

    /// Disabling holds the clock at green. Re-enabling starts a fresh green
    /// phase. Returns whether the setting changed.
    pub fn set_enabled(&mut self, enabled: bool, now: f64) -> bool {
        if self.enabled == enabled {
            return false;
        }
        self.enabled = enabled;
        self.restart(now);
        true
    }

    pub fn sample(&self, rule: HazardRule) -> HazardSample {
        HazardSample {
            phase: self.phase,
            rule,
            red_anchor: self.red_anchor,
        }
    }
}

/// Snapshot of the light handed to the player state machine each frame.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct HazardSample {
    pub phase: LightPhase,
    pub rule: HazardRule,
    pub red_anchor: Option<Vec2>,
}

impl HazardSample {
    pub fn green() -> Self {
        Self::default()
    }

    pub fn red(rule: HazardRule, red_anchor: Option<Vec2>) -> Self {
        Self {
            phase: LightPhase::Red,
            rule,
            red_anchor,
        }
    }

    /// Whether the player broke the red-light rule.
    pub fn violated(&self, movement_held: bool, position: Vec2) -> bool {
        if self.phase != LightPhase::Red {
            return false;
        }
        match self.rule {
            HazardRule::MovementInput => movement_held,
            HazardRule::Displacement => self
                .red_anchor
                .is_some_and(|anchor| anchor != position),
        }
    }
}
