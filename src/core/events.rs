//! Core domain: run-wide messages.

use bevy::ecs::message::Message;

/// Why a reset was requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResetCause {
    /// The player acknowledged their death.
    DeathAcknowledged,
    /// Debug reset hotkey.
    Debug,
}

/// Re-initialize every mutable record to its spawn-time value.
#[derive(Debug)]
pub struct ResetRequested {
    pub cause: ResetCause,
}

impl Message for ResetRequested {}
