//! Core domain: game state definitions for the run flow.

use bevy::prelude::*;

#[derive(States, Debug, Hash, Eq, PartialEq, Clone, Default)]
pub enum GameState {
    /// Content and sprite sheets are being loaded and checked.
    #[default]
    Loading,
    Playing,
}
