//! Movement domain: system modules for input and player updates.

pub(crate) mod input;
pub(crate) mod player;

pub(crate) use input::read_input;
pub(crate) use player::{
    request_reset_on_acknowledge, reset_players, spawn_player, step_players, sync_player_sprite,
};
