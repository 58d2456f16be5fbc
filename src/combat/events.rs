//! Combat domain: combat-related events.

use bevy::ecs::message::Message;
use bevy::prelude::*;

#[derive(Debug)]
pub struct BossDefeatedEvent {
    pub boss: Entity,
}

impl Message for BossDefeatedEvent {}
