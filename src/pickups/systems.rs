//! Pickups domain: spawning, overlap resolution and presentation.

use bevy::prelude::*;

use crate::content::{Level, PowerUpKind};
use crate::core::ResetRequested;
use crate::core::geometry::box_translation;
use crate::movement::{MovementInput, MovementTuning, Player, PlayerState};
use crate::pickups::components::{Checkpoint, PowerUp, Teleport};
use crate::pickups::rules::{collect_power_up, reach_checkpoint, try_teleport};

const PICKUP_Z: f32 = 2.0;
const CHECKPOINT_COLOR: Color = Color::srgba(1.0, 0.85, 0.2, 0.45);
const TELEPORT_COLOR: Color = Color::srgba(0.3, 0.9, 0.9, 0.45);

fn power_up_color(kind: PowerUpKind) -> Color {
    match kind {
        PowerUpKind::DoubleJump => Color::srgb(0.35, 0.85, 0.35),
        PowerUpKind::Dash => Color::srgb(0.95, 0.6, 0.15),
        PowerUpKind::Levitation => Color::srgb(0.6, 0.45, 0.95),
        PowerUpKind::Phase => Color::srgb(0.75, 0.75, 0.8),
        PowerUpKind::Laser => Color::srgb(1.0, 0.2, 0.2),
    }
}

pub(crate) fn spawn_pickups(mut commands: Commands, level: Res<Level>) {
    for def in &level.power_ups {
        commands.spawn((
            PowerUp::from(def),
            Sprite::from_color(power_up_color(def.kind), def.area.size()),
            Transform::from_translation(box_translation(&def.area, PICKUP_Z)),
        ));
    }

    for def in &level.checkpoints {
        commands.spawn((
            Checkpoint::from(def),
            Sprite::from_color(CHECKPOINT_COLOR, def.area.size()),
            Transform::from_translation(box_translation(&def.area, PICKUP_Z)),
        ));
    }

    for def in &level.teleports {
        commands.spawn((
            Teleport::from(def),
            Sprite::from_color(TELEPORT_COLOR, def.area.size()),
            Transform::from_translation(box_translation(&def.area, PICKUP_Z)),
        ));
    }

    debug!(
        "Spawned pickups: {} power-ups, {} checkpoints, {} teleports",
        level.power_ups.len(),
        level.checkpoints.len(),
        level.teleports.len()
    );
}

pub(crate) fn resolve_pickups(
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    mut player_query: Query<&mut PlayerState, With<Player>>,
    mut power_ups: Query<&mut PowerUp>,
    checkpoints: Query<&Checkpoint>,
    teleports: Query<&Teleport>,
) {
    let Some(mut player) = player_query.iter_mut().next() else {
        return;
    };

    for mut power_up in &mut power_ups {
        if collect_power_up(&mut power_up, &mut player, &tuning) {
            info!(
                "Collected {:?} power-up (double jumps {}, dashes {})",
                power_up.kind, player.double_jumps, player.dashes
            );
        }
    }

    for checkpoint in &checkpoints {
        if reach_checkpoint(checkpoint, &mut player) {
            info!("Checkpoint reached, spawn at {:?}", checkpoint.spawn);
        }
    }

    for teleport in &teleports {
        if try_teleport(teleport, &mut player, input.interact_pressed) {
            info!("Teleported to {:?}", teleport.destination);
            break;
        }
    }
}

pub(crate) fn reset_pickups(
    mut reset_events: MessageReader<ResetRequested>,
    mut power_ups: Query<&mut PowerUp>,
) {
    if reset_events.read().count() == 0 {
        return;
    }
    for mut power_up in &mut power_ups {
        power_up.collected = false;
    }
}

pub(crate) fn sync_pickup_visibility(mut power_ups: Query<(&PowerUp, &mut Visibility)>) {
    for (power_up, mut visibility) in &mut power_ups {
        let wanted = if power_up.collected {
            Visibility::Hidden
        } else {
            Visibility::Inherited
        };
        if *visibility != wanted {
            *visibility = wanted;
        }
    }
}
