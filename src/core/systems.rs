//! Core domain: camera setup and follow, run milestones.

use bevy::prelude::*;

use crate::combat::BossDefeatedEvent;
use crate::content::Level;
use crate::core::geometry::box_translation;
use crate::movement::{Player, PlayerState};

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Keep the camera centered on the player.
pub(crate) fn follow_player(
    player_query: Query<&PlayerState, With<Player>>,
    mut camera_query: Query<&mut Transform, With<Camera2d>>,
) {
    let Some(player) = player_query.iter().next() else {
        return;
    };
    let target = box_translation(&player.body, 0.0);

    for mut transform in &mut camera_query {
        transform.translation.x = target.x;
        transform.translation.y = target.y;
    }
}

pub(crate) fn announce_level_clear(
    time: Res<Time>,
    level: Res<Level>,
    mut defeated: MessageReader<BossDefeatedEvent>,
) {
    for event in defeated.read() {
        info!(
            "Level '{}' cleared: boss {:?} defeated after {:.1}s",
            level.name,
            event.boss,
            time.elapsed_secs()
        );
    }
}
