//! Movement domain: player spawning, stepping, reset and presentation.

use bevy::prelude::*;

use crate::content::Level;
use crate::core::geometry::to_world;
use crate::core::{ResetCause, ResetRequested, frame_dt};
use crate::hazard::{HazardTimer, HazardTuning};
use crate::movement::controller::{StepContext, respawn, step_player};
use crate::movement::{Facing, MovementInput, MovementTuning, Player, PlayerState};
use crate::sprites::{Animation, SheetKind, SpriteManifest, SpriteSheets, actor_sprite};

/// On-screen size of one hero frame.
const PLAYER_DRAW_SIZE: f32 = 160.0;
const PLAYER_Z: f32 = 10.0;

pub(crate) fn spawn_player(
    mut commands: Commands,
    level: Res<Level>,
    tuning: Res<MovementTuning>,
    manifest: Res<SpriteManifest>,
    sheets: Res<SpriteSheets>,
) {
    let state = PlayerState::new(
        level.spawn_box(),
        tuning.max_health,
        tuning.initial_double_jumps,
        tuning.initial_dashes,
    );
    let animation = Animation::new(manifest.player_poses.idle, manifest.hero.frame_speed);

    info!(
        "Spawning player at ({}, {}) with {} health",
        state.body.x, state.body.y, tuning.max_health
    );

    commands.spawn((
        Player,
        state,
        animation,
        SheetKind::Hero,
        actor_sprite(&sheets, SheetKind::Hero, Vec2::splat(PLAYER_DRAW_SIZE)),
        Transform::default(),
    ));
}

pub(crate) fn step_players(
    time: Res<Time>,
    input: Res<MovementInput>,
    tuning: Res<MovementTuning>,
    hazard_tuning: Res<HazardTuning>,
    hazard: Res<HazardTimer>,
    level: Res<Level>,
    manifest: Res<SpriteManifest>,
    mut query: Query<(&mut PlayerState, &mut Animation), With<Player>>,
) {
    let ctx = StepContext {
        dt: frame_dt(&time),
        hazard: hazard.sample(hazard_tuning.rule),
        platforms: &level.platforms,
        bounds: level.bounds,
        poses: &manifest.player_poses,
    };

    for (mut player, mut animation) in &mut query {
        let report = step_player(&mut player, &mut animation, &input, &tuning, &ctx);

        if let Some(jump) = report.jump {
            debug!("Jump: {:?}, double jumps left {}", jump, player.double_jumps);
        }
        if report.dash_started {
            debug!("Dash started, charges left {}", player.dashes);
        }
        if report.dash_ended {
            debug!("Dash ended at x={}", player.body.x);
        }
        if report.wall_slide_started {
            debug!("Wall slide started");
        }
        if report.wall_slide_ended {
            debug!("Wall slide ended");
        }
        if let Some(kind) = report.attack {
            debug!("Attack: {:?}", kind);
        }
        if let Some(cause) = report.death {
            info!(
                "Player died ({:?}) at ({:.1}, {:.1})",
                cause, player.body.x, player.body.y
            );
        }
    }
}

/// While dead, the acknowledge key asks for a full reset.
pub(crate) fn request_reset_on_acknowledge(
    input: Res<MovementInput>,
    query: Query<&PlayerState, With<Player>>,
    mut reset_events: MessageWriter<ResetRequested>,
) {
    if !input.acknowledge_pressed {
        return;
    }
    if query.iter().any(|player| !player.is_alive()) {
        reset_events.write(ResetRequested {
            cause: ResetCause::DeathAcknowledged,
        });
    }
}

pub(crate) fn reset_players(
    mut reset_events: MessageReader<ResetRequested>,
    tuning: Res<MovementTuning>,
    manifest: Res<SpriteManifest>,
    mut query: Query<(&mut PlayerState, &mut Animation), With<Player>>,
) {
    let Some(event) = reset_events.read().last() else {
        return;
    };

    for (mut player, mut animation) in &mut query {
        respawn(
            &mut player,
            &mut animation,
            &tuning,
            &manifest.player_poses,
        );
        info!(
            "Player reset ({:?}) at ({}, {})",
            event.cause, player.spawn.x, player.spawn.y
        );
    }
}

/// Place the hero sprite so its bottom edge sits on the body's bottom edge.
pub(crate) fn sync_player_sprite(
    mut query: Query<(&PlayerState, &mut Transform, &mut Sprite), With<Player>>,
) {
    for (player, mut transform, mut sprite) in &mut query {
        let foot = Vec2::new(player.body.center().x, player.body.bottom());
        let center = foot - Vec2::new(0.0, PLAYER_DRAW_SIZE * 0.5);
        transform.translation = to_world(center).extend(PLAYER_Z);

        sprite.flip_x = player.facing == Facing::Left;
        // Upside down while levitating.
        sprite.flip_y = player.gravity_sign < 0.0;
    }
}
