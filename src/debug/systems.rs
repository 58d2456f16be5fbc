//! Debug domain: hotkeys and the info overlay.

use bevy::prelude::*;

use crate::content::Level;
use crate::core::{ResetCause, ResetRequested, RunConfig};
use crate::debug::state::DebugState;
use crate::hazard::HazardTimer;
use crate::movement::{Player, PlayerMode, PlayerState};

#[derive(Component)]
pub(crate) struct DebugInfoOverlay;

/// F1 overlay, F2 noclip, F3 invincibility, F4 warp, Backspace reset.
pub(crate) fn handle_debug_hotkeys(
    keyboard: Res<ButtonInput<KeyCode>>,
    level: Res<Level>,
    mut debug_state: ResMut<DebugState>,
    mut resets: MessageWriter<ResetRequested>,
    mut player_query: Query<&mut PlayerState, With<Player>>,
) {
    if keyboard.just_pressed(KeyCode::F1) {
        debug_state.show_info = !debug_state.show_info;
    }

    if keyboard.just_pressed(KeyCode::F2) {
        debug_state.noclip = !debug_state.noclip;
        let msg = if debug_state.noclip { "Noclip ON" } else { "Noclip OFF" };
        info!("Debug: {}", msg);
        debug_state.set_message(msg, 2.0);
    }

    if keyboard.just_pressed(KeyCode::F3) {
        debug_state.invincible = !debug_state.invincible;
        let msg = if debug_state.invincible {
            "Invincibility ON"
        } else {
            "Invincibility OFF"
        };
        info!("Debug: {}", msg);
        debug_state.set_message(msg, 2.0);
    }

    let Some(mut player) = player_query.iter_mut().next() else {
        return;
    };
    player.noclip = debug_state.noclip;
    player.invincible = debug_state.invincible;

    if keyboard.just_pressed(KeyCode::F4) {
        let warps: Vec<Vec2> = level.debug_warps.iter().map(|&p| p.into()).collect();
        match debug_state.advance_warp(&warps) {
            Some(target) if player.is_alive() => {
                player.body.set_position(target);
                player.velocity_y = 0.0;
                player.knockback_x = 0.0;
                player.grounded = false;
                player.mode = PlayerMode::Airborne;
                info!("Debug: warped to {:?}", target);
                debug_state.set_message(format!("Warp {:.0},{:.0}", target.x, target.y), 2.0);
            }
            Some(_) => {}
            None => debug_state.set_message("No warp points in level", 2.0),
        }
    }

    if keyboard.just_pressed(KeyCode::Backspace) {
        info!("Debug: reset requested");
        resets.write(ResetRequested {
            cause: ResetCause::Debug,
        });
        debug_state.set_message("Reset", 2.0);
    }
}

pub(crate) fn update_status_message(time: Res<Time>, mut debug_state: ResMut<DebugState>) {
    debug_state.tick_message(time.delta_secs());
}

/// Update the debug info overlay with current player state
pub(crate) fn update_debug_info_overlay(
    mut commands: Commands,
    time: Res<Time>,
    debug_state: Res<DebugState>,
    run_config: Res<RunConfig>,
    timer: Res<HazardTimer>,
    player_query: Query<&PlayerState, With<Player>>,
    mut overlay_query: Query<&mut Text, With<DebugInfoOverlay>>,
    existing_overlay: Query<Entity, With<DebugInfoOverlay>>,
) {
    if !debug_state.show_info {
        for entity in &existing_overlay {
            commands.entity(entity).despawn();
        }
        return;
    }

    if existing_overlay.is_empty() {
        spawn_debug_info_overlay(&mut commands);
        return;
    }

    if let (Some(player), Ok(mut text)) = (player_query.iter().next(), overlay_query.single_mut())
    {
        let pos = player.body.position();
        let status = debug_state
            .status_message
            .as_ref()
            .map(|(msg, _)| msg.as_str())
            .unwrap_or("");
        **text = format!(
            "Pos: ({:.0}, {:.0})\nHP: {}/{}\nMode: {:?}\nJumps: {} Dashes: {} Laser: {}\nLight: {:?} ({:.1}s)\nSeed: {}\nNoclip: {} Invincible: {}\n{}",
            pos.x,
            pos.y,
            player.health.current,
            player.health.max,
            player.mode,
            player.double_jumps,
            player.dashes,
            player.laser,
            timer.phase(),
            timer.remaining(time.elapsed_secs_f64()),
            run_config.seed,
            debug_state.noclip,
            debug_state.invincible,
            status
        );
    }
}

fn spawn_debug_info_overlay(commands: &mut Commands) {
    commands.spawn((
        DebugInfoOverlay,
        Text::new("Loading..."),
        TextFont {
            font_size: 12.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 0.8)),
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(20.0),
            bottom: Val::Px(20.0),
            padding: UiRect::all(Val::Px(8.0)),
            ..default()
        },
        BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.7)),
        ZIndex(500),
    ));
}
