//! Hazard domain: clock ticking, boss-arena gating, and phase presentation.

use bevy::prelude::*;

use super::timer::{HazardTimer, HazardTuning, LightPhase};
use crate::content::Level;
use crate::core::ResetRequested;
use crate::movement::{Player, PlayerState};

const GREEN_SKY: Color = Color::srgb(0.4, 0.75, 1.0);
const RED_SKY: Color = Color::srgb(0.9, 0.16, 0.22);

pub(crate) fn start_hazard_timer(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<HazardTuning>,
) {
    commands.insert_resource(HazardTimer::new(&tuning, time.elapsed_secs_f64()));
    info!(
        "Hazard timer started: green {}s, red {}s, rule {:?}",
        tuning.green_duration, tuning.red_duration, tuning.rule
    );
}

pub(crate) fn tick_hazard_timer(
    time: Res<Time>,
    tuning: Res<HazardTuning>,
    level: Res<Level>,
    mut timer: ResMut<HazardTimer>,
    player_query: Query<&PlayerState, With<Player>>,
) {
    let now = time.elapsed_secs_f64();
    let Some(player) = player_query.iter().next() else {
        return;
    };

    let in_arena = level
        .boss_arena
        .is_some_and(|arena| arena.overlaps(&player.body));
    if timer.set_enabled(tuning.enabled && !in_arena, now) {
        debug!("Hazard timer enabled={}", timer.is_enabled());
    }

    if let Some(phase) = timer.tick(now, player.body.position()) {
        debug!("Light turned {:?}", phase);
    }
}

pub(crate) fn reset_hazard_timer(
    time: Res<Time>,
    mut reset_events: MessageReader<ResetRequested>,
    mut timer: ResMut<HazardTimer>,
) {
    if reset_events.read().count() > 0 {
        timer.restart(time.elapsed_secs_f64());
    }
}

pub(crate) fn tint_background(timer: Res<HazardTimer>, mut clear_color: ResMut<ClearColor>) {
    let color = match timer.phase() {
        LightPhase::Green => GREEN_SKY,
        LightPhase::Red => RED_SKY,
    };
    if clear_color.0 != color {
        clear_color.0 = color;
    }
}
