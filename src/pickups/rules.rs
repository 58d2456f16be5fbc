//! Pickups domain: overlap rules for power-ups, checkpoints and teleports.

use crate::content::PowerUpKind;
use crate::movement::{MovementTuning, PlayerMode, PlayerState};
use crate::pickups::components::{Checkpoint, PowerUp, Teleport};

/// Grant the effect of a power-up of `kind` to the player.
pub fn apply_power_up(
    kind: PowerUpKind,
    amount: u32,
    player: &mut PlayerState,
    tuning: &MovementTuning,
) {
    match kind {
        PowerUpKind::DoubleJump => player.double_jumps += amount,
        PowerUpKind::Dash => player.dashes += amount,
        PowerUpKind::Levitation => {
            player.levitation_timer = tuning.levitation_time;
            player.gravity_sign = -1.0;
        }
        PowerUpKind::Phase => player.phase_timer = tuning.phase_time,
        PowerUpKind::Laser => player.laser = true,
    }
}

/// Collect the power-up if the player touches it. Returns whether it was
/// collected this call; a collected power-up stays inert until reset.
pub fn collect_power_up(
    power_up: &mut PowerUp,
    player: &mut PlayerState,
    tuning: &MovementTuning,
) -> bool {
    if power_up.collected || !player.is_alive() || !power_up.area.overlaps(&player.body) {
        return false;
    }
    power_up.collected = true;
    apply_power_up(power_up.kind, power_up.amount, player, tuning);
    true
}

/// Move the respawn point to the checkpoint on overlap. Returns true only
/// when the spawn actually changed.
pub fn reach_checkpoint(checkpoint: &Checkpoint, player: &mut PlayerState) -> bool {
    if !player.is_alive()
        || !checkpoint.area.overlaps(&player.body)
        || player.spawn == checkpoint.spawn
    {
        return false;
    }
    player.spawn = checkpoint.spawn;
    true
}

/// Move the player to the teleport destination on overlap, gated on the
/// interact edge when the zone asks for it.
pub fn try_teleport(teleport: &Teleport, player: &mut PlayerState, interact_pressed: bool) -> bool {
    if !player.is_alive() || !teleport.area.overlaps(&player.body) {
        return false;
    }
    if teleport.requires_interact && !interact_pressed {
        return false;
    }

    player.body.set_position(teleport.destination);
    player.velocity_y = 0.0;
    player.knockback_x = 0.0;
    player.grounded = false;
    player.mode = PlayerMode::Airborne;
    true
}
