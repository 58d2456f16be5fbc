//! Movement domain: the per-frame player state machine.
//!
//! `step_player` runs the transitions in a fixed priority order: hazard
//! check, horizontal movement, wall slide, dash, jump, gravity and collision,
//! attack, pose selection, and finally the out-of-bounds check. Damage from
//! enemies enters through [`take_hit`] and death through [`kill`].

use super::components::{AttackKind, DeathCause, Facing, PlayerMode, PlayerState, WallSide};
use super::resources::{MovementInput, MovementTuning};
use crate::collision::resolve;
use crate::core::Aabb;
use crate::hazard::{HazardSample, LightPhase};
use crate::sprites::{Animation, PlayerPoses, Pose};

const DASH_ARRIVAL_EPSILON: f32 = 1e-3;

/// Read-only per-frame context for one player step.
pub struct StepContext<'a> {
    pub dt: f32,
    pub hazard: HazardSample,
    pub platforms: &'a [Aabb],
    pub bounds: Aabb,
    pub poses: &'a PlayerPoses,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JumpKind {
    Ground,
    Double,
    Wall,
}

/// Notable transitions of one step, for logging.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct StepReport {
    pub death: Option<DeathCause>,
    pub jump: Option<JumpKind>,
    pub dash_started: bool,
    pub dash_ended: bool,
    pub wall_slide_started: bool,
    pub wall_slide_ended: bool,
    pub attack: Option<AttackKind>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitOutcome {
    Ignored,
    Hurt,
    Killed,
}

/// Advance the player by one frame.
pub fn step_player(
    player: &mut PlayerState,
    animation: &mut Animation,
    input: &MovementInput,
    tuning: &MovementTuning,
    ctx: &StepContext,
) -> StepReport {
    let mut report = StepReport::default();
    if !player.is_alive() {
        return report;
    }

    tick_timers(player, tuning, ctx.dt);

    // 1. Hazard check
    if !player.invincible
        && ctx
            .hazard
            .violated(input.movement_held(), player.body.position())
    {
        kill(player, animation, ctx.poses, DeathCause::RedLight);
        report.death = Some(DeathCause::RedLight);
        return report;
    }

    // 2. Horizontal movement
    apply_horizontal(player, input, tuning, ctx.dt);

    // 3. Wall slide entry / exit
    update_wall_slide(player, input, tuning, &mut report);

    // 4. Dash, only under Green like jumps
    let dash_started = ctx.hazard.phase == LightPhase::Green && start_dash(player, input, tuning);
    if dash_started {
        report.dash_started = true;
    } else if step_dash(player, tuning, ctx.platforms) {
        report.dash_ended = true;
    }

    // 5. Jump
    if input.jump_pressed && ctx.hazard.phase == LightPhase::Green {
        report.jump = try_jump(player, tuning);
    }

    // 6. Gravity and collision
    integrate_vertical(player, tuning, ctx);

    // 7. Attack
    report.attack = update_attack(player, animation, input, ctx.poses);

    // 8. Pose selection
    select_pose(player, animation, ctx.poses);

    // 9. Out of bounds
    let body = player.body;
    if body.top() > ctx.bounds.bottom() || body.bottom() < ctx.bounds.top() {
        kill(player, animation, ctx.poses, DeathCause::OutOfBounds);
        report.death = Some(DeathCause::OutOfBounds);
    }

    report
}

fn tick_timers(player: &mut PlayerState, tuning: &MovementTuning, dt: f32) {
    player.levitation_timer = (player.levitation_timer - dt).max(0.0);
    player.phase_timer = (player.phase_timer - dt).max(0.0);
    player.hurt_timer = (player.hurt_timer - dt).max(0.0);
    player.invulnerable_timer = (player.invulnerable_timer - dt).max(0.0);

    let decay = tuning.knockback_decay * dt;
    if player.knockback_x > 0.0 {
        player.knockback_x = (player.knockback_x - decay).max(0.0);
    } else {
        player.knockback_x = (player.knockback_x + decay).min(0.0);
    }

    player.gravity_sign = if player.levitation_timer > 0.0 { -1.0 } else { 1.0 };
}

fn apply_horizontal(
    player: &mut PlayerState,
    input: &MovementInput,
    tuning: &MovementTuning,
    dt: f32,
) {
    player.moving = false;
    if player.is_wall_sliding() || player.is_dashing() {
        return;
    }

    let mut dx = player.knockback_x * dt;
    if input.right {
        player.facing = Facing::Right;
        dx += tuning.run_speed * dt;
        player.moving = true;
    } else if input.left {
        player.facing = Facing::Left;
        dx -= tuning.run_speed * dt;
        player.moving = true;
    }
    player.body.x += dx;
}

fn update_wall_slide(
    player: &mut PlayerState,
    input: &MovementInput,
    tuning: &MovementTuning,
    report: &mut StepReport,
) {
    let contacts = player.contacts;

    if let PlayerMode::WallSliding { side } = player.mode {
        let touching = match side {
            WallSide::Left => contacts.wall_left,
            WallSide::Right => contacts.wall_right,
        };
        if input.down_pressed || player.grounded || !touching {
            player.body.x += side.away() * tuning.wall_release_push;
            player.mode = player.settled_mode();
            report.wall_slide_ended = true;
        }
        return;
    }

    if !matches!(player.mode, PlayerMode::Airborne)
        || player.grounded
        || !contacts.touching_wall()
    {
        return;
    }

    let side = match player.facing {
        Facing::Left if contacts.wall_left => Some(WallSide::Left),
        Facing::Right if contacts.wall_right => Some(WallSide::Right),
        _ => None,
    };
    if let Some(side) = side {
        player.mode = PlayerMode::WallSliding { side };
        player.knockback_x = 0.0;
        report.wall_slide_started = true;
    }
}

/// Begin a dash on the input edge. Returns whether one started.
fn start_dash(player: &mut PlayerState, input: &MovementInput, tuning: &MovementTuning) -> bool {
    if !input.dash_pressed || player.dashes == 0 {
        return false;
    }
    if player.is_dashing() || player.is_wall_sliding() {
        return false;
    }

    let frames_left = tuning.dash_frames();
    if frames_left == 0 {
        return false;
    }

    player.dashes -= 1;
    player.mode = PlayerMode::Dashing {
        target_x: player.body.x + player.facing.sign() * tuning.dash_distance,
        frames_left,
    };
    player.velocity_y = 0.0;
    player.knockback_x = 0.0;
    true
}

/// Move one dash step toward the target. Returns whether the dash ended.
fn step_dash(player: &mut PlayerState, tuning: &MovementTuning, platforms: &[Aabb]) -> bool {
    let PlayerMode::Dashing {
        target_x,
        frames_left,
    } = player.mode
    else {
        return false;
    };

    let remaining = target_x - player.body.x;
    let step = remaining.signum() * tuning.dash_step.min(remaining.abs());

    let resolution = resolve(
        player.body.translated(step, 0.0),
        platforms,
        player.is_phasing(),
    );
    player.body = resolution.body;

    if resolution.contacts.blocked {
        player.mode = player.settled_mode();
        return true;
    }

    let frames_left = frames_left.saturating_sub(1);
    let arrived = (target_x - player.body.x).abs() <= DASH_ARRIVAL_EPSILON;
    if arrived {
        player.body.x = target_x;
    }
    if arrived || frames_left == 0 {
        player.mode = player.settled_mode();
        return true;
    }

    player.mode = PlayerMode::Dashing {
        target_x,
        frames_left,
    };
    false
}

fn try_jump(player: &mut PlayerState, tuning: &MovementTuning) -> Option<JumpKind> {
    let launch = -tuning.jump_force * player.gravity_sign;

    match player.mode {
        PlayerMode::Dashing { .. } | PlayerMode::Dead { .. } => None,
        PlayerMode::WallSliding { side } => {
            player.velocity_y = launch;
            player.body.x += side.away() * tuning.wall_jump_push;
            player.facing = if side.away() > 0.0 {
                Facing::Right
            } else {
                Facing::Left
            };
            player.mode = PlayerMode::Airborne;
            player.grounded = false;
            Some(JumpKind::Wall)
        }
        _ if player.grounded => {
            player.velocity_y = launch;
            player.grounded = false;
            if player.mode == PlayerMode::Grounded {
                player.mode = PlayerMode::Airborne;
            }
            Some(JumpKind::Ground)
        }
        _ if player.double_jumps > 0 => {
            player.double_jumps -= 1;
            player.velocity_y = launch;
            Some(JumpKind::Double)
        }
        _ => None,
    }
}

fn integrate_vertical(player: &mut PlayerState, tuning: &MovementTuning, ctx: &StepContext) {
    match player.mode {
        PlayerMode::Dashing { .. } => player.velocity_y = 0.0,
        PlayerMode::WallSliding { .. } => {
            player.velocity_y = tuning.wall_slide_speed * player.gravity_sign;
        }
        _ => {
            player.velocity_y += tuning.gravity * player.gravity_sign * ctx.dt;
            player.velocity_y = player
                .velocity_y
                .clamp(-tuning.terminal_velocity, tuning.terminal_velocity);
        }
    }

    player.body.y += player.velocity_y * ctx.dt;

    let resolution = resolve(player.body, ctx.platforms, player.is_phasing());
    player.body = resolution.body;
    player.contacts = resolution.contacts;

    if resolution.contacts.grounded || resolution.contacts.ceiling {
        player.velocity_y = 0.0;
    }

    // A levitating player lands on undersides.
    player.grounded = if player.gravity_sign > 0.0 {
        resolution.contacts.grounded
    } else {
        resolution.contacts.ceiling
    };

    if matches!(player.mode, PlayerMode::Grounded | PlayerMode::Airborne) {
        player.mode = player.settled_mode();
    }
}

fn update_attack(
    player: &mut PlayerState,
    animation: &mut Animation,
    input: &MovementInput,
    poses: &PlayerPoses,
) -> Option<AttackKind> {
    if player.is_attacking() {
        if animation.at_last_frame() {
            player.mode = player.settled_mode();
        }
        return None;
    }

    if !matches!(player.mode, PlayerMode::Grounded | PlayerMode::Airborne) {
        return None;
    }
    if player.hurt_timer > 0.0 {
        return None;
    }

    let kind = if input.primary_pressed {
        AttackKind::Slash
    } else if input.secondary_pressed {
        AttackKind::Thrust
    } else {
        return None;
    };

    player.mode = PlayerMode::Attacking {
        kind,
        hit_landed: false,
    };
    animation.restart(attack_pose(poses, kind));
    Some(kind)
}

fn attack_pose(poses: &PlayerPoses, kind: AttackKind) -> Pose {
    match kind {
        AttackKind::Slash => poses.attack_a,
        AttackKind::Thrust => poses.attack_b,
    }
}

fn select_pose(player: &PlayerState, animation: &mut Animation, poses: &PlayerPoses) {
    let pose = match player.mode {
        PlayerMode::Dead { .. } => poses.death,
        PlayerMode::Attacking { kind, .. } => attack_pose(poses, kind),
        _ if player.hurt_timer > 0.0 => poses.hurt,
        PlayerMode::Dashing { .. } => poses.dash,
        PlayerMode::WallSliding { .. } => poses.wall_slide,
        _ if !player.grounded => poses.jump,
        _ if player.moving => poses.run,
        _ => poses.idle,
    };
    animation.set_pose(pose);
}

/// Box used to test an attack against enemies.
pub fn attack_box(player: &PlayerState, tuning: &MovementTuning) -> Aabb {
    player.body.extended(player.facing.sign(), tuning.attack_reach)
}

/// Force the player into the dead state and start the death animation.
pub fn kill(
    player: &mut PlayerState,
    animation: &mut Animation,
    poses: &PlayerPoses,
    cause: DeathCause,
) {
    if !player.is_alive() {
        return;
    }
    player.mode = PlayerMode::Dead { cause };
    player.velocity_y = 0.0;
    player.knockback_x = 0.0;
    animation.restart(poses.death);
}

/// Apply `amount` damage from a source at `source_x`. Hits landing during
/// invulnerability are ignored; a surviving player is knocked back away from
/// the source and staggered.
pub fn take_hit(
    player: &mut PlayerState,
    animation: &mut Animation,
    tuning: &MovementTuning,
    poses: &PlayerPoses,
    amount: i32,
    source_x: f32,
) -> HitOutcome {
    if !player.is_alive() || player.is_invulnerable() {
        return HitOutcome::Ignored;
    }

    player.health.take_damage(amount);
    if player.health.is_dead() {
        kill(player, animation, poses, DeathCause::Damage);
        return HitOutcome::Killed;
    }

    let away = if player.body.center().x < source_x {
        -1.0
    } else {
        1.0
    };
    player.knockback_x = away * tuning.knockback_speed;
    player.velocity_y = -tuning.knockback_lift * player.gravity_sign;
    player.hurt_timer = tuning.hurt_time;
    player.invulnerable_timer = tuning.invulnerable_time;
    player.grounded = false;
    player.mode = PlayerMode::Airborne;
    animation.restart(poses.hurt);
    HitOutcome::Hurt
}

/// Put the player back at its spawn with starting health and charges.
pub fn respawn(
    player: &mut PlayerState,
    animation: &mut Animation,
    tuning: &MovementTuning,
    poses: &PlayerPoses,
) {
    player.body.set_position(player.spawn);
    player.velocity_y = 0.0;
    player.knockback_x = 0.0;
    player.facing = Facing::Right;
    player.gravity_sign = 1.0;
    player.mode = PlayerMode::Airborne;
    player.grounded = false;
    player.contacts = Default::default();
    player.health.reset();
    player.double_jumps = tuning.initial_double_jumps;
    player.dashes = tuning.initial_dashes;
    player.laser = false;
    player.levitation_timer = 0.0;
    player.phase_timer = 0.0;
    player.hurt_timer = 0.0;
    player.invulnerable_timer = 0.0;
    player.moving = false;
    animation.restart(poses.idle);
}
