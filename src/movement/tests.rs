//! Movement domain: tests for the player state machine.

use bevy::prelude::Vec2;

use super::controller::{JumpKind, StepContext, StepReport, respawn, step_player};
use super::{
    AttackKind, DeathCause, Facing, HitOutcome, MovementInput, MovementTuning, PlayerMode,
    PlayerState, WallSide, attack_box, take_hit,
};
use crate::core::Aabb;
use crate::hazard::{HazardRule, HazardSample};
use crate::sprites::{Animation, AnimationMode, PlayerPoses};

const DT: f32 = 1.0 / 60.0;
const FLOOR: Aabb = Aabb::new(0.0, 500.0, 2000.0, 40.0);

struct Rig {
    player: PlayerState,
    animation: Animation,
    tuning: MovementTuning,
    poses: PlayerPoses,
    platforms: Vec<Aabb>,
    bounds: Aabb,
}

impl Rig {
    /// Player standing at x on the floor, not yet settled.
    fn on_floor(x: f32) -> Self {
        Self::with_platforms(Aabb::new(x, 440.0, 40.0, 60.0), vec![FLOOR])
    }

    fn with_platforms(body: Aabb, platforms: Vec<Aabb>) -> Self {
        let tuning = MovementTuning::default();
        let poses = PlayerPoses::default();
        Self {
            player: PlayerState::new(body, tuning.max_health, 0, 0),
            animation: Animation::new(poses.idle, 0.1),
            tuning,
            poses,
            platforms,
            bounds: Aabb::new(0.0, -1000.0, 2000.0, 2000.0),
        }
    }

    fn step(&mut self, input: &MovementInput, hazard: HazardSample) -> StepReport {
        let ctx = StepContext {
            dt: DT,
            hazard,
            platforms: &self.platforms,
            bounds: self.bounds,
            poses: &self.poses,
        };
        step_player(
            &mut self.player,
            &mut self.animation,
            input,
            &self.tuning,
            &ctx,
        )
    }

    fn idle(&mut self) -> StepReport {
        self.step(&MovementInput::default(), HazardSample::green())
    }

    fn settled(mut self) -> Self {
        self.idle();
        assert!(self.player.grounded);
        self
    }
}

fn jump() -> MovementInput {
    MovementInput {
        jump_pressed: true,
        jump_held: true,
        ..Default::default()
    }
}

// -----------------------------------------------------------------------------
// Grounding and jumping
// -----------------------------------------------------------------------------

#[test]
fn test_resting_player_lands_and_stays_put() {
    let mut rig = Rig::on_floor(100.0).settled();
    for _ in 0..30 {
        rig.idle();
    }
    assert_eq!(rig.player.body.y, 440.0);
    assert_eq!(rig.player.velocity_y, 0.0);
    assert_eq!(rig.player.mode, PlayerMode::Grounded);
}

#[test]
fn test_ground_jump_sets_velocity_and_jump_pose() {
    let mut rig = Rig::on_floor(100.0).settled();
    assert_eq!(rig.animation.row, rig.poses.idle.row);

    let report = rig.step(&jump(), HazardSample::green());

    assert_eq!(report.jump, Some(JumpKind::Ground));
    let expected = -rig.tuning.jump_force + rig.tuning.gravity * DT;
    assert!((rig.player.velocity_y - expected).abs() < 1e-3);
    assert!(!rig.player.grounded);
    assert_eq!(rig.player.mode, PlayerMode::Airborne);
    assert_eq!(rig.animation.row, rig.poses.jump.row);
    assert_eq!(rig.animation.current_frame, 0);
}

#[test]
fn test_jump_is_refused_during_red() {
    let mut rig = Rig::on_floor(100.0).settled();
    let anchor = rig.player.body.position();
    let red = HazardSample::red(HazardRule::Displacement, Some(anchor));

    let input = MovementInput {
        jump_pressed: true,
        ..Default::default()
    };
    let report = rig.step(&input, red);

    assert_eq!(report.jump, None);
    assert!(rig.player.is_alive());
    assert!(rig.player.grounded);
}

#[test]
fn test_double_jump_spends_charges_monotonically() {
    let mut rig = Rig::on_floor(100.0).settled();
    rig.player.double_jumps = 1;

    assert_eq!(rig.step(&jump(), HazardSample::green()).jump, Some(JumpKind::Ground));
    rig.idle();
    assert_eq!(rig.step(&jump(), HazardSample::green()).jump, Some(JumpKind::Double));
    assert_eq!(rig.player.double_jumps, 0);

    rig.idle();
    assert_eq!(rig.step(&jump(), HazardSample::green()).jump, None);
    assert_eq!(rig.player.double_jumps, 0);
}

#[test]
fn test_horizontal_input_moves_and_faces() {
    let mut rig = Rig::on_floor(100.0).settled();
    let input = MovementInput {
        left: true,
        right: true,
        ..Default::default()
    };

    rig.step(&input, HazardSample::green());
    // Right wins when both are held.
    assert_eq!(rig.player.facing, Facing::Right);
    assert!((rig.player.body.x - (100.0 + 250.0 * DT)).abs() < 1e-3);
    assert_eq!(rig.animation.row, rig.poses.run.row);
}

// -----------------------------------------------------------------------------
// Hazard
// -----------------------------------------------------------------------------

#[test]
fn test_moving_on_red_kills_and_stays_dead() {
    let mut rig = Rig::on_floor(100.0).settled();
    let red = HazardSample::red(HazardRule::MovementInput, Some(rig.player.body.position()));
    let input = MovementInput {
        right: true,
        ..Default::default()
    };

    let report = rig.step(&input, red);
    assert_eq!(report.death, Some(DeathCause::RedLight));
    assert_eq!(rig.player.mode, PlayerMode::Dead { cause: DeathCause::RedLight });
    assert_eq!(rig.player.body.x, 100.0);
    assert_eq!(rig.animation.row, rig.poses.death.row);
    assert_eq!(rig.animation.current_frame, 0);
    assert_eq!(rig.animation.mode, AnimationMode::OneShot);

    for _ in 0..10 {
        rig.step(&input, HazardSample::green());
    }
    assert!(!rig.player.is_alive());
}

#[test]
fn test_standing_still_on_red_is_safe() {
    let mut rig = Rig::on_floor(100.0).settled();
    let red = HazardSample::red(HazardRule::Displacement, Some(rig.player.body.position()));

    for _ in 0..30 {
        rig.step(&MovementInput::default(), red);
    }
    assert!(rig.player.is_alive());
}

#[test]
fn test_invincible_player_ignores_red() {
    let mut rig = Rig::on_floor(100.0).settled();
    rig.player.invincible = true;
    let red = HazardSample::red(HazardRule::MovementInput, None);
    let input = MovementInput {
        right: true,
        ..Default::default()
    };

    rig.step(&input, red);
    assert!(rig.player.is_alive());
}

#[test]
fn test_noclip_does_not_bypass_red() {
    let mut rig = Rig::on_floor(100.0).settled();
    rig.player.noclip = true;
    let red = HazardSample::red(HazardRule::MovementInput, None);

    let report = rig.step(&hold_right(), red);
    assert_eq!(report.death, Some(DeathCause::RedLight));
}

#[test]
fn test_knockback_off_anchor_on_red_kills() {
    let mut rig = Rig::on_floor(100.0).settled();
    let anchor = rig.player.body.position();
    let red = HazardSample::red(HazardRule::Displacement, Some(anchor));

    let outcome = take_hit(
        &mut rig.player,
        &mut rig.animation,
        &rig.tuning,
        &rig.poses,
        1,
        200.0,
    );
    assert_eq!(outcome, HitOutcome::Hurt);

    let report = rig.step(&MovementInput::default(), red);
    assert!(report.death.is_none());
    assert_ne!(rig.player.body.position(), anchor);

    let report = rig.step(&MovementInput::default(), red);
    assert_eq!(report.death, Some(DeathCause::RedLight));
    assert!(!rig.player.is_alive());
}

#[test]
fn test_dash_key_counts_as_movement() {
    let held = MovementInput {
        dash_held: true,
        ..Default::default()
    };
    assert!(held.movement_held());
    assert!(dash().movement_held());
    assert!(jump().movement_held());
    assert!(!MovementInput::default().movement_held());
}

#[test]
fn test_dash_on_red_kills_before_moving() {
    let mut rig = Rig::on_floor(100.0).settled();
    rig.player.dashes = 1;
    let red = HazardSample::red(HazardRule::MovementInput, None);

    let report = rig.step(&dash(), red);
    assert_eq!(report.death, Some(DeathCause::RedLight));
    assert!(!report.dash_started);
    assert_eq!(rig.player.body.x, 100.0);
    assert_eq!(rig.player.dashes, 1);

    for _ in 0..12 {
        rig.step(&MovementInput::default(), red);
    }
    assert_eq!(rig.player.body.x, 100.0);
}

#[test]
fn test_dash_refused_while_red() {
    let mut rig = Rig::on_floor(100.0).settled();
    rig.player.dashes = 1;
    let red = HazardSample::red(HazardRule::Displacement, Some(rig.player.body.position()));

    let report = rig.step(&dash(), red);
    assert!(!report.dash_started);
    assert!(!rig.player.is_dashing());
    assert!(rig.player.is_alive());
    assert_eq!(rig.player.body.x, 100.0);
    assert_eq!(rig.player.dashes, 1);
}

// -----------------------------------------------------------------------------
// Dash
// -----------------------------------------------------------------------------

fn dash() -> MovementInput {
    MovementInput {
        dash_pressed: true,
        ..Default::default()
    }
}

#[test]
fn test_dash_covers_exact_distance() {
    let mut rig = Rig::on_floor(100.0).settled();
    rig.player.dashes = 1;

    let report = rig.step(&dash(), HazardSample::green());
    assert!(report.dash_started);
    assert_eq!(rig.player.dashes, 0);
    assert_eq!(rig.player.body.x, 100.0);

    let mut frames = 0;
    while rig.player.is_dashing() && frames < 30 {
        rig.idle();
        frames += 1;
    }

    assert_eq!(frames, 10);
    assert_eq!(rig.player.body.x, 100.0 + rig.tuning.dash_distance);
}

#[test]
fn test_dash_moves_one_step_per_frame() {
    let mut rig = Rig::on_floor(100.0).settled();
    rig.player.dashes = 1;
    rig.step(&dash(), HazardSample::green());

    rig.idle();
    assert_eq!(rig.player.body.x, 120.0);
    rig.idle();
    assert_eq!(rig.player.body.x, 140.0);
    assert_eq!(rig.animation.row, rig.poses.dash.row);
}

#[test]
fn test_dash_stops_at_wall() {
    let wall = Aabb::new(250.0, 300.0, 20.0, 200.0);
    let mut rig = Rig::with_platforms(Aabb::new(100.0, 440.0, 40.0, 60.0), vec![FLOOR, wall])
        .settled();
    rig.player.dashes = 1;
    rig.step(&dash(), HazardSample::green());

    let mut ended = false;
    for _ in 0..30 {
        if rig.idle().dash_ended {
            ended = true;
            break;
        }
    }

    assert!(ended);
    assert_eq!(rig.player.body.right(), wall.left());
}

#[test]
fn test_dash_facing_left() {
    let mut rig = Rig::on_floor(500.0).settled();
    rig.player.dashes = 1;
    rig.player.facing = Facing::Left;
    rig.step(&dash(), HazardSample::green());
    while rig.player.is_dashing() {
        rig.idle();
    }
    assert_eq!(rig.player.body.x, 300.0);
}

#[test]
fn test_dash_without_charge_does_nothing() {
    let mut rig = Rig::on_floor(100.0).settled();
    let report = rig.step(&dash(), HazardSample::green());
    assert!(!report.dash_started);
    assert!(!rig.player.is_dashing());
}

// -----------------------------------------------------------------------------
// Wall slide
// -----------------------------------------------------------------------------

fn wall_rig() -> Rig {
    let wall = Aabb::new(300.0, 0.0, 40.0, 500.0);
    Rig::with_platforms(Aabb::new(260.0, 200.0, 40.0, 60.0), vec![FLOOR, wall])
}

fn hold_right() -> MovementInput {
    MovementInput {
        right: true,
        ..Default::default()
    }
}

#[test]
fn test_wall_slide_pins_descent() {
    let mut rig = wall_rig();
    rig.step(&hold_right(), HazardSample::green());
    assert!(rig.player.contacts.wall_right);

    let report = rig.step(&hold_right(), HazardSample::green());
    assert!(report.wall_slide_started);
    assert_eq!(rig.player.mode, PlayerMode::WallSliding { side: WallSide::Right });
    assert_eq!(rig.player.velocity_y, rig.tuning.wall_slide_speed);

    let y = rig.player.body.y;
    rig.step(&hold_right(), HazardSample::green());
    assert_eq!(rig.player.velocity_y, rig.tuning.wall_slide_speed);
    assert!((rig.player.body.y - (y + rig.tuning.wall_slide_speed * DT)).abs() < 1e-3);
    assert_eq!(rig.animation.row, rig.poses.wall_slide.row);
}

#[test]
fn test_down_input_releases_wall() {
    let mut rig = wall_rig();
    rig.step(&hold_right(), HazardSample::green());
    rig.step(&hold_right(), HazardSample::green());
    assert!(rig.player.is_wall_sliding());

    let down = MovementInput {
        down_pressed: true,
        ..Default::default()
    };
    let report = rig.step(&down, HazardSample::green());
    assert!(report.wall_slide_ended);
    assert!(!rig.player.is_wall_sliding());
    assert_eq!(rig.player.body.x, 260.0 - rig.tuning.wall_release_push);
}

/// Step idle frames until the slide ends, returning whether it did.
fn slide_until_release(rig: &mut Rig) -> bool {
    for _ in 0..300 {
        if rig.idle().wall_slide_ended {
            return true;
        }
    }
    false
}

#[test]
fn test_landing_releases_wall() {
    let mut rig = wall_rig();
    rig.step(&hold_right(), HazardSample::green());
    rig.step(&hold_right(), HazardSample::green());
    assert!(rig.player.is_wall_sliding());

    assert!(slide_until_release(&mut rig));
    assert!(rig.player.grounded);
    assert_eq!(rig.player.mode, PlayerMode::Grounded);
    assert_eq!(rig.player.body.bottom(), FLOOR.top());
    assert_eq!(rig.player.body.x, 260.0 - rig.tuning.wall_release_push);
}

#[test]
fn test_sliding_past_wall_end_releases() {
    let short_wall = Aabb::new(300.0, 0.0, 40.0, 300.0);
    let mut rig =
        Rig::with_platforms(Aabb::new(260.0, 200.0, 40.0, 60.0), vec![FLOOR, short_wall]);
    rig.step(&hold_right(), HazardSample::green());
    rig.step(&hold_right(), HazardSample::green());
    assert!(rig.player.is_wall_sliding());

    assert!(slide_until_release(&mut rig));
    assert!(!rig.player.grounded);
    assert_eq!(rig.player.mode, PlayerMode::Airborne);
    assert_eq!(rig.player.body.x, 260.0 - rig.tuning.wall_release_push);
}

#[test]
fn test_wall_jump_ignores_charges_and_pushes_off() {
    let mut rig = wall_rig();
    rig.step(&hold_right(), HazardSample::green());
    rig.step(&hold_right(), HazardSample::green());
    assert_eq!(rig.player.double_jumps, 0);

    let report = rig.step(&jump(), HazardSample::green());
    assert_eq!(report.jump, Some(JumpKind::Wall));
    assert_eq!(rig.player.facing, Facing::Left);
    assert_eq!(rig.player.body.x, 260.0 - rig.tuning.wall_jump_push);
    assert!(rig.player.velocity_y < 0.0);
}

// -----------------------------------------------------------------------------
// Attacks
// -----------------------------------------------------------------------------

#[test]
fn test_attack_opens_and_closes_damage_window() {
    let mut rig = Rig::on_floor(100.0).settled();
    let click = MovementInput {
        primary_pressed: true,
        ..Default::default()
    };

    let report = rig.step(&click, HazardSample::green());
    assert_eq!(report.attack, Some(AttackKind::Slash));
    assert!(rig.player.damage_window_open());
    assert_eq!(rig.animation.row, rig.poses.attack_a.row);

    let frames = rig.poses.attack_a.last - rig.poses.attack_a.first;
    for _ in 0..frames {
        rig.animation.advance(0.1);
    }
    assert!(rig.animation.at_last_frame());

    rig.idle();
    assert!(!rig.player.is_attacking());
    assert!(!rig.player.damage_window_open());
}

#[test]
fn test_landed_hit_keeps_window_until_pose_ends() {
    let mut rig = Rig::on_floor(100.0).settled();
    let click = MovementInput {
        primary_pressed: true,
        ..Default::default()
    };
    rig.step(&click, HazardSample::green());
    assert!(rig.player.can_land_hit());

    rig.player.mark_hit_landed();
    rig.idle();
    assert_eq!(
        rig.player.mode,
        PlayerMode::Attacking {
            kind: AttackKind::Slash,
            hit_landed: true,
        }
    );
    assert!(rig.player.damage_window_open());
    assert!(!rig.player.can_land_hit());

    let frames = rig.poses.attack_a.last - rig.poses.attack_a.first;
    for _ in 0..frames {
        rig.animation.advance(0.1);
    }
    rig.idle();
    assert!(!rig.player.is_attacking());
    assert!(!rig.player.damage_window_open());
}

#[test]
fn test_secondary_attack_uses_second_pose() {
    let mut rig = Rig::on_floor(100.0).settled();
    let click = MovementInput {
        secondary_pressed: true,
        ..Default::default()
    };
    rig.step(&click, HazardSample::green());
    assert_eq!(rig.animation.row, rig.poses.attack_b.row);
}

#[test]
fn test_attack_box_reaches_forward() {
    let mut rig = Rig::on_floor(100.0).settled();
    rig.player.facing = Facing::Left;
    let reach = attack_box(&rig.player, &rig.tuning);
    assert_eq!(reach.left(), 100.0 - rig.tuning.attack_reach);
    assert_eq!(reach.right(), 140.0);
}

// -----------------------------------------------------------------------------
// Damage, death and reset
// -----------------------------------------------------------------------------

#[test]
fn test_hit_knocks_back_and_grants_invulnerability() {
    let mut rig = Rig::on_floor(100.0).settled();
    let outcome = take_hit(
        &mut rig.player,
        &mut rig.animation,
        &rig.tuning,
        &rig.poses,
        1,
        200.0,
    );

    assert_eq!(outcome, HitOutcome::Hurt);
    assert_eq!(rig.player.health.current, rig.tuning.max_health - 1);
    assert!(rig.player.knockback_x < 0.0);
    assert_eq!(rig.animation.row, rig.poses.hurt.row);

    let again = take_hit(
        &mut rig.player,
        &mut rig.animation,
        &rig.tuning,
        &rig.poses,
        1,
        200.0,
    );
    assert_eq!(again, HitOutcome::Ignored);
    assert_eq!(rig.player.health.current, rig.tuning.max_health - 1);

    rig.idle();
    assert!(rig.player.body.x < 100.0);
}

#[test]
fn test_last_hit_kills_with_death_pose() {
    let mut rig = Rig::on_floor(100.0).settled();
    rig.player.health.current = 1;

    let outcome = take_hit(
        &mut rig.player,
        &mut rig.animation,
        &rig.tuning,
        &rig.poses,
        1,
        0.0,
    );
    assert_eq!(outcome, HitOutcome::Killed);
    assert_eq!(rig.player.health.current, 0);
    assert_eq!(rig.player.mode, PlayerMode::Dead { cause: DeathCause::Damage });
    assert_eq!(rig.animation.row, rig.poses.death.row);
    assert_eq!(rig.animation.current_frame, 0);
}

#[test]
fn test_falling_out_of_bounds_kills() {
    let mut rig = Rig::with_platforms(Aabb::new(100.0, 990.0, 40.0, 60.0), vec![]);
    rig.bounds = Aabb::new(0.0, 0.0, 2000.0, 1000.0);

    let mut report = StepReport::default();
    for _ in 0..10 {
        report = rig.idle();
        if report.death.is_some() {
            break;
        }
    }
    assert_eq!(report.death, Some(DeathCause::OutOfBounds));
}

#[test]
fn test_levitation_lands_on_undersides() {
    let ceiling = Aabb::new(0.0, 300.0, 2000.0, 20.0);
    let mut rig = Rig::with_platforms(Aabb::new(100.0, 320.2, 40.0, 60.0), vec![ceiling]);
    rig.player.levitation_timer = rig.tuning.levitation_time;

    rig.idle();
    assert_eq!(rig.player.gravity_sign, -1.0);
    assert!(rig.player.grounded);
    assert_eq!(rig.player.body.top(), ceiling.bottom());
    assert_eq!(rig.player.velocity_y, 0.0);
}

#[test]
fn test_respawn_restores_spawn_state() {
    let mut rig = Rig::on_floor(100.0).settled();
    rig.player.spawn = Vec2::new(50.0, 100.0);
    rig.player.dashes = 0;
    rig.player.laser = true;
    rig.player.health.current = 0;
    rig.tuning.initial_dashes = 2;

    respawn(&mut rig.player, &mut rig.animation, &rig.tuning, &rig.poses);

    assert_eq!(rig.player.body.position(), Vec2::new(50.0, 100.0));
    assert_eq!(rig.player.health.current, rig.tuning.max_health);
    assert_eq!(rig.player.dashes, 2);
    assert!(!rig.player.laser);
    assert!(rig.player.is_alive());
    assert_eq!(rig.animation.row, rig.poses.idle.row);
}
