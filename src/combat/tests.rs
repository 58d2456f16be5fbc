//! Combat domain: tests for mobs, the brain boss, projectiles and spikes.

use bevy::prelude::Vec2;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use super::ai::{BrainContact, MobEvent, brain_contact, damage_brain, hit_mob, mob_hitbox, update_brain, update_mob};
use super::spikes::touching_spike;
use super::{Brain, ContactMob, DiveState, EnemyTuning, Health, Projectile};
use crate::core::Aabb;
use crate::movement::{
    AttackKind, DeathCause, Facing, HitOutcome, MovementTuning, PlayerMode, PlayerState,
    attack_box, take_hit,
};
use crate::sprites::{Animation, AnimationMode, PlayerPoses};

fn rng() -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(7)
}

fn mob() -> ContactMob {
    ContactMob::new(Aabb::new(100.0, 100.0, 50.0, 60.0))
}

fn brain() -> Brain {
    let body = Aabb::new(500.0, 200.0, 100.0, 100.0);
    Brain {
        body,
        radius: 50.0,
        patrol_min_x: 300.0,
        patrol_max_x: 700.0,
        speed: 100.0,
        direction: 1.0,
        dive: DiveState::Floating,
        float_y: 200.0,
        dive_floor_y: 400.0,
        alive: true,
        spawn: body,
    }
}

fn calm_tuning() -> EnemyTuning {
    EnemyTuning {
        dive_chance: 0.0,
        ..Default::default()
    }
}

// -----------------------------------------------------------------------------
// Health
// -----------------------------------------------------------------------------

#[test]
fn test_health_clamps_at_zero() {
    let mut health = Health::new(2);
    assert_eq!(health.take_damage(5), 2);
    assert_eq!(health.current, 0);
    assert!(health.is_dead());

    health.reset();
    assert_eq!(health.current, 2);
}

// -----------------------------------------------------------------------------
// Contact mob
// -----------------------------------------------------------------------------

#[test]
fn test_mob_hitbox_sits_on_collider_bottom() {
    let hitbox = mob_hitbox(&Aabb::new(100.0, 100.0, 50.0, 60.0), Vec2::new(0.5, 0.25));
    assert_eq!(hitbox, Aabb::new(112.5, 145.0, 25.0, 15.0));
}

#[test]
fn test_mob_strikes_after_cooldown() {
    let tuning = EnemyTuning::default();
    let mut mob = mob();
    let player = Aabb::new(120.0, 120.0, 40.0, 60.0);

    assert_eq!(update_mob(&mut mob, &player, true, &tuning, 0.25), Some(MobEvent::Engaged));
    assert!(mob.active);
    assert_eq!(mob.attack_timer, tuning.mob_attack_cooldown);

    assert_eq!(update_mob(&mut mob, &player, true, &tuning, 0.25), None);
    assert_eq!(update_mob(&mut mob, &player, true, &tuning, 0.25), None);
    assert_eq!(update_mob(&mut mob, &player, true, &tuning, 0.25), None);
    assert_eq!(update_mob(&mut mob, &player, true, &tuning, 0.25), Some(MobEvent::Strike));
    assert_eq!(mob.attack_timer, tuning.mob_attack_cooldown);
}

#[test]
fn test_mob_disengages_when_player_leaves() {
    let tuning = EnemyTuning::default();
    let mut mob = mob();
    let near = Aabb::new(120.0, 120.0, 40.0, 60.0);
    let far = Aabb::new(600.0, 120.0, 40.0, 60.0);

    update_mob(&mut mob, &near, true, &tuning, 0.1);
    assert_eq!(update_mob(&mut mob, &far, true, &tuning, 0.1), Some(MobEvent::Disengaged));
    assert!(!mob.active);
    assert_eq!(update_mob(&mut mob, &far, true, &tuning, 0.1), None);
}

#[test]
fn test_mob_ignores_dead_player() {
    let tuning = EnemyTuning::default();
    let mut mob = mob();
    let player = Aabb::new(120.0, 120.0, 40.0, 60.0);
    assert_eq!(update_mob(&mut mob, &player, false, &tuning, 0.1), None);
    assert!(!mob.active);
}

#[test]
fn test_mob_dies_to_attacks() {
    let mut mob = mob();
    let mut health = Health::new(2);
    let attack = Aabb::new(60.0, 100.0, 60.0, 60.0);

    assert_eq!(hit_mob(&mut mob, &mut health, &attack), Some(false));
    assert_eq!(health.current, 1);
    assert_eq!(hit_mob(&mut mob, &mut health, &attack), Some(true));
    assert!(!mob.alive);
    assert_eq!(hit_mob(&mut mob, &mut health, &attack), None);

    let tuning = EnemyTuning::default();
    assert_eq!(update_mob(&mut mob, &attack, true, &tuning, 1.0), None);

    mob.reset();
    assert!(mob.alive);
}

// -----------------------------------------------------------------------------
// Brain patrol and dive
// -----------------------------------------------------------------------------

#[test]
fn test_brain_reverses_at_patrol_bounds() {
    let tuning = calm_tuning();
    let mut rng = rng();
    let mut brain = brain();
    brain.body.x = 695.0;

    update_brain(&mut brain, &tuning, &mut rng, Vec2::ZERO, 0.1);
    assert_eq!(brain.body.x, 700.0);
    assert_eq!(brain.direction, -1.0);

    brain.body.x = 305.0;
    update_brain(&mut brain, &tuning, &mut rng, Vec2::ZERO, 0.1);
    assert_eq!(brain.body.x, 300.0);
    assert_eq!(brain.direction, 1.0);
    assert_eq!(brain.dive, DiveState::Floating);
}

#[test]
fn test_brain_dive_launches_projectile_and_returns() {
    let tuning = EnemyTuning {
        dive_chance: 1.0,
        ..Default::default()
    };
    let mut rng = rng();
    let mut brain = brain();
    let player_center = Vec2::new(0.0, 400.0);

    assert!(update_brain(&mut brain, &tuning, &mut rng, player_center, 0.1).is_none());
    assert_eq!(brain.dive, DiveState::Dropping);

    let mut projectile = None;
    for _ in 0..20 {
        projectile = update_brain(&mut brain, &tuning, &mut rng, player_center, 0.1);
        if projectile.is_some() {
            break;
        }
    }

    let projectile = match projectile {
        Some(p) => p,
        None => panic!("dive should launch a projectile"),
    };
    assert_eq!(brain.body.y, brain.dive_floor_y);
    assert_eq!(brain.dive, DiveState::Ascending);
    assert_eq!(projectile.velocity, Vec2::new(-tuning.projectile_speed, 0.0));

    for _ in 0..50 {
        update_brain(&mut brain, &tuning, &mut rng, player_center, 0.1);
        if brain.dive != DiveState::Ascending {
            break;
        }
    }
    assert_eq!(brain.body.y, brain.float_y);
}

#[test]
fn test_brain_dive_rolls_are_seeded() {
    let tuning = EnemyTuning {
        dive_chance: 0.3,
        ..Default::default()
    };

    let run = || {
        let mut rng = rng();
        let mut brain = brain();
        (0..30)
            .map(|_| {
                update_brain(&mut brain, &tuning, &mut rng, Vec2::ZERO, 0.01);
                brain.dive
            })
            .collect::<Vec<_>>()
    };

    assert_eq!(run(), run());
}

#[test]
fn test_non_finite_dive_chance_never_dives() {
    let tuning = EnemyTuning {
        dive_chance: f64::NAN,
        ..Default::default()
    };
    let mut rng = rng();
    let mut brain = brain();

    for _ in 0..20 {
        assert!(update_brain(&mut brain, &tuning, &mut rng, Vec2::ZERO, 0.1).is_none());
    }
    assert_eq!(brain.dive, DiveState::Floating);
}

#[test]
fn test_dive_chance_above_one_always_dives() {
    let tuning = EnemyTuning {
        dive_chance: 4.0,
        ..Default::default()
    };
    let mut rng = rng();
    let mut brain = brain();

    update_brain(&mut brain, &tuning, &mut rng, Vec2::ZERO, 0.1);
    assert_eq!(brain.dive, DiveState::Dropping);
}

// -----------------------------------------------------------------------------
// Brain contact
// -----------------------------------------------------------------------------

#[test]
fn test_brain_touch_hurts_player() {
    let brain = brain();
    let touching = Aabb::new(590.0, 240.0, 40.0, 60.0);
    let away = Aabb::new(900.0, 240.0, 40.0, 60.0);

    assert_eq!(brain_contact(&brain, &touching, None, false), BrainContact::PlayerHit);
    assert_eq!(brain_contact(&brain, &away, None, false), BrainContact::None);
}

#[test]
fn test_open_damage_window_shields_player_from_boss() {
    let brain = brain();
    let touching = Aabb::new(590.0, 240.0, 40.0, 60.0);
    let swing_elsewhere = Aabb::new(900.0, 240.0, 40.0, 60.0);

    assert_eq!(
        brain_contact(&brain, &touching, Some(&swing_elsewhere), true),
        BrainContact::None
    );
    assert_eq!(
        brain_contact(&brain, &touching, Some(&touching), false),
        BrainContact::None
    );
}

#[test]
fn test_swing_hits_boss_once_without_trading_damage() {
    let tuning = MovementTuning::default();
    let mut brain = brain();
    let mut health = Health::new(3);
    let mut player = PlayerState::new(Aabb::new(590.0, 240.0, 40.0, 60.0), 3, 0, 0);
    player.facing = Facing::Left;
    player.mode = PlayerMode::Attacking {
        kind: AttackKind::Slash,
        hit_landed: false,
    };

    let mut boss_hits = 0;
    for _ in 0..6 {
        let attack = player.damage_window_open().then(|| attack_box(&player, &tuning));
        match brain_contact(&brain, &player.body, attack.as_ref(), player.can_land_hit()) {
            BrainContact::BossHit => {
                player.mark_hit_landed();
                damage_brain(&mut brain, &mut health);
                boss_hits += 1;
            }
            BrainContact::PlayerHit => panic!("boss must not hurt an attacking player"),
            BrainContact::None => {}
        }
    }

    assert_eq!(boss_hits, 1);
    assert_eq!(health.current, 2);
    assert_eq!(player.health.current, 3);
    assert!(player.damage_window_open());
    assert!(!player.can_land_hit());
}

#[test]
fn test_attack_kills_last_health_and_stops_contact() {
    let mut brain = brain();
    let mut health = Health::new(1);
    let player = Aabb::new(590.0, 240.0, 40.0, 60.0);
    let attack = player.extended(-1.0, 40.0);

    assert_eq!(brain_contact(&brain, &player, Some(&attack), true), BrainContact::BossHit);
    assert!(damage_brain(&mut brain, &mut health));
    assert_eq!(health.current, 0);
    assert!(!brain.alive);

    for _ in 0..5 {
        assert_eq!(brain_contact(&brain, &player, Some(&attack), true), BrainContact::None);
        assert_eq!(brain_contact(&brain, &player, None, false), BrainContact::None);
    }
    assert_eq!(health.current, 0);

    let mut rng = rng();
    let before = brain.body;
    assert!(update_brain(&mut brain, &EnemyTuning::default(), &mut rng, Vec2::ZERO, 0.1).is_none());
    assert_eq!(brain.body, before);
}

#[test]
fn test_brain_reset_revives_at_float_height() {
    let mut brain = brain();
    brain.alive = false;
    brain.body.y = 380.0;
    brain.dive = DiveState::Ascending;

    brain.reset();
    assert!(brain.alive);
    assert_eq!(brain.body.y, brain.float_y);
    assert_eq!(brain.dive, DiveState::Floating);
}

// -----------------------------------------------------------------------------
// Projectiles and spikes
// -----------------------------------------------------------------------------

#[test]
fn test_projectile_moves_linearly() {
    let mut projectile = Projectile::new(Vec2::new(100.0, 100.0), 20.0, Vec2::new(-300.0, 0.0));
    assert_eq!(projectile.body, Aabb::new(90.0, 90.0, 20.0, 20.0));

    projectile.advance(0.5);
    assert_eq!(projectile.body.x, -60.0);
    assert!(projectile.body.contains_point(Vec2::new(-50.0, 100.0)));
}

#[test]
fn test_spikes_kill_player_on_last_health() {
    let tuning = MovementTuning::default();
    let poses = PlayerPoses::default();
    let mut player = PlayerState::new(Aabb::new(100.0, 440.0, 40.0, 60.0), 1, 0, 0);
    let mut animation = Animation::new(poses.run, 0.1);
    animation.advance(0.1);

    let hazards = vec![
        Aabb::new(500.0, 480.0, 60.0, 20.0),
        Aabb::new(120.0, 490.0, 60.0, 10.0),
    ];
    let spike = match touching_spike(&player.body, &hazards) {
        Some(spike) => *spike,
        None => panic!("player should touch the second spike"),
    };
    assert_eq!(spike, hazards[1]);

    let outcome = take_hit(
        &mut player,
        &mut animation,
        &tuning,
        &poses,
        1,
        spike.center().x,
    );

    assert_eq!(outcome, HitOutcome::Killed);
    assert_eq!(player.health.current, 0);
    assert!(!player.is_alive());
    assert_eq!(player.mode, PlayerMode::Dead { cause: DeathCause::Damage });
    assert_eq!(animation.row, poses.death.row);
    assert_eq!(animation.current_frame, 0);
    assert_eq!(animation.mode, AnimationMode::OneShot);
}

#[test]
fn test_no_spike_when_clear() {
    let hazards = vec![Aabb::new(500.0, 480.0, 60.0, 20.0)];
    assert!(touching_spike(&Aabb::new(100.0, 440.0, 40.0, 60.0), &hazards).is_none());
}
