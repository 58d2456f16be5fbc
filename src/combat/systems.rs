//! Combat domain: enemy updates, damage exchange and presentation.

use bevy::prelude::*;

use crate::combat::ai::{
    BrainContact, MobEvent, brain_contact, damage_brain, hit_mob, update_brain, update_mob,
};
use crate::combat::components::{Brain, ContactMob, DiveState, Health, Projectile};
use crate::combat::events::BossDefeatedEvent;
use crate::combat::resources::EnemyTuning;
use crate::combat::spawn::spawn_projectile;
use crate::combat::spikes::touching_spike;
use crate::content::Level;
use crate::core::geometry::box_translation;
use crate::core::{ResetRequested, SimRng, frame_dt};
use crate::movement::{
    HitOutcome, MovementInput, MovementTuning, Player, PlayerState, attack_box, take_hit,
};
use crate::sprites::{Animation, MobPoses, SpriteManifest};

const ENEMY_Z: f32 = 5.0;
const PROJECTILE_Z: f32 = 6.0;

fn log_hit(source: &str, outcome: HitOutcome, player: &PlayerState) {
    match outcome {
        HitOutcome::Ignored => {}
        HitOutcome::Hurt => debug!(
            "Player hit by {}, health {}/{}",
            source, player.health.current, player.health.max
        ),
        HitOutcome::Killed => info!("Player killed by {}", source),
    }
}

pub(crate) fn reset_enemies(
    mut commands: Commands,
    mut reset_events: MessageReader<ResetRequested>,
    manifest: Res<SpriteManifest>,
    mut mobs: Query<(&mut ContactMob, &mut Health, &mut Animation), Without<Brain>>,
    mut brains: Query<(&mut Brain, &mut Health, &mut Animation), Without<ContactMob>>,
    projectiles: Query<Entity, With<Projectile>>,
) {
    if reset_events.read().count() == 0 {
        return;
    }

    for (mut mob, mut health, mut animation) in &mut mobs {
        mob.reset();
        health.reset();
        animation.restart(manifest.mob_poses.idle);
    }
    for (mut brain, mut health, mut animation) in &mut brains {
        brain.reset();
        health.reset();
        animation.restart(manifest.brain_poses.hover);
    }

    let mut cleared = 0;
    for entity in &projectiles {
        commands.entity(entity).despawn();
        cleared += 1;
    }
    debug!("Enemies reset, {} projectiles cleared", cleared);
}

fn select_mob_pose(mob: &ContactMob, animation: &mut Animation, poses: &MobPoses) {
    if !mob.alive {
        animation.set_pose(poses.death);
        return;
    }
    if animation.pose() == poses.hurt && !animation.at_last_frame() {
        return;
    }
    if mob.active {
        animation.set_pose(poses.attack);
    } else {
        animation.set_pose(poses.idle);
    }
}

pub(crate) fn update_mobs(
    time: Res<Time>,
    tuning: Res<EnemyTuning>,
    movement_tuning: Res<MovementTuning>,
    manifest: Res<SpriteManifest>,
    mut player_query: Query<(&mut PlayerState, &mut Animation), With<Player>>,
    mut mobs: Query<(Entity, &mut ContactMob, &mut Health, &mut Animation), Without<Player>>,
) {
    let dt = frame_dt(&time);
    let Some((mut player, mut player_animation)) = player_query.iter_mut().next() else {
        return;
    };

    for (entity, mut mob, mut health, mut animation) in &mut mobs {
        let event = update_mob(&mut mob, &player.body, player.is_alive(), &tuning, dt);
        match event {
            Some(MobEvent::Engaged) => debug!("Mob {:?} engaged", entity),
            Some(MobEvent::Disengaged) => debug!("Mob {:?} disengaged", entity),
            Some(MobEvent::Strike) => {
                let outcome = take_hit(
                    &mut player,
                    &mut player_animation,
                    &movement_tuning,
                    &manifest.player_poses,
                    tuning.contact_damage,
                    mob.collider.center().x,
                );
                log_hit("mob", outcome, &player);
            }
            None => {}
        }

        if player.can_land_hit() {
            let attack = attack_box(&player, &movement_tuning);
            if let Some(killed) = hit_mob(&mut mob, &mut health, &attack) {
                player.mark_hit_landed();
                if killed {
                    info!("Mob {:?} defeated", entity);
                } else {
                    animation.restart(manifest.mob_poses.hurt);
                    debug!("Mob {:?} hit, health {}", entity, health.current);
                }
            }
        }

        select_mob_pose(&mob, &mut animation, &manifest.mob_poses);
    }
}

pub(crate) fn update_brains(
    mut commands: Commands,
    time: Res<Time>,
    tuning: Res<EnemyTuning>,
    movement_tuning: Res<MovementTuning>,
    manifest: Res<SpriteManifest>,
    mut rng: ResMut<SimRng>,
    mut defeated: MessageWriter<BossDefeatedEvent>,
    mut player_query: Query<(&mut PlayerState, &mut Animation), With<Player>>,
    mut brains: Query<(Entity, &mut Brain, &mut Health, &mut Animation), Without<Player>>,
) {
    let dt = frame_dt(&time);
    let Some((mut player, mut player_animation)) = player_query.iter_mut().next() else {
        return;
    };

    for (entity, mut brain, mut health, mut animation) in &mut brains {
        let was_floating = brain.dive == DiveState::Floating;
        if let Some(projectile) =
            update_brain(&mut brain, &tuning, &mut rng.0, player.body.center(), dt)
        {
            debug!("Brain launched projectile at {:?}", projectile.velocity);
            spawn_projectile(&mut commands, projectile);
        }
        if was_floating && brain.dive == DiveState::Dropping {
            debug!("Brain {:?} diving", entity);
        }

        if player.is_alive() {
            let attack = player
                .damage_window_open()
                .then(|| attack_box(&player, &movement_tuning));
            let contact =
                brain_contact(&brain, &player.body, attack.as_ref(), player.can_land_hit());
            match contact {
                BrainContact::BossHit => {
                    player.mark_hit_landed();
                    if damage_brain(&mut brain, &mut health) {
                        info!("Brain boss defeated");
                        defeated.write(BossDefeatedEvent { boss: entity });
                    } else {
                        debug!("Brain hit, health {}/{}", health.current, health.max);
                    }
                }
                BrainContact::PlayerHit => {
                    let outcome = take_hit(
                        &mut player,
                        &mut player_animation,
                        &movement_tuning,
                        &manifest.player_poses,
                        tuning.contact_damage,
                        brain.body.center().x,
                    );
                    log_hit("brain", outcome, &player);
                }
                BrainContact::None => {}
            }
        }

        let poses = &manifest.brain_poses;
        let pose = if !brain.alive {
            poses.death
        } else if brain.dive == DiveState::Floating {
            poses.hover
        } else {
            poses.dive
        };
        animation.set_pose(pose);
    }
}

pub(crate) fn update_projectiles(
    mut commands: Commands,
    time: Res<Time>,
    input: Res<MovementInput>,
    level: Res<Level>,
    tuning: Res<EnemyTuning>,
    movement_tuning: Res<MovementTuning>,
    manifest: Res<SpriteManifest>,
    mut player_query: Query<(&mut PlayerState, &mut Animation), With<Player>>,
    mut projectiles: Query<(Entity, &mut Projectile)>,
) {
    let dt = frame_dt(&time);
    let Some((mut player, mut player_animation)) = player_query.iter_mut().next() else {
        return;
    };

    let laser_target = if player.laser && input.primary_pressed {
        input.cursor
    } else {
        None
    };

    for (entity, mut projectile) in &mut projectiles {
        projectile.advance(dt);

        if laser_target.is_some_and(|cursor| projectile.body.contains_point(cursor)) {
            info!("Laser destroyed projectile {:?}", entity);
            commands.entity(entity).despawn();
            continue;
        }

        if player.is_alive() && projectile.body.overlaps(&player.body) {
            let outcome = take_hit(
                &mut player,
                &mut player_animation,
                &movement_tuning,
                &manifest.player_poses,
                tuning.contact_damage,
                projectile.body.center().x,
            );
            log_hit("projectile", outcome, &player);
            commands.entity(entity).despawn();
            continue;
        }

        if !projectile.body.overlaps(&level.bounds) {
            commands.entity(entity).despawn();
        }
    }
}

pub(crate) fn apply_spikes(
    level: Res<Level>,
    tuning: Res<EnemyTuning>,
    movement_tuning: Res<MovementTuning>,
    manifest: Res<SpriteManifest>,
    mut player_query: Query<(&mut PlayerState, &mut Animation), With<Player>>,
) {
    for (mut player, mut animation) in &mut player_query {
        if !player.is_alive() {
            continue;
        }
        let Some(spike) = touching_spike(&player.body, &level.hazards) else {
            continue;
        };
        let source_x = spike.center().x;
        let outcome = take_hit(
            &mut player,
            &mut animation,
            &movement_tuning,
            &manifest.player_poses,
            tuning.contact_damage,
            source_x,
        );
        log_hit("spikes", outcome, &player);
    }
}

pub(crate) fn sync_enemy_transforms(
    player_query: Query<&PlayerState, With<Player>>,
    mut mobs: Query<(&ContactMob, &mut Transform, &mut Sprite), Without<Player>>,
    mut brains: Query<(&Brain, &mut Transform), (Without<ContactMob>, Without<Player>)>,
    mut projectiles: Query<
        (&Projectile, &mut Transform),
        (Without<Brain>, Without<ContactMob>, Without<Player>),
    >,
) {
    let player_x = player_query.iter().next().map(|p| p.body.center().x);

    for (mob, mut transform, mut sprite) in &mut mobs {
        transform.translation = box_translation(&mob.collider, ENEMY_Z);
        if let Some(player_x) = player_x {
            sprite.flip_x = player_x < mob.collider.center().x;
        }
    }

    for (brain, mut transform) in &mut brains {
        transform.translation = box_translation(&brain.body, ENEMY_Z);
    }

    for (projectile, mut transform) in &mut projectiles {
        transform.translation = box_translation(&projectile.body, PROJECTILE_Z);
    }
}
