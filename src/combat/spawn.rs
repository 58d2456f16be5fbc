//! Combat domain: mob and boss spawning from the level.

use bevy::prelude::*;

use crate::combat::ai::mob_hitbox;
use crate::combat::components::{Brain, ContactMob, DiveState, Health, Projectile};
use crate::combat::resources::EnemyTuning;
use crate::content::{BrainDef, Level, MobDef};
use crate::core::geometry::box_translation;
use crate::sprites::{Animation, SheetKind, SpriteManifest, SpriteSheets, actor_sprite};

const ENEMY_Z: f32 = 5.0;
const PROJECTILE_Z: f32 = 6.0;
const PROJECTILE_COLOR: Color = Color::srgb(0.85, 0.3, 0.95);

/// Bundle for spawning a contact mob
#[derive(Bundle)]
pub struct MobBundle {
    pub mob: ContactMob,
    pub health: Health,
    pub animation: Animation,
    pub sheet: SheetKind,
    pub sprite: Sprite,
    pub transform: Transform,
}

impl MobBundle {
    pub fn new(
        def: &MobDef,
        tuning: &EnemyTuning,
        manifest: &SpriteManifest,
        sheets: &SpriteSheets,
    ) -> Self {
        let mut mob = ContactMob::new(def.area);
        mob.hitbox = mob_hitbox(&mob.collider, tuning.mob_hitbox_scale());

        Self {
            mob,
            health: Health::new(def.health),
            animation: Animation::new(manifest.mob_poses.idle, manifest.mob.frame_speed),
            sheet: SheetKind::Mob,
            sprite: actor_sprite(sheets, SheetKind::Mob, def.area.size()),
            transform: Transform::from_translation(box_translation(&def.area, ENEMY_Z)),
        }
    }
}

/// Bundle for spawning the brain boss
#[derive(Bundle)]
pub struct BrainBundle {
    pub brain: Brain,
    pub health: Health,
    pub animation: Animation,
    pub sheet: SheetKind,
    pub sprite: Sprite,
    pub transform: Transform,
}

impl BrainBundle {
    pub fn new(def: &BrainDef, manifest: &SpriteManifest, sheets: &SpriteSheets) -> Self {
        let mut body = def.area;
        body.y = def.float_y;

        Self {
            brain: Brain {
                body,
                radius: def.radius,
                patrol_min_x: def.patrol_min_x,
                patrol_max_x: def.patrol_max_x,
                speed: def.speed,
                direction: 1.0,
                dive: DiveState::Floating,
                float_y: def.float_y,
                dive_floor_y: def.dive_floor_y,
                alive: true,
                spawn: body,
            },
            health: Health::new(def.health),
            animation: Animation::new(manifest.brain_poses.hover, manifest.brain.frame_speed),
            sheet: SheetKind::Brain,
            sprite: actor_sprite(sheets, SheetKind::Brain, Vec2::splat(def.radius * 2.0)),
            transform: Transform::from_translation(box_translation(&body, ENEMY_Z)),
        }
    }
}

pub(crate) fn spawn_enemies(
    mut commands: Commands,
    level: Res<Level>,
    tuning: Res<EnemyTuning>,
    manifest: Res<SpriteManifest>,
    sheets: Res<SpriteSheets>,
) {
    for def in &level.mobs {
        commands.spawn(MobBundle::new(def, &tuning, &manifest, &sheets));
    }

    if let Some(def) = &level.brain {
        commands.spawn(BrainBundle::new(def, &manifest, &sheets));
        info!(
            "Spawned brain boss with {} health, patrolling {}..{}",
            def.health, def.patrol_min_x, def.patrol_max_x
        );
    }

    info!("Spawned {} mobs", level.mobs.len());
}

pub(crate) fn spawn_projectile(commands: &mut Commands, projectile: Projectile) {
    commands.spawn((
        projectile,
        Sprite::from_color(PROJECTILE_COLOR, projectile.body.size()),
        Transform::from_translation(box_translation(&projectile.body, PROJECTILE_Z)),
    ));
}
