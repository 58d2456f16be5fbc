//! Sprite manifest loading.
//!
//! The manifest JSON names each actor's sprite sheet, its uniform grid, and
//! the pose table the state machines pick from.

use bevy::prelude::*;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use super::animation::Pose;

/// Error raised while loading or checking sprite sheets.
#[derive(Debug)]
pub struct SheetError {
    pub sheet: String,
    pub message: String,
}

impl std::fmt::Display for SheetError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Sprite sheet '{}': {}", self.sheet, self.message)
    }
}

/// Uniform grid sprite sheet.
#[derive(Debug, Clone, Deserialize)]
pub struct SheetDef {
    /// Path to the image, relative to assets/.
    pub path: String,
    pub columns: u32,
    pub rows: u32,
    /// Pixel size of the whole sheet, used until the image itself is loaded.
    pub width: u32,
    pub height: u32,
    /// Seconds per animation frame.
    #[serde(default = "default_frame_speed")]
    pub frame_speed: f32,
}

fn default_frame_speed() -> f32 {
    0.1
}

impl SheetDef {
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlayerPoses {
    pub idle: Pose,
    pub run: Pose,
    pub jump: Pose,
    pub wall_slide: Pose,
    pub dash: Pose,
    pub hurt: Pose,
    pub attack_a: Pose,
    pub attack_b: Pose,
    pub death: Pose,
}

impl Default for PlayerPoses {
    fn default() -> Self {
        Self {
            idle: Pose::looping(0, 0, 7),
            run: Pose::looping(1, 0, 7),
            attack_a: Pose::one_shot(2, 0, 5),
            attack_b: Pose::one_shot(3, 0, 5),
            jump: Pose::looping(4, 0, 3),
            wall_slide: Pose::looping(5, 0, 3),
            hurt: Pose::one_shot(6, 0, 3),
            dash: Pose::looping(1, 0, 7),
            death: Pose::one_shot(7, 0, 13),
        }
    }
}

impl PlayerPoses {
    fn all(&self) -> [(&'static str, Pose); 9] {
        [
            ("idle", self.idle),
            ("run", self.run),
            ("jump", self.jump),
            ("wall_slide", self.wall_slide),
            ("dash", self.dash),
            ("hurt", self.hurt),
            ("attack_a", self.attack_a),
            ("attack_b", self.attack_b),
            ("death", self.death),
        ]
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct MobPoses {
    pub idle: Pose,
    pub attack: Pose,
    pub hurt: Pose,
    pub death: Pose,
}

impl Default for MobPoses {
    fn default() -> Self {
        Self {
            idle: Pose::looping(0, 0, 3),
            attack: Pose::looping(1, 0, 5),
            hurt: Pose::one_shot(2, 0, 2),
            death: Pose::one_shot(3, 0, 5),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct BrainPoses {
    pub hover: Pose,
    pub dive: Pose,
    pub death: Pose,
}

impl Default for BrainPoses {
    fn default() -> Self {
        Self {
            hover: Pose::looping(0, 0, 5),
            dive: Pose::looping(1, 0, 5),
            death: Pose::one_shot(2, 0, 5),
        }
    }
}

/// Resource holding sheet layouts and pose tables for every actor.
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct SpriteManifest {
    pub version: u32,
    pub hero: SheetDef,
    pub mob: SheetDef,
    pub brain: SheetDef,
    #[serde(default)]
    pub player_poses: PlayerPoses,
    #[serde(default)]
    pub mob_poses: MobPoses,
    #[serde(default)]
    pub brain_poses: BrainPoses,
}

impl Default for SpriteManifest {
    fn default() -> Self {
        Self {
            version: 1,
            hero: SheetDef {
                path: "sprites/hero.png".to_string(),
                columns: 14,
                rows: 8,
                width: 1400,
                height: 800,
                frame_speed: 0.1,
            },
            mob: SheetDef {
                path: "sprites/mob.png".to_string(),
                columns: 8,
                rows: 4,
                width: 512,
                height: 256,
                frame_speed: 0.12,
            },
            brain: SheetDef {
                path: "sprites/brain.png".to_string(),
                columns: 6,
                rows: 3,
                width: 768,
                height: 384,
                frame_speed: 0.1,
            },
            player_poses: PlayerPoses::default(),
            mob_poses: MobPoses::default(),
            brain_poses: BrainPoses::default(),
        }
    }
}

impl SpriteManifest {
    /// Load the manifest from a JSON file.
    pub fn load_from_file(path: &Path) -> Result<Self, SheetError> {
        let contents = fs::read_to_string(path).map_err(|e| SheetError {
            sheet: path.display().to_string(),
            message: format!("IO error: {}", e),
        })?;

        let manifest: SpriteManifest =
            serde_json::from_str(&contents).map_err(|e| SheetError {
                sheet: path.display().to_string(),
                message: format!("Parse error: {}", e),
            })?;

        let errors = manifest.validate();
        if let Some(first) = errors.into_iter().next() {
            return Err(first);
        }

        Ok(manifest)
    }

    pub fn sheets(&self) -> [(&'static str, &SheetDef); 3] {
        [("hero", &self.hero), ("mob", &self.mob), ("brain", &self.brain)]
    }

    /// Check grids are non-empty and every pose fits on its sheet.
    pub fn validate(&self) -> Vec<SheetError> {
        let mut errors = Vec::new();

        for (name, sheet) in self.sheets() {
            if sheet.columns == 0 || sheet.rows == 0 {
                errors.push(SheetError {
                    sheet: name.to_string(),
                    message: "grid must have at least one column and one row".to_string(),
                });
            }
            if sheet.width == 0 || sheet.height == 0 || sheet.frame_speed <= 0.0 {
                errors.push(SheetError {
                    sheet: name.to_string(),
                    message: "size and frame speed must be positive".to_string(),
                });
            }
        }

        let mob = [
            ("idle", self.mob_poses.idle),
            ("attack", self.mob_poses.attack),
            ("hurt", self.mob_poses.hurt),
            ("death", self.mob_poses.death),
        ];
        let brain = [
            ("hover", self.brain_poses.hover),
            ("dive", self.brain_poses.dive),
            ("death", self.brain_poses.death),
        ];

        check_poses(&mut errors, "hero", &self.hero, &self.player_poses.all());
        check_poses(&mut errors, "mob", &self.mob, &mob);
        check_poses(&mut errors, "brain", &self.brain, &brain);

        errors
    }
}

fn check_poses(errors: &mut Vec<SheetError>, name: &str, sheet: &SheetDef, poses: &[(&str, Pose)]) {
    for (pose_name, pose) in poses {
        if pose.first > pose.last || pose.last >= sheet.columns || pose.row >= sheet.rows {
            errors.push(SheetError {
                sheet: name.to_string(),
                message: format!(
                    "pose '{}' (row {}, frames {}..={}) does not fit a {}x{} grid",
                    pose_name, pose.row, pose.first, pose.last, sheet.columns, sheet.rows
                ),
            });
        }
    }
}

/// Which sheet an animated sprite draws from.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetKind {
    Hero,
    Mob,
    Brain,
}

/// Loaded texture handles for every sheet.
#[derive(Resource, Debug, Default)]
pub struct SpriteSheets {
    pub hero: Handle<Image>,
    pub mob: Handle<Image>,
    pub brain: Handle<Image>,
}

impl SpriteSheets {
    pub fn handle(&self, kind: SheetKind) -> Handle<Image> {
        match kind {
            SheetKind::Hero => self.hero.clone(),
            SheetKind::Mob => self.mob.clone(),
            SheetKind::Brain => self.brain.clone(),
        }
    }

    pub fn all(&self) -> [(&'static str, &Handle<Image>); 3] {
        [("hero", &self.hero), ("mob", &self.mob), ("brain", &self.brain)]
    }
}

impl SpriteManifest {
    pub fn sheet(&self, kind: SheetKind) -> &SheetDef {
        match kind {
            SheetKind::Hero => &self.hero,
            SheetKind::Mob => &self.mob,
            SheetKind::Brain => &self.brain,
        }
    }
}
