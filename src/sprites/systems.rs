//! Sprite systems: sheet loading, readiness gating, and frame presentation.

use bevy::asset::LoadState;
use bevy::prelude::*;
use std::path::Path;

use super::animation::Animation;
use super::manifest::{SheetKind, SpriteManifest, SpriteSheets};
use crate::content::Level;
use crate::core::GameState;

const MANIFEST_PATH: &str = "assets/sprites/manifest.json";

/// Load the sprite manifest and start loading every sheet it names.
pub(crate) fn load_sprite_sheets(
    mut commands: Commands,
    asset_server: Res<AssetServer>,
    mut exit: MessageWriter<AppExit>,
) {
    let manifest_path = Path::new(MANIFEST_PATH);
    let manifest = if manifest_path.exists() {
        match SpriteManifest::load_from_file(manifest_path) {
            Ok(manifest) => manifest,
            Err(e) => {
                error!("{}", e);
                exit.write(AppExit::from_code(1));
                return;
            }
        }
    } else {
        warn!(
            "Sprite manifest not found at {:?}, using built-in layouts",
            MANIFEST_PATH
        );
        SpriteManifest::default()
    };

    let sheets = SpriteSheets {
        hero: asset_server.load(manifest.hero.path.clone()),
        mob: asset_server.load(manifest.mob.path.clone()),
        brain: asset_server.load(manifest.brain.path.clone()),
    };

    info!(
        "Loaded sprite manifest v{}: hero {}x{}, mob {}x{}, brain {}x{}",
        manifest.version,
        manifest.hero.columns,
        manifest.hero.rows,
        manifest.mob.columns,
        manifest.mob.rows,
        manifest.brain.columns,
        manifest.brain.rows
    );

    commands.insert_resource(manifest);
    commands.insert_resource(sheets);
}

/// Leave the loading state once every sheet is in memory and the level is
/// available. A sheet that fails to load ends the run with exit code 1.
pub(crate) fn await_sprite_sheets(
    asset_server: Res<AssetServer>,
    sheets: Option<Res<SpriteSheets>>,
    level: Option<Res<Level>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut exit: MessageWriter<AppExit>,
) {
    let Some(sheets) = sheets else {
        return;
    };

    let mut all_loaded = true;
    for (name, handle) in sheets.all() {
        match asset_server.load_state(handle.id()) {
            LoadState::Loaded => {}
            LoadState::Failed(e) => {
                error!("Required sprite sheet '{}' failed to load: {}", name, e);
                exit.write(AppExit::from_code(1));
                return;
            }
            _ => all_loaded = false,
        }
    }

    if all_loaded && level.is_some() {
        info!("Sprite sheets ready, starting simulation");
        next_state.set(GameState::Playing);
    }
}

/// Point each animated sprite at its current source frame.
pub(crate) fn sync_sprite_frames(
    manifest: Res<SpriteManifest>,
    sheets: Res<SpriteSheets>,
    images: Res<Assets<Image>>,
    mut query: Query<(&Animation, &SheetKind, &mut Sprite)>,
) {
    for (animation, kind, mut sprite) in &mut query {
        let sheet = manifest.sheet(*kind);
        let sheet_size = images
            .get(&sheets.handle(*kind))
            .map(|image| image.size().as_vec2())
            .unwrap_or_else(|| sheet.size());
        sprite.rect = Some(animation.frame_rect(sheet.columns, sheet.rows, sheet_size));
    }
}

/// Sprite for an animated actor drawn at `size` world units.
pub fn actor_sprite(sheets: &SpriteSheets, kind: SheetKind, size: Vec2) -> Sprite {
    Sprite {
        image: sheets.handle(kind),
        custom_size: Some(size),
        ..default()
    }
}
