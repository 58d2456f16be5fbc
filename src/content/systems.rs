//! Content domain: startup loading and level geometry presentation.

use bevy::prelude::*;
use std::path::Path;

use super::data::Level;
use super::loader::load_all_content;
use crate::core::geometry::box_translation;
use crate::core::{RunConfig, SimRng};

const DATA_PATH: &str = "assets/data";

/// Static level geometry drawn behind the actors.
#[derive(Component, Debug)]
pub struct LevelGeometry;

const PLATFORM_COLOR: Color = Color::srgb(0.32, 0.27, 0.22);
const SPIKE_COLOR: Color = Color::srgb(0.75, 0.1, 0.1);

/// Load the level and tuning files, publishing them as resources.
/// Any load or validation failure ends the run with exit code 1.
pub(crate) fn load_content(
    mut commands: Commands,
    run_config: Res<RunConfig>,
    mut exit: MessageWriter<AppExit>,
) {
    let (level, defaults) = match load_all_content(Path::new(DATA_PATH)) {
        Ok(content) => content,
        Err(errors) => {
            for e in &errors {
                error!("{}", e);
            }
            error!("Content loading failed with {} error(s)", errors.len());
            exit.write(AppExit::from_code(1));
            return;
        }
    };

    let seed = defaults.seed.unwrap_or(run_config.seed);
    info!("{}", level.summary());
    info!("Run seed: {}", seed);

    commands.insert_resource(RunConfig { seed });
    commands.insert_resource(SimRng::from_seed(seed));
    commands.insert_resource(defaults.movement);
    commands.insert_resource(defaults.hazard);
    commands.insert_resource(defaults.enemy);
    commands.insert_resource(level);
}

/// Spawn sprites for platforms, decorative tiles and spike hazards.
pub(crate) fn spawn_level_geometry(mut commands: Commands, level: Res<Level>) {
    for platform in &level.platforms {
        commands.spawn((
            LevelGeometry,
            Sprite::from_color(PLATFORM_COLOR, platform.size()),
            Transform::from_translation(box_translation(platform, 0.0)),
        ));
    }

    for tile in &level.tiles {
        commands.spawn((
            LevelGeometry,
            Sprite::from_color(tile_color(tile.tile), tile.area.size()),
            Transform::from_translation(box_translation(&tile.area, -1.0)),
        ));
    }

    for hazard in &level.hazards {
        commands.spawn((
            LevelGeometry,
            Sprite::from_color(SPIKE_COLOR, hazard.size()),
            Transform::from_translation(box_translation(hazard, 0.5)),
        ));
    }

    debug!(
        "Spawned level geometry: {} platforms, {} tiles, {} hazards",
        level.platforms.len(),
        level.tiles.len(),
        level.hazards.len()
    );
}

/// Flat shade for a decorative tile index.
fn tile_color(tile: u32) -> Color {
    let shade = 0.35 + (tile % 4) as f32 * 0.08;
    Color::srgb(shade * 0.8, shade, shade * 0.7)
}
