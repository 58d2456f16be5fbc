mod collision;
mod combat;
mod content;
mod core;
#[cfg(feature = "dev-tools")]
mod debug;
mod hazard;
mod movement;
mod pickups;
mod sprites;

use bevy::prelude::*;

fn main() -> AppExit {
    let mut app = App::new();
    app.add_plugins(
        DefaultPlugins
            .set(WindowPlugin {
                primary_window: Some(Window {
                    title: "Red Light Runner".to_string(),
                    resizable: true,
                    ..default()
                }),
                ..default()
            })
            .set(ImagePlugin::default_nearest()),
    )
    .add_plugins((
        core::CorePlugin,
        content::ContentPlugin,
        sprites::SpritesPlugin,
        hazard::HazardPlugin,
        movement::MovementPlugin,
        combat::CombatPlugin,
        pickups::PickupsPlugin,
    ));

    #[cfg(feature = "dev-tools")]
    app.add_plugins(debug::DebugPlugin);

    app.run()
}
