//! Movement domain: input sampling into the per-frame snapshot.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::core::geometry::to_screen;
use crate::movement::MovementInput;

pub(crate) fn read_input(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    cameras: Query<(&Camera, &GlobalTransform)>,
    mut input: ResMut<MovementInput>,
) {
    input.left = keyboard.pressed(KeyCode::KeyA) || keyboard.pressed(KeyCode::ArrowLeft);
    input.right = keyboard.pressed(KeyCode::KeyD) || keyboard.pressed(KeyCode::ArrowRight);
    input.down_pressed =
        keyboard.just_pressed(KeyCode::KeyS) || keyboard.just_pressed(KeyCode::ArrowDown);
    input.jump_pressed = keyboard.just_pressed(KeyCode::Space);
    input.jump_held = keyboard.pressed(KeyCode::Space);
    input.dash_pressed =
        keyboard.just_pressed(KeyCode::ShiftLeft) || keyboard.just_pressed(KeyCode::KeyJ);
    input.dash_held = keyboard.pressed(KeyCode::ShiftLeft) || keyboard.pressed(KeyCode::KeyJ);
    input.interact_pressed = keyboard.just_pressed(KeyCode::KeyE);
    input.acknowledge_pressed =
        keyboard.just_pressed(KeyCode::Enter) || keyboard.just_pressed(KeyCode::KeyR);
    input.primary_pressed = mouse.just_pressed(MouseButton::Left);
    input.secondary_pressed = mouse.just_pressed(MouseButton::Right);

    input.cursor = cursor_in_simulation_space(&windows, &cameras);
}

/// Cursor position converted from the window through the camera into
/// simulation space.
fn cursor_in_simulation_space(
    windows: &Query<&Window, With<PrimaryWindow>>,
    cameras: &Query<(&Camera, &GlobalTransform)>,
) -> Option<Vec2> {
    let window = windows.iter().next()?;
    let cursor = window.cursor_position()?;
    let (camera, camera_transform) = cameras.iter().next()?;
    let world = camera.viewport_to_world_2d(camera_transform, cursor).ok()?;
    Some(to_screen(world))
}
