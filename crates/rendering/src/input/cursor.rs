use bevy::prelude::*;
use bevy_egui::EguiContexts;

use simulation::grid::WorldGrid;
use simulation::interaction::PointerEvent;

use crate::egui_input_guard::egui_wants_pointer;

use super::types::CursorGridPos;

/// Height of the tile top surfaces the cursor ray is tested against.
pub const GROUND_PICK_HEIGHT: f32 = 0.1;

/// Intersection of `ray` with the horizontal plane `y = plane_y`, if it lies
/// in front of the ray origin.
pub fn ground_hit(ray: Ray3d, plane_y: f32) -> Option<Vec3> {
    if ray.direction.y.abs() <= 0.001 {
        return None;
    }
    let t = (plane_y - ray.origin.y) / ray.direction.y;
    if t <= 0.0 {
        return None;
    }
    Some(ray.origin + ray.direction * t)
}

/// Ray-cast the cursor onto the grid and report every cursor motion as
/// `PointerEvent::Moved`.
pub fn update_cursor_grid_pos(
    windows: Query<&Window>,
    camera_q: Query<(&Camera, &GlobalTransform), With<Camera3d>>,
    grid: Res<WorldGrid>,
    mut contexts: EguiContexts,
    mut cursor: ResMut<CursorGridPos>,
    mut pointer: EventWriter<PointerEvent>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Ok((camera, cam_transform)) = camera_q.get_single() else {
        return;
    };

    let screen_pos = if egui_wants_pointer(&mut contexts) {
        None
    } else {
        window.cursor_position()
    };
    let cell = screen_pos
        .and_then(|pos| camera.viewport_to_world(cam_transform, pos).ok())
        .and_then(|ray| ground_hit(ray, GROUND_PICK_HEIGHT))
        .and_then(|hit| grid.world_to_cell(hit.x, hit.z));

    let next = CursorGridPos { screen_pos, cell };
    if cursor.moved_to(&next) {
        pointer.send(PointerEvent::Moved { cell });
        *cursor = next;
    }
}

/// Translate mouse buttons into pointer events.
///
/// Presses that start over the UI are swallowed, so the classifier never sees
/// them and the matching release is ignored.
pub fn emit_pointer_buttons(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    time: Res<Time<Real>>,
    cursor: Res<CursorGridPos>,
    mut contexts: EguiContexts,
    mut pointer: EventWriter<PointerEvent>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };
    let Some(pos) = window.cursor_position() else {
        return;
    };
    let now = time.elapsed();

    if buttons.just_released(MouseButton::Left) {
        pointer.send(PointerEvent::PrimaryReleased {
            pos,
            time: now,
            cell: cursor.cell,
        });
    }

    if egui_wants_pointer(&mut contexts) {
        return;
    }

    if buttons.just_pressed(MouseButton::Left) {
        pointer.send(PointerEvent::PrimaryPressed { pos, time: now });
    }
    if buttons.just_pressed(MouseButton::Right) {
        pointer.send(PointerEvent::SecondaryPressed { cell: cursor.cell });
    }
}
