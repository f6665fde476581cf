use bevy::prelude::*;

pub mod building_render;
pub mod camera;
pub mod egui_input_guard;
pub mod grid_render;
pub mod input;

use building_render::PlacementMeshes;
use camera::CameraDrag;
use input::CursorGridPos;
use simulation::interaction::{dispatch_pointer_events, refresh_highlight_on_tool_change};

/// Point the sun is placed at; it shines toward the world origin.
const SUN_POSITION: Vec3 = Vec3::new(20.0, 30.0, 20.0);
/// Ambient fill at 60% of full strength.
const AMBIENT_BRIGHTNESS: f32 = 0.6 * 500.0;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CameraDrag>()
            .init_resource::<CursorGridPos>()
            .init_resource::<PlacementMeshes>()
            .add_systems(
                Startup,
                (
                    camera::setup_camera,
                    setup_lighting,
                    grid_render::spawn_grid_tiles,
                ),
            )
            .add_systems(
                Update,
                (
                    camera::camera_mouse_drag,
                    camera::camera_zoom,
                    camera::apply_orbit_camera
                        .after(camera::camera_mouse_drag)
                        .after(camera::camera_zoom),
                ),
            )
            .add_systems(
                Update,
                (
                    input::update_cursor_grid_pos,
                    input::emit_pointer_buttons.after(input::update_cursor_grid_pos),
                    input::keyboard_tool_switch,
                )
                    .before(dispatch_pointer_events),
            )
            .add_systems(
                Update,
                (
                    grid_render::recolor_grid_tiles,
                    building_render::sync_placement_meshes,
                )
                    .after(refresh_highlight_on_tool_change),
            );
    }
}

fn setup_lighting(mut commands: Commands) {
    commands.insert_resource(AmbientLight {
        color: Color::WHITE,
        brightness: AMBIENT_BRIGHTNESS,
    });

    commands.spawn((
        DirectionalLight {
            illuminance: 10000.0,
            shadows_enabled: true,
            ..default()
        },
        Transform::from_translation(SUN_POSITION).looking_at(Vec3::ZERO, Vec3::Y),
    ));
}
