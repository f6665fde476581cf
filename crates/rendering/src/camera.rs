use bevy::input::mouse::{MouseScrollUnit, MouseWheel};
use bevy::prelude::*;
use bevy_egui::EguiContexts;

use simulation::grid::WorldGrid;

use crate::egui_input_guard::egui_wants_pointer;

const ZOOM_SPEED: f32 = 0.1;
const DOLLY_SENSITIVITY: f32 = 0.005;
const PAN_SENSITIVITY: f32 = 0.002;
const MIN_DISTANCE: f32 = 10.0;
const MAX_DISTANCE: f32 = 300.0;
/// Lowest elevation: the camera may tilt at most `PI / 2.5` away from straight down.
const MIN_PITCH: f32 = std::f32::consts::FRAC_PI_2 - std::f32::consts::PI / 2.5;
const MAX_PITCH: f32 = 89.0 * std::f32::consts::PI / 180.0;
const ORBIT_SENSITIVITY: f32 = 0.005;
/// Fraction of the remaining distance to the target covered each frame.
const DAMPING: f32 = 0.05;
/// How far past the grid edge the focus may be panned.
const FOCUS_MARGIN: f32 = 50.0;

/// Initial camera offset from the grid centre.
const START_OFFSET: Vec3 = Vec3::new(30.0, 40.0, 30.0);

pub const FOV_DEGREES: f32 = 75.0;
pub const NEAR: f32 = 0.1;
pub const FAR: f32 = 1000.0;

/// Orbital camera model: camera orbits around a focus point on the ground.
///
/// Input systems edit this target; `apply_orbit_camera` eases the real camera
/// toward it.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct OrbitCamera {
    /// Ground point the camera looks at
    pub focus: Vec3,
    /// Horizontal rotation in radians
    pub yaw: f32,
    /// Elevation angle in radians (clamped between MIN_PITCH and MAX_PITCH)
    pub pitch: f32,
    /// Distance from focus point
    pub distance: f32,
}

impl OrbitCamera {
    /// Orbit that places the camera at `focus + offset`.
    pub fn from_offset(focus: Vec3, offset: Vec3) -> Self {
        let horizontal = Vec2::new(offset.x, offset.z).length();
        Self {
            focus,
            yaw: offset.x.atan2(offset.z),
            pitch: offset.y.atan2(horizontal).clamp(MIN_PITCH, MAX_PITCH),
            distance: offset.length().clamp(MIN_DISTANCE, MAX_DISTANCE),
        }
    }

    /// Camera position and look-at point.
    pub fn to_transform(&self) -> Transform {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        Transform::from_translation(self.focus + Vec3::new(x, y, z)).looking_at(self.focus, Vec3::Y)
    }

    fn lerp_toward(&mut self, target: &OrbitCamera, t: f32) {
        self.focus = self.focus.lerp(target.focus, t);
        self.yaw += (target.yaw - self.yaw) * t;
        self.pitch += (target.pitch - self.pitch) * t;
        self.distance += (target.distance - self.distance) * t;
    }

    /// Move the focus along the ground plane by a screen-space delta.
    fn pan(&mut self, delta: Vec2) {
        let scale = self.distance * PAN_SENSITIVITY;
        let cos_yaw = self.yaw.cos();
        let sin_yaw = self.yaw.sin();
        self.focus.x += (-delta.x * cos_yaw - delta.y * sin_yaw) * scale;
        self.focus.z += (delta.x * sin_yaw - delta.y * cos_yaw) * scale;
    }
}

/// Camera state currently shown on screen, eased toward `OrbitCamera`.
#[derive(Resource, Debug, Clone, Copy)]
pub struct SmoothedOrbit(pub OrbitCamera);

#[derive(Resource, Default)]
pub struct CameraDrag {
    pub button: Option<MouseButton>,
    pub last_pos: Vec2,
}

pub fn setup_camera(mut commands: Commands, grid: Res<WorldGrid>) {
    let center = grid.center();
    let orbit = OrbitCamera::from_offset(Vec3::new(center.x, 0.0, center.y), START_OFFSET);

    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: FOV_DEGREES.to_radians(),
            near: NEAR,
            far: FAR,
            ..default()
        }),
        orbit.to_transform(),
    ));
    commands.insert_resource(orbit);
    commands.insert_resource(SmoothedOrbit(orbit));
}

fn clamp_focus(focus: &mut Vec3, grid: &WorldGrid) {
    let config = grid.config();
    focus.x = focus
        .x
        .clamp(-FOCUS_MARGIN, config.world_width() + FOCUS_MARGIN);
    focus.z = focus
        .z
        .clamp(-FOCUS_MARGIN, config.world_depth() + FOCUS_MARGIN);
}

/// System: ease the camera Transform toward the OrbitCamera target each frame.
pub fn apply_orbit_camera(
    orbit: Res<OrbitCamera>,
    mut smoothed: ResMut<SmoothedOrbit>,
    mut query: Query<&mut Transform, With<Camera3d>>,
) {
    if smoothed.0 == *orbit {
        return;
    }
    smoothed.0.lerp_toward(&orbit, DAMPING);
    if (smoothed.0.focus - orbit.focus).length_squared() < 1e-6
        && (smoothed.0.yaw - orbit.yaw).abs() < 1e-5
        && (smoothed.0.pitch - orbit.pitch).abs() < 1e-5
        && (smoothed.0.distance - orbit.distance).abs() < 1e-4
    {
        smoothed.0 = *orbit;
    }

    let Ok(mut transform) = query.get_single_mut() else {
        return;
    };
    *transform = smoothed.0.to_transform();
}

/// Mouse drags: left orbits, right pans along the ground, middle dollies.
///
/// Runs for every press, including ones the gesture classifier later treats
/// as clicks; a click moves the pointer too little to visibly move the camera.
pub fn camera_mouse_drag(
    buttons: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window>,
    grid: Res<WorldGrid>,
    mut contexts: EguiContexts,
    mut drag: ResMut<CameraDrag>,
    mut orbit: ResMut<OrbitCamera>,
) {
    let Ok(window) = windows.get_single() else {
        return;
    };

    let over_ui = buttons.get_just_pressed().next().is_some() && egui_wants_pointer(&mut contexts);
    for button in [MouseButton::Left, MouseButton::Right, MouseButton::Middle] {
        if buttons.just_pressed(button) && !over_ui {
            if let Some(pos) = window.cursor_position() {
                drag.button = Some(button);
                drag.last_pos = pos;
            }
        }
    }

    let Some(button) = drag.button else {
        return;
    };
    if !buttons.pressed(button) {
        drag.button = None;
        return;
    }
    let Some(pos) = window.cursor_position() else {
        return;
    };

    let delta = pos - drag.last_pos;
    drag.last_pos = pos;
    if delta == Vec2::ZERO {
        return;
    }

    match button {
        MouseButton::Left => {
            orbit.yaw -= delta.x * ORBIT_SENSITIVITY;
            orbit.pitch = (orbit.pitch + delta.y * ORBIT_SENSITIVITY).clamp(MIN_PITCH, MAX_PITCH);
        }
        MouseButton::Right => {
            orbit.pan(delta);
            clamp_focus(&mut orbit.focus, &grid);
        }
        _ => {
            let factor = 1.0 + delta.y * DOLLY_SENSITIVITY;
            orbit.distance = (orbit.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
        }
    }
}

/// Scroll wheel: zoom (change distance).
pub fn camera_zoom(
    mut scroll_evts: EventReader<MouseWheel>,
    mut contexts: EguiContexts,
    mut orbit: ResMut<OrbitCamera>,
) {
    if scroll_evts.is_empty() {
        return;
    }
    if egui_wants_pointer(&mut contexts) {
        scroll_evts.clear();
        return;
    }
    for evt in scroll_evts.read() {
        let dy = match evt.unit {
            MouseScrollUnit::Line => evt.y,
            MouseScrollUnit::Pixel => evt.y / 100.0,
        };
        let factor = 1.0 - dy * ZOOM_SPEED;
        orbit.distance = (orbit.distance * factor).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }
}
