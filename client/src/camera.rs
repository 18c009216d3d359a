//! First-person and chase camera

use bevy::prelude::*;
use shared::{CameraConfig, CameraMode, LookAngles, Player};

use crate::input::InputState;
use crate::settings::Settings;

/// Chase camera smoothing rate (1/s); first person snaps to avoid look lag
const CHASE_RATE: f32 = 12.0;

pub fn setup_camera(mut commands: Commands, settings: Res<Settings>) {
    commands.spawn((
        Camera3d::default(),
        Projection::Perspective(PerspectiveProjection {
            fov: settings.0.camera.fov_degrees.to_radians(),
            near: 0.1,
            far: 1000.0,
            ..default()
        }),
        Transform::from_xyz(0.0, 5.0, 10.0).looking_at(Vec3::ZERO, Vec3::Y),
    ));

    info!("Camera ready ({:?})", settings.0.camera.mode);
}

/// Update camera to follow the player
pub fn update_camera(
    mut player_query: Query<(&Transform, &mut Visibility), (With<Player>, Without<Camera3d>)>,
    mut camera_query: Query<&mut Transform, (With<Camera3d>, Without<Player>)>,
    input_state: Res<InputState>,
    settings: Res<Settings>,
    time: Res<Time>,
) {
    let Some((player_transform, mut player_visibility)) = player_query.iter_mut().next() else {
        return;
    };

    let Ok(mut camera_transform) = camera_query.single_mut() else {
        return;
    };

    // The body is drawn only when the camera is outside it
    let wanted = match input_state.camera_mode {
        CameraMode::FirstPerson => Visibility::Hidden,
        CameraMode::Chase => Visibility::Inherited,
    };
    player_visibility.set_if_neq(wanted);

    let body = player_transform.translation;
    match input_state.camera_mode {
        CameraMode::FirstPerson => {
            let (pos, rot) = first_person_target(body, &input_state.look, &settings.0.camera);
            camera_transform.translation = pos;
            camera_transform.rotation = rot;
        }
        CameraMode::Chase => {
            let (pos, rot) = chase_target(body, &input_state.look, &settings.0.camera);
            let t = 1.0_f32 - (-CHASE_RATE * time.delta_secs()).exp();
            camera_transform.translation = camera_transform.translation.lerp(pos, t);
            camera_transform.rotation = camera_transform.rotation.slerp(rot, t);
        }
    }
}

/// Eye position and look rotation
pub fn first_person_target(body: Vec3, look: &LookAngles, camera: &CameraConfig) -> (Vec3, Quat) {
    (body + Vec3::new(0.0, camera.eye_height, 0.0), look.rotation())
}

/// Fixed offset behind the player (rotated by yaw), looking at the body
pub fn chase_target(body: Vec3, look: &LookAngles, camera: &CameraConfig) -> (Vec3, Quat) {
    let offset = Quat::from_rotation_y(look.yaw) * Vec3::from_array(camera.chase_offset);
    let eye = body + offset;
    let rot = Transform::from_translation(eye).looking_at(body, Vec3::Y).rotation;
    (eye, rot)
}
