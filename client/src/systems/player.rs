//! Player body systems
//!
//! Spawning the Rapier body, respawning, and applying the controller.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use shared::{physics_dt, step_character, JumpState, Player, PLAYER_HALF_HEIGHT, PLAYER_RADIUS};

use super::ground::GroundProbe;
use crate::input::InputState;
use crate::settings::{Levels, Settings};

/// Spawn the player at the level spawn, or move the existing one there
pub fn place_player(
    mut commands: Commands,
    levels: Res<Levels>,
    mut players: Query<(&mut Transform, &mut Velocity, &mut JumpState), With<Player>>,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    let spawn = levels.spawn_point();

    if let Some((mut transform, mut velocity, mut jump)) = players.iter_mut().next() {
        reset_body(&mut transform, &mut velocity, &mut jump, spawn);
        info!("Player moved to spawn {:?}", spawn);
        return;
    }

    let segment_half = PLAYER_HALF_HEIGHT - PLAYER_RADIUS;
    commands.spawn((
        Player,
        Name::new("Player"),
        Mesh3d(meshes.add(Capsule3d::new(PLAYER_RADIUS, segment_half * 2.0))),
        MeshMaterial3d(materials.add(Color::srgb(0.9, 0.3, 0.2))),
        Transform::from_translation(spawn),
        JumpState::default(),
        GroundProbe::default(),
        (
            RigidBody::Dynamic,
            Collider::capsule_y(segment_half, PLAYER_RADIUS),
            // Keep the capsule upright
            LockedAxes::ROTATION_LOCKED,
            Velocity::zero(),
            // The controller owns horizontal velocity; friction would fight it
            Friction {
                coefficient: 0.0,
                combine_rule: CoefficientCombineRule::Min,
            },
            ActiveEvents::COLLISION_EVENTS,
            Sleeping::disabled(),
            Ccd::enabled(),
        ),
    ));

    info!("Spawned player at {:?}", spawn);
}

/// Put fallen players (or those who pressed R) back at the level spawn
pub fn respawn_players(
    settings: Res<Settings>,
    levels: Res<Levels>,
    input_state: Res<InputState>,
    mut players: Query<(&mut Transform, &mut Velocity, &mut JumpState), With<Player>>,
) {
    let spawn = levels.spawn_point();

    for (mut transform, mut velocity, mut jump) in &mut players {
        let fell = transform.translation.y < settings.0.kill_plane_y;
        if !fell && !input_state.respawn {
            continue;
        }

        if fell {
            info!(
                "Player fell below {:.1}; respawning at {:?}",
                settings.0.kill_plane_y, spawn
            );
        } else {
            info!("Respawn requested; moving to {:?}", spawn);
        }
        reset_body(&mut transform, &mut velocity, &mut jump, spawn);
    }
}

/// Run the movement/jump controller and write the result to the body
pub fn apply_controller(
    time: Res<Time>,
    settings: Res<Settings>,
    input_state: Res<InputState>,
    mut players: Query<(&GroundProbe, &mut Velocity, &mut JumpState), With<Player>>,
) {
    let dt = physics_dt(time.delta_secs());

    for (probe, mut velocity, mut jump) in &mut players {
        let mut linvel = velocity.linvel;
        let outcome = step_character(
            &input_state.intent,
            &input_state.look,
            &settings.0,
            &probe.0,
            &mut linvel,
            &mut jump,
            dt,
        );
        velocity.linvel = linvel;

        if outcome.jumped {
            debug!("Jump #{} ({:?})", jump.jumps, settings.0.ground_test);
        }
    }
}

fn reset_body(transform: &mut Transform, velocity: &mut Velocity, jump: &mut JumpState, spawn: Vec3) {
    transform.translation = spawn;
    *velocity = Velocity::zero();
    jump.reset();
}
