//! Ground sampling
//!
//! Gathers the evidence a `GroundTest` needs from the Rapier world. Only the
//! queries the configured test actually reads are run.

use bevy::prelude::*;
use bevy_rapier3d::prelude::*;
use shared::{GroundSample, JumpState, LevelSurface, Player};

use crate::settings::Settings;

/// Latest ground evidence for a player body
#[derive(Component, Debug, Default)]
pub struct GroundProbe(pub GroundSample);

/// Cast the downward ray and collect contact normals
pub fn sample_ground(
    settings: Res<Settings>,
    rapier_context: ReadRapierContext,
    mut players: Query<(Entity, &Transform, &Velocity, &mut GroundProbe), With<Player>>,
) {
    let Ok(context) = rapier_context.single() else {
        return;
    };
    let test = settings.0.ground_test;

    for (entity, transform, velocity, mut probe) in &mut players {
        let mut sample = GroundSample {
            vertical_speed: velocity.linvel.y,
            ..default()
        };

        if test.wants_ray() {
            let filter = ground_ray_filter(entity);
            sample.ray_distance = context
                .cast_ray(
                    transform.translation,
                    Vec3::NEG_Y,
                    test.ray_length(),
                    true,
                    filter,
                )
                .map(|(_, toi)| toi);
        }

        if test.wants_contacts() {
            for pair in context.contact_pairs_with(entity) {
                if !pair.has_any_active_contact() {
                    continue;
                }
                for manifold in pair.manifolds() {
                    if manifold.num_points() == 0 {
                        continue;
                    }
                    sample.contact_normals.push(normal_into_player(
                        manifold.normal(),
                        manifold.rigid_body1() == Some(entity),
                    ));
                }
            }
        }

        probe.0 = sample;
    }
}

/// Ray filter for the ground probe: skip the player's own body and sensors
fn ground_ray_filter(player: Entity) -> QueryFilter<'static> {
    QueryFilter::default()
        .exclude_rigid_body(player)
        .exclude_sensors()
}

/// Manifold normals point from body 1 to body 2; flip so they point from the
/// surface into the player.
fn normal_into_player(normal: Vec3, player_is_body1: bool) -> Vec3 {
    if player_is_body1 {
        -normal
    } else {
        normal
    }
}

/// Set the ground latch when the player starts touching level geometry
pub fn latch_ground_collisions(
    mut collisions: MessageReader<CollisionEvent>,
    surfaces: Query<&LevelSurface>,
    mut players: Query<(Entity, &mut JumpState), With<Player>>,
) {
    for event in collisions.read() {
        let (a, b) = match event {
            CollisionEvent::Started(a, b, _) => (*a, *b),
            CollisionEvent::Stopped(..) => continue,
        };

        for (entity, mut jump) in &mut players {
            let other = if a == entity {
                b
            } else if b == entity {
                a
            } else {
                continue;
            };

            let Ok(surface) = surfaces.get(other) else {
                continue;
            };
            if !jump.latched {
                jump.latched = true;
                debug!("Ground latch set by level box {}", surface.index);
            }
        }
    }
}
